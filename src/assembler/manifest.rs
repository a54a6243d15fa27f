//! The `package.json` published to npm.

use std::collections::BTreeMap;

use serde::Serialize;

use super::tree::DistributionTree;
use super::version::Version;
use crate::error::ISSUES_URL;

pub const PACKAGE_NAME: &str = "concurrently-rust";
pub const REPOSITORY_URL: &str = "https://github.com/bjesuiter/concurrently-rust";

/// Commands the package installs; all of them run the launcher script.
pub const COMMANDS: [&str; 2] = ["concurrently", "concurrently-rust"];

const DESCRIPTION: &str = "A distribution of https://github.com/bjesuiter/concurrently-rust, a Rust implementation of a similar concept to the npm concurrently package.";
const KEYWORDS: [&str; 6] = [
    "rust",
    "concurrently",
    "cli",
    "cli-tool",
    "cli-rust",
    "cli-tool-rust",
];

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub files: Vec<String>,
    pub bin: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    pub repository: Repository,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    pub bugs: Bugs,
    pub homepage: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Bugs {
    pub url: String,
}

impl PackageManifest {
    /// Fill the fixed package template with `version`.
    pub fn new(version: &Version) -> Self {
        let launcher = DistributionTree::launcher_entry();

        Self {
            name: PACKAGE_NAME.to_string(),
            version: version.to_string(),
            description: DESCRIPTION.to_string(),
            module_type: "module".to_string(),
            files: vec![super::tree::BIN_DIR.to_string()],
            bin: COMMANDS
                .iter()
                .map(|command| (command.to_string(), launcher.clone()))
                .collect(),
            scripts: BTreeMap::from([
                ("start".to_string(), format!("node {}", launcher)),
                ("test".to_string(), format!("{} --help", launcher)),
            ]),
            repository: Repository {
                kind: "git".to_string(),
                url: format!("git+{}", REPOSITORY_URL),
            },
            keywords: KEYWORDS.iter().map(ToString::to_string).collect(),
            author: "Benjamin Jesuiter".to_string(),
            license: "MIT".to_string(),
            bugs: Bugs {
                url: ISSUES_URL.to_string(),
            },
            homepage: format!("{}#readme", REPOSITORY_URL),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::from([(
                "@types/node".to_string(),
                "^18.11.9".to_string(),
            )]),
        }
    }

    /// Tab-indented JSON, terminated by a newline.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }
}
