//! Release version taken from `Cargo.toml`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::AssemblyStep;
use crate::error::BuildError;
use crate::runtime::Runtime;

/// `major.minor.patch`, no leading zeros, nothing else.
///
/// `\d` would also match non-ASCII digits.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$").expect("valid version regex")
});

#[derive(Debug, Error, PartialEq)]
#[error("'{0}' is not a major.minor.patch version without leading zeros")]
pub struct VersionError(String);

/// A validated release version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if VERSION_PATTERN.is_match(s) {
            Ok(Version(s.to_string()))
        } else {
            Err(VersionError(s.to_string()))
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
struct CargoManifest {
    package: Option<PackageSection>,
}

#[derive(Deserialize)]
struct PackageSection {
    version: Option<toml::Value>,
}

/// Read and validate `package.version` from the Cargo manifest at `path`.
#[tracing::instrument(skip(runtime))]
pub fn read_version<R: Runtime>(runtime: &R, path: &Path) -> Result<Version, BuildError> {
    let content = runtime
        .read_to_string(path)
        .step(|| format!("read build metadata from {}", path.display()))?;
    parse_version(&content, path)
}

/// Extract and validate `package.version` from Cargo manifest text.
pub fn parse_version(content: &str, path: &Path) -> Result<Version, BuildError> {
    let invalid = |reason: String| BuildError::InvalidVersion {
        manifest: path.to_path_buf(),
        reason,
    };

    let manifest: CargoManifest =
        toml::from_str(content).map_err(|e| invalid(format!("not valid TOML: {}", e)))?;

    let value = manifest
        .package
        .ok_or_else(|| invalid("missing [package] section".to_string()))?
        .version
        .ok_or_else(|| invalid("missing package.version".to_string()))?;

    let version = value
        .as_str()
        .ok_or_else(|| invalid(format!("package.version must be a string, found {}", value)))?;

    version.parse().map_err(|e: VersionError| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    fn parse(content: &str) -> Result<Version, BuildError> {
        parse_version(content, Path::new("Cargo.toml"))
    }

    #[test]
    fn test_accepts_plain_versions() {
        for input in ["0.0.0", "1.2.3", "2.10.0", "10.0.99", "0.1.0"] {
            let version: Version = input.parse().unwrap();
            assert_eq!(version.as_str(), input);
        }
    }

    #[test]
    fn test_rejects_malformed_versions() {
        for input in [
            "", "1.2", "1.02.3", "01.2.3", "1.2.03", "v1.2.3", "1.2.3-beta", "1.2.3.4", " 1.2.3",
            "1..3", "a.b.c", "1\u{0669}.0.0", "1.2.\u{0663}", "\u{0661}.0.0", "1.0.1\u{0669}",
        ] {
            assert!(input.parse::<Version>().is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_version_from_manifest() {
        let version = parse("[package]\nname = \"concurrently\"\nversion = \"2.10.0\"\n").unwrap();
        assert_eq!(version.to_string(), "2.10.0");
    }

    #[test]
    fn test_parse_version_missing_package() {
        let err = parse("[workspace]\nmembers = []\n").unwrap_err();
        match err {
            BuildError::InvalidVersion { reason, .. } => {
                assert!(reason.contains("[package]"))
            }
            other => panic!("Expected InvalidVersion, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_version_missing_field() {
        let err = parse("[package]\nname = \"concurrently\"\n").unwrap_err();
        assert!(err.to_string().contains("missing package.version"));
    }

    #[test]
    fn test_parse_version_workspace_inherited() {
        let err = parse("[package]\nversion.workspace = true\n").unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_parse_version_malformed_value() {
        let err = parse("[package]\nversion = \"1.02.3\"\n").unwrap_err();
        assert!(matches!(err, BuildError::InvalidVersion { .. }));
        assert!(err.to_string().contains("1.02.3"));
    }

    #[test]
    fn test_parse_version_invalid_toml() {
        let err = parse("[package\nversion = ").unwrap_err();
        assert!(err.to_string().contains("not valid TOML"));
    }

    #[test]
    fn test_read_version_missing_file_is_assembly_error() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("No such file or directory")));

        let err = read_version(&runtime, Path::new("Cargo.toml")).unwrap_err();
        assert!(matches!(err, BuildError::Assembly { .. }));
    }
}
