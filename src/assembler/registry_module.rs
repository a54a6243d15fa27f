//! Renders `executables.mjs`, the registry read by the node launcher script.

use crate::platform::{Availability, Registry, Target};

const HEADER: &str = "\
// Generated by concurrently-npm. Do not edit.
//
// Maps `${process.platform}-${process.arch}` to the executable shipped for it.
// Executable paths are relative to this directory. `planned` holds the keys
// a build is planned for.
";

/// JavaScript module exporting `executables`, a `Map` holding exactly the
/// targets in `included`, and `planned`, a `Set` of the keys whose builds are
/// not available yet. Every target missing from the map is listed as a
/// comment.
pub fn render_registry_module(included: &[Target]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("\nexport const executables = new Map([\n");

    for target in Target::ALL {
        let key = target.key().to_string();
        if included.contains(&target) {
            out.push_str(&format!(
                "    [{}, {{ executablePath: {} }}],\n",
                js_string(&key),
                js_string(target.descriptor().relative_path())
            ));
        } else {
            let reason = match target.availability() {
                Availability::Planned { reason } => reason,
                Availability::Available => "not included in this build",
            };
            out.push_str(&format!("    // {}: {}\n", key, reason));
        }
    }

    out.push_str("]);\n");

    let planned: Vec<String> = Registry::builtin()
        .planned_keys()
        .iter()
        .map(|key| js_string(&key.to_string()))
        .collect();
    out.push_str(&format!(
        "\nexport const planned = new Set([{}]);\n",
        planned.join(", ")
    ));
    out
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_included_targets() {
        let module = render_registry_module(&[Target::Win32X64, Target::DarwinX64]);

        assert!(module.contains("export const executables = new Map(["));
        assert!(module.contains(
            r#"["win32-x64", { executablePath: "windows/concurrently.exe" }],"#
        ));
        assert!(module.contains(r#"["darwin-x64", { executablePath: "darwin/concurrently" }],"#));
        assert!(module.trim_end().ends_with("]);"));
    }

    #[test]
    fn test_exports_planned_keys() {
        let module = render_registry_module(&[Target::Win32X64]);

        assert!(module.contains(
            r#"export const planned = new Set(["darwin-arm64", "linux-x64", "linux-arm", "linux-arm64"]);"#
        ));
        // Available targets left out of a build are not planned.
        let planned = module.lines().find(|l| l.contains("new Set(")).unwrap();
        assert!(!planned.contains("darwin-x64"));
    }

    #[test]
    fn test_planned_targets_are_comments() {
        let module = render_registry_module(&[Target::Win32X64]);

        assert!(module.contains("    // linux-x64: cross-compilation not set up\n"));
        assert!(module.contains("    // darwin-arm64: not yet compiled on Apple Silicon\n"));
        assert!(module.contains("    // darwin-x64: not included in this build\n"));
        assert!(!module.contains(r#"["darwin-x64""#));
    }

    #[test]
    fn test_every_known_target_is_mentioned() {
        let module = render_registry_module(&Target::available());
        for target in Target::ALL {
            assert!(module.contains(&target.key().to_string()));
        }
    }
}
