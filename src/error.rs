//! Error types for launching and packaging.
//!
//! Every variant is fatal to its pipeline. Messages are meant for end users
//! and point at the issue tracker where a report is useful.

use std::path::PathBuf;

use thiserror::Error;

use crate::platform::PlatformKey;

/// Where users report unsupported platforms and broken installs.
pub const ISSUES_URL: &str = "https://github.com/bjesuiter/concurrently-rust/issues";

/// Errors raised while resolving and starting the packaged binary.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No binary is shipped for the host.
    #[error(
        "Your platform ({host}) is currently not supported!{note}\nPlatforms supported: {list}.\nYou can raise an issue here and ask for support: {issues}",
        note = planned_note(.planned),
        list = join_keys(.supported),
        issues = ISSUES_URL
    )]
    UnsupportedPlatform {
        host: PlatformKey,
        supported: Vec<PlatformKey>,
        planned: bool,
    },

    /// The registry names a binary the install does not contain.
    #[error(
        "Executable not found at {}. Something is wrong with this install.\nPlease raise an issue at: {issues}",
        .path.display(),
        issues = ISSUES_URL
    )]
    MissingBinary { path: PathBuf },

    /// The binary exists but could not be started.
    #[error("Failed to launch {}: {source}", .path.display())]
    LaunchFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The launcher could not read its own location or working directory.
    #[error("Could not read the launch environment: {reason}")]
    Environment { reason: String },
}

impl LaunchError {
    /// Exit code for the launcher process when this error ends it.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Errors raised while assembling the npm package.
#[derive(Debug, Error)]
pub enum BuildError {
    /// `package.version` is missing or not a plain `major.minor.patch`.
    #[error("Invalid version in {}: {reason}", .manifest.display())]
    InvalidVersion { manifest: PathBuf, reason: String },

    /// An I/O step of the assembly failed.
    #[error("Failed to {action}")]
    Assembly {
        action: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl BuildError {
    pub(crate) fn assembly(action: impl Into<String>, source: anyhow::Error) -> Self {
        BuildError::Assembly {
            action: action.into(),
            source: source.into(),
        }
    }
}

fn planned_note(planned: &bool) -> &'static str {
    if *planned {
        " A build for it is planned but not available yet."
    } else {
        ""
    }
}

fn join_keys(keys: &[PlatformKey]) -> String {
    if keys.is_empty() {
        return "none".to_string();
    }
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unsupported_platform_message() {
        let err = LaunchError::UnsupportedPlatform {
            host: PlatformKey::new("linux", "x64"),
            supported: vec![
                PlatformKey::new("win32", "x64"),
                PlatformKey::new("darwin", "x64"),
            ],
            planned: false,
        };

        let message = err.to_string();
        assert!(message.contains("(linux-x64)"));
        assert!(message.contains("Platforms supported: win32-x64, darwin-x64."));
        assert!(message.contains(ISSUES_URL));
        assert!(!message.contains("planned"));
    }

    #[test]
    fn test_unsupported_planned_platform_message() {
        let err = LaunchError::UnsupportedPlatform {
            host: PlatformKey::new("linux", "arm64"),
            supported: vec![],
            planned: true,
        };

        let message = err.to_string();
        assert!(message.contains("planned"));
        assert!(message.contains("Platforms supported: none."));
    }

    #[test]
    fn test_missing_binary_message() {
        let err = LaunchError::MissingBinary {
            path: PathBuf::from("/pkg/bin/windows/concurrently.exe"),
        };

        let message = err.to_string();
        assert!(message.contains("concurrently.exe"));
        assert!(message.contains(ISSUES_URL));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_launch_failure_keeps_source() {
        let err = LaunchError::LaunchFailure {
            path: PathBuf::from("/pkg/bin/darwin/concurrently"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        assert!(err.to_string().starts_with("Failed to launch"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_assembly_error_keeps_context_chain() {
        let inner = anyhow::anyhow!("disk full").context("Failed to write to file");
        let err = BuildError::assembly("write package.json", inner);

        assert_eq!(err.to_string(), "Failed to write package.json");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Failed to write to file");
    }
}
