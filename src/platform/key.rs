use anyhow::anyhow;
use std::fmt;
use std::str::FromStr;

/// Host identity used to look up an executable: `<platform>-<arch>`.
///
/// Both parts use node's naming (`win32`, `darwin`, `x64`, `arm64`, ...)
/// and are compared exactly, case included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformKey {
    pub platform: String,
    pub arch: String,
}

impl PlatformKey {
    pub fn new(platform: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            arch: arch.into(),
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}

impl FromStr for PlatformKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((platform, arch))
                if !platform.is_empty() && !arch.is_empty() && !arch.contains('-') =>
            {
                Ok(PlatformKey::new(platform, arch))
            }
            _ => Err(anyhow!(
                "Invalid platform key '{}'. Expected 'platform-arch', e.g. 'win32-x64'.",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_dash() {
        let key = PlatformKey::new("win32", "x64");
        assert_eq!(key.to_string(), "win32-x64");
    }

    #[test]
    fn test_parse_valid_key() {
        let key: PlatformKey = "darwin-arm64".parse().unwrap();
        assert_eq!(key.platform, "darwin");
        assert_eq!(key.arch, "arm64");
    }

    #[test]
    fn test_parse_invalid_keys() {
        for input in ["", "win32", "-x64", "win32-", "linux-arm-64"] {
            assert!(input.parse::<PlatformKey>().is_err(), "{input} should fail");
        }
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert_ne!(
            PlatformKey::new("Win32", "x64"),
            PlatformKey::new("win32", "x64")
        );
    }
}
