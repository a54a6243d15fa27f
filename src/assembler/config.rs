use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::platform::{Availability, PlatformKey, Target};

use super::tree::{BIN_DIR, LAUNCHER_FILE};

/// Inputs of one package build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Cargo manifest holding `package.version`.
    pub manifest_path: PathBuf,
    /// Directory with the static npm assets (`bin/run.mjs`).
    pub assets_dir: PathBuf,
    /// Cargo target directory holding `<triple>/<profile>/` build outputs.
    pub target_dir: PathBuf,
    pub profile: String,
    pub out_dir: PathBuf,
    /// Targets whose binaries go into the package.
    pub targets: Vec<Target>,
    /// Remove `out_dir` before assembling.
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("Cargo.toml"),
            assets_dir: PathBuf::from("npm-assets"),
            target_dir: PathBuf::from("target"),
            profile: "release".to_string(),
            out_dir: PathBuf::from("dist"),
            targets: Target::available(),
            clean: false,
        }
    }
}

impl BuildConfig {
    pub fn launcher_source(&self) -> PathBuf {
        self.assets_dir.join(BIN_DIR).join(LAUNCHER_FILE)
    }

    /// Where cargo leaves the binary for `target`.
    pub fn binary_source(&self, target: Target) -> PathBuf {
        self.target_dir
            .join(target.rust_triple())
            .join(&self.profile)
            .join(target.descriptor().file_name())
    }
}

/// Turn requested platform keys into build targets.
///
/// No keys means every available target. Unknown and planned keys are
/// rejected; duplicates are dropped.
pub fn select_targets(keys: &[PlatformKey]) -> Result<Vec<Target>> {
    if keys.is_empty() {
        return Ok(Target::available());
    }

    let mut targets = Vec::new();
    for key in keys {
        let Some(target) = Target::from_key(key) else {
            let known: Vec<String> = Target::ALL.iter().map(ToString::to_string).collect();
            bail!("Unknown platform '{}'. Known platforms: {}", key, known.join(", "));
        };
        if let Availability::Planned { reason } = target.availability() {
            bail!("Platform '{}' is not available yet: {}", key, reason);
        }
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config() {
        let config = BuildConfig::default();
        assert_eq!(config.manifest_path, PathBuf::from("Cargo.toml"));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.targets, vec![Target::Win32X64, Target::DarwinX64]);
        assert!(!config.clean);
    }

    #[test]
    fn test_source_paths() {
        let config = BuildConfig::default();

        assert_eq!(
            config.launcher_source(),
            Path::new("npm-assets").join("bin").join("run.mjs")
        );
        assert_eq!(
            config.binary_source(Target::Win32X64),
            Path::new("target")
                .join("x86_64-pc-windows-msvc")
                .join("release")
                .join("concurrently.exe")
        );
        assert_eq!(
            config.binary_source(Target::DarwinX64),
            Path::new("target")
                .join("x86_64-apple-darwin")
                .join("release")
                .join("concurrently")
        );
    }

    #[test]
    fn test_select_targets_defaults_to_available() {
        assert_eq!(select_targets(&[]).unwrap(), Target::available());
    }

    #[test]
    fn test_select_targets_subset_dedupes() {
        let keys = vec![
            PlatformKey::new("darwin", "x64"),
            PlatformKey::new("darwin", "x64"),
        ];
        assert_eq!(select_targets(&keys).unwrap(), vec![Target::DarwinX64]);
    }

    #[test]
    fn test_select_targets_rejects_unknown() {
        let err = select_targets(&[PlatformKey::new("plan9", "x64")]).unwrap_err();
        assert!(err.to_string().contains("Unknown platform 'plan9-x64'"));
    }

    #[test]
    fn test_select_targets_rejects_planned() {
        let err = select_targets(&[PlatformKey::new("linux", "x64")]).unwrap_err();
        assert!(err.to_string().contains("not available yet"));
    }
}
