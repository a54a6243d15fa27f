//! Package assembler - builds the npm distribution tree for one release.
//!
//! The pipeline runs strictly in order and stops at the first failure:
//! - Read and validate the version from `Cargo.toml`
//! - Render `package.json`
//! - Create the output directories
//! - Write the manifest, launcher script and registry module
//! - Copy each target's binary
//! - Mark the launcher executable
//! - Check that every registered binary landed in the tree
//!
//! Nothing is written before the version is validated. Re-running over an
//! existing output directory overwrites it.

mod config;
mod manifest;
mod registry_module;
mod tree;
mod version;

pub use config::{BuildConfig, select_targets};
pub use manifest::{COMMANDS, PACKAGE_NAME, PackageManifest};
pub use registry_module::render_registry_module;
pub use tree::{BIN_DIR, DistributionTree, LAUNCHER_FILE, MANIFEST_FILE, REGISTRY_FILE};
pub use version::{Version, VersionError, parse_version, read_version};

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::BuildError;
use crate::platform::Target;
use crate::runtime::Runtime;

/// Mode of the launcher script: rwxrwxr-x.
pub const LAUNCHER_MODE: u32 = 0o775;

/// Attach the failing action to a runtime error.
pub(crate) trait AssemblyStep<T> {
    fn step<F: FnOnce() -> String>(self, action: F) -> Result<T, BuildError>;
}

impl<T> AssemblyStep<T> for anyhow::Result<T> {
    fn step<F: FnOnce() -> String>(self, action: F) -> Result<T, BuildError> {
        self.map_err(|e| BuildError::assembly(action(), e))
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyReport {
    pub version: Version,
    pub root: PathBuf,
    pub targets: Vec<Target>,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

pub struct Assembler<'a, R: Runtime> {
    runtime: &'a R,
    config: &'a BuildConfig,
}

impl<'a, R: Runtime> Assembler<'a, R> {
    pub fn new(runtime: &'a R, config: &'a BuildConfig) -> Self {
        Self { runtime, config }
    }

    #[tracing::instrument(skip(self))]
    pub fn assemble(&self) -> Result<AssemblyReport, BuildError> {
        let version = read_version(self.runtime, &self.config.manifest_path)?;
        info!("Packaging version {}", version);

        let manifest = PackageManifest::new(&version)
            .to_json_bytes()
            .map_err(|e| BuildError::assembly("render package.json", e.into()))?;

        let tree = DistributionTree::new(&self.config.out_dir);
        let mut files = Vec::new();

        self.prepare_dirs(&tree)?;

        let manifest_path = tree.manifest_path();
        self.runtime
            .write(&manifest_path, &manifest)
            .step(|| format!("write {}", manifest_path.display()))?;
        info!("Generated {}", MANIFEST_FILE);
        files.push(manifest_path);

        let launcher_path = tree.launcher_path();
        let launcher_source = self.config.launcher_source();
        self.runtime
            .copy(&launcher_source, &launcher_path)
            .step(|| format!("copy launcher script {}", launcher_source.display()))?;
        files.push(launcher_path.clone());

        let registry_path = tree.registry_path();
        let registry = render_registry_module(&self.config.targets);
        self.runtime
            .write(&registry_path, registry.as_bytes())
            .step(|| format!("write {}", registry_path.display()))?;
        files.push(registry_path);
        info!("Copied assets");

        for &target in &self.config.targets {
            files.push(self.copy_binary(&tree, target)?);
        }

        self.mark_executable(&launcher_path)?;
        self.verify(&tree)?;

        Ok(AssemblyReport {
            version,
            root: tree.root().to_path_buf(),
            targets: self.config.targets.clone(),
            files,
        })
    }

    fn prepare_dirs(&self, tree: &DistributionTree) -> Result<(), BuildError> {
        if self.config.clean && self.runtime.exists(tree.root()) {
            debug!("Removing previous output {:?}", tree.root());
            self.runtime
                .remove_dir_all(tree.root())
                .step(|| format!("clean {}", tree.root().display()))?;
        }

        let mut dirs = vec![tree.root().to_path_buf(), tree.bin_dir()];
        for target in &self.config.targets {
            let dir = tree.binary_dir(&target.descriptor());
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }

        for dir in dirs {
            self.runtime
                .create_dir_all(&dir)
                .step(|| format!("create directory {}", dir.display()))?;
        }
        Ok(())
    }

    fn copy_binary(&self, tree: &DistributionTree, target: Target) -> Result<PathBuf, BuildError> {
        let source = self.config.binary_source(target);
        let dest = tree.binary_path(&target.descriptor());

        let bytes = self
            .runtime
            .copy(&source, &dest)
            .step(|| format!("copy the {} binary from {}", target, source.display()))?;
        info!("Copied {} binary ({} bytes)", target, bytes);
        Ok(dest)
    }

    fn mark_executable(&self, launcher: &Path) -> Result<(), BuildError> {
        if cfg!(unix) {
            self.runtime
                .set_permissions(launcher, LAUNCHER_MODE)
                .step(|| format!("make {} executable", launcher.display()))?;
        } else {
            debug!(
                "Skipping executable bit on {:?}: not supported on this platform",
                launcher
            );
        }
        Ok(())
    }

    fn verify(&self, tree: &DistributionTree) -> Result<(), BuildError> {
        let missing = tree.missing_binaries(self.runtime, &self.config.targets);
        if let Some(path) = missing.first() {
            return Err(BuildError::assembly(
                "verify the distribution tree",
                anyhow::anyhow!("registered binary {} is missing", path.display()),
            ));
        }
        Ok(())
    }
}
