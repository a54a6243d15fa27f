//! On-disk layout of the npm package.
//!
//! ```text
//! <root>/
//!   package.json
//!   bin/
//!     run.mjs            launcher script
//!     executables.mjs    registry module
//!     windows/concurrently.exe
//!     darwin/concurrently
//! ```

use std::path::{Path, PathBuf};

use crate::platform::{ExecutableDescriptor, Target};
use crate::runtime::Runtime;

pub const MANIFEST_FILE: &str = "package.json";
pub const BIN_DIR: &str = "bin";
pub const LAUNCHER_FILE: &str = "run.mjs";
pub const REGISTRY_FILE: &str = "executables.mjs";

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionTree {
    root: PathBuf,
}

impl DistributionTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Launcher path as written into `package.json`.
    pub fn launcher_entry() -> String {
        format!("./{}/{}", BIN_DIR, LAUNCHER_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Directory registry paths are relative to.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    pub fn launcher_path(&self) -> PathBuf {
        self.bin_dir().join(LAUNCHER_FILE)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.bin_dir().join(REGISTRY_FILE)
    }

    pub fn binary_path(&self, descriptor: &ExecutableDescriptor) -> PathBuf {
        descriptor.resolve(&self.bin_dir())
    }

    /// Directory holding the binary of `descriptor`.
    pub fn binary_dir(&self, descriptor: &ExecutableDescriptor) -> PathBuf {
        self.binary_path(descriptor)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.bin_dir())
    }

    /// Binaries of `targets` that are not present in the tree.
    pub fn missing_binaries<R: Runtime>(&self, runtime: &R, targets: &[Target]) -> Vec<PathBuf> {
        targets
            .iter()
            .map(|target| self.binary_path(&target.descriptor()))
            .filter(|path| !runtime.exists(path))
            .collect()
    }
}
