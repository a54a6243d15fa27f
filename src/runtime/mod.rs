//! Runtime abstraction for system operations.
//!
//! Everything the launcher and the assembler do to the outside world goes
//! through the [`Runtime`] trait, so both pipelines can be exercised against
//! a mock in unit tests.
//!
//! # Structure
//!
//! - `env` - Process environment (working directory, own executable)
//! - `fs` - File system operations (read, write, copy, directories, permissions)
//! - `process` - Running a child process with inherited standard streams

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn current_dir(&self) -> Result<PathBuf>;
    fn current_exe(&self) -> Result<PathBuf>;

    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;

    /// Canonicalize a path by resolving all symlinks and returning the canonical absolute path.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Set file permissions (mode) on Unix systems. No-op on Windows.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    // Processes
    /// Run `program` to completion with inherited stdin/stdout/stderr.
    ///
    /// Returns the child's exit code. A child terminated by a signal reports
    /// `128 + signal`. The error is the raw spawn/wait failure.
    async fn run_inherited(
        &self,
        program: &Path,
        args: &[OsString],
        cwd: &Path,
    ) -> std::io::Result<i32>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        self.copy_impl(from, to)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.set_permissions_impl(path, mode)
    }

    async fn run_inherited(
        &self,
        program: &Path,
        args: &[OsString],
        cwd: &Path,
    ) -> std::io::Result<i32> {
        self.run_inherited_impl(program, args, cwd).await
    }
}
