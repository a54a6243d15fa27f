//! Runtime launcher - finds the binary for this host and runs it.
//!
//! The launcher has no options of its own. It looks the host up in the
//! [`Registry`], checks that the binary was actually installed, runs it with
//! the caller's arguments, streams and working directory, and hands back the
//! child's exit code.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::LaunchError;
use crate::platform::{HostDetector, PlatformKey, Registry};
use crate::runtime::Runtime;

pub struct Launcher<'a, R: Runtime> {
    runtime: &'a R,
    registry: &'a Registry,
    install_root: PathBuf,
}

impl<'a, R: Runtime> Launcher<'a, R> {
    /// `install_root` is the directory registry paths are relative to
    /// (the package's `bin/` directory).
    pub fn new(runtime: &'a R, registry: &'a Registry, install_root: PathBuf) -> Self {
        Self {
            runtime,
            registry,
            install_root,
        }
    }

    /// Absolute path of the binary to run for `host`.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, host: &PlatformKey) -> Result<PathBuf, LaunchError> {
        let descriptor =
            self.registry
                .lookup(host)
                .ok_or_else(|| LaunchError::UnsupportedPlatform {
                    host: host.clone(),
                    supported: self.registry.supported_keys(),
                    planned: self.registry.is_planned(host),
                })?;

        let path = descriptor.resolve(&self.install_root);
        debug!("Resolved {} to {:?}", host, path);

        if !self.runtime.exists(&path) {
            return Err(LaunchError::MissingBinary { path });
        }

        Ok(path)
    }

    /// Resolve the binary for `host` and run it to completion.
    ///
    /// Returns the child's exit code.
    #[tracing::instrument(skip(self, args))]
    pub async fn launch(&self, host: &PlatformKey, args: &[OsString]) -> Result<i32, LaunchError> {
        let path = self.resolve(host)?;
        let cwd = self
            .runtime
            .current_dir()
            .map_err(|e| LaunchError::Environment {
                reason: format!("{:#}", e),
            })?;

        debug!("Launching {:?} with {} argument(s)", path, args.len());
        let status = self.runtime.run_inherited(&path, args, &cwd).await;
        status.map_err(|source| LaunchError::LaunchFailure { path, source })
    }
}

/// Directory holding the running launcher, with symlinks resolved.
///
/// Package managers usually expose the launcher through a symlink, so the
/// unresolved path would point at the wrong directory.
pub fn launcher_dir<R: Runtime>(runtime: &R) -> Result<PathBuf, LaunchError> {
    let exe = runtime
        .current_exe()
        .and_then(|exe| runtime.canonicalize(&exe))
        .map_err(|e| LaunchError::Environment {
            reason: format!("{:#}", e),
        })?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LaunchError::Environment {
            reason: format!("{} has no parent directory", exe.display()),
        })
}

/// Keep Ctrl-C from ending the launcher while the child runs.
///
/// The child shares our terminal and receives the interrupt itself; the
/// launcher has to stay alive to report its exit status. The handler is
/// installed before this returns. Must be called inside a tokio runtime.
pub fn ignore_interrupts() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut interrupts = signal(SignalKind::interrupt())?;
        tokio::spawn(async move { while interrupts.recv().await.is_some() {} });
    }

    #[cfg(windows)]
    {
        let mut interrupts = tokio::signal::windows::ctrl_c()?;
        tokio::spawn(async move { while interrupts.recv().await.is_some() {} });
    }

    Ok(())
}

/// Launch the binary for the detected host from the launcher's own directory.
pub async fn run<R: Runtime, H: HostDetector>(
    runtime: &R,
    detector: &H,
    args: &[OsString],
) -> Result<i32, LaunchError> {
    let registry = Registry::builtin();
    let install_root = launcher_dir(runtime)?;
    let host = detector.detect();

    Launcher::new(runtime, &registry, install_root)
        .launch(&host, args)
        .await
}
