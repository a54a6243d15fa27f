//! Child process execution with inherited standard streams.

use std::ffi::OsString;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use log::debug;
use tokio::process::Command;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, args))]
    pub(crate) async fn run_inherited_impl(
        &self,
        program: &Path,
        args: &[OsString],
        cwd: &Path,
    ) -> std::io::Result<i32> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        debug!("{} exited with {}", program.display(), status);
        Ok(exit_code(status))
    }
}

/// Convert an exit status into the code this process should exit with.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
