use anyhow::Result;
use std::path::Path;

use crate::launcher::Launcher;
use crate::platform::{HostDetector, Registry};
use crate::runtime::Runtime;

/// Print the binary the launcher would run for this host from `root`.
#[tracing::instrument(skip(runtime, detector))]
pub fn resolve<R: Runtime, H: HostDetector>(runtime: R, detector: &H, root: &Path) -> Result<()> {
    let registry = Registry::builtin();
    let host = detector.detect();
    let launcher = Launcher::new(&runtime, &registry, root.to_path_buf());

    let path = launcher.resolve(&host)?;
    println!("{} -> {}", host, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;
    use crate::platform::{FixedHost, PlatformKey};
    use crate::runtime::MockRuntime;

    #[test]
    fn test_resolve_supported_host() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);

        let detector = FixedHost(PlatformKey::new("darwin", "x64"));
        resolve(runtime, &detector, Path::new("dist/bin")).unwrap();
    }

    #[test]
    fn test_resolve_unsupported_host_fails() {
        let runtime = MockRuntime::new();
        let detector = FixedHost(PlatformKey::new("linux", "x64"));

        let err = resolve(runtime, &detector, Path::new("dist/bin")).unwrap_err();
        let launch_err = err.downcast_ref::<LaunchError>().unwrap();
        assert!(matches!(launch_err, LaunchError::UnsupportedPlatform { .. }));
    }
}
