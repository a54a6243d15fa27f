use super::PlatformKey;

/// Identity of the machine the launcher runs on, in node's naming.
pub fn detect_host() -> PlatformKey {
    PlatformKey::new(
        node_platform(std::env::consts::OS),
        node_arch(std::env::consts::ARCH),
    )
}

/// Translate a Rust `target_os` value to node's `process.platform`.
pub fn node_platform(os: &str) -> &str {
    match os {
        "windows" => "win32",
        "macos" => "darwin",
        other => other,
    }
}

/// Translate a Rust `target_arch` value to node's `process.arch`.
pub fn node_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        "powerpc64" => "ppc64",
        other => other,
    }
}

/// Trait for host detection (useful for testing)
pub trait HostDetector: Send + Sync {
    fn detect(&self) -> PlatformKey;
}

/// Host detector reading the compile-time target of this binary.
pub struct NativeHost;

impl HostDetector for NativeHost {
    fn detect(&self) -> PlatformKey {
        detect_host()
    }
}

/// Host detector returning a fixed key.
pub struct FixedHost(pub PlatformKey);

impl HostDetector for FixedHost {
    fn detect(&self) -> PlatformKey {
        self.0.clone()
    }
}
