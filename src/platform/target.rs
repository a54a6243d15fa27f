use std::fmt;
use std::path::{Path, PathBuf};

use super::PlatformKey;

/// Location of a prebuilt executable, relative to the launcher directory.
///
/// The path always uses `/` as separator; it is split into components when
/// resolved so it works on every host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableDescriptor {
    relative_path: String,
}

impl ExecutableDescriptor {
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// File name of the executable (last path component).
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }

    /// Resolve the descriptor against an installation root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.relative_path
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(root.to_path_buf(), |path, part| path.join(part))
    }
}

/// Whether a binary is shipped for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Known target without a build yet.
    Planned { reason: &'static str },
}

/// Every platform the project knows about, shipped or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Win32X64,
    DarwinX64,
    DarwinArm64,
    LinuxX64,
    LinuxArm,
    LinuxArm64,
}

impl Target {
    /// All targets in registry order.
    pub const ALL: [Target; 6] = [
        Target::Win32X64,
        Target::DarwinX64,
        Target::DarwinArm64,
        Target::LinuxX64,
        Target::LinuxArm,
        Target::LinuxArm64,
    ];

    pub fn platform(self) -> &'static str {
        match self {
            Target::Win32X64 => "win32",
            Target::DarwinX64 | Target::DarwinArm64 => "darwin",
            Target::LinuxX64 | Target::LinuxArm | Target::LinuxArm64 => "linux",
        }
    }

    pub fn arch(self) -> &'static str {
        match self {
            Target::Win32X64 | Target::DarwinX64 | Target::LinuxX64 => "x64",
            Target::DarwinArm64 | Target::LinuxArm64 => "arm64",
            Target::LinuxArm => "arm",
        }
    }

    pub fn key(self) -> PlatformKey {
        PlatformKey::new(self.platform(), self.arch())
    }

    pub fn from_key(key: &PlatformKey) -> Option<Target> {
        Self::ALL.into_iter().find(|target| target.key() == *key)
    }

    pub fn descriptor(self) -> ExecutableDescriptor {
        let path = match self {
            Target::Win32X64 => "windows/concurrently.exe",
            Target::DarwinX64 => "darwin/concurrently",
            Target::DarwinArm64 => "darwin-arm64/concurrently",
            Target::LinuxX64 => "linux/concurrently",
            Target::LinuxArm => "linux-arm/concurrently",
            Target::LinuxArm64 => "linux-arm64/concurrently",
        };
        ExecutableDescriptor::new(path)
    }

    /// Rust target triple, i.e. the directory cargo builds this target into.
    pub fn rust_triple(self) -> &'static str {
        match self {
            Target::Win32X64 => "x86_64-pc-windows-msvc",
            Target::DarwinX64 => "x86_64-apple-darwin",
            Target::DarwinArm64 => "aarch64-apple-darwin",
            Target::LinuxX64 => "x86_64-unknown-linux-gnu",
            Target::LinuxArm => "armv7-unknown-linux-gnueabihf",
            Target::LinuxArm64 => "aarch64-unknown-linux-gnu",
        }
    }

    pub fn availability(self) -> Availability {
        match self {
            Target::Win32X64 | Target::DarwinX64 => Availability::Available,
            Target::DarwinArm64 => Availability::Planned {
                reason: "not yet compiled on Apple Silicon",
            },
            Target::LinuxX64 | Target::LinuxArm | Target::LinuxArm64 => Availability::Planned {
                reason: "cross-compilation not set up",
            },
        }
    }

    pub fn is_available(self) -> bool {
        self.availability() == Availability::Available
    }

    pub fn available() -> Vec<Target> {
        Self::ALL
            .into_iter()
            .filter(|target| target.is_available())
            .collect()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
