//! Platform registry and host detection
//!
//! This module knows which platforms ship a prebuilt `concurrently`
//! binary, where that binary lives inside the package, and how the
//! current host identifies itself.

mod host;
mod key;
mod registry;
mod target;

pub use host::{FixedHost, HostDetector, NativeHost, detect_host, node_arch, node_platform};
pub use key::PlatformKey;
pub use registry::{Registry, RegistryEntry};
pub use target::{Availability, ExecutableDescriptor, Target};
