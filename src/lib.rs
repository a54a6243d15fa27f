//! npm packaging for the concurrently binaries.
//!
//! - [`platform`] - registry of shipped binaries and host detection
//! - [`launcher`] - runs the binary matching the host
//! - [`assembler`] - builds the npm distribution tree
//! - [`runtime`] - system operations behind a mockable trait

pub mod assembler;
pub mod commands;
pub mod error;
pub mod launcher;
pub mod platform;
pub mod runtime;

pub use error::{BuildError, ISSUES_URL, LaunchError};
