//! Command implementations behind the `concurrently-npm` CLI.

mod build;
mod platforms;
mod resolve;

pub use build::build;
pub use platforms::platforms;
pub use resolve::resolve;
