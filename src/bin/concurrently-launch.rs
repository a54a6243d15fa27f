//! Entry point installed in the package's `bin/` directory.
//!
//! Takes no options: every argument goes to the concurrently binary for this
//! host, and its exit code becomes ours.

use std::ffi::OsString;

use concurrently_npm::launcher;
use concurrently_npm::platform::NativeHost;
use concurrently_npm::runtime::RealRuntime;
use log::warn;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = launcher::ignore_interrupts() {
        warn!("Could not install the Ctrl-C handler: {}", e);
    }

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let code = match launcher::run(&RealRuntime, &NativeHost, &args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
