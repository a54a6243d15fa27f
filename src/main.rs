use anyhow::Result;
use clap::Parser;
use concurrently_npm::assembler::{BuildConfig, select_targets};
use concurrently_npm::commands;
use concurrently_npm::platform::{NativeHost, PlatformKey};
use concurrently_npm::runtime::RealRuntime;
use std::path::PathBuf;

/// concurrently-npm - npm packaging for the concurrently binaries
///
/// Builds the npm package that ships prebuilt concurrently executables and
/// a launcher picking the right one for the host.
///
/// Examples:
///   concurrently-npm build                       # Package every available platform into dist/
///   concurrently-npm build --platform darwin-x64 # Package a single platform
///   concurrently-npm platforms                   # Show known platforms
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Assemble the npm package from build outputs
    Build(BuildArgs),

    /// List known platforms and their availability
    Platforms,

    /// Show which binary the launcher would run on this host
    Resolve(ResolveArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Cargo manifest holding package.version
    #[arg(
        long = "manifest-path",
        env = "CONCURRENTLY_NPM_MANIFEST",
        value_name = "PATH",
        default_value = "Cargo.toml"
    )]
    pub manifest_path: PathBuf,

    /// Output directory of the npm package
    #[arg(
        long = "out-dir",
        short = 'o',
        env = "CONCURRENTLY_NPM_OUT",
        value_name = "PATH",
        default_value = "dist"
    )]
    pub out_dir: PathBuf,

    /// Directory with the static npm assets
    #[arg(long = "assets-dir", value_name = "PATH", default_value = "npm-assets")]
    pub assets_dir: PathBuf,

    /// Cargo target directory with the per-triple build outputs
    #[arg(
        long = "target-dir",
        env = "CARGO_TARGET_DIR",
        value_name = "PATH",
        default_value = "target"
    )]
    pub target_dir: PathBuf,

    /// Cargo profile the binaries were built with
    #[arg(long, value_name = "NAME", default_value = "release")]
    pub profile: String,

    /// Platform to include, e.g. win32-x64 (repeatable; default: all available)
    #[arg(long = "platform", short = 'p', value_name = "KEY")]
    pub platforms: Vec<PlatformKey>,

    /// Remove the output directory before assembling
    #[arg(long)]
    pub clean: bool,
}

impl BuildArgs {
    fn into_config(self) -> Result<BuildConfig> {
        Ok(BuildConfig {
            manifest_path: self.manifest_path,
            assets_dir: self.assets_dir,
            target_dir: self.target_dir,
            profile: self.profile,
            out_dir: self.out_dir,
            targets: select_targets(&self.platforms)?,
            clean: self.clean,
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Launcher directory of an installed package
    #[arg(long, value_name = "PATH", default_value = "dist/bin")]
    pub root: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    match cli.command {
        Commands::Build(args) => commands::build(runtime, &args.into_config()?)?,
        Commands::Platforms => commands::platforms()?,
        Commands::Resolve(args) => commands::resolve(runtime, &NativeHost, &args.root)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use concurrently_npm::platform::Target;

    #[test]
    fn test_cli_build_defaults() {
        let cli = Cli::try_parse_from(["concurrently-npm", "build"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.profile, "release");
                assert!(args.platforms.is_empty());
                assert!(!args.clean);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_platforms_parsing() {
        let cli = Cli::try_parse_from([
            "concurrently-npm",
            "build",
            "--platform",
            "darwin-x64",
            "-p",
            "win32-x64",
            "--out-dir",
            "/tmp/pkg",
            "--clean",
        ])
        .unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.out_dir, PathBuf::from("/tmp/pkg"));
                let config = args.into_config().unwrap();
                assert_eq!(config.targets, vec![Target::DarwinX64, Target::Win32X64]);
                assert!(config.clean);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_rejects_malformed_platform() {
        let result = Cli::try_parse_from(["concurrently-npm", "build", "--platform", "win32"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_build_rejects_planned_platform() {
        let cli = Cli::try_parse_from(["concurrently-npm", "build", "-p", "linux-x64"]).unwrap();
        match cli.command {
            Commands::Build(args) => assert!(args.into_config().is_err()),
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_resolve_root() {
        let cli = Cli::try_parse_from(["concurrently-npm", "resolve", "--root", "/pkg/bin"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => assert_eq!(args.root, PathBuf::from("/pkg/bin")),
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["concurrently-npm"]).is_err());
    }
}
