//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Mosaic - multi-platform application framework CLI
#[derive(Parser, Debug)]
#[command(name = "mosaic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory (default: current directory)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project
    Create(CreateArgs),

    /// Platform management
    #[command(subcommand, visible_alias = "plat")]
    Platform(PlatformCommands),

    /// Build one or all enabled platforms
    Build(BuildArgs),

    /// Run a previously built platform
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Target directory for the new project (must be empty)
    pub dir: Utf8PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum PlatformCommands {
    /// Enable a platform for this project
    Add(PlatformAddArgs),
}

#[derive(Args, Debug)]
pub struct PlatformAddArgs {
    /// Platform identifier (e.g. "web")
    pub name: String,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Platform to build (default: every enabled platform, in manifest order)
    pub platform: Option<String>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Platform to run
    pub platform: String,
}
