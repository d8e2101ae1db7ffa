//! Mosaic CLI - project scaffolding and build orchestration
//!
//! This is the main entry point for the Mosaic command-line interface.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mosaic::cli::{Cli, Commands};
use mosaic::{commands, output};
use mosaic_core::project;
use mosaic_platforms::PlatformRegistry;

/// Exit code for recoverable (user-facing) errors
const EXIT_RECOVERABLE: u8 = 1;

/// Exit code for unexpected (fatal) errors
const EXIT_UNEXPECTED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_recoverable() => {
            output::error(&err.to_string());
            ExitCode::from(EXIT_RECOVERABLE)
        }
        Err(err) => {
            // Full cause chain: unexpected errors indicate bugs or
            // environment problems and need the diagnostic context.
            eprintln!("Error: {:?}", anyhow::Error::from(err));
            ExitCode::from(EXIT_UNEXPECTED)
        }
    }
}

/// Route the parsed command to its handler
async fn dispatch(cli: Cli) -> mosaic_core::Result<()> {
    let project_root = match cli.project_dir {
        Some(dir) => dir,
        None => project::current_dir()?,
    };
    let registry = PlatformRegistry::builtin();

    match cli.command {
        Commands::Create(args) => commands::create::run(args, &project_root),
        Commands::Platform(cmd) => commands::platform::run(cmd, &project_root, &registry),
        Commands::Build(args) => commands::build::run(args, &project_root, &registry).await,
        Commands::Run(args) => commands::run::run(args, &project_root, &registry).await,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::new(log_directive(verbose, quiet)))
        .init();
}

/// Filter directive for a verbosity level.
///
/// Defaults to info so command progress (including the dev server's serve
/// address) is visible without flags. Use --quiet to suppress, or -v/-vv
/// for more detail.
fn log_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_verbosity_shows_info() {
        assert_eq!(log_directive(0, false), "info");
    }

    #[test]
    fn test_verbose_flags_step_up() {
        assert_eq!(log_directive(1, false), "debug");
        assert_eq!(log_directive(2, false), "trace");
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(log_directive(3, true), "error");
    }
}
