//! Platform management commands (`mosaic platform add`)

use camino::Utf8Path;

use mosaic_core::{Error, Manifest, Result};
use mosaic_platforms::{normalize, PlatformRegistry};

use crate::cli::{PlatformAddArgs, PlatformCommands};
use crate::output;

/// Run platform subcommands
pub fn run(cmd: PlatformCommands, project_root: &Utf8Path, registry: &PlatformRegistry) -> Result<()> {
    match cmd {
        PlatformCommands::Add(args) => add(args, project_root, registry),
    }
}

/// Enable a platform for the project.
///
/// Registry membership is checked here, once, at add time; `build` trusts
/// the manifest afterwards. Re-adding an enabled platform is a no-op write:
/// the manifest is persisted unchanged.
fn add(args: PlatformAddArgs, project_root: &Utf8Path, registry: &PlatformRegistry) -> Result<()> {
    let platform = normalize(&args.name);

    let mut manifest = Manifest::load(project_root)?;

    if !registry.contains(&platform) {
        return Err(Error::unknown_platform(&platform));
    }

    manifest.add_platform(&platform);
    manifest.save(project_root)?;

    output::success(&format!("Platform '{platform}' added"));
    Ok(())
}
