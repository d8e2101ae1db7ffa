//! `mosaic run` command handler
//!
//! Launches the previously built artifacts for one platform. The output
//! directory is checked here so a forgotten build surfaces as guidance
//! rather than a backend failure.

use camino::Utf8Path;

use mosaic_core::{Error, Manifest, ProjectLayout, Result, RunContext};
use mosaic_platforms::{normalize, PlatformRegistry};

use crate::cli::RunArgs;
use crate::output;

pub async fn run(args: RunArgs, project_root: &Utf8Path, registry: &PlatformRegistry) -> Result<()> {
    let platform = normalize(&args.platform);

    let manifest = Manifest::load(project_root)?;

    let backend = registry
        .resolve(&platform)
        .ok_or_else(|| Error::unknown_platform(&platform))?;

    if !manifest.has_platform(&platform) {
        return Err(Error::platform_not_added(&platform));
    }

    let out = ProjectLayout::new(project_root).out_dir(&platform);
    let mut entries =
        std::fs::read_dir(&out).map_err(|_| Error::output_unreadable(&platform))?;
    if entries.next().is_none() {
        return Err(Error::output_empty(&platform));
    }

    output::info(&format!("Running platform '{platform}' from '{out}'"));

    let ctx = RunContext { out, manifest };
    backend.run(&ctx).await?;
    Ok(())
}
