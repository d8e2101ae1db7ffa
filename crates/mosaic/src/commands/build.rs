//! `mosaic build` command handler
//!
//! Builds one named platform, or every enabled platform in manifest order.
//! Platforms are built strictly sequentially; backends may share the `out/`
//! root, so the first failure unwinds the remaining queue.

use camino::Utf8Path;

use mosaic_core::{BuildContext, Error, Manifest, ProjectLayout, Result};
use mosaic_platforms::{normalize, PlatformRegistry};

use crate::cli::BuildArgs;
use crate::output;

pub async fn run(args: BuildArgs, project_root: &Utf8Path, registry: &PlatformRegistry) -> Result<()> {
    let manifest = Manifest::load(project_root)?;

    let to_build: Vec<String> = match args.platform {
        Some(name) => {
            let platform = normalize(&name);
            if !manifest.has_platform(&platform) {
                return Err(Error::platform_not_added(&platform));
            }
            vec![platform]
        }
        None => manifest.platforms.clone(),
    };

    let layout = ProjectLayout::new(project_root);
    tracing::debug!("building platforms: {to_build:?}");

    for platform in &to_build {
        // Manifests are hand-editable; identifiers may have drifted from
        // what `platform add` wrote, or reference a backend this build of
        // the CLI no longer ships.
        let platform = normalize(platform);
        let backend = registry
            .resolve(&platform)
            .ok_or_else(|| Error::unknown_platform(&platform))?;

        let ctx = BuildContext {
            out: layout.out_dir(&platform),
            app: layout.app(),
            framework: layout.framework(),
            lib: layout.lib(),
            manifest: manifest.clone(),
        };

        let spinner = output::spinner(&format!("Building for platform '{platform}'..."));
        let result = backend.build(&ctx).await;
        spinner.finish_and_clear();
        let out_path = result?;

        output::success(&format!("Built for platform '{platform}' at '{out_path}'"));
    }

    Ok(())
}
