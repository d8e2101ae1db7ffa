//! `mosaic create` command handler
//!
//! Scaffolds a new project: materializes the embedded template tree into an
//! empty target directory and writes a fresh manifest named after it.

use std::fs;

use anyhow::Context;
use camino::Utf8Path;
use rust_embed::RustEmbed;

use mosaic_core::{Error, Manifest, Result};

use crate::cli::CreateArgs;
use crate::output;

/// Project template shipped inside the binary
#[derive(RustEmbed)]
#[folder = "templates/project"]
struct ProjectTemplate;

pub fn run(args: CreateArgs, project_root: &Utf8Path) -> Result<()> {
    let target = if args.dir.is_absolute() {
        args.dir.clone()
    } else {
        project_root.join(&args.dir)
    };

    // "file_name" of a path ending in `/` or `..` is unusable as a project
    // name; resolve the plain basename the way the user typed it.
    let name = target
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Cannot derive a project name from '{target}'"))?
        .to_string();

    fs::create_dir_all(&target)
        .with_context(|| format!("Failed to create target directory '{target}'"))?;

    let mut entries = fs::read_dir(&target)
        .with_context(|| format!("Failed to read target directory '{target}'"))?;
    if entries.next().is_some() {
        return Err(Error::target_not_empty(target.as_str()));
    }

    for file in ProjectTemplate::iter() {
        let content = ProjectTemplate::get(file.as_ref())
            .ok_or_else(|| anyhow::anyhow!("Embedded template entry '{file}' missing"))?;
        let dest = target.join(file.as_ref());
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{parent}'"))?;
        }
        fs::write(&dest, content.data.as_ref())
            .with_context(|| format!("Failed to write template file '{dest}'"))?;
    }

    Manifest::new(&name).save(&target)?;

    output::success(&format!("Successfully created '{name}' project"));
    output::kv("Location", target.as_str());
    Ok(())
}
