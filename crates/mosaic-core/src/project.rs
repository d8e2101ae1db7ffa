//! Project layout conventions
//!
//! A Mosaic project is a directory with fixed, convention-named roots:
//! `app/` holds the application sources, `mosaic/` the framework runtime,
//! `lib/` shared libraries, and `out/<platform>/` the per-platform build
//! artifacts. Backends receive these paths and never guess them.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

use crate::error::Result;

/// Application source root
pub const APP_DIR: &str = "app";

/// Framework runtime root
pub const FRAMEWORK_DIR: &str = "mosaic";

/// Shared library root
pub const LIB_DIR: &str = "lib";

/// Build output root; each platform gets a subdirectory
pub const OUT_DIR: &str = "out";

/// Convention paths for a project rooted at a given directory
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: Utf8PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn app(&self) -> Utf8PathBuf {
        self.root.join(APP_DIR)
    }

    pub fn framework(&self) -> Utf8PathBuf {
        self.root.join(FRAMEWORK_DIR)
    }

    pub fn lib(&self) -> Utf8PathBuf {
        self.root.join(LIB_DIR)
    }

    pub fn out_root(&self) -> Utf8PathBuf {
        self.root.join(OUT_DIR)
    }

    /// Output directory for one platform, e.g. `out/web`
    pub fn out_dir(&self, platform: &str) -> Utf8PathBuf {
        self.out_root().join(platform)
    }
}

/// Current working directory as a UTF-8 path.
///
/// Non-UTF-8 working directories are an environment problem, not user
/// misuse, so both failure modes here are unexpected.
pub fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to resolve the current directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display()).into())
}
