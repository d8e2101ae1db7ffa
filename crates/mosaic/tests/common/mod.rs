//! Common test utilities for mosaic command handlers
//!
//! Provides a recording mock platform backend and temp-project helpers so
//! the handlers can be exercised without real bundling or servers.

use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

use mosaic_core::{BuildContext, Manifest, RunContext};
use mosaic_platforms::Platform;

/// One recorded backend invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Build { platform: String, out: Utf8PathBuf },
    Run { platform: String, out: Utf8PathBuf },
}

/// Shared invocation log, ordered across all mock backends
pub type Recorder = Arc<Mutex<Vec<Call>>>;

pub fn recorder() -> Recorder {
    Arc::new(Mutex::new(Vec::new()))
}

/// Mock backend that records calls and optionally fails its build
pub struct MockPlatform {
    name: &'static str,
    fail_build: bool,
    calls: Recorder,
}

impl MockPlatform {
    pub fn new(name: &'static str, calls: Recorder) -> Self {
        Self {
            name,
            fail_build: false,
            calls,
        }
    }

    pub fn failing(name: &'static str, calls: Recorder) -> Self {
        Self {
            name,
            fail_build: true,
            calls,
        }
    }
}

#[async_trait]
impl Platform for MockPlatform {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn build(&self, ctx: &BuildContext) -> Result<Utf8PathBuf> {
        self.calls.lock().unwrap().push(Call::Build {
            platform: self.name.to_string(),
            out: ctx.out.clone(),
        });
        if self.fail_build {
            bail!("mock build failure for '{}'", self.name);
        }
        Ok(ctx.out.clone())
    }

    async fn run(&self, ctx: &RunContext) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Run {
            platform: self.name.to_string(),
            out: ctx.out.clone(),
        });
        Ok(())
    }
}

/// Temp project root with a persisted manifest enabling the given platforms
pub fn project_with_manifest(platforms: &[&str]) -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

    let mut manifest = Manifest::new("demo");
    for p in platforms {
        manifest.add_platform(p);
    }
    manifest.save(&root).unwrap();
    (dir, root)
}

pub fn load_manifest(root: &Utf8Path) -> Manifest {
    Manifest::load(root).unwrap()
}
