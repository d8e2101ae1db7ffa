//! Platform backend trait definitions

use anyhow::Result;
use async_trait::async_trait;
use camino::Utf8PathBuf;
use mosaic_core::{BuildContext, RunContext};

/// Backend trait for target platforms.
///
/// This is the orchestrator's sole extension point: one implementation per
/// supported platform, registered in
/// [`crate::PlatformRegistry::builtin`]. Failures returned from either
/// operation are treated as fatal by the orchestrator; a backend that wants
/// a condition reported as user misuse must detect it before failing.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Registry identifier, lowercase
    fn name(&self) -> &'static str;

    /// Compile and package the project for this platform.
    ///
    /// Must be idempotent; re-running replaces prior artifacts. Returns the
    /// absolute path the artifacts were written to (the context's `out`
    /// directory, echoed back for reporting).
    async fn build(&self, ctx: &BuildContext) -> Result<Utf8PathBuf>;

    /// Launch or serve previously built artifacts.
    ///
    /// The orchestrator guarantees `ctx.out` exists and is non-empty before
    /// calling; staleness of the artifacts is backend-defined.
    async fn run(&self, ctx: &RunContext) -> Result<()>;
}
