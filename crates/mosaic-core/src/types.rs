//! Context types passed to platform backends

use camino::Utf8PathBuf;

use crate::manifest::Manifest;

/// Everything a backend needs to build one platform.
///
/// Constructed fresh per build invocation from [`crate::ProjectLayout`]
/// conventions. Backends read the manifest; they never mutate it.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Platform-specific output directory (`out/<platform>`)
    pub out: Utf8PathBuf,

    /// Application source root (`app/`)
    pub app: Utf8PathBuf,

    /// Framework runtime root (`mosaic/`)
    pub framework: Utf8PathBuf,

    /// Shared library root (`lib/`)
    pub lib: Utf8PathBuf,

    /// The loaded project manifest
    pub manifest: Manifest,
}

/// Everything a backend needs to run previously built artifacts
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Platform-specific output directory, already built and non-empty
    pub out: Utf8PathBuf,

    /// The loaded project manifest
    pub manifest: Manifest,
}
