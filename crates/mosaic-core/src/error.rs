//! Error types for mosaic-core

use thiserror::Error;

/// Result type alias using mosaic-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the Mosaic CLI.
///
/// Every variant except [`Error::Unexpected`] is recoverable: expected user
/// misuse with a fixed single-line message, reported on stderr without a
/// stack of causes. `Unexpected` wraps anything else (storage failures,
/// backend internals) and is treated as fatal by the dispatcher.
#[derive(Error, Debug)]
pub enum Error {
    /// Manifest file missing, unreadable, or unparseable
    #[error("Unable to read mosaic.json in the current project directory")]
    ManifestUnreadable,

    /// Platform identifier not present in the registry
    #[error("Unknown platform '{name}'")]
    UnknownPlatform { name: String },

    /// Platform registered but not enabled in the manifest
    #[error(
        "Platform '{name}' not added to the project, use 'mosaic platform add {name}' to add it"
    )]
    PlatformNotAdded { name: String },

    /// `create` target directory already has entries
    #[error("Target directory '{path}' must be empty")]
    TargetNotEmpty { path: String },

    /// Output directory for a platform could not be read
    #[error("Couldn't read the output directory for '{platform}'. Did you forget to build for the platform?")]
    OutputUnreadable { platform: String },

    /// Output directory for a platform exists but holds no artifacts
    #[error("Output directory for '{platform}' is empty. Did you forget to build for the platform?")]
    OutputEmpty { platform: String },

    /// Anything else: bugs or environment problems, not user mistakes
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    /// Create an unknown platform error
    pub fn unknown_platform(name: impl Into<String>) -> Self {
        Self::UnknownPlatform { name: name.into() }
    }

    /// Create a platform-not-added error
    pub fn platform_not_added(name: impl Into<String>) -> Self {
        Self::PlatformNotAdded { name: name.into() }
    }

    /// Create a non-empty target directory error
    pub fn target_not_empty(path: impl Into<String>) -> Self {
        Self::TargetNotEmpty { path: path.into() }
    }

    /// Create an unreadable output directory error
    pub fn output_unreadable(platform: impl Into<String>) -> Self {
        Self::OutputUnreadable {
            platform: platform.into(),
        }
    }

    /// Create an empty output directory error
    pub fn output_empty(platform: impl Into<String>) -> Self {
        Self::OutputEmpty {
            platform: platform.into(),
        }
    }

    /// Whether this error is expected user misuse (print message, exit 1)
    /// rather than a defect or environment failure (full chain, exit 2).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}
