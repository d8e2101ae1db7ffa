//! # mosaic-core
//!
//! Core library for the Mosaic CLI providing:
//! - Manifest (mosaic.json) loading and atomic persistence
//! - Project layout conventions (app/, mosaic/, lib/, out/)
//! - Build/run context types passed to platform backends
//! - The recoverable/unexpected error taxonomy

pub mod error;
pub mod manifest;
pub mod project;
pub mod types;

pub use error::{Error, Result};
pub use manifest::{Manifest, MANIFEST_FILE_NAME};
pub use project::ProjectLayout;
pub use types::{BuildContext, RunContext};
