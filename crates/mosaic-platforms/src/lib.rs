//! Platform backends for Mosaic projects
//!
//! This crate provides the backend abstraction layer for building and
//! running Mosaic projects on their target platforms:
//!
//! - Web (static bundle served over HTTP)
//!
//! The [`PlatformRegistry`] is the closed set of backends compiled into the
//! orchestrator; adding a platform means adding a module here and wiring it
//! into [`PlatformRegistry::builtin`].

pub mod registry;
pub mod traits;
pub mod web;

pub use registry::{normalize, PlatformRegistry};
pub use traits::Platform;
