//! CLI command implementations

pub mod build;
pub mod create;
pub mod platform;
pub mod run;
