//! Mosaic CLI command surface
//!
//! Library target backing the `mosaic` binary: argument definitions,
//! command handlers, and terminal output helpers. Handlers take the project
//! root and the platform registry explicitly, so integration tests drive
//! them with temp directories and mock backends.

pub mod cli;
pub mod commands;
pub mod output;
