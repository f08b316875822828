//! CLI command handlers for Swatches.
//!
//! This module provides the argument definitions and the command that turns a
//! color list into a swatches archive.

pub mod common;
pub mod swatch;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use swatch::SwatchArgs;
