//! Swatches Library
//!
//! This library provides the core functionality of the `swatch` tool:
//! parsing hex color lists, converting them to HSB swatches, and packaging
//! them as a `Swatches.json` zip archive for design applications.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
