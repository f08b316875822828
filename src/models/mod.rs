//! Data models for colors and swatch groups.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of argument parsing and file output.

pub mod rgb;
pub mod swatch;

// Re-export all model types
pub use rgb::RgbColor;
pub use swatch::{ColorSpace, SwatchEntry, SwatchFile, SwatchGroup};
