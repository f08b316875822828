//! Application-wide constants.
//!
//! This module defines the binary name and the fixed values of the
//! swatches file format.

/// The binary name of the application (used in usage text and command examples).
pub const APP_BINARY_NAME: &str = "swatch";

/// Name of the single JSON entry stored inside a swatches archive.
pub const SWATCHES_ENTRY_NAME: &str = "Swatches.json";

/// Alpha value written for every swatch (fully opaque).
pub const SWATCH_ALPHA: u8 = 1;

/// Usage text printed when required arguments are missing.
#[must_use]
pub fn usage() -> String {
    format!(
        "usage: {bin} filename swatch-name colors\n\
         ex: {bin} ocean.swatches \"Ocean Nights\" \"#000000 #123123 #ff00ff\"",
        bin = APP_BINARY_NAME
    )
}
