//! Parsing of command line color input.
//!
//! This module turns the space-separated colors argument into RGB colors.

pub mod colors;

// Re-export commonly used functions
pub use colors::{normalize_token, parse_color_list};
