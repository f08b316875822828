//! Export functionality for swatch palettes.
//!
//! This module packages a swatches document into the zip archive format read
//! by the design application and writes it to disk.

pub mod archive;

pub use archive::{build_archive, read_swatch_file, write_archive, Compression};
