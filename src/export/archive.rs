//! Swatches archive packaging.
//!
//! A swatches archive is a zip file holding exactly one entry,
//! `Swatches.json`. The archive is assembled in memory and written to disk
//! in a single call.

use anyhow::{Context, Result};
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::constants::SWATCHES_ENTRY_NAME;
use crate::models::SwatchFile;

/// Compression method for the archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Compression {
    /// Deflate-compressed entry.
    #[default]
    Deflate,
    /// Uncompressed entry.
    Stored,
}

impl Compression {
    const fn method(self) -> zip::CompressionMethod {
        match self {
            Self::Deflate => zip::CompressionMethod::Deflated,
            Self::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Builds a swatches archive in memory.
///
/// # Errors
///
/// Returns an error if JSON serialization or zip encoding fails.
pub fn build_archive(file: &SwatchFile, compression: Compression) -> Result<Vec<u8>> {
    let json = file.to_json()?;
    debug!("Serialized {} swatches ({} bytes of JSON)", file.swatch_count(), json.len());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(compression.method())
        .unix_permissions(0o644);

    zip.start_file(SWATCHES_ENTRY_NAME, options)
        .with_context(|| format!("Failed to start archive entry {SWATCHES_ENTRY_NAME}"))?;
    zip.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write archive entry {SWATCHES_ENTRY_NAME}"))?;

    let cursor = zip.finish().context("Failed to finalize zip archive")?;
    Ok(cursor.into_inner())
}

/// Writes archive bytes to `path`, creating or truncating the file.
///
/// New files get mode 0666 before the process umask is applied.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_archive(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Reads the swatches document back out of archive bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a zip archive, the archive has no
/// `Swatches.json` entry, or the entry is not a valid swatches document.
pub fn read_swatch_file(bytes: &[u8]) -> Result<SwatchFile> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).context("Failed to open swatches archive")?;
    let mut entry = archive
        .by_name(SWATCHES_ENTRY_NAME)
        .with_context(|| format!("Archive has no {SWATCHES_ENTRY_NAME} entry"))?;

    let mut json = String::new();
    entry
        .read_to_string(&mut json)
        .with_context(|| format!("Failed to read {SWATCHES_ENTRY_NAME}"))?;

    SwatchFile::from_json(&json)
}
