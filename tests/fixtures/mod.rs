//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::ZipArchive;

/// Path to the swatch binary
pub fn swatch_bin() -> &'static str {
    env!("CARGO_BIN_EXE_swatch")
}

/// Runs the swatch binary with the given arguments.
pub fn run_swatch<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(swatch_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Creates a temp directory and an output path inside it.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn temp_output(file_name: &str) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join(file_name);
    (path, temp)
}

/// Returns the entry names of a zip archive on disk.
pub fn archive_entry_names(path: &Path) -> Vec<String> {
    let bytes = fs::read(path).expect("Failed to read archive");
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("Output should be a zip archive");
    archive.file_names().map(str::to_string).collect()
}

/// Reads and parses `Swatches.json` from a zip archive on disk.
pub fn read_swatches_json(path: &Path) -> serde_json::Value {
    let bytes = fs::read(path).expect("Failed to read archive");
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).expect("Output should be a zip archive");
    let mut entry = archive
        .by_name("Swatches.json")
        .expect("Archive should contain Swatches.json");
    let mut json = String::new();
    entry
        .read_to_string(&mut json)
        .expect("Swatches.json should be UTF-8");
    serde_json::from_str(&json).expect("Swatches.json should be valid JSON")
}

/// Asserts two JSON numbers are equal within float tolerance.
pub fn assert_number(value: &serde_json::Value, expected: f64, what: &str) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("{what} should be a number, got {value}"));
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}
