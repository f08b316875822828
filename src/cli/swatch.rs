//! Swatch command: build a swatches archive from a list of hex colors.

use crate::cli::common::{CliError, CliResult};
use crate::export::{self, Compression};
use crate::models::{SwatchFile, SwatchGroup};
use crate::parser::parse_color_list;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Build a color swatches archive from hex colors
///
/// Positionals may start with `-`. A value spelled exactly like one of the
/// options below must follow `--`.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct SwatchArgs {
    /// Path of the archive to write (created or truncated)
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Name of the swatch group
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    pub name: String,

    /// Space-separated hex colors, e.g. "#000000 123123 #ff00ff"
    #[arg(value_name = "COLORS", allow_hyphen_values = true)]
    pub colors: String,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED", allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Compression used for the Swatches.json entry
    #[arg(long, value_enum, default_value_t = Compression::Deflate)]
    pub compression: Compression,

    /// Re-read the written archive and check it matches what was generated
    #[arg(long)]
    pub verify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl SwatchArgs {
    /// Execute the swatch command
    pub fn execute(&self) -> CliResult<()> {
        println!("Generating '{}' as {}", self.name, self.output.display());

        if !self.ignored.is_empty() {
            debug!("Ignoring {} extra argument(s)", self.ignored.len());
        }

        // Parse everything before touching the filesystem
        let colors = parse_color_list(&self.colors)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let group = SwatchGroup::from_colors(self.name.clone(), &colors);
        info!("Built swatch group '{}' with {} colors", group.name, group.len());
        let file = SwatchFile::single(group);

        let bytes = export::build_archive(&file, self.compression)
            .map_err(|e| CliError::io(format!("Failed to build archive: {e:#}")))?;

        export::write_archive(&self.output, &bytes)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.verify {
            self.verify_written(&file)?;
        }

        println!(
            "✓ Wrote {} swatches to {}",
            file.swatch_count(),
            self.output.display()
        );

        Ok(())
    }

    /// Reads the output back and compares it against the generated document.
    fn verify_written(&self, expected: &SwatchFile) -> CliResult<()> {
        let bytes = fs::read(&self.output).map_err(|e| {
            CliError::io(format!("Failed to read back {}: {e}", self.output.display()))
        })?;
        let written = export::read_swatch_file(&bytes)
            .map_err(|e| CliError::io(format!("Verification failed: {e:#}")))?;

        if !written.approx_eq(expected) {
            return Err(CliError::io(format!(
                "Verification failed: {} does not match the generated swatches",
                self.output.display()
            )));
        }

        debug!("Verified {}", self.output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::CliErrorKind;
    use tempfile::TempDir;

    fn args(output: PathBuf, colors: &str) -> SwatchArgs {
        SwatchArgs {
            output,
            name: "Ocean".to_string(),
            colors: colors.to_string(),
            ignored: Vec::new(),
            compression: Compression::Deflate,
            verify: true,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_positional_arguments() {
        let parsed = SwatchArgs::try_parse_from([
            "swatch",
            "ocean.swatches",
            "Ocean Nights",
            "#000000 #123123 #ff00ff",
        ])
        .unwrap();

        assert_eq!(parsed.output, PathBuf::from("ocean.swatches"));
        assert_eq!(parsed.name, "Ocean Nights");
        assert_eq!(parsed.colors, "#000000 #123123 #ff00ff");
        assert_eq!(parsed.compression, Compression::Deflate);
        assert!(!parsed.verify);
    }

    #[test]
    fn test_parse_accepts_extra_arguments() {
        let parsed =
            SwatchArgs::try_parse_from(["swatch", "a.zip", "A", "000000", "extra", "more"])
                .unwrap();
        assert_eq!(parsed.ignored, vec!["extra", "more"]);
    }

    #[test]
    fn test_parse_missing_arguments() {
        let err = SwatchArgs::try_parse_from(["swatch", "a.zip", "A"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_hyphen_leading_values() {
        let parsed =
            SwatchArgs::try_parse_from(["swatch", "-out.zip", "-Dark", "#000000"]).unwrap();
        assert_eq!(parsed.output, PathBuf::from("-out.zip"));
        assert_eq!(parsed.name, "-Dark");

        let parsed = SwatchArgs::try_parse_from(["swatch", "a.zip", "-5", "#000000"]).unwrap();
        assert_eq!(parsed.name, "-5");
        assert_eq!(parsed.colors, "#000000");
    }

    #[test]
    fn test_parse_option_named_value_after_separator() {
        let parsed =
            SwatchArgs::try_parse_from(["swatch", "--", "a.zip", "--verify", "#000000"]).unwrap();
        assert_eq!(parsed.name, "--verify");
        assert!(!parsed.verify);
    }

    #[test]
    fn test_parse_compression_option() {
        let parsed = SwatchArgs::try_parse_from([
            "swatch",
            "--compression",
            "stored",
            "a.zip",
            "A",
            "000000",
        ])
        .unwrap();
        assert_eq!(parsed.compression, Compression::Stored);
    }

    #[test]
    fn test_execute_writes_archive() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("ocean.swatches");

        args(output.clone(), "#000000 ffffff").execute().unwrap();

        let file = export::read_swatch_file(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(file.groups().len(), 1);
        assert_eq!(file.groups()[0].name, "Ocean");
        assert_eq!(file.swatch_count(), 2);
    }

    #[test]
    fn test_execute_bad_color_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("ocean.swatches");

        let err = args(output.clone(), "#000000 #12G456").execute().unwrap_err();

        assert_eq!(err.kind, CliErrorKind::Validation);
        assert!(err.message.contains("#12G456"));
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_unwritable_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("no_such_dir").join("ocean.swatches");

        let err = args(output, "#000000").execute().unwrap_err();

        assert_eq!(err.kind, CliErrorKind::Io);
    }
}
