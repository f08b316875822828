//! Shared CLI types: errors and exit codes.

use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Archive written.
    Success = 0,
    /// Required arguments missing.
    UsageError = 1,
    /// A color token could not be parsed.
    ValidationError = 2,
    /// Serialization, packaging or file output failed.
    IoError = 3,
}

impl ExitCode {
    /// Numeric status passed to the operating system.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.code())
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Missing or malformed arguments.
    Usage,
    /// Input that cannot be turned into swatches.
    Validation,
    /// Failure while producing or writing the archive.
    Io,
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// What went wrong, which also selects the exit code.
    pub kind: CliErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl CliError {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Usage => ExitCode::UsageError,
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::usage("x").exit_code(), ExitCode::UsageError);
        assert_eq!(CliError::validation("x").exit_code(), ExitCode::ValidationError);
        assert_eq!(CliError::io("x").exit_code(), ExitCode::IoError);
    }

    #[test]
    fn test_exit_codes_are_nonzero_on_error() {
        for err in [CliError::usage("a"), CliError::validation("b"), CliError::io("c")] {
            assert_ne!(err.exit_code().code(), 0);
        }
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(CliError::io("Failed to write out.zip").to_string(), "Failed to write out.zip");
    }
}
