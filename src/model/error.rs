//! Error types for mpdx-list.
//!
//! This module defines a hierarchical error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Contact file reading failures (file not found, IO)
//!   - [`ConfigError`](crate::config::ConfigError) - Configuration file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - Event loop failures
//!   - `std::io::Error` - Terminal setup failures
//!
//! [`ParseError`] is deliberately absent from [`AppError`]: malformed contact lines are
//! logged and skipped, never fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// # Examples
///
/// ```no_run
/// use mpdx_list::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError converts to AppError via From
///     let _contacts = read_contacts()?;
///     Ok(())
/// }
/// # fn read_contacts() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the contact file.
    ///
    /// **Recovery**: Display error to user and exit.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration file could not be read or was invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer (resize, broken pipe, draw I/O). Fatal:
    /// restore the terminal, write the message to stderr, exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The event loop stopped on an error.
    #[error("{0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when opening the contact source.
#[derive(Debug, Error)]
pub enum InputError {
    /// The contact file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use mpdx_list::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path as given on the command line.
        path: PathBuf,
    },

    /// No file argument and stdin is an interactive terminal.
    #[error("No input source: provide a contacts file or pipe JSONL to stdin")]
    NoInput,

    /// Generic I/O error reading the file (permissions, disk errors).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing a contact line.
///
/// Non-fatal: the line is logged at `warn` and skipped, and the skip is counted so the
/// status bar can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is not valid JSON or does not match the contact shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpdx_list::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 42,
    ///     message: "expected value".to_string()
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// `serde_json` error message.
        message: String,
    },

    /// A required field is present but empty.
    #[error("Empty required field '{field}' at line {line}")]
    EmptyField {
        /// 1-based line number.
        line: usize,
        /// JSON key of the field.
        field: &'static str,
    },

    /// The line is not valid UTF-8.
    #[error("Invalid UTF-8 at line {line}")]
    InvalidUtf8 {
        /// 1-based line number.
        line: usize,
    },
}

impl ParseError {
    /// Line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. }
            | ParseError::EmptyField { line, .. }
            | ParseError::InvalidUtf8 { line } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.jsonl"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.jsonl"));
    }

    #[test]
    fn input_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let input_err: InputError = io_err.into();
        let msg = input_err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn parse_error_displays_line() {
        let err = ParseError::EmptyField {
            line: 15,
            field: "name",
        };
        let msg = err.to_string();
        assert!(msg.contains("'name'"));
        assert!(msg.contains("line 15"));
        assert_eq!(err.line(), 15);
    }

    #[test]
    fn app_error_nested_io_through_input_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let input_err: InputError = io_err.into();
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn app_error_from_io_error_is_terminal() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_wraps_event_loop_failures() {
        let tui_err = crate::view::TuiError::Input(InputError::NoInput);
        let app_err: AppError = tui_err.into();
        assert!(matches!(app_err, AppError::Tui(_)));
        assert!(app_err.to_string().contains("No input source"));
    }
}
