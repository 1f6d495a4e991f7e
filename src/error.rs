/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code. The
/// parser collects them as data instead of stopping at the first one.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. They
/// unwind the evaluator and surface to programs as error values.
pub mod runtime_error;

pub use parse_error::{ParseError, SyntaxErrors};
pub use runtime_error::RuntimeError;

use std::path::PathBuf;

/// Failures of the file runner that happen before evaluation starts.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The script does not carry the `.sqd` extension.
    #[error("Incorrect file format: Got {found}, expected {expected}")]
    WrongExtension {
        /// Extension found on the path, including the dot (may be empty).
        found:    String,
        /// The accepted extension.
        expected: &'static str,
    },
    /// The script could not be read.
    #[error("Failed to read file {}: {source}", .path.display())]
    Read {
        /// Path that was being read.
        path:   PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The script did not parse.
    #[error(transparent)]
    Syntax(#[from] SyntaxErrors),
}
