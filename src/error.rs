//! Error handling for the Stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Stencil operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A filesystem operation performed during finalization failed.
    /// Carries enough context to diagnose which path and which operation.
    #[error("Failed to {operation} '{path}': {source}.")]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template parameter failed validation or flag decoding.
    #[error("Invalid parameter '{name}': {reason}.")]
    InvalidParameter { name: String, reason: String },

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during git operations
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    #[error("Template directory does not exist: '{template_dir}'.")]
    TemplateDoesNotExist { template_dir: String },

    #[error("Output directory already exists: '{output_dir}'. Use --force to overwrite.")]
    OutputDirectoryExists { output_dir: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during hook script execution
    #[error("Hook execution error: {0}.")]
    HookError(String),

    /// Represents errors in processing .stencilignore files
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),
}

/// Convenience type alias for Results with Stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
