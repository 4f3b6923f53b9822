//! Error handling for plugen.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating plugin sources.
///
/// Every variant aborts the run; there is no recovery path.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A numeric field could not be parsed
    #[error("Format error: '{value}' is not a valid {expected}.")]
    FormatError { value: String, expected: String },

    /// A table row does not have the expected number of fields
    #[error("Schema error: line {line} has {found} fields, expected {expected}.")]
    SchemaError {
        line: usize,
        found: usize,
        expected: usize,
    },

    /// The requested template does not exist in the template collection
    #[error("Template not found: '{0}'.")]
    TemplateNotFound(String),

    /// Template loading or rendering failed
    #[error("Render error in template '{template}': {source}.")]
    RenderError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Represents invalid or missing configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
