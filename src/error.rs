//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition. Errors that do not
//! implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Error related to reading prompts from stdin or writing to stdout.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// The input stream ended before a valid value was entered.
    #[error("Input closed before a valid {0} was entered")]
    InputClosed(&'static str),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_and_clones() {
        let err: AppError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        let cloned = err.clone();
        assert!(matches!(cloned, AppError::Io(_)));
        assert_eq!(cloned.to_string(), "I/O Error: pipe closed");
    }

    #[test]
    fn test_input_closed_names_quantity() {
        let err = AppError::InputClosed("height");
        assert_eq!(
            err.to_string(),
            "Input closed before a valid height was entered"
        );
    }
}
