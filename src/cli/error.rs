//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Already printed to the user by the interactive dialogue.
    #[error("{0}")]
    Reported(ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) | CliError::Reported(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }

    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Reported(_))
    }

    /// Expression errors are followed by the usage hint.
    pub fn needs_usage_hint(&self) -> bool {
        matches!(self, CliError::Application(e) if e.is_expression_error())
    }
}
