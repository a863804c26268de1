//! CLI-level errors (wraps build errors)

use thiserror::Error;

use crate::errors::BuildError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Build(e) => match e {
                BuildError::SpecNotFound(_) => crate::exitcode::NOINPUT,
                BuildError::SpecParse { .. } => crate::exitcode::DATAERR,
                BuildError::Io { .. } => crate::exitcode::IOERR,
                BuildError::Filesystem { .. }
                | BuildError::TypeConflict { .. }
                | BuildError::ConfigWrite { .. } => crate::exitcode::CANTCREAT,
            },
        }
    }
}
