use ordersheet_commands::CommandError;
use thiserror::Error;

/// Errors raised while classifying a line
///
/// These never leave the analyzer; they are converted to an `AllCommands`
/// context at the public boundary.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Command catalogue query failed: {0}")]
    Catalog(#[from] CommandError),
}

pub type AnalyzerResult<T> = std::result::Result<T, AnalyzerError>;
