//! Error types for help content generation

use ordersheet_commands::CommandError;
use thiserror::Error;

/// Result type for help operations
pub type Result<T> = std::result::Result<T, HelpError>;

/// Error types for help content generation
///
/// Generation entry points convert these into error content; they are only
/// visible to code calling the crate's lower-level helpers.
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("Command catalogue query failed: {0}")]
    Catalog(#[from] CommandError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
