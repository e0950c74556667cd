use thiserror::Error;

/// Errors that can occur in the command catalogue
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command name: {0}")]
    InvalidCommandName(String),

    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),

    #[error("Command catalogue is empty")]
    EmptyCatalog,

    #[error("Command catalogue unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Unsupported catalogue format: {0} (use .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
