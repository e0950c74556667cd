use crate::error::Result;
use crate::types::{CommandCategory, CommandDefinition};
use std::collections::BTreeMap;

/// Read access to a command catalogue
///
/// The context analyzer and content generator only see a catalogue through
/// this trait. [`CommandRegistry`](crate::CommandRegistry) never fails, but a
/// catalogue backed by something else may, so every query returns a `Result`.
pub trait CommandCatalog: Send + Sync {
    /// Case-insensitive lookup by command name
    fn lookup(&self, name: &str) -> Result<Option<CommandDefinition>>;

    /// All canonical names, ascending
    fn command_names(&self) -> Result<Vec<String>>;

    /// Definitions grouped in category priority order, names ascending
    fn by_category(&self) -> Result<BTreeMap<CommandCategory, Vec<CommandDefinition>>>;

    fn command_count(&self) -> Result<usize>;

    fn is_healthy(&self) -> bool;

    /// Changes whenever the catalogue is reloaded
    fn revision(&self) -> u64 {
        0
    }

    /// Canonical names sharing `prefix` case-insensitively, ascending
    fn names_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let prefix = prefix.to_uppercase();
        Ok(self
            .command_names()?
            .into_iter()
            .filter(|name| name.starts_with(&prefix))
            .collect())
    }
}
