use crate::builtin;
use crate::catalog::CommandCatalog;
use crate::error::{CommandError, Result};
use crate::telemetry::{default_telemetry, Telemetry, TelemetryEvent};
use crate::types::{CommandCategory, CommandDefinition};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a registry loads its definitions from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in catalogue in [`builtin`]
    Builtin,
    /// A caller-supplied catalogue
    Custom(Vec<CommandDefinition>),
}

#[derive(Debug, Default)]
struct RegistryState {
    commands: HashMap<String, CommandDefinition>,
    initialized: bool,
    revision: u64,
}

impl RegistryState {
    fn is_healthy(&self) -> bool {
        self.initialized && !self.commands.is_empty()
    }
}

/// Canonical table of order commands
///
/// The registry initialises itself on construction and is never empty: if
/// its source yields no valid definitions it serves
/// [`builtin::fallback_definitions`] and reports itself unhealthy until a
/// successful [`attempt_recovery`](Self::attempt_recovery).
pub struct CommandRegistry {
    state: RwLock<RegistryState>,
    source: CatalogSource,
    telemetry: Arc<dyn Telemetry>,
}

impl CommandRegistry {
    /// Create a registry seeded with the built-in catalogue
    pub fn new() -> Self {
        Self::with_source(CatalogSource::Builtin, default_telemetry())
    }

    /// Create a registry seeded with the built-in catalogue, reporting to `telemetry`
    pub fn with_telemetry(telemetry: Arc<dyn Telemetry>) -> Self {
        Self::with_source(CatalogSource::Builtin, telemetry)
    }

    /// Create a registry from caller-supplied definitions
    pub fn from_definitions(definitions: Vec<CommandDefinition>) -> Self {
        Self::with_source(CatalogSource::Custom(definitions), default_telemetry())
    }

    pub fn with_source(source: CatalogSource, telemetry: Arc<dyn Telemetry>) -> Self {
        let registry = Self {
            state: RwLock::new(RegistryState::default()),
            source,
            telemetry,
        };
        registry.initialize();
        registry
    }

    /// Rebuild from the source and swap the result in under one write lock
    ///
    /// Readers see either the previous table or the new one, never an empty
    /// map. Telemetry is recorded after the lock is released.
    fn initialize(&self) -> bool {
        let (commands, initialized, event) = match Self::load(&self.source) {
            Ok(commands) => {
                let event = TelemetryEvent::RegistryInitialized {
                    commands: commands.len(),
                };
                (commands, true, event)
            }
            Err(e) => {
                let commands: HashMap<String, CommandDefinition> =
                    builtin::fallback_definitions()
                        .into_iter()
                        .map(|def| (def.name.clone(), def))
                        .collect();
                let event = TelemetryEvent::RegistryFallback {
                    reason: e.to_string(),
                    commands: commands.len(),
                };
                (commands, false, event)
            }
        };

        let healthy = {
            let mut state = self.state.write();
            state.revision += 1;
            state.commands = commands;
            state.initialized = initialized;
            state.is_healthy()
        };

        self.telemetry.record(&event);
        healthy
    }

    fn load(source: &CatalogSource) -> Result<HashMap<String, CommandDefinition>> {
        let definitions = match source {
            CatalogSource::Builtin => builtin::definitions(),
            CatalogSource::Custom(definitions) => definitions.clone(),
        };

        let mut commands = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            match Self::canonicalize(definition) {
                Ok(def) if commands.contains_key(&def.name) => {
                    warn!(
                        error = %CommandError::DuplicateCommand(def.name.clone()),
                        "Skipping command definition"
                    );
                }
                Ok(def) => {
                    commands.insert(def.name.clone(), def);
                }
                Err(e) => warn!(error = %e, "Skipping command definition"),
            }
        }

        if commands.is_empty() {
            return Err(CommandError::EmptyCatalog);
        }

        debug!(count = commands.len(), "Loaded command catalogue");
        Ok(commands)
    }

    fn canonicalize(mut definition: CommandDefinition) -> Result<CommandDefinition> {
        let name = definition.name.trim().to_uppercase();
        if name.is_empty() {
            return Err(CommandError::InvalidCommandName(
                "Command name cannot be empty".to_string(),
            ));
        }
        if !name.chars().all(char::is_alphabetic) {
            return Err(CommandError::InvalidCommandName(name));
        }
        definition.name = name;
        Ok(definition)
    }

    /// Get a copy of every definition keyed by canonical name
    pub fn get_all(&self) -> BTreeMap<String, CommandDefinition> {
        self.state
            .read()
            .commands
            .iter()
            .map(|(name, def)| (name.clone(), def.clone()))
            .collect()
    }

    /// Case-insensitive lookup; `None` for blank or unknown names
    pub fn get(&self, name: &str) -> Option<CommandDefinition> {
        let key = name.trim();
        if key.is_empty() {
            return None;
        }
        self.state.read().commands.get(&key.to_uppercase()).cloned()
    }

    /// Check if a command exists
    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Group definitions by category in priority order, names ascending
    ///
    /// Every category is present in the result, possibly with no members.
    pub fn get_by_category(&self) -> BTreeMap<CommandCategory, Vec<CommandDefinition>> {
        let mut groups: BTreeMap<CommandCategory, Vec<CommandDefinition>> = CommandCategory::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        for def in self.state.read().commands.values() {
            groups.entry(def.category).or_default().push(def.clone());
        }
        for members in groups.values_mut() {
            members.sort_by(|a, b| a.name.cmp(&b.name));
        }

        groups
    }

    /// All canonical names, ascending
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// Search commands by name or description
    pub fn search(&self, query: &str) -> Vec<CommandDefinition> {
        let query_lower = query.to_lowercase();
        let mut found: Vec<CommandDefinition> = self
            .state
            .read()
            .commands
            .values()
            .filter(|cmd| {
                cmd.name.to_lowercase().contains(&query_lower)
                    || cmd.description.to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    pub fn len(&self) -> usize {
        self.state.read().commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().commands.is_empty()
    }

    pub fn is_healthy(&self) -> bool {
        self.state.read().is_healthy()
    }

    /// Reinitialise from the original source
    ///
    /// The current table keeps serving lookups until the rebuilt one replaces it.
    pub fn attempt_recovery(&self) -> bool {
        let healthy = self.initialize();
        self.telemetry
            .record(&TelemetryEvent::RecoveryAttempted { healthy });
        healthy
    }

    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("CommandRegistry")
            .field("commands", &state.commands.len())
            .field("initialized", &state.initialized)
            .field("revision", &state.revision)
            .finish()
    }
}

impl CommandCatalog for CommandRegistry {
    fn lookup(&self, name: &str) -> Result<Option<CommandDefinition>> {
        Ok(self.get(name))
    }

    fn command_names(&self) -> Result<Vec<String>> {
        Ok(self.names())
    }

    fn by_category(&self) -> Result<BTreeMap<CommandCategory, Vec<CommandDefinition>>> {
        Ok(self.get_by_category())
    }

    fn command_count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn is_healthy(&self) -> bool {
        CommandRegistry::is_healthy(self)
    }

    fn revision(&self) -> u64 {
        CommandRegistry::revision(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::NoopTelemetry;

    fn quiet(definitions: Vec<CommandDefinition>) -> CommandRegistry {
        CommandRegistry::with_source(CatalogSource::Custom(definitions), Arc::new(NoopTelemetry))
    }

    #[test]
    fn test_builtin_registry_is_healthy() {
        let registry = CommandRegistry::new();
        assert!(registry.is_healthy());
        assert!(registry.len() > 20);
        assert!(registry.exists("BUILD"));
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let registry = CommandRegistry::new();
        let upper = registry.get("BUILD").unwrap();
        assert_eq!(registry.get("build"), Some(upper.clone()));
        assert_eq!(registry.get("Build"), Some(upper));
    }

    #[test]
    fn test_get_blank_or_unknown_is_none() {
        let registry = CommandRegistry::new();
        assert!(registry.get("").is_none());
        assert!(registry.get("   ").is_none());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_get_all_is_a_copy() {
        let registry = CommandRegistry::new();
        let mut all = registry.get_all();
        let before = all.len();
        all.clear();
        assert_eq!(registry.get_all().len(), before);
    }

    #[test]
    fn test_names_are_canonicalized_on_load() {
        let registry = quiet(vec![CommandDefinition::new(
            "  scan ",
            CommandCategory::Movement,
            "SCAN <ship>",
        )]);
        assert!(registry.is_healthy());
        assert_eq!(registry.names(), vec!["SCAN"]);
    }

    #[test]
    fn test_invalid_and_duplicate_definitions_are_skipped() {
        let registry = quiet(vec![
            CommandDefinition::new("SCAN", CommandCategory::Movement, "SCAN <ship>"),
            CommandDefinition::new("scan", CommandCategory::Combat, "SCAN <ship>"),
            CommandDefinition::new("", CommandCategory::Combat, "<nothing>"),
            CommandDefinition::new("X-RAY", CommandCategory::Combat, "X-RAY"),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("scan").unwrap().category,
            CommandCategory::Movement
        );
    }

    #[test]
    fn test_empty_source_falls_back_and_is_unhealthy() {
        let registry = quiet(Vec::new());
        assert!(!registry.is_healthy());
        assert!(!registry.get_all().is_empty());
        assert!(registry.exists("MOVE"));
    }

    #[test]
    fn test_by_category_order_and_sorting() {
        let registry = CommandRegistry::new();
        let groups = registry.get_by_category();
        let order: Vec<_> = groups.keys().copied().collect();
        assert_eq!(order, CommandCategory::ALL.to_vec());

        for (category, members) in &groups {
            let names: Vec<_> = members.iter().map(|d| d.name.clone()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted);
            assert!(members.iter().all(|d| d.category == *category));
        }
    }

    #[test]
    fn test_recovery_bumps_revision() {
        let registry = CommandRegistry::new();
        let before = registry.revision();
        assert!(registry.attempt_recovery());
        assert!(registry.revision() > before);
        assert!(registry.is_healthy());
    }

    #[test]
    fn test_recovery_of_empty_source_stays_degraded() {
        let registry = quiet(Vec::new());
        assert!(!registry.attempt_recovery());
        assert!(!registry.get_all().is_empty());
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let registry = CommandRegistry::new();
        let found = registry.search("portal");
        let names: Vec<_> = found.iter().map(|d| d.name.as_str()).collect();
        assert!(names.contains(&"TRANSIT"));
        assert!(names.contains(&"BUILDPORTAL"));
    }

    #[test]
    fn test_names_with_prefix_via_catalog() {
        let registry = CommandRegistry::new();
        let matches = registry.names_with_prefix("bu").unwrap();
        assert_eq!(matches, vec!["BUILD", "BUILDPORTAL", "BUY"]);
    }
}
