use crate::error::{CommandError, Result};
use crate::registry::CommandRegistry;
use crate::types::CommandDefinition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File format for command catalogues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// List of command definitions
    pub commands: Vec<CommandDefinition>,
}

/// Serialisation used by a catalogue file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a `.yaml`, `.yml` or `.json` extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            other => Err(CommandError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn parse(self, content: &str) -> Result<CatalogFile> {
        Ok(match self {
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
            CatalogFormat::Json => serde_json::from_str(content)?,
        })
    }

    pub fn render(self, file: &CatalogFile) -> Result<String> {
        Ok(match self {
            CatalogFormat::Yaml => serde_yaml::to_string(file)?,
            CatalogFormat::Json => serde_json::to_string_pretty(file)?,
        })
    }
}

/// Loads and saves command catalogues
///
/// A registry never needs a file; this exists for hosts that ship their own
/// rule variants.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Build a registry from a catalogue file, format chosen by extension
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CommandRegistry> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content, format)
    }

    /// Build a registry from catalogue text
    ///
    /// A catalogue listing no commands is rejected rather than served from
    /// the fallback set.
    pub fn load_from_str(content: &str, format: CatalogFormat) -> Result<CommandRegistry> {
        let file = format.parse(content)?;
        if file.commands.is_empty() {
            return Err(CommandError::EmptyCatalog);
        }
        Ok(CommandRegistry::from_definitions(file.commands))
    }

    /// Write a registry's catalogue, format chosen by extension
    pub fn save_to_file<P: AsRef<Path>>(registry: &CommandRegistry, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let file = CatalogFile {
            commands: registry.get_all().into_values().collect(),
        };
        fs::write(path, format.render(&file)?)?;
        Ok(())
    }
}
