//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{ConfigManager as ConfigManagerTrait, OverlayConfig},
};

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "ORDERSHEET".to_string(),
        }
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ordersheet")
            .join("overlay.toml")
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<OverlayConfig> {
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let overlay_config: OverlayConfig = config.try_deserialize()?;
        self.validate_config(&overlay_config)?;

        debug!(path = %self.config_path.display(), "Loaded overlay configuration");
        Ok(overlay_config)
    }

    fn save_config(&self, config: &OverlayConfig) -> Result<()> {
        self.validate_config(config)?;
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &OverlayConfig) -> Result<()> {
        let analyzer = &config.analyzer;
        if analyzer.caching_enabled
            && (analyzer.line_cache_capacity == 0 || analyzer.command_cache_capacity == 0)
        {
            return Err(ConfigError::Validation(
                "Analyzer cache capacities must be greater than 0 when caching is enabled"
                    .to_string(),
            ));
        }

        let content = &config.content;
        let budgets = [
            ("max_commands", content.max_commands),
            ("max_characters", content.max_characters),
            ("max_commands_per_category", content.max_commands_per_category),
            ("max_parameter_description", content.max_parameter_description),
            ("max_items_per_section", content.max_items_per_section),
        ];
        if let Some((name, _)) = budgets.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Validation(format!(
                "{} must be greater than 0",
                name
            )));
        }

        if content.caching_enabled && content.content_cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "Content cache capacity must be greater than 0 when caching is enabled"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
