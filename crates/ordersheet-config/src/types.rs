//! Core configuration types and data structures

use serde::{Deserialize, Serialize};

/// Overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OverlayConfig {
    /// Context analyzer configuration
    pub analyzer: AnalyzerSettings,
    /// Content generator budgets
    pub content: ContentLimits,
}

/// Context analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Whether line classification results are cached
    pub caching_enabled: bool,
    /// Entries kept in the line classification cache
    pub line_cache_capacity: usize,
    /// Entries kept in the command extraction cache
    pub command_cache_capacity: usize,
}

/// Content generator budgets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentLimits {
    /// Commands rendered in the full catalogue
    pub max_commands: usize,
    /// Characters rendered in the full catalogue
    pub max_characters: usize,
    /// Commands rendered per category section
    pub max_commands_per_category: usize,
    /// Characters kept of a parameter description
    pub max_parameter_description: usize,
    /// Valid values listed per parameter
    pub max_valid_values: usize,
    /// Examples listed per command
    pub max_examples: usize,
    /// Content longer than this is marked scrollable
    pub scroll_threshold: usize,
    /// Items kept per section by content optimisation
    pub max_items_per_section: usize,
    /// Generated contents kept in the generator cache
    pub content_cache_capacity: usize,
    /// Whether generated content is cached
    pub caching_enabled: bool,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            caching_enabled: true,
            line_cache_capacity: 100,
            command_cache_capacity: 50,
        }
    }
}

impl AnalyzerSettings {
    /// Settings with both caches switched off
    pub fn uncached() -> Self {
        Self {
            caching_enabled: false,
            ..Self::default()
        }
    }
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_commands: 100,
            max_characters: 10_000,
            max_commands_per_category: 20,
            max_parameter_description: 80,
            max_valid_values: 5,
            max_examples: 3,
            scroll_threshold: 800,
            max_items_per_section: 30,
            content_cache_capacity: 32,
            caching_enabled: true,
        }
    }
}

impl ContentLimits {
    /// Limits with the content cache switched off
    pub fn uncached() -> Self {
        Self {
            caching_enabled: false,
            ..Self::default()
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&mut self) -> Result<OverlayConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &OverlayConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &OverlayConfig) -> Result<(), crate::error::ConfigError>;
}
