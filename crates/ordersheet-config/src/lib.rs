//! Ordersheet Overlay Configuration
//!
//! Cache sizes and content budgets for the context analyzer and content
//! generator, loaded from an optional TOML file layered under
//! `ORDERSHEET__*` environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AnalyzerSettings, ConfigManager as ConfigManagerTrait, ContentLimits, OverlayConfig,
};
