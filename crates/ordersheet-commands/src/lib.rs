//! Ordersheet command catalogue
//!
//! This crate holds the canonical table of order commands recognised by the
//! order-sheet grammar, together with the overlay data model shared by the
//! context analyzer and the content generator.
//!
//! # Examples
//!
//! ```ignore
//! use ordersheet_commands::{CommandCatalog, CommandRegistry};
//!
//! let registry = CommandRegistry::new();
//! assert!(registry.is_healthy());
//!
//! // Lookups are case-insensitive and keyed by the canonical uppercase name
//! let build = registry.get("build").expect("BUILD is a built-in command");
//! assert_eq!(build.name, "BUILD");
//!
//! // Categories come back in play-frequency order, not alphabetical
//! for (category, commands) in registry.get_by_category() {
//!     println!("{}: {}", category, commands.len());
//! }
//! ```

pub mod builtin;
pub mod cache;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod overlay;
pub mod registry;
pub mod telemetry;
pub mod types;

pub use cache::{BoundedCache, CacheStats};
pub use catalog::CommandCatalog;
pub use error::{CommandError, Result};
pub use loader::{CatalogFile, CatalogFormat, CatalogLoader};
pub use overlay::{
    ContentKind, ContextKind, ItemKind, OverlayContent, OverlayContext, OverlayItem,
    OverlaySection,
};
pub use registry::{CatalogSource, CommandRegistry};
pub use telemetry::{NoopTelemetry, Telemetry, TelemetryEvent, TracingTelemetry};
pub use types::{CommandCategory, CommandDefinition, ParameterDefinition, ParameterType};
