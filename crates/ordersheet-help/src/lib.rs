//! Ordersheet Help Content
//!
//! This crate turns an overlay context into a renderable help tree:
//! - The full command catalogue, grouped by category and held to size budgets
//! - Detailed syntax, parameter and example help for one command
//! - A narrowed list while a command name is still being typed
//! - Limited, error and empty panels for when things go wrong
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use ordersheet_commands::CommandRegistry;
//! use ordersheet_help::ContentGenerator;
//!
//! let registry = Arc::new(CommandRegistry::new());
//! let mut generator = ContentGenerator::new(registry);
//!
//! let content = generator.generate_command_content("BUILD");
//! assert_eq!(content.sections[0].title.as_deref(), Some("Syntax"));
//! ```
//!
//! Every `generate_*` method returns well-formed content; failures surface as
//! an error panel, never as a panic or `Err`.

pub mod budget;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod metrics;

pub use error::{HelpError, Result};
pub use generator::ContentGenerator;
pub use metrics::PerformanceMetrics;
