//! Ordersheet Context Analysis
//!
//! Decides, for a text buffer and a cursor offset, which help the overlay
//! should show. Only the cursor line matters:
//!
//! | cursor line                                  | context            |
//! |----------------------------------------------|--------------------|
//! | blank, or a `#` / `//` comment               | `AllCommands`      |
//! | first token names a command (any case)       | `SpecificCommand`  |
//! | first token is a letters-only command prefix | `PartialCommands`  |
//! | anything else                                | `AllCommands`      |
//!
//! An exact command name always wins over a prefix match, so `LOAD` resolves
//! to `LOAD` even though `LOADALL` also starts with it.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ordersheet_commands::CommandRegistry;
//! use ordersheet_completion::ContextAnalyzer;
//!
//! let mut analyzer = ContextAnalyzer::new(Arc::new(CommandRegistry::new()));
//! let context = analyzer.analyze_context("BUILD Homeworld 5 Destroyer", 10);
//! assert_eq!(context.command_name(), Some("BUILD"));
//! ```
//!
//! Analysis is synchronous and never fails. Each analyzer owns two bounded
//! caches; give every thread its own analyzer.

pub mod context;
pub mod error;

pub use context::{ContextAnalyzer, LineSpan};
pub use error::{AnalyzerError, AnalyzerResult};
