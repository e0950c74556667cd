// Cursor-line context analyzer

use std::sync::Arc;

use ordersheet_commands::telemetry::default_telemetry;
use ordersheet_commands::{
    BoundedCache, CacheStats, CommandCatalog, ContextKind, OverlayContext, Telemetry,
    TelemetryEvent,
};
use ordersheet_config::AnalyzerSettings;
use tracing::trace;

use super::utils::{
    clamp_cursor, first_token, is_comment, is_prefix_candidate, line_number_at, locate_line,
    LineSpan,
};
use crate::error::AnalyzerResult;

/// Classification of a trimmed line, independent of the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineClass {
    Blank,
    Comment,
    Command(String),
    Partial { prefix: String, matches: Vec<String> },
    Other,
}

impl LineClass {
    fn into_kind(self) -> ContextKind {
        match self {
            LineClass::Command(command_name) => ContextKind::SpecificCommand { command_name },
            LineClass::Partial { prefix, matches } => {
                ContextKind::PartialCommands { prefix, matches }
            }
            LineClass::Blank | LineClass::Comment | LineClass::Other => ContextKind::AllCommands,
        }
    }
}

/// Resolves the overlay context for a buffer and cursor
///
/// The result depends only on the cursor line and the catalogue contents;
/// caches change latency, never answers. Caches are dropped automatically
/// when the catalogue revision changes.
pub struct ContextAnalyzer {
    catalog: Arc<dyn CommandCatalog>,
    settings: AnalyzerSettings,
    telemetry: Arc<dyn Telemetry>,
    line_cache: BoundedCache<(String, usize), LineClass>,
    command_cache: BoundedCache<String, Option<String>>,
    catalog_revision: u64,
}

impl ContextAnalyzer {
    /// Create an analyzer with default settings
    pub fn new(catalog: Arc<dyn CommandCatalog>) -> Self {
        Self::with_settings(catalog, AnalyzerSettings::default())
    }

    pub fn with_settings(catalog: Arc<dyn CommandCatalog>, settings: AnalyzerSettings) -> Self {
        let catalog_revision = catalog.revision();
        Self {
            line_cache: BoundedCache::new(settings.line_cache_capacity),
            command_cache: BoundedCache::new(settings.command_cache_capacity),
            catalog,
            settings,
            telemetry: default_telemetry(),
            catalog_revision,
        }
    }

    /// Report failures to `telemetry` instead of the default `tracing` sink
    pub fn with_telemetry(mut self, telemetry: Arc<dyn Telemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Resolve the context for `text` with the cursor at byte offset `cursor`
    ///
    /// Out-of-range cursors are clamped to the end of the buffer. Catalogue
    /// failures degrade to `AllCommands`. The line number is found by counting
    /// separators before the cursor line; hosts that track the cursor row
    /// should call [`analyze_context_on_line`](Self::analyze_context_on_line).
    pub fn analyze_context(&mut self, text: &str, cursor: usize) -> OverlayContext {
        let cursor = clamp_cursor(text, cursor);
        let span = locate_line(text, cursor);
        let line_number = line_number_at(text, span.start);
        self.resolve(text, cursor, span, line_number)
    }

    /// Like [`analyze_context`](Self::analyze_context) with a host-supplied
    /// zero-based line number
    ///
    /// Only the cursor line is scanned. `line_number` is reported as given and
    /// keys the classification cache.
    pub fn analyze_context_on_line(
        &mut self,
        text: &str,
        cursor: usize,
        line_number: usize,
    ) -> OverlayContext {
        let cursor = clamp_cursor(text, cursor);
        let span = locate_line(text, cursor);
        self.resolve(text, cursor, span, line_number)
    }

    fn resolve(
        &mut self,
        text: &str,
        cursor: usize,
        span: LineSpan,
        line_number: usize,
    ) -> OverlayContext {
        let line = span.content(text);

        let kind = match self.classify_line(line, line_number) {
            Ok(class) => class.into_kind(),
            Err(e) => {
                self.telemetry.record(&TelemetryEvent::AnalyzerFailure {
                    reason: e.to_string(),
                });
                ContextKind::AllCommands
            }
        };

        trace!(
            line = line_number,
            cursor,
            scanned = span.scanned,
            ?kind,
            "Analyzed overlay context"
        );
        OverlayContext::new(kind, line, cursor, line_number)
    }

    /// Drop both caches
    pub fn clear_cache(&mut self) {
        self.line_cache.clear();
        self.command_cache.clear();
    }

    pub fn line_cache_len(&self) -> usize {
        self.line_cache.len()
    }

    pub fn command_cache_len(&self) -> usize {
        self.command_cache.len()
    }

    pub fn line_cache_stats(&self) -> CacheStats {
        self.line_cache.stats()
    }

    pub fn command_cache_stats(&self) -> CacheStats {
        self.command_cache.stats()
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    fn sync_revision(&mut self) {
        let revision = self.catalog.revision();
        if revision != self.catalog_revision {
            self.clear_cache();
            self.catalog_revision = revision;
        }
    }

    fn classify_line(&mut self, line: &str, line_number: usize) -> AnalyzerResult<LineClass> {
        self.sync_revision();
        let trimmed = line.trim();

        if !self.settings.caching_enabled {
            return self.classify(trimmed);
        }

        let key = (trimmed.to_string(), line_number);
        if let Some(class) = self.line_cache.get(&key) {
            return Ok(class.clone());
        }

        let class = self.classify(trimmed)?;
        self.line_cache.insert(key, class.clone());
        Ok(class)
    }

    fn classify(&mut self, trimmed: &str) -> AnalyzerResult<LineClass> {
        if trimmed.is_empty() {
            return Ok(LineClass::Blank);
        }
        if is_comment(trimmed) {
            return Ok(LineClass::Comment);
        }
        if let Some(name) = self.extract_command(trimmed)? {
            return Ok(LineClass::Command(name));
        }

        let token = first_token(trimmed);
        if !is_prefix_candidate(token) {
            return Ok(LineClass::Other);
        }

        let matches = self.catalog.names_with_prefix(token)?;
        if matches.is_empty() {
            return Ok(LineClass::Other);
        }

        Ok(LineClass::Partial {
            prefix: token.to_string(),
            matches,
        })
    }

    /// Canonical name of the command named by the line's first token
    fn extract_command(&mut self, trimmed: &str) -> AnalyzerResult<Option<String>> {
        if self.settings.caching_enabled {
            if let Some(name) = self.command_cache.get(trimmed) {
                return Ok(name.clone());
            }
        }

        let name = self
            .catalog
            .lookup(first_token(trimmed))?
            .map(|definition| definition.name);

        if self.settings.caching_enabled {
            self.command_cache.insert(trimmed.to_string(), name.clone());
        }
        Ok(name)
    }
}
