//! Overlay content generation

use std::collections::BTreeMap;
use std::sync::Arc;

use ordersheet_commands::telemetry::default_telemetry;
use ordersheet_commands::{
    BoundedCache, CommandCatalog, CommandCategory, CommandDefinition, ContentKind, ContextKind,
    OverlayContent, OverlayContext, OverlayItem, OverlaySection, ParameterDefinition, Telemetry,
    TelemetryEvent,
};
use ordersheet_config::ContentLimits;
use tracing::{debug, trace};

use crate::budget::{self, truncate_text};
use crate::error::Result;
use crate::fallback;
use crate::metrics::PerformanceMetrics;

const NO_DESCRIPTION: &str = "No description available.";
const PARTIAL_TIP: &str =
    "Keep typing to narrow the list, or finish a command name to see its parameters.";

/// Cache key for a generation request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ContentRequest {
    AllCommands,
    Command(String),
    Partial { prefix: String, matches: Vec<String> },
}

#[derive(Debug, Default)]
struct Counters {
    generations: u64,
    degraded: u64,
    failures: u64,
    truncations: u64,
}

/// Builds [`OverlayContent`] trees from a command catalogue
///
/// Every `generate_*` method returns well-formed content. An unhealthy
/// catalogue yields the limited fallback set and a failing one yields an
/// error panel. Generated content is cached per request; the cache is
/// dropped automatically when the catalogue revision changes.
pub struct ContentGenerator {
    catalog: Arc<dyn CommandCatalog>,
    limits: ContentLimits,
    telemetry: Arc<dyn Telemetry>,
    cache: BoundedCache<ContentRequest, OverlayContent>,
    counters: Counters,
    catalog_revision: u64,
}

impl ContentGenerator {
    /// Create a generator with default limits
    pub fn new(catalog: Arc<dyn CommandCatalog>) -> Self {
        Self::with_limits(catalog, ContentLimits::default())
    }

    pub fn with_limits(catalog: Arc<dyn CommandCatalog>, limits: ContentLimits) -> Self {
        let catalog_revision = catalog.revision();
        Self {
            cache: BoundedCache::new(limits.content_cache_capacity),
            catalog,
            limits,
            telemetry: default_telemetry(),
            counters: Counters::default(),
            catalog_revision,
        }
    }

    /// Report degraded and failed generations to `telemetry`
    pub fn with_telemetry(mut self, telemetry: Arc<dyn Telemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn limits(&self) -> &ContentLimits {
        &self.limits
    }

    /// Content for an analyzed context; `Hidden` yields empty content
    pub fn generate_for_context(&mut self, context: &OverlayContext) -> OverlayContent {
        match &context.kind {
            ContextKind::AllCommands => self.generate_all_commands_content(),
            ContextKind::SpecificCommand { command_name } => {
                self.generate_command_content(command_name)
            }
            ContextKind::PartialCommands { prefix, matches } => {
                self.generate_partial_commands_content(prefix, matches)
            }
            ContextKind::Hidden => self.generate_empty_content(),
        }
    }

    /// The whole catalogue grouped by category, held to the content limits
    pub fn generate_all_commands_content(&mut self) -> OverlayContent {
        self.generate(ContentRequest::AllCommands)
    }

    /// Detailed help for one command
    ///
    /// Names are matched case-insensitively. An unknown name yields the same
    /// content as [`generate_all_commands_content`](Self::generate_all_commands_content).
    pub fn generate_command_content(&mut self, name: &str) -> OverlayContent {
        self.generate(ContentRequest::Command(name.trim().to_uppercase()))
    }

    /// The commands sharing a typed prefix
    ///
    /// A single match yields that command's detailed help.
    pub fn generate_partial_commands_content(
        &mut self,
        prefix: &str,
        matches: &[String],
    ) -> OverlayContent {
        let mut matches: Vec<String> = matches
            .iter()
            .map(|name| name.trim().to_uppercase())
            .filter(|name| !name.is_empty())
            .collect();
        matches.sort();
        matches.dedup();

        self.generate(ContentRequest::Partial {
            prefix: prefix.trim().to_string(),
            matches,
        })
    }

    pub fn generate_error_content(&self, message: &str) -> OverlayContent {
        fallback::error_content(message)
    }

    pub fn generate_empty_content(&self) -> OverlayContent {
        fallback::empty_content()
    }

    /// Whether `content` exceeds the character budget or the per-section item cap
    pub fn is_content_too_large(&self, content: &OverlayContent) -> bool {
        budget::is_too_large(content, &self.limits)
    }

    /// Shrink `content` to the per-section item cap and make it scrollable
    pub fn optimize_content(&self, content: OverlayContent) -> OverlayContent {
        budget::optimize(content, &self.limits)
    }

    pub fn content_length(&self, content: &OverlayContent) -> usize {
        budget::content_length(content)
    }

    pub fn performance_metrics(&self) -> PerformanceMetrics {
        let stats = self.cache.stats();
        PerformanceMetrics {
            generations: self.counters.generations,
            cache_hits: stats.hits,
            cache_misses: stats.misses,
            degraded_generations: self.counters.degraded,
            failed_generations: self.counters.failures,
            truncations: self.counters.truncations,
            cache_entries: self.cache.len(),
            cache_capacity: self.cache.capacity(),
            caching_enabled: self.limits.caching_enabled,
            max_commands: self.limits.max_commands,
            max_characters: self.limits.max_characters,
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn sync_revision(&mut self) {
        let revision = self.catalog.revision();
        if revision != self.catalog_revision {
            debug!(
                old = self.catalog_revision,
                new = revision,
                "Catalogue reloaded, dropping content cache"
            );
            self.cache.clear();
            self.catalog_revision = revision;
        }
    }

    fn generate(&mut self, request: ContentRequest) -> OverlayContent {
        self.sync_revision();
        self.counters.generations += 1;

        if !self.catalog.is_healthy() {
            self.counters.degraded += 1;
            self.telemetry.record(&TelemetryEvent::ContentDegraded {
                reason: "command catalogue is unhealthy".to_string(),
            });
            return fallback::limited_content();
        }

        if self.limits.caching_enabled {
            if let Some(content) = self.cache.get(&request) {
                trace!(?request, "Content cache hit");
                return content.clone();
            }
        }

        match self.render(&request) {
            Ok(content) => {
                if self.limits.caching_enabled {
                    self.cache.insert(request, content.clone());
                }
                content
            }
            Err(e) => {
                self.counters.failures += 1;
                self.telemetry.record(&TelemetryEvent::GenerationFailure {
                    reason: e.to_string(),
                });
                fallback::error_content(&e.to_string())
            }
        }
    }

    fn render(&mut self, request: &ContentRequest) -> Result<OverlayContent> {
        match request {
            ContentRequest::AllCommands => self.render_all_commands(),
            ContentRequest::Command(name) => self.render_command(name),
            ContentRequest::Partial { prefix, matches } => self.render_partial(prefix, matches),
        }
    }

    fn render_all_commands(&mut self) -> Result<OverlayContent> {
        let grouped = self.catalog.by_category()?;
        let total: usize = grouped.values().map(Vec::len).sum();
        let max_commands = self.limits.max_commands;
        let max_characters = self.limits.max_characters;
        let per_category = self.limits.max_commands_per_category;

        let mut sections = Vec::new();
        let mut rendered = 0;
        let mut chars = 0;
        let mut truncated = false;

        for category in CommandCategory::ALL {
            let commands = match grouped.get(&category) {
                Some(commands) if !commands.is_empty() => commands,
                _ => continue,
            };

            let title = category.display_name();
            let mut section = OverlaySection::new(title).collapsible(true);
            let mut section_chars = title.chars().count();
            let mut shown = 0;

            for definition in commands.iter().take(per_category) {
                let line = command_line(definition);
                let cost = line.chars().count() + definition.syntax.chars().count();
                let heading = if section.is_empty() { section_chars } else { 0 };

                if rendered >= max_commands || chars + heading + cost > max_characters {
                    truncated = true;
                    break;
                }

                section.push(OverlayItem::command(line));
                section.push(OverlayItem::syntax(definition.syntax.clone()).indented(1));
                chars += heading + cost;
                section_chars = 0;
                rendered += 1;
                shown += 1;
            }

            let remaining = commands.len() - shown;
            if !truncated && remaining > 0 {
                section.push(
                    OverlayItem::description(format!(
                        "... and {} more {} commands",
                        remaining,
                        category.as_str()
                    ))
                    .indented(1),
                );
            }

            if !section.is_empty() {
                sections.push(section);
            }
            if truncated {
                break;
            }
        }

        if truncated {
            self.counters.truncations += 1;
            self.telemetry
                .record(&TelemetryEvent::ContentTruncated { rendered, total });
            sections.push(OverlaySection::untitled().with_item(OverlayItem::description(
                format!(
                    "Showing {} of {} commands. Type a command name for its full help.",
                    rendered, total
                ),
            )));
        } else if total == 0 {
            sections.push(
                OverlaySection::untitled()
                    .with_item(OverlayItem::description("No commands are available.")),
            );
        }

        let mut content = OverlayContent::new(
            ContentKind::AllCommands,
            format!("Order Commands ({} of {})", rendered, total),
        )
        .with_scrollable(true);
        content.sections = sections;
        Ok(content)
    }

    fn render_command(&mut self, name: &str) -> Result<OverlayContent> {
        let definition = match self.catalog.lookup(name)? {
            Some(definition) => definition,
            None => {
                trace!(name, "Unknown command, showing all commands");
                return self.render_all_commands();
            }
        };
        Ok(self.command_content(&definition))
    }

    fn command_content(&self, definition: &CommandDefinition) -> OverlayContent {
        let limits = &self.limits;
        let mut content = OverlayContent::new(
            ContentKind::SpecificCommand,
            format!(
                "{} ({})",
                definition.name,
                definition.category.display_name()
            ),
        )
        .with_section(
            OverlaySection::new("Syntax")
                .with_item(OverlayItem::syntax(definition.syntax.clone()).highlighted()),
        );

        let description = if definition.description.trim().is_empty() {
            NO_DESCRIPTION
        } else {
            definition.description.as_str()
        };
        content = content.with_section(
            OverlaySection::new("Description").with_item(OverlayItem::description(description)),
        );

        if !definition.parameters.is_empty() {
            let mut parameters: Vec<&ParameterDefinition> = definition.parameters.iter().collect();
            parameters.sort_by_key(|parameter| !parameter.required);

            let mut section = OverlaySection::new("Parameters");
            for parameter in parameters {
                section.push(parameter_item(parameter, limits.max_parameter_description));
                if let Some(values) = &parameter.valid_values {
                    section.push(valid_values_item(values, limits.max_valid_values));
                }
                if let Some(format) = &parameter.format {
                    section.push(OverlayItem::description(format!("Format: {}", format)).indented(1));
                }
            }
            content = content.with_section(section);
        }

        if !definition.examples.is_empty() && content.char_len() < limits.max_characters {
            let mut section = OverlaySection::new("Examples").with_items(
                definition
                    .examples
                    .iter()
                    .take(limits.max_examples)
                    .map(|example| OverlayItem::example(example.clone())),
            );
            let remaining = definition.examples.len().saturating_sub(limits.max_examples);
            if remaining > 0 {
                section.push(
                    OverlayItem::description(format!("... and {} more examples", remaining))
                        .indented(1),
                );
            }
            content = content.with_section(section);
        }

        content.scrollable = content.sections.len() > 2
            || definition.parameters.len() > 3
            || definition.examples.len() > 2
            || content.char_len() > limits.scroll_threshold;
        content
    }

    fn render_partial(&mut self, prefix: &str, matches: &[String]) -> Result<OverlayContent> {
        if let [only] = matches {
            return self.render_command(only);
        }

        let mut grouped: BTreeMap<CommandCategory, Vec<CommandDefinition>> = BTreeMap::new();
        for name in matches {
            if let Some(definition) = self.catalog.lookup(name)? {
                grouped.entry(definition.category).or_default().push(definition);
            }
        }
        let found: usize = grouped.values().map(Vec::len).sum();

        let mut content = OverlayContent::new(
            ContentKind::PartialCommands,
            format!(
                "Commands starting with \"{}\" ({})",
                prefix.to_uppercase(),
                found
            ),
        )
        .with_scrollable(true);

        // BTreeMap iteration follows category priority order
        for (category, definitions) in &grouped {
            let mut section = OverlaySection::new(category.display_name());
            for definition in definitions {
                section.push(OverlayItem::command(emphasize_prefix(&definition.name, prefix)).highlighted());
                section.push(OverlayItem::syntax(definition.syntax.clone()).indented(1));
            }
            content = content.with_section(section);
        }

        if found == 0 {
            content = content.with_section(
                OverlaySection::new("No Matches").with_item(OverlayItem::description(format!(
                    "No commands start with \"{}\".",
                    prefix.to_uppercase()
                ))),
            );
        }

        Ok(content.with_section(
            OverlaySection::new("Tip").with_item(OverlayItem::description(PARTIAL_TIP)),
        ))
    }
}

/// `NAME - description`, or just the name when there is no description
fn command_line(definition: &CommandDefinition) -> String {
    if definition.description.trim().is_empty() {
        definition.name.clone()
    } else {
        format!("{} - {}", definition.name, definition.description)
    }
}

fn parameter_item(parameter: &ParameterDefinition, max_description: usize) -> OverlayItem {
    let requirement = if parameter.required {
        "required"
    } else {
        "optional"
    };
    let mut text = format!("{} ({}, {})", parameter.name, parameter.param_type, requirement);
    if !parameter.description.trim().is_empty() {
        text.push_str(": ");
        text.push_str(&truncate_text(&parameter.description, max_description));
    }

    let item = OverlayItem::parameter(text);
    if parameter.required {
        item.highlighted()
    } else {
        item
    }
}

fn valid_values_item(values: &[String], max_values: usize) -> OverlayItem {
    let shown = values
        .iter()
        .take(max_values)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let remaining = values.len().saturating_sub(max_values);

    let text = if remaining > 0 {
        format!("Valid values: {} (+{} more)", shown, remaining)
    } else {
        format!("Valid values: {}", shown)
    };
    OverlayItem::description(text).indented(1)
}

/// Upper-case the typed prefix of `name` and lower-case the rest
fn emphasize_prefix(name: &str, prefix: &str) -> String {
    let prefix_len = prefix.chars().count();
    if prefix_len == 0 || !name.starts_with(&prefix.to_uppercase()) {
        return name.to_string();
    }

    name.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let cased: Vec<char> = if i < prefix_len {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            cased
        })
        .collect()
}
