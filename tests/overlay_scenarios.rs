//! End-to-end overlay scenarios
//!
//! Buffer and cursor go through the context analyzer, the resulting context
//! through the content generator, sharing one command registry.

use ordersheet_commands::{
    CatalogLoader, CommandRegistry, ContentKind, ItemKind, OverlayContent,
};
use ordersheet_completion::ContextAnalyzer;
use ordersheet_config::{ConfigManager, ConfigManagerTrait};
use ordersheet_help::ContentGenerator;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

struct Overlay {
    registry: Arc<CommandRegistry>,
    analyzer: ContextAnalyzer,
    generator: ContentGenerator,
}

impl Overlay {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let registry = Arc::new(CommandRegistry::new());
        Self {
            analyzer: ContextAnalyzer::new(registry.clone()),
            generator: ContentGenerator::new(registry.clone()),
            registry,
        }
    }

    fn show(&mut self, text: &str, cursor: usize) -> OverlayContent {
        let context = self.analyzer.analyze_context(text, cursor);
        self.generator.generate_for_context(&context)
    }
}

#[test]
fn test_empty_buffer_shows_all_commands() {
    let mut overlay = Overlay::new();
    let context = overlay.analyzer.analyze_context("", 0);
    assert!(context.is_all_commands());

    let content = overlay.show("", 0);
    assert_eq!(content.kind, ContentKind::AllCommands);
    assert_eq!(content.sections[0].title.as_deref(), Some("Combat"));
}

#[test]
fn test_build_line_shows_build_help() {
    let mut overlay = Overlay::new();
    let text = "BUILD Homeworld 5 Destroyer";

    let context = overlay.analyzer.analyze_context(text, 10);
    assert_eq!(context.command_name(), Some("BUILD"));

    let content = overlay.generator.generate_command_content("BUILD");
    assert_eq!(content.sections[0].title.as_deref(), Some("Syntax"));
    assert!(content.sections[0].items[0].text.contains("BUILD"));
    assert_eq!(overlay.show(text, 10), content);
}

#[test]
fn test_prefix_shows_sorted_matches() {
    let mut overlay = Overlay::new();

    let context = overlay.analyzer.analyze_context("BU", 2);
    let (prefix, matches) = context.partial().unwrap();
    assert_eq!(prefix, "BU");
    assert_eq!(matches[0], "BUILD");
    assert!(matches.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!matches.iter().any(|name| name == "BU"));

    let content = overlay.show("BU", 2);
    assert_eq!(content.kind, ContentKind::PartialCommands);
    let listed = content
        .sections
        .iter()
        .flat_map(|s| &s.items)
        .filter(|item| item.kind == ItemKind::Command)
        .count();
    assert_eq!(listed, matches.len());
}

#[test]
fn test_cursor_on_comment_line_shows_all_commands() {
    let mut overlay = Overlay::new();
    let text = "# comment\nBUILD x";

    assert!(overlay.analyzer.analyze_context(text, 3).is_all_commands());
    assert_eq!(overlay.show(text, 3).kind, ContentKind::AllCommands);

    // same buffer, cursor moved onto the order line
    let content = overlay.show(text, text.len());
    assert_eq!(content.kind, ContentKind::SpecificCommand);
}

#[test]
fn test_unknown_command_falls_back_to_all_commands() {
    let mut overlay = Overlay::new();
    assert!(overlay.registry.get("nonexistent").is_none());

    let content = overlay.generator.generate_command_content("nonexistent");
    assert_eq!(content.kind.as_str(), "all-commands");
}

#[test]
fn test_single_match_prefix_shows_command_help() {
    let mut overlay = Overlay::new();
    let content = overlay.show("BUILDP", 6);

    assert_eq!(content.kind, ContentKind::SpecificCommand);
    assert_eq!(content.title, "BUILDPORTAL (Construction)");
}

#[test]
fn test_recovered_registry_keeps_serving_help() {
    let mut overlay = Overlay::new();
    let before = overlay.show("MOVE Vigilant 10,4", 2);

    assert!(overlay.registry.attempt_recovery());
    let after = overlay.show("MOVE Vigilant 10,4", 2);
    assert_eq!(before, after);
}

#[test]
fn test_services_built_from_loaded_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overlay.toml");
    fs::write(
        &path,
        "[analyzer]\ncaching_enabled = false\n\n[content]\nmax_commands = 4\n",
    )
    .unwrap();

    let mut manager = ConfigManager::with_path(path).with_env_prefix("ORDERSHEET_SCENARIO_TEST");
    let config = manager.load_config().unwrap();
    assert!(!config.analyzer.caching_enabled);

    let registry = Arc::new(CommandRegistry::new());
    let mut analyzer = ContextAnalyzer::with_settings(registry.clone(), config.analyzer);
    let mut generator = ContentGenerator::with_limits(registry.clone(), config.content);

    let context = analyzer.analyze_context("", 0);
    let content = generator.generate_for_context(&context);
    assert_eq!(
        content.title,
        format!("Order Commands (4 of {})", registry.len())
    );
    assert_eq!(analyzer.line_cache_len(), 0);
}

#[test]
fn test_overlay_over_catalogue_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variant.yaml");
    fs::write(
        &path,
        r#"commands:
  - name: scan
    syntax: SCAN <ship>
    description: Sweep nearby hexes
    category: movement
  - name: SCANALL
    syntax: SCANALL
    category: movement
"#,
    )
    .unwrap();

    let registry = Arc::new(CatalogLoader::load_from_file(&path).unwrap());
    assert!(registry.is_healthy());
    let mut analyzer = ContextAnalyzer::new(registry.clone());
    let mut generator = ContentGenerator::new(registry.clone());

    let context = analyzer.analyze_context("sc", 2);
    assert_eq!(
        context.partial().map(|(_, matches)| matches.to_vec()),
        Some(vec!["SCAN".to_string(), "SCANALL".to_string()])
    );
    let content = generator.generate_for_context(&context);
    assert_eq!(content.title, "Commands starting with \"SC\" (2)");

    let context = analyzer.analyze_context("scan Vigilant", 3);
    let content = generator.generate_for_context(&context);
    assert_eq!(content.title, "SCAN (Movement)");

    assert!(registry.get("BUILD").is_none());
}
