use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use ordersheet_commands::{
    CommandCatalog, CommandCategory, CommandDefinition, CommandError, CommandRegistry,
    ContextKind, Result, Telemetry, TelemetryEvent,
};
use ordersheet_completion::ContextAnalyzer;

/// Catalogue whose every query fails
struct UnavailableCatalog;

impl CommandCatalog for UnavailableCatalog {
    fn lookup(&self, _name: &str) -> Result<Option<CommandDefinition>> {
        Err(CommandError::CatalogUnavailable("offline".to_string()))
    }

    fn command_names(&self) -> Result<Vec<String>> {
        Err(CommandError::CatalogUnavailable("offline".to_string()))
    }

    fn by_category(&self) -> Result<BTreeMap<CommandCategory, Vec<CommandDefinition>>> {
        Err(CommandError::CatalogUnavailable("offline".to_string()))
    }

    fn command_count(&self) -> Result<usize> {
        Err(CommandError::CatalogUnavailable("offline".to_string()))
    }

    fn is_healthy(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct RecordingTelemetry {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl Telemetry for RecordingTelemetry {
    fn record(&self, event: &TelemetryEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn registry_analyzer() -> ContextAnalyzer {
    ContextAnalyzer::new(Arc::new(CommandRegistry::new()))
}

#[test]
fn test_catalog_failure_degrades_to_all_commands() {
    let telemetry = Arc::new(RecordingTelemetry::default());
    let mut analyzer =
        ContextAnalyzer::new(Arc::new(UnavailableCatalog)).with_telemetry(telemetry.clone());

    let ctx = analyzer.analyze_context("BUILD Homeworld", 3);
    assert_eq!(ctx.kind, ContextKind::AllCommands);
    assert_eq!(ctx.line_content, "BUILD Homeworld");

    let events = telemetry.events.lock().unwrap();
    assert!(matches!(
        events.as_slice(),
        [TelemetryEvent::AnalyzerFailure { .. }]
    ));
}

#[test]
fn test_blank_and_comment_lines_never_query_catalog() {
    let mut analyzer = ContextAnalyzer::new(Arc::new(UnavailableCatalog));
    let telemetry = Arc::new(RecordingTelemetry::default());
    analyzer = analyzer.with_telemetry(telemetry.clone());

    assert!(analyzer.analyze_context("   ", 1).is_all_commands());
    assert!(analyzer.analyze_context("// plan", 1).is_all_commands());
    assert!(telemetry.events.lock().unwrap().is_empty());
}

#[test]
fn test_multiline_order_sheet() {
    let sheet = "# Turn 12 orders\nBUILD Homeworld 5 Destroyer\n\nmo\nFIRE Vigilant Marauder\n";
    let mut analyzer = registry_analyzer();

    let offset_of = |needle: &str| sheet.find(needle).unwrap();

    let ctx = analyzer.analyze_context(sheet, 4);
    assert!(ctx.is_all_commands());
    assert_eq!(ctx.line_number, 0);

    let ctx = analyzer.analyze_context(sheet, offset_of("Homeworld"));
    assert_eq!(ctx.command_name(), Some("BUILD"));
    assert_eq!(ctx.line_number, 1);

    let blank = offset_of("\n\n") + 1;
    let ctx = analyzer.analyze_context(sheet, blank);
    assert!(ctx.is_all_commands());
    assert_eq!(ctx.line_number, 2);

    let ctx = analyzer.analyze_context(sheet, offset_of("mo\n") + 2);
    assert_eq!(
        ctx.kind,
        ContextKind::PartialCommands {
            prefix: "mo".to_string(),
            matches: vec!["MOVE".to_string()],
        }
    );

    let ctx = analyzer.analyze_context(sheet, offset_of("Marauder"));
    assert_eq!(ctx.command_name(), Some("FIRE"));
    assert_eq!(ctx.line_number, 4);

    let ctx = analyzer.analyze_context(sheet, sheet.len());
    assert!(ctx.is_all_commands());
    assert_eq!(ctx.line_number, 5);
}

#[test]
fn test_same_line_on_different_line_numbers() {
    let mut analyzer = registry_analyzer();
    let text = "MOVE a 1,1\nMOVE a 1,1";
    let first = analyzer.analyze_context(text, 2);
    let second = analyzer.analyze_context(text, 13);

    assert_eq!(first.kind, second.kind);
    assert_eq!(first.line_number, 0);
    assert_eq!(second.line_number, 1);
    assert_eq!(analyzer.line_cache_len(), 2);
    assert_eq!(analyzer.command_cache_len(), 1);
}

#[test]
fn test_custom_catalog_prefix_of_another_name() {
    let registry = CommandRegistry::from_definitions(vec![
        CommandDefinition::new("SCAN", CommandCategory::Movement, "SCAN <ship>"),
        CommandDefinition::new("SCANALL", CommandCategory::Movement, "SCANALL"),
    ]);
    let mut analyzer = ContextAnalyzer::new(Arc::new(registry));

    assert_eq!(analyzer.analyze_context("scan", 4).command_name(), Some("SCAN"));
    let ctx = analyzer.analyze_context("sca", 3);
    let (_, matches) = ctx.partial().unwrap();
    assert_eq!(matches, ["SCAN", "SCANALL"]);
}
