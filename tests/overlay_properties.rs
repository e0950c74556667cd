//! Property-based tests for the overlay pipeline
//!
//! For any buffer and cursor, the overlay shown depends only on that input:
//! caches, cache clearing and repeated calls never change the content.

use ordersheet_commands::{CommandRegistry, ContentKind, OverlayContent};
use ordersheet_completion::ContextAnalyzer;
use ordersheet_config::{AnalyzerSettings, ContentLimits};
use ordersheet_help::ContentGenerator;
use proptest::prelude::*;
use std::sync::Arc;

/// Strategy for order-sheet-like lines
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("# turn 12 orders".to_string()),
        Just("// scratch".to_string()),
        Just("BUILD Homeworld 5 Destroyer".to_string()),
        Just("move Vigilant 10,4".to_string()),
        Just("BU".to_string()),
        Just("lo".to_string()),
        Just("LOAD Hauler ORE".to_string()),
        Just("XYZZY".to_string()),
        "[A-Za-z]{1,6}",
        "[ -~]{0,20}",
    ]
}

fn buffer_strategy() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(line_strategy(), 0..6).prop_flat_map(|lines| {
        let text = lines.join("\n");
        let len = text.len();
        (Just(text), 0..=len + 4)
    })
}

fn pipeline(cached: bool) -> (ContextAnalyzer, ContentGenerator) {
    let registry = Arc::new(CommandRegistry::new());
    let (settings, limits) = if cached {
        (AnalyzerSettings::default(), ContentLimits::default())
    } else {
        (AnalyzerSettings::uncached(), ContentLimits::uncached())
    };
    (
        ContextAnalyzer::with_settings(registry.clone(), settings),
        ContentGenerator::with_limits(registry, limits),
    )
}

fn show(
    analyzer: &mut ContextAnalyzer,
    generator: &mut ContentGenerator,
    text: &str,
    cursor: usize,
) -> OverlayContent {
    let context = analyzer.analyze_context(text, cursor);
    generator.generate_for_context(&context)
}

proptest! {
    #[test]
    fn prop_overlay_is_deterministic((text, cursor) in buffer_strategy()) {
        let (mut analyzer, mut generator) = pipeline(true);
        let (mut plain_analyzer, mut plain_generator) = pipeline(false);

        let first = show(&mut analyzer, &mut generator, &text, cursor);
        let repeat = show(&mut analyzer, &mut generator, &text, cursor);
        analyzer.clear_cache();
        generator.clear_cache();
        let cleared = show(&mut analyzer, &mut generator, &text, cursor);
        let uncached = show(&mut plain_analyzer, &mut plain_generator, &text, cursor);

        prop_assert_eq!(&first, &repeat);
        prop_assert_eq!(&first, &cleared);
        prop_assert_eq!(&first, &uncached);
    }

    #[test]
    fn prop_overlay_is_never_an_error((text, cursor) in buffer_strategy()) {
        let (mut analyzer, mut generator) = pipeline(true);
        let content = show(&mut analyzer, &mut generator, &text, cursor);

        prop_assert!(matches!(
            content.kind,
            ContentKind::AllCommands | ContentKind::SpecificCommand | ContentKind::PartialCommands
        ));
        prop_assert!(!content.title.is_empty());
        prop_assert!(!content.sections.is_empty());
    }

    #[test]
    fn prop_caches_stay_bounded(
        buffers in prop::collection::vec(buffer_strategy(), 1..40),
    ) {
        let registry = Arc::new(CommandRegistry::new());
        let settings = AnalyzerSettings {
            caching_enabled: true,
            line_cache_capacity: 5,
            command_cache_capacity: 3,
        };
        let limits = ContentLimits {
            content_cache_capacity: 4,
            ..ContentLimits::default()
        };
        let mut analyzer = ContextAnalyzer::with_settings(registry.clone(), settings);
        let mut generator = ContentGenerator::with_limits(registry, limits);

        for (text, cursor) in buffers {
            show(&mut analyzer, &mut generator, &text, cursor);
            prop_assert!(analyzer.line_cache_len() <= 5);
            prop_assert!(analyzer.command_cache_len() <= 3);
            prop_assert!(generator.cache_len() <= 4);
        }
    }
}
