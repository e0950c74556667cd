//! Hand-authored content for degraded and terminal states
//!
//! None of these touch a catalogue, so they are safe to serve when the
//! catalogue itself is the problem.

use ordersheet_commands::builtin::fallback_definitions;
use ordersheet_commands::{ContentKind, OverlayContent, OverlayItem, OverlaySection};

/// Suffix marking content served without a healthy catalogue
pub const LIMITED_SUFFIX: &str = "(Limited)";

/// Small core command list shown while the catalogue is unhealthy
pub fn limited_content() -> OverlayContent {
    let core = OverlaySection::new("Core Commands").with_items(
        fallback_definitions().into_iter().flat_map(|def| {
            [
                OverlayItem::command(format!("{} - {}", def.name, def.description)),
                OverlayItem::syntax(def.syntax).indented(1),
            ]
        }),
    );

    OverlayContent::new(
        ContentKind::AllCommands,
        format!("Order Commands {}", LIMITED_SUFFIX),
    )
    .with_section(core)
    .with_section(OverlaySection::untitled().with_item(OverlayItem::description(
        "Full command help is temporarily unavailable. Core commands are listed above.",
    )))
}

/// Panel describing a generation failure
pub fn error_content(message: &str) -> OverlayContent {
    let message = message.trim();
    let message = if message.is_empty() {
        "An unknown error occurred while preparing help."
    } else {
        message
    };

    OverlayContent::new(ContentKind::Error, "Help Unavailable").with_section(
        OverlaySection::untitled()
            .with_item(OverlayItem::description(message).highlighted())
            .with_item(OverlayItem::description(
                "Orders can still be typed; help returns once the command list recovers.",
            )),
    )
}

/// Content with nothing to show
pub fn empty_content() -> OverlayContent {
    OverlayContent::new(ContentKind::Empty, "")
}
