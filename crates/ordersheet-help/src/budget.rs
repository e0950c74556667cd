//! Size checks and after-the-fact shrinking of overlay content

use ordersheet_commands::{OverlayContent, OverlayItem};
use ordersheet_config::ContentLimits;

/// Characters of rendered text in `content`
pub fn content_length(content: &OverlayContent) -> usize {
    content.char_len()
}

/// Whether `content` breaks the character budget or any section item cap
pub fn is_too_large(content: &OverlayContent, limits: &ContentLimits) -> bool {
    content_length(content) > limits.max_characters
        || content
            .sections
            .iter()
            .any(|section| section.items.len() > limits.max_items_per_section)
}

/// Cap every section at `max_items_per_section` items
///
/// Trimmed sections end with a notice counting what was dropped. The result
/// is always scrollable.
pub fn optimize(mut content: OverlayContent, limits: &ContentLimits) -> OverlayContent {
    let cap = limits.max_items_per_section;
    for section in &mut content.sections {
        if section.items.len() > cap {
            let dropped = section.items.len() - cap;
            section.items.truncate(cap);
            section.push(
                OverlayItem::description(format!("... {} more items not shown", dropped))
                    .indented(1),
            );
        }
    }
    content.scrollable = true;
    content
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}
