//! Overlay data model shared by the context analyzer and content generator
//!
//! An [`OverlayContext`] says *what* help applies to the cursor line; an
//! [`OverlayContent`] is the renderable tree handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Which help applies to the current line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContextKind {
    /// No command yet: show the full catalogue
    AllCommands,
    /// The first token names a command exactly
    SpecificCommand { command_name: String },
    /// The first token is a prefix of one or more commands
    PartialCommands { prefix: String, matches: Vec<String> },
    /// The overlay should not be shown
    Hidden,
}

/// Result of analysing a text buffer at a cursor offset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayContext {
    #[serde(flatten)]
    pub kind: ContextKind,
    /// Raw content of the cursor line, without the line separator
    pub line_content: String,
    /// Clamped byte offset of the cursor in the buffer
    pub cursor_position: usize,
    /// Zero-based line index of the cursor line
    pub line_number: usize,
}

impl OverlayContext {
    pub fn new(
        kind: ContextKind,
        line_content: impl Into<String>,
        cursor_position: usize,
        line_number: usize,
    ) -> Self {
        Self {
            kind,
            line_content: line_content.into(),
            cursor_position,
            line_number,
        }
    }

    pub fn all_commands(
        line_content: impl Into<String>,
        cursor_position: usize,
        line_number: usize,
    ) -> Self {
        Self::new(
            ContextKind::AllCommands,
            line_content,
            cursor_position,
            line_number,
        )
    }

    pub fn hidden(cursor_position: usize) -> Self {
        Self::new(ContextKind::Hidden, String::new(), cursor_position, 0)
    }

    pub fn is_all_commands(&self) -> bool {
        matches!(self.kind, ContextKind::AllCommands)
    }

    /// Canonical command name, for `SpecificCommand` contexts
    pub fn command_name(&self) -> Option<&str> {
        match &self.kind {
            ContextKind::SpecificCommand { command_name } => Some(command_name),
            _ => None,
        }
    }

    /// Prefix and matches, for `PartialCommands` contexts
    pub fn partial(&self) -> Option<(&str, &[String])> {
        match &self.kind {
            ContextKind::PartialCommands { prefix, matches } => Some((prefix, matches)),
            _ => None,
        }
    }
}

/// Shape of a generated overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    AllCommands,
    SpecificCommand,
    PartialCommands,
    Error,
    Empty,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::AllCommands => "all-commands",
            ContentKind::SpecificCommand => "specific-command",
            ContentKind::PartialCommands => "partial-commands",
            ContentKind::Error => "error",
            ContentKind::Empty => "empty",
        }
    }
}

/// Role of a single overlay line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Command,
    Syntax,
    Parameter,
    Example,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayItem {
    pub kind: ItemKind,
    pub text: String,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub indent: u8,
}

impl OverlayItem {
    pub fn new(kind: ItemKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            highlight: false,
            indent: 0,
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Command, text)
    }

    pub fn syntax(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Syntax, text)
    }

    pub fn parameter(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Parameter, text)
    }

    pub fn example(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Example, text)
    }

    pub fn description(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Description, text)
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub fn indented(mut self, level: u8) -> Self {
        self.indent = level;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlaySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<OverlayItem>,
    #[serde(default)]
    pub collapsible: bool,
    #[serde(default = "default_expanded")]
    pub expanded: bool,
}

fn default_expanded() -> bool {
    true
}

impl OverlaySection {
    /// Create a titled section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            items: Vec::new(),
            collapsible: false,
            expanded: true,
        }
    }

    /// Create a section without a heading
    pub fn untitled() -> Self {
        Self {
            title: None,
            items: Vec::new(),
            collapsible: false,
            expanded: true,
        }
    }

    pub fn with_item(mut self, item: OverlayItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = OverlayItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn collapsible(mut self, expanded: bool) -> Self {
        self.collapsible = true;
        self.expanded = expanded;
        self
    }

    pub fn push(&mut self, item: OverlayItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Characters of rendered text in this section, heading included
    pub fn char_len(&self) -> usize {
        let title = self.title.as_deref().map_or(0, |t| t.chars().count());
        title
            + self
                .items
                .iter()
                .map(|item| item.text.chars().count())
                .sum::<usize>()
    }
}

/// Renderable help tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayContent {
    pub kind: ContentKind,
    pub title: String,
    pub sections: Vec<OverlaySection>,
    pub scrollable: bool,
}

impl OverlayContent {
    pub fn new(kind: ContentKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            sections: Vec::new(),
            scrollable: false,
        }
    }

    pub fn with_section(mut self, section: OverlaySection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn section(&self, title: &str) -> Option<&OverlaySection> {
        self.sections
            .iter()
            .find(|s| s.title.as_deref() == Some(title))
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Characters of rendered text across the whole tree
    pub fn char_len(&self) -> usize {
        self.title.chars().count() + self.sections.iter().map(OverlaySection::char_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_accessors() {
        let ctx = OverlayContext::new(
            ContextKind::SpecificCommand {
                command_name: "BUILD".to_string(),
            },
            "BUILD x",
            3,
            0,
        );
        assert_eq!(ctx.command_name(), Some("BUILD"));
        assert!(ctx.partial().is_none());
        assert!(!ctx.is_all_commands());
    }

    #[test]
    fn test_context_serializes_flat() {
        let ctx = OverlayContext::new(
            ContextKind::PartialCommands {
                prefix: "BU".to_string(),
                matches: vec!["BUILD".to_string(), "BUY".to_string()],
            },
            "BU",
            2,
            0,
        );
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["type"], "partial-commands");
        assert_eq!(json["prefix"], "BU");
        assert_eq!(json["line_number"], 0);
    }

    #[test]
    fn test_content_kind_strings_match_serde() {
        for kind in [
            ContentKind::AllCommands,
            ContentKind::SpecificCommand,
            ContentKind::PartialCommands,
            ContentKind::Error,
            ContentKind::Empty,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }

    #[test]
    fn test_char_len_counts_titles_and_items() {
        let content = OverlayContent::new(ContentKind::SpecificCommand, "MOVE")
            .with_section(
                OverlaySection::new("Syntax").with_item(OverlayItem::syntax("MOVE <ship>")),
            )
            .with_section(OverlaySection::untitled().with_item(OverlayItem::description("éé")));

        assert_eq!(content.char_len(), 4 + 6 + 11 + 2);
        assert_eq!(content.item_count(), 2);
        assert!(content.section("Syntax").is_some());
    }
}
