//! Markdown Formatting Insertion
//!
//! This module turns a toolbar or shortcut command into a text edit: the
//! selected span (or a placeholder when nothing is selected) is wrapped or
//! prefixed with the markdown syntax for the requested kind.
//!
//! # Usage
//! ```ignore
//! use crate::markdown::formatting::{apply_format, FormatKind};
//!
//! let result = apply_format("Hello world", 0, 5, FormatKind::Bold);
//! assert_eq!(result.text, "**Hello** world");
//! ```

use crate::string_utils::{char_index_to_byte_index, clamp_char_index};

/// Link target inserted by [`FormatKind::Link`].
pub const PLACEHOLDER_LINK_URL: &str = "https://example.com";

/// Image source inserted by [`FormatKind::Image`].
pub const PLACEHOLDER_IMAGE_URL: &str = "https://example.com/image.jpg";

// ─────────────────────────────────────────────────────────────────────────────
// Format Kind
// ─────────────────────────────────────────────────────────────────────────────

/// Markdown syntax that can be inserted around a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `# text`
    Heading1,
    /// `## text`
    Heading2,
    /// `- text`
    BulletList,
    /// `1. text`
    NumberedList,
    /// `[text](url)`
    Link,
    /// `![text](url)`
    Image,
    /// `` `text` ``
    Code,
    /// `> text`
    Quote,
}

impl FormatKind {
    /// Every kind, in toolbar order.
    pub const ALL: [FormatKind; 10] = [
        FormatKind::Bold,
        FormatKind::Italic,
        FormatKind::Heading1,
        FormatKind::Heading2,
        FormatKind::BulletList,
        FormatKind::NumberedList,
        FormatKind::Link,
        FormatKind::Image,
        FormatKind::Code,
        FormatKind::Quote,
    ];

    /// Kinds offered by the floating selection toolbar.
    pub const TOOLBAR: [FormatKind; 6] = [
        FormatKind::Bold,
        FormatKind::Italic,
        FormatKind::Heading1,
        FormatKind::Heading2,
        FormatKind::Link,
        FormatKind::Quote,
    ];

    /// Parse a command name such as `"bold"` or `"h1"`.
    #[allow(dead_code)]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "h1" => Some(Self::Heading1),
            "h2" => Some(Self::Heading2),
            "ul" => Some(Self::BulletList),
            "ol" => Some(Self::NumberedList),
            "link" => Some(Self::Link),
            "image" => Some(Self::Image),
            "code" => Some(Self::Code),
            "quote" => Some(Self::Quote),
            _ => None,
        }
    }

    /// Command name, the inverse of [`FormatKind::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading1 => "h1",
            Self::Heading2 => "h2",
            Self::BulletList => "ul",
            Self::NumberedList => "ol",
            Self::Link => "link",
            Self::Image => "image",
            Self::Code => "code",
            Self::Quote => "quote",
        }
    }

    /// Text inserted when the selection is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Bold => "bold text",
            Self::Italic => "italic text",
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::BulletList | Self::NumberedList => "List item",
            Self::Link => "Link text",
            Self::Image => "Image alt text",
            Self::Code => "code",
            Self::Quote => "Quote",
        }
    }

    /// Wrap `text` in this kind's markdown syntax.
    pub fn wrap(&self, text: &str) -> String {
        match self {
            Self::Bold => format!("**{}**", text),
            Self::Italic => format!("*{}*", text),
            Self::Heading1 => format!("# {}", text),
            Self::Heading2 => format!("## {}", text),
            Self::BulletList => format!("- {}", text),
            Self::NumberedList => format!("1. {}", text),
            Self::Link => format!("[{}]({})", text, PLACEHOLDER_LINK_URL),
            Self::Image => format!("![{}]({})", text, PLACEHOLDER_IMAGE_URL),
            Self::Code => format!("`{}`", text),
            Self::Quote => format!("> {}", text),
        }
    }

    /// Short label for toolbar buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Heading1 => "H1",
            Self::Heading2 => "H2",
            Self::BulletList => "\u{2022}", // bullet •
            Self::NumberedList => "1.",
            Self::Link => "🔗",
            Self::Image => "🖼",
            Self::Code => "</>",
            Self::Quote => "\u{275D}", // ❝
        }
    }

    /// Get the keyboard shortcut label for this kind.
    pub fn shortcut_label(&self) -> &'static str {
        match self {
            Self::Bold => "Ctrl+B",
            Self::Italic => "Ctrl+I",
            Self::Heading1 => "Ctrl+1",
            Self::Heading2 => "Ctrl+2",
            Self::BulletList => "Ctrl+Shift+8",
            Self::NumberedList => "Ctrl+Shift+7",
            Self::Link => "Ctrl+K",
            Self::Image => "Ctrl+Shift+K",
            Self::Code => "Ctrl+E",
            Self::Quote => "Ctrl+Q",
        }
    }

    /// Get the tooltip text for this kind.
    pub fn tooltip(&self) -> String {
        let name = match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::BulletList => "Bullet List",
            Self::NumberedList => "Numbered List",
            Self::Link => "Insert Link",
            Self::Image => "Insert Image",
            Self::Code => "Inline Code",
            Self::Quote => "Quote",
        };
        format!("{} ({})", name, self.shortcut_label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Format Result
// ─────────────────────────────────────────────────────────────────────────────

/// Result of applying a formatting command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    /// The new text after formatting
    pub text: String,
    /// Cursor position (character index) right after the inserted span
    pub cursor: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Insertion
// ─────────────────────────────────────────────────────────────────────────────

/// Replace the selected span with its formatted version.
///
/// # Arguments
/// * `text` - The full document text
/// * `start`, `end` - Selection range in character indices
/// * `kind` - The syntax to insert
///
/// A reversed range is swapped and offsets past the end clamp to the end, so
/// any pair of offsets produces a well-formed edit.
pub fn apply_format(text: &str, start: usize, end: usize, kind: FormatKind) -> FormatResult {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    let start_byte = char_index_to_byte_index(text, start);
    let end_byte = char_index_to_byte_index(text, end);

    let selected = &text[start_byte..end_byte];
    let inner = if selected.is_empty() {
        kind.placeholder()
    } else {
        selected
    };
    let formatted = kind.wrap(inner);

    let cursor = text[..start_byte].chars().count() + formatted.chars().count();
    let mut new_text = String::with_capacity(text.len() + formatted.len());
    new_text.push_str(&text[..start_byte]);
    new_text.push_str(&formatted);
    new_text.push_str(&text[end_byte..]);

    FormatResult {
        text: new_text,
        cursor,
    }
}

/// Apply a command given by name, leaving the text unchanged for unknown names.
#[allow(dead_code)]
pub fn apply_named_format(text: &str, start: usize, end: usize, name: &str) -> FormatResult {
    match FormatKind::from_name(name) {
        Some(kind) => apply_format(text, start, end, kind),
        None => FormatResult {
            text: text.to_string(),
            cursor: clamp_char_index(text, end),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_empty_selection_inserts_placeholder() {
        let result = apply_format("ab", 1, 1, FormatKind::Bold);
        assert_eq!(result.text, "a**bold text**b");
        assert_eq!(result.cursor, 1 + "**bold text**".len());
    }

    #[test]
    fn test_bold_wraps_selection() {
        let result = apply_format("Hello world", 0, 5, FormatKind::Bold);
        assert_eq!(result.text, "**Hello** world");
        assert_eq!(result.cursor, 9);
    }

    #[test]
    fn test_every_placeholder() {
        let expected = [
            (FormatKind::Bold, "**bold text**"),
            (FormatKind::Italic, "*italic text*"),
            (FormatKind::Heading1, "# Heading 1"),
            (FormatKind::Heading2, "## Heading 2"),
            (FormatKind::BulletList, "- List item"),
            (FormatKind::NumberedList, "1. List item"),
            (FormatKind::Link, "[Link text](https://example.com)"),
            (
                FormatKind::Image,
                "![Image alt text](https://example.com/image.jpg)",
            ),
            (FormatKind::Code, "`code`"),
            (FormatKind::Quote, "> Quote"),
        ];
        for (kind, text) in expected {
            assert_eq!(apply_format("", 0, 0, kind).text, text, "{:?}", kind);
        }
    }

    #[test]
    fn test_heading_prefixes_selection_in_place() {
        let result = apply_format("one two three", 4, 7, FormatKind::Heading1);
        assert_eq!(result.text, "one # two three");
    }

    #[test]
    fn test_link_uses_selection_as_label() {
        let result = apply_format("see docs", 4, 8, FormatKind::Link);
        assert_eq!(result.text, "see [docs](https://example.com)");
    }

    #[test]
    fn test_reversed_selection_is_swapped() {
        let forward = apply_format("Hello world", 6, 11, FormatKind::Italic);
        let reversed = apply_format("Hello world", 11, 6, FormatKind::Italic);
        assert_eq!(forward, reversed);
        assert_eq!(forward.text, "Hello *world*");
    }

    #[test]
    fn test_offsets_past_end_clamp() {
        let result = apply_format("abc", 10, 10, FormatKind::Code);
        assert_eq!(result.text, "abc`code`");
    }

    #[test]
    fn test_character_offsets_with_multibyte_text() {
        // 'å' and '你' are multi-byte; offsets count characters.
        let result = apply_format("på 你好", 3, 5, FormatKind::Bold);
        assert_eq!(result.text, "på **你好**");
        assert_eq!(result.cursor, 9);
    }

    #[test]
    fn test_from_name_round_trips() {
        for kind in FormatKind::ALL {
            assert_eq!(FormatKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(FormatKind::from_name("strike"), None);
    }

    #[test]
    fn test_unknown_name_leaves_text_unchanged() {
        let result = apply_named_format("abc", 0, 3, "strike");
        assert_eq!(result.text, "abc");
        assert_eq!(result.cursor, 3);
    }

    #[test]
    fn test_named_format_applies() {
        let result = apply_named_format("x", 1, 1, "quote");
        assert_eq!(result.text, "x> Quote");
    }

    #[test]
    fn test_toolbar_kinds() {
        assert_eq!(FormatKind::TOOLBAR.len(), 6);
        assert!(FormatKind::TOOLBAR.contains(&FormatKind::Quote));
        assert!(!FormatKind::TOOLBAR.contains(&FormatKind::Image));
    }

    #[test]
    fn test_tooltip_includes_shortcut() {
        assert_eq!(FormatKind::Bold.tooltip(), "Bold (Ctrl+B)");
    }
}
