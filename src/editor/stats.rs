//! Text statistics for the editor
//!
//! This module provides word and character counts for display in the
//! footer, recomputed from the document text whenever it is needed.

// ─────────────────────────────────────────────────────────────────────────────
// TextStats
// ─────────────────────────────────────────────────────────────────────────────

/// Text statistics for a document.
///
/// # Example
///
/// ```ignore
/// let stats = TextStats::from_text("Hello, World!");
/// assert_eq!(stats.words, 2);
/// assert_eq!(stats.characters, 13);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of words (sequences of non-whitespace characters)
    pub words: usize,
    /// Number of characters including whitespace
    pub characters: usize,
}

impl TextStats {
    /// Calculate statistics from the given text in a single pass.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::default();
        let mut in_word = false;

        for ch in text.chars() {
            stats.characters += 1;

            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                stats.words += 1;
            }
        }

        stats
    }

    /// Footer label for the word count, e.g. "150 words".
    pub fn words_label(&self) -> String {
        format!("{} words", self.words)
    }

    /// Footer label for the character count, e.g. "892 characters".
    pub fn characters_label(&self) -> String {
        format!("{} characters", self.characters)
    }
}

/// Number of whitespace-separated words in `text`.
#[allow(dead_code)]
pub fn word_count(text: &str) -> usize {
    TextStats::from_text(text).words
}

/// Number of characters in `text`, whitespace included.
#[allow(dead_code)]
pub fn char_count(text: &str) -> usize {
    TextStats::from_text(text).characters
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
