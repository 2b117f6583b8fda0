//! UTF-8 Safe Index Utilities
//!
//! egui reports cursor and selection positions as character indices, while
//! Rust strings slice by byte. These helpers convert between the two so that
//! slicing never lands inside a multi-byte character.
//!
//! # Example
//! ```ignore
//! use crate::string_utils::char_index_to_byte_index;
//!
//! let text = "Hei på deg"; // 'å' is 2 bytes
//! let byte = char_index_to_byte_index(text, 6); // 7
//! ```

/// Convert a character index to a byte index.
///
/// Returns the string length if `char_index` is beyond the string.
pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Count the characters of `s`, clamping `char_index` to that count.
pub fn clamp_char_index(s: &str, char_index: usize) -> usize {
    char_index.min(s.chars().count())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_byte_ascii() {
        assert_eq!(char_index_to_byte_index("hello", 0), 0);
        assert_eq!(char_index_to_byte_index("hello", 3), 3);
        assert_eq!(char_index_to_byte_index("hello", 5), 5);
    }

    #[test]
    fn test_char_to_byte_norwegian() {
        let s = "Hei på deg";
        assert_eq!(char_index_to_byte_index(s, 5), 5); // 'å'
        assert_eq!(char_index_to_byte_index(s, 6), 7); // ' ' after 'å'
    }

    #[test]
    fn test_char_to_byte_emoji() {
        let s = "a🎉b";
        assert_eq!(char_index_to_byte_index(s, 1), 1);
        assert_eq!(char_index_to_byte_index(s, 2), 5);
    }

    #[test]
    fn test_char_to_byte_beyond_end() {
        assert_eq!(char_index_to_byte_index("你好", 10), 6);
        assert_eq!(char_index_to_byte_index("", 3), 0);
    }

    #[test]
    fn test_clamp_char_index() {
        assert_eq!(clamp_char_index("你好", 1), 1);
        assert_eq!(clamp_char_index("你好", 9), 2);
    }
}
