//! Font mapping for MarkText
//!
//! The picker offers the document font families by name. On screen they map
//! onto egui's built-in proportional and monospace families; exported
//! documents carry the family name itself.

use crate::config::EditorFont;
use egui::{FontFamily, FontId};

/// The egui family used to draw text in `font`.
pub fn font_family(font: EditorFont) -> FontFamily {
    if font.is_monospace() {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}

/// Font id for editor text.
pub fn editor_font_id(font: EditorFont, size: f32) -> FontId {
    FontId::new(size, font_family(font))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menlo_is_monospace() {
        assert_eq!(font_family(EditorFont::Menlo), FontFamily::Monospace);
    }

    #[test]
    fn test_other_fonts_are_proportional() {
        for font in EditorFont::all().iter().filter(|f| !f.is_monospace()) {
            assert_eq!(font_family(*font), FontFamily::Proportional);
        }
    }

    #[test]
    fn test_editor_font_id_size() {
        let id = editor_font_id(EditorFont::Georgia, 18.0);
        assert_eq!(id.size, 18.0);
    }
}
