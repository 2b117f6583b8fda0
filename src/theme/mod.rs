//! Theme management for MarkText
//!
//! Light and dark visuals for the editor window, applied to the egui context
//! only when the dark-mode preference changes.
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = ThemeManager::new(settings.dark_mode);
//! manager.apply(&ctx);
//!
//! manager.toggle();
//! manager.apply_if_needed(&ctx);
//! ```

use eframe::egui::{Color32, Context, Visuals};
use log::{debug, info};

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// Page background in light mode (white)
const LIGHT_BACKGROUND: Color32 = Color32::WHITE;
/// Body text in light mode (gray-800)
const LIGHT_TEXT: Color32 = Color32::from_rgb(31, 41, 55);
/// Page background in dark mode (gray-900)
const DARK_BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
/// Body text in dark mode (gray-100)
const DARK_TEXT: Color32 = Color32::from_rgb(243, 244, 246);
/// Secondary text such as the word count (gray-500 / gray-400)
const LIGHT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
const DARK_MUTED: Color32 = Color32::from_rgb(156, 163, 175);

/// egui visuals for the light theme.
pub fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = LIGHT_BACKGROUND;
    visuals.window_fill = LIGHT_BACKGROUND;
    visuals.extreme_bg_color = LIGHT_BACKGROUND;
    visuals.override_text_color = Some(LIGHT_TEXT);
    visuals
}

/// egui visuals for the dark theme.
pub fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = DARK_BACKGROUND;
    visuals.window_fill = Color32::from_rgb(31, 41, 55);
    visuals.extreme_bg_color = DARK_BACKGROUND;
    visuals.override_text_color = Some(DARK_TEXT);
    visuals
}

/// Color for secondary text.
pub fn muted_text(is_dark: bool) -> Color32 {
    if is_dark {
        DARK_MUTED
    } else {
        LIGHT_MUTED
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Tracks the dark-mode preference and applies visuals when it changes.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    dark_mode: bool,
    needs_apply: bool,
}

impl ThemeManager {
    /// Create a new ThemeManager with the given initial mode.
    pub fn new(dark_mode: bool) -> Self {
        info!("ThemeManager initialized, dark mode: {}", dark_mode);
        Self {
            dark_mode,
            needs_apply: true,
        }
    }

    /// Whether dark mode is active.
    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Set the mode and mark for reapplication.
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        if self.dark_mode != dark_mode {
            info!("Dark mode changed to {}", dark_mode);
            self.dark_mode = dark_mode;
            self.needs_apply = true;
        }
    }

    /// Toggle between light and dark. Returns the new mode.
    pub fn toggle(&mut self) -> bool {
        self.set_dark_mode(!self.dark_mode);
        self.dark_mode
    }

    /// Visuals for the current mode.
    pub fn visuals(&self) -> Visuals {
        if self.dark_mode {
            dark_visuals()
        } else {
            light_visuals()
        }
    }

    /// Apply the current theme to the egui context.
    pub fn apply(&mut self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
        self.needs_apply = false;
        debug!("Applied theme, dark mode: {}", self.dark_mode);
    }

    /// Apply the theme only if the mode changed since the last apply.
    ///
    /// Returns `true` if the theme was applied.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if self.needs_apply {
            self.apply(ctx);
            true
        } else {
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_match_mode() {
        assert!(dark_visuals().dark_mode);
        assert!(!light_visuals().dark_mode);
    }

    #[test]
    fn test_toggle_marks_for_apply() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(false);
        assert!(manager.apply_if_needed(&ctx));
        assert!(!manager.apply_if_needed(&ctx));

        assert!(manager.toggle());
        assert!(manager.is_dark());
        assert!(manager.apply_if_needed(&ctx));
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_set_same_mode_is_noop() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(true);
        manager.apply(&ctx);
        manager.set_dark_mode(true);
        assert!(!manager.apply_if_needed(&ctx));
    }
}
