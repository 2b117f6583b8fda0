//! Style configuration for MarkText
//!
//! This module defines the `Settings` struct holding the user's style
//! preferences, with serde support for the optional JSON defaults file.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Font Family Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available font families for the editor and exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditorFont {
    #[default]
    Inter,
    Georgia,
    Menlo,
    PlayfairDisplay,
    Montserrat,
    Lora,
    RobotoSlab,
    OpenSans,
    Merriweather,
}

impl EditorFont {
    /// Get the display name for the font.
    ///
    /// This is also the CSS family name written into exported documents.
    pub fn display_name(&self) -> &'static str {
        match self {
            EditorFont::Inter => "Inter",
            EditorFont::Georgia => "Georgia",
            EditorFont::Menlo => "Menlo",
            EditorFont::PlayfairDisplay => "Playfair Display",
            EditorFont::Montserrat => "Montserrat",
            EditorFont::Lora => "Lora",
            EditorFont::RobotoSlab => "Roboto Slab",
            EditorFont::OpenSans => "Open Sans",
            EditorFont::Merriweather => "Merriweather",
        }
    }

    /// Whether the font is monospaced.
    pub fn is_monospace(&self) -> bool {
        matches!(self, EditorFont::Menlo)
    }

    /// Get all available fonts, in picker order.
    pub fn all() -> &'static [EditorFont] {
        &[
            EditorFont::Inter,
            EditorFont::Georgia,
            EditorFont::Menlo,
            EditorFont::PlayfairDisplay,
            EditorFont::Montserrat,
            EditorFont::Lora,
            EditorFont::RobotoSlab,
            EditorFont::OpenSans,
            EditorFont::Merriweather,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View Mode Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// What the central pane shows.
///
/// - `Markdown`: the editable markdown text (markdown mode enabled)
/// - `Preview`: the rendered HTML, read-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Markdown,
    Preview,
}

impl ViewMode {
    /// Toggle between Markdown and Preview modes.
    pub fn toggle(&self) -> Self {
        match self {
            ViewMode::Markdown => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Markdown,
        }
    }

    /// Whether markdown editing is active.
    pub fn is_markdown(&self) -> bool {
        *self == ViewMode::Markdown
    }

    /// Hover text for the toggle button.
    pub fn toggle_tooltip(&self) -> &'static str {
        match self {
            ViewMode::Markdown => "Switch to preview",
            ViewMode::Preview => "Switch to markdown",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Initial window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 760.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Style preferences for an editor session.
///
/// Defaults are fixed at session start; an optional JSON file may override
/// them. All fields have defaults via `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Font family for the editor, preview and export
    pub font_family: EditorFont,

    /// Font size in pixels
    pub font_size: f32,

    /// Whether the dark theme is active
    pub dark_mode: bool,

    /// Markdown editing or rendered preview
    pub view_mode: ViewMode,

    /// Initial window size
    pub window_size: WindowSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_family: EditorFont::default(),
            font_size: Self::DEFAULT_FONT_SIZE,
            dark_mode: false,
            view_mode: ViewMode::default(),
            window_size: WindowSize::default(),
        }
    }
}

impl Settings {
    /// Font size at session start.
    pub const DEFAULT_FONT_SIZE: f32 = 18.0;
    /// Minimum allowed font size.
    pub const MIN_FONT_SIZE: f32 = 12.0;
    /// Maximum allowed font size.
    pub const MAX_FONT_SIZE: f32 = 28.0;
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 400.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Font size in whole pixels, as written into exports.
    pub fn font_size_px(&self) -> u32 {
        self.font_size.round() as u32
    }

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// The defaults file may have been edited by hand with invalid values.
    pub fn sanitize(&mut self) {
        if !self.font_size.is_finite() {
            self.font_size = Self::DEFAULT_FONT_SIZE;
        }
        self.font_size = self
            .font_size
            .round()
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);

        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
    }

    /// Parse settings from JSON and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
