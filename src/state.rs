//! Editor session state for MarkText
//!
//! This module defines `EditorSession`, the single owner of the document
//! text, and `AppState`, which bundles the session with style settings and
//! transient UI state (status messages, the font popover).
//!
//! The rendered preview is cached on the session and rebuilt on every text
//! mutation, so `rendered_html() == render(text())` always holds. The last
//! selection reported by the editor widget is kept so that a toolbar click
//! formats the range the user had selected. Toolbar placement is derived
//! from the widget output each frame.

use crate::config::Settings;
use crate::editor::TextStats;
use crate::markdown::{apply_format, render, FormatKind};
use log::debug;

/// Text shown in a fresh session.
pub const INITIAL_TEXT: &str = "Add Your Markdown here <3";

// ─────────────────────────────────────────────────────────────────────────────
// Editor Session
// ─────────────────────────────────────────────────────────────────────────────

/// The document being edited and its derived preview.
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// Document Text, the source of truth
    text: String,
    /// `render(text)`, rebuilt on every mutation
    rendered_html: String,
    /// Last selection reported by the editor widget (start, end) in characters
    selection: Option<(usize, usize)>,
    /// Bumped when the text changes from outside the editor widget, so the
    /// widget drops its own cursor state
    content_version: u64,
    /// Whether the editor widget should take keyboard focus next frame
    pub needs_focus: bool,
}

impl EditorSession {
    /// Create a session holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let rendered_html = render(&text);
        Self {
            text,
            rendered_html,
            selection: None,
            content_version: 0,
            needs_focus: true,
        }
    }

    /// The raw markdown text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The preview HTML for the current text.
    pub fn rendered_html(&self) -> &str {
        &self.rendered_html
    }

    /// Replace the text (a user edit) and rebuild the preview.
    ///
    /// Returns `true` if the text actually changed.
    pub fn set_text(&mut self, text: String) -> bool {
        if text == self.text {
            return false;
        }
        self.text = text;
        self.rendered_html = render(&self.text);
        true
    }

    /// Word and character counts for the current text.
    pub fn stats(&self) -> TextStats {
        TextStats::from_text(&self.text)
    }

    /// Version counter for external content changes.
    pub fn content_version(&self) -> u64 {
        self.content_version
    }

    /// Selection last reported by the editor widget.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Record the widget's current selection. `None` means the caret is
    /// collapsed (or the widget did not report a cursor).
    pub fn set_selection(&mut self, selection: Option<(usize, usize)>) {
        self.selection = selection.filter(|(start, end)| start != end);
    }

    /// Number of selected characters.
    pub fn selection_len(&self) -> usize {
        self.selection
            .map(|(start, end)| end.abs_diff(start))
            .unwrap_or(0)
    }

    /// Insert markdown syntax for `kind` around the selection.
    ///
    /// `caret` is used as an empty selection when nothing is selected. The
    /// selection collapses afterwards and the editor is asked to take focus
    /// again. Returns the new caret position (character index).
    pub fn apply_format(&mut self, kind: FormatKind, caret: usize) -> usize {
        let (start, end) = self.selection.unwrap_or((caret, caret));
        let result = apply_format(&self.text, start, end, kind);

        debug!(
            "Applied {} to {}..{}, caret now at {}",
            kind.name(),
            start,
            end,
            result.cursor
        );

        self.set_text(result.text);
        self.selection = None;
        self.content_version = self.content_version.wrapping_add(1);
        self.needs_focus = true;
        result.cursor
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(INITIAL_TEXT)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient UI state that is not part of the document.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the font settings popover is open
    pub show_font_popover: bool,
    /// Status message text
    pub toast_message: Option<String>,
    /// Time at which the status message disappears
    pub toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// App State
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the application holds for one editor session.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: EditorSession,
    pub settings: Settings,
    pub ui: UiState,
}

impl AppState {
    /// Create the state for a new session with the settings loaded at startup.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            session: EditorSession::default(),
            settings,
            ui: UiState::default(),
        }
    }

    /// Show a status message for `duration` seconds.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Update toast state - clears expired toasts.
    ///
    /// Call this each frame with the current time.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
