//! Text editor widget for MarkText
//!
//! This module wraps egui's TextEdit for the markdown pane. Besides editing
//! the session text it reports what the floating toolbar needs: the selected
//! character range, the screen rectangle covering the selected text, and the
//! rectangle of the pane itself.

use crate::config::EditorFont;
use crate::fonts;
use crate::state::EditorSession;
use eframe::egui::{self, Galley, Pos2, Rect, ScrollArea, TextEdit, Ui};

/// Result of showing the editor widget.
pub struct EditorOutput {
    /// Whether the content was modified.
    pub changed: bool,
    /// Caret position (character index), if the widget reported one.
    pub caret: Option<usize>,
    /// Screen rectangle covering the selected text, if anything is selected.
    pub selection_bounds: Option<Rect>,
    /// Screen rectangle of the editor pane.
    pub container: Rect,
}

/// The markdown text pane.
///
/// # Example
///
/// ```ignore
/// let output = EditorWidget::new(&mut state.session)
///     .font(settings.font_family)
///     .font_size(settings.font_size)
///     .show(ui);
/// ```
pub struct EditorWidget<'a> {
    /// The session being edited.
    session: &'a mut EditorSession,
    /// Font size for the editor.
    font_size: f32,
    /// Font family for the editor.
    font: EditorFont,
    /// Caret to place after an external edit.
    pending_caret: Option<usize>,
}

impl<'a> EditorWidget<'a> {
    /// Create a new editor widget for the given session.
    pub fn new(session: &'a mut EditorSession) -> Self {
        Self {
            session,
            font_size: 18.0,
            font: EditorFont::default(),
            pending_caret: None,
        }
    }

    /// Set the font size for the editor.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the font family for the editor.
    #[must_use]
    pub fn font(mut self, font: EditorFont) -> Self {
        self.font = font;
        self
    }

    /// Place the caret here when the widget is recreated after an external edit.
    #[must_use]
    pub fn pending_caret(mut self, caret: Option<usize>) -> Self {
        self.pending_caret = caret;
        self
    }

    /// Show the editor widget and return the output.
    pub fn show(self, ui: &mut Ui) -> EditorOutput {
        // A new id after an external edit makes egui drop the old cursor
        // state, collapsing any stale selection.
        let id = editor_id(ui, self.session);

        if let Some(caret) = self.pending_caret {
            let mut state = TextEdit::load_state(ui.ctx(), id).unwrap_or_default();
            let ccursor = egui::text::CCursor::new(caret);
            state
                .cursor
                .set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
            state.store(ui.ctx(), id);
        }

        let needs_focus = self.session.needs_focus;
        self.session.needs_focus = false;

        let mut buffer = self.session.text().to_string();
        let font_id = fonts::editor_font_id(self.font, self.font_size);

        let scroll_output = ScrollArea::vertical()
            .id_source(id.with("scroll"))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let text_edit = TextEdit::multiline(&mut buffer)
                    .id(id)
                    .frame(false)
                    .font(font_id)
                    .hint_text("Start typing here...")
                    .desired_width(f32::INFINITY)
                    .desired_rows(24);

                let output = text_edit.show(ui);
                if needs_focus {
                    output.response.request_focus();
                }
                output
            });

        let container = scroll_output.inner_rect;
        let text_output = scroll_output.inner;

        let changed = self.session.set_text(buffer);

        let mut caret = None;
        let mut selection_bounds = None;
        if let Some(cursor_range) = text_output.cursor_range {
            let primary = cursor_range.primary.ccursor.index;
            let secondary = cursor_range.secondary.ccursor.index;
            let (start, end) = if primary < secondary {
                (primary, secondary)
            } else {
                (secondary, primary)
            };

            caret = Some(primary);
            self.session.set_selection(Some((start, end)));
            if start != end {
                selection_bounds = Some(range_rect(
                    &text_output.galley,
                    text_output.galley_pos,
                    start,
                    end,
                ));
            }
        }

        EditorOutput {
            changed,
            caret,
            selection_bounds,
            container,
        }
    }
}

/// Widget id of the text pane for `session` inside `ui`.
fn editor_id(ui: &Ui, session: &EditorSession) -> egui::Id {
    ui.id().with("editor").with(session.content_version())
}

/// Screen rectangle covering the characters `start..end` of a laid-out galley.
///
/// Spans the union of the row segments the range touches: a selection over
/// several rows is as wide as its widest row.
fn range_rect(galley: &Galley, galley_pos: Pos2, start: usize, end: usize) -> Rect {
    let start_rcursor = galley.from_ccursor(egui::text::CCursor::new(start)).rcursor;
    let end_rcursor = galley.from_ccursor(egui::text::CCursor::new(end)).rcursor;

    let mut bounds = Rect::NOTHING;
    for row_idx in start_rcursor.row..=end_rcursor.row {
        let Some(row) = galley.rows.get(row_idx) else {
            continue;
        };
        let row_rect = row.rect;

        let x_start = if row_idx == start_rcursor.row {
            row.x_offset(start_rcursor.column)
        } else {
            0.0
        };
        let x_end = if row_idx == end_rcursor.row {
            row.x_offset(end_rcursor.column)
        } else {
            row_rect.width()
        };

        bounds = bounds.union(Rect::from_min_max(
            egui::pos2(galley_pos.x + x_start, galley_pos.y + row_rect.min.y),
            egui::pos2(galley_pos.x + x_end, galley_pos.y + row_rect.max.y),
        ));
    }

    if bounds == Rect::NOTHING {
        Rect::from_min_size(galley_pos, egui::Vec2::ZERO)
    } else {
        bounds
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
