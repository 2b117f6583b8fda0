//! Main application module for MarkText
//!
//! This module implements the eframe App trait: the top bar, the editor or
//! preview pane with its floating toolbar, and the status bar.

use crate::config::Settings;
use crate::editor::{consume_shortcut, on_selection_changed, show_toolbar, Bounds, EditorWidget};
use crate::export::{save_export_dialog, write_export, WordExport};
use crate::markdown::{parse_preview, FormatKind, PreviewWidget};
use crate::state::AppState;
use crate::theme::{self, ThemeManager};
use crate::ui::FontPopover;
use eframe::egui;
use log::{debug, info, warn};

/// How long status messages stay visible, in seconds.
const TOAST_DURATION: f64 = 3.0;

/// The main application struct that holds all state and implements eframe::App.
pub struct MarkTextApp {
    /// Central application state
    state: AppState,
    /// Theme manager for handling light/dark switching
    theme_manager: ThemeManager,
    /// Font settings popover
    font_popover: FontPopover,
    /// Where the font popover opens (bottom-left of its button)
    font_popover_anchor: egui::Pos2,
    /// Caret to place in the editor on the next frame
    pending_caret: Option<usize>,
    /// Last caret position reported by the editor
    last_caret: usize,
    /// Last screen rectangle of the selected text
    last_selection_rect: Option<egui::Rect>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
}

impl MarkTextApp {
    /// Create a new MarkTextApp instance with the settings loaded at startup.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        info!("Initializing MarkText");
        Self::with_state(&cc.egui_ctx, AppState::with_settings(settings))
    }

    fn with_state(ctx: &egui::Context, state: AppState) -> Self {
        let mut theme_manager = ThemeManager::new(state.settings.dark_mode);
        theme_manager.apply(ctx);
        info!("Applied initial theme, dark mode: {}", state.settings.dark_mode);

        let last_caret = state.session.text().chars().count();

        Self {
            state,
            theme_manager,
            font_popover: FontPopover::new(),
            font_popover_anchor: egui::Pos2::ZERO,
            pending_caret: None,
            last_caret,
            last_selection_rect: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a formatting action to the current selection (or caret).
    fn handle_format(&mut self, kind: FormatKind) {
        if !self.state.settings.view_mode.is_markdown() {
            debug!("Ignoring {:?} outside markdown mode", kind);
            return;
        }

        let caret = self.state.session.apply_format(kind, self.last_caret);
        self.pending_caret = Some(caret);
        self.last_caret = caret;
        self.last_selection_rect = None;
    }

    fn toggle_dark_mode(&mut self) {
        let dark = self.theme_manager.toggle();
        self.state.settings.dark_mode = dark;
        info!("Dark mode: {}", dark);
    }

    fn toggle_view_mode(&mut self) {
        let mode = self.state.settings.view_mode.toggle();
        self.state.settings.view_mode = mode;
        if mode.is_markdown() {
            self.state.session.needs_focus = true;
        }
        debug!("View mode: {:?}", mode);
    }

    /// Export the rendered preview as a Word document.
    fn handle_export(&mut self) {
        let settings = &self.state.settings;
        let export = WordExport::new(
            self.state.session.rendered_html(),
            settings.font_family.display_name(),
            settings.font_size_px(),
        );

        let Some(path) = save_export_dialog(&export) else {
            debug!("Export cancelled");
            return;
        };

        let time = self.get_app_time();
        match write_export(&export, &path) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| export.file_name.to_string());
                self.state
                    .show_toast(format!("Exported {}", name), time, TOAST_DURATION);
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.state
                    .show_toast(format!("Export failed: {}", e), time, TOAST_DURATION);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the top bar. Returns whether the export button was clicked.
    fn render_top_bar(&mut self, ctx: &egui::Context) -> bool {
        let mut export_clicked = false;
        let mut toggle_dark = false;
        let mut toggle_view = false;
        let mut font_clicked = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("MarkText").strong().size(18.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Export")
                        .on_hover_text("Export as Word document")
                        .clicked()
                    {
                        export_clicked = true;
                    }

                    let view_mode = self.state.settings.view_mode;
                    let view_label = if view_mode.is_markdown() { "Preview" } else { "Markdown" };
                    if ui
                        .button(view_label)
                        .on_hover_text(view_mode.toggle_tooltip())
                        .clicked()
                    {
                        toggle_view = true;
                    }

                    let dark_label = if self.theme_manager.is_dark() { "☀" } else { "🌙" };
                    if ui
                        .button(dark_label)
                        .on_hover_text("Toggle dark mode")
                        .clicked()
                    {
                        toggle_dark = true;
                    }

                    let font_button = ui
                        .button(self.state.settings.font_family.display_name())
                        .on_hover_text("Font settings");
                    if font_button.clicked() {
                        font_clicked = Some(font_button.rect.left_bottom());
                    }
                });
            });
            ui.add_space(4.0);
        });

        if toggle_dark {
            self.toggle_dark_mode();
        }
        if toggle_view {
            self.toggle_view_mode();
        }

        let just_opened = if let Some(anchor) = font_clicked {
            self.state.ui.show_font_popover = !self.state.ui.show_font_popover;
            self.font_popover_anchor = anchor;
            self.state.ui.show_font_popover
        } else {
            false
        };

        if self.state.ui.show_font_popover {
            let is_dark = self.theme_manager.is_dark();
            let output = self.font_popover.show(
                ctx,
                &mut self.state.settings,
                self.font_popover_anchor,
                is_dark,
            );
            if output.changed {
                debug!(
                    "Font changed: {} {}px",
                    self.state.settings.font_family.display_name(),
                    self.state.settings.font_size_px()
                );
            }
            // The click that opened the popover is also a click outside it
            if output.close_requested && !just_opened {
                self.state.ui.show_font_popover = false;
            }
        }

        export_clicked
    }

    /// Render the status bar with word and character counts.
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let muted = theme::muted_text(self.theme_manager.is_dark());
        let stats = self.state.session.stats();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(stats.words_label()).color(muted));
                ui.add_space(12.0);
                ui.label(egui::RichText::new(stats.characters_label()).color(muted));

                if let Some(message) = &self.state.ui.toast_message {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(message).color(muted));
                    });
                }
            });
        });
    }

    /// Render the editor or the preview. Returns the toolbar button clicked.
    fn render_central_panel(&mut self, ctx: &egui::Context) -> Option<FormatKind> {
        let mut toolbar_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.settings.view_mode.is_markdown() {
                toolbar_action = self.render_editor(ui);
            } else {
                self.render_preview(ui);
            }
        });

        toolbar_action
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) -> Option<FormatKind> {
        let settings = &self.state.settings;
        let output = EditorWidget::new(&mut self.state.session)
            .font(settings.font_family)
            .font_size(settings.font_size)
            .pending_caret(self.pending_caret.take())
            .show(ui);

        if output.changed {
            debug!("Editor content changed, preview re-rendered");
        }
        if let Some(caret) = output.caret {
            self.last_caret = caret;
        }

        // Keep the last bounds while the editor has no cursor (e.g. during a
        // toolbar click) so the toolbar stays where it was.
        if self.state.session.selection().is_none() {
            self.last_selection_rect = None;
        } else if output.selection_bounds.is_some() {
            self.last_selection_rect = output.selection_bounds;
        }

        let range = self
            .last_selection_rect
            .map(Bounds::from)
            .unwrap_or_default();
        let toolbar = on_selection_changed(
            self.state.session.selection_len(),
            Bounds::from(output.container),
            range,
        );

        show_toolbar(
            ui.ctx(),
            toolbar,
            output.container.min,
            self.theme_manager.is_dark(),
        )
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        let blocks = parse_preview(self.state.session.rendered_html());
        let settings = &self.state.settings;
        let mut back_to_markdown = false;

        egui::ScrollArea::vertical()
            .id_source("preview_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let response = PreviewWidget::new(&blocks)
                    .font(settings.font_family)
                    .font_size(settings.font_size)
                    .show(ui);
                if response.on_hover_text("Click to edit markdown").clicked() {
                    back_to_markdown = true;
                }
            });

        if back_to_markdown {
            self.toggle_view_mode();
        }
    }
}

impl eframe::App for MarkTextApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_manager.apply_if_needed(ctx);

        let current_time = self.get_app_time();
        self.state.update_toast(current_time);

        // Shortcuts are taken before the editor sees the keys; the session
        // still holds last frame's selection.
        if let Some(kind) = consume_shortcut(ctx) {
            debug!("Format shortcut: {:?}", kind);
            self.handle_format(kind);
        }

        let export_clicked = self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        let toolbar_action = self.render_central_panel(ctx);

        // Toolbar clicks run after render so the selection is up-to-date
        if let Some(kind) = toolbar_action {
            debug!("Toolbar button: {:?}", kind);
            self.handle_format(kind);
        }

        if export_clicked {
            self.handle_export();
        }

        if self.state.ui.toast_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
