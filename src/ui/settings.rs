//! Font settings popover for MarkText
//!
//! A small floating panel under the top bar's font button. It lists the
//! available font families and a slider for the font size. Changes apply
//! immediately to the editor, the preview and the next export.

use crate::config::{EditorFont, Settings};
use eframe::egui::{self, Color32, RichText, Ui};

/// Output from showing the font popover.
#[derive(Debug, Default)]
pub struct FontPopoverOutput {
    /// Whether any setting was changed
    pub changed: bool,
    /// Whether the popover should close
    pub close_requested: bool,
}

/// Popover for the editor font family and size.
#[derive(Debug, Default)]
pub struct FontPopover;

impl FontPopover {
    pub fn new() -> Self {
        Self
    }

    /// Show the popover below `anchor` (the bottom-left of the font button).
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        settings: &mut Settings,
        anchor: egui::Pos2,
        is_dark: bool,
    ) -> FontPopoverOutput {
        let mut output = FontPopoverOutput::default();

        let (fill, border) = if is_dark {
            (Color32::from_rgb(31, 41, 55), Color32::from_rgb(55, 65, 81))
        } else {
            (Color32::WHITE, Color32::from_rgb(229, 231, 235))
        };

        let area = egui::Area::new(egui::Id::new("font_popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(anchor + egui::vec2(0.0, 4.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, border))
                    .inner_margin(egui::Margin::same(12.0))
                    .rounding(8.0)
                    .show(ui, |ui| {
                        ui.set_width(220.0);
                        if self.show_font_list(ui, settings) {
                            output.changed = true;
                        }

                        ui.add_space(8.0);
                        ui.separator();
                        ui.add_space(8.0);

                        if self.show_size_slider(ui, settings) {
                            output.changed = true;
                        }
                    });
            });

        // Close on Escape or a click anywhere outside the popover
        let response = area.response;
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            output.close_requested = true;
        }
        if response.clicked_elsewhere() {
            output.close_requested = true;
        }

        output
    }

    fn show_font_list(&self, ui: &mut Ui, settings: &mut Settings) -> bool {
        let mut changed = false;

        ui.label(RichText::new("Font").strong());
        ui.add_space(4.0);

        for font in EditorFont::all() {
            if ui
                .selectable_value(&mut settings.font_family, *font, font.display_name())
                .changed()
            {
                changed = true;
            }
        }

        if let Some(note) = screen_font_note(settings.font_family) {
            ui.add_space(4.0);
            ui.label(RichText::new(note).small().weak());
        }

        changed
    }

    fn show_size_slider(&self, ui: &mut Ui, settings: &mut Settings) -> bool {
        ui.label(RichText::new(font_size_label(settings.font_size)).strong());
        ui.add_space(4.0);

        let response = ui.add(
            egui::Slider::new(
                &mut settings.font_size,
                Settings::MIN_FONT_SIZE..=Settings::MAX_FONT_SIZE,
            )
            .show_value(false)
            .step_by(1.0),
        );

        response.changed()
    }
}

/// Note under the font list for families egui cannot draw by name.
///
/// Only the monospace family has a distinct on-screen face; the others are
/// drawn in the proportional default and reach the document through export.
fn screen_font_note(font: EditorFont) -> Option<&'static str> {
    if font.is_monospace() {
        None
    } else {
        Some("Shown in the default font on screen. Exports use this family.")
    }
}

/// Heading above the size slider.
fn font_size_label(size: f32) -> String {
    format!("Font Size: {}px", size.round() as u32)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
