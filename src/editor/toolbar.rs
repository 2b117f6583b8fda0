//! Floating formatting toolbar
//!
//! Drawn above the current selection while text is selected. Its placement
//! comes from [`on_selection_changed`](super::selection::on_selection_changed);
//! this module only paints the buttons and maps keyboard shortcuts.

use super::selection::{ToolbarPosition, ToolbarState};
use crate::markdown::FormatKind;
use eframe::egui::{self, Key, Modifiers};

/// Draw the toolbar if it is visible.
///
/// `origin` is the top-left corner of the editor pane; the toolbar position
/// is relative to it and names the toolbar's horizontal center. Returns the
/// format kind whose button was clicked.
pub fn show_toolbar(
    ctx: &egui::Context,
    state: ToolbarState,
    origin: egui::Pos2,
    is_dark: bool,
) -> Option<FormatKind> {
    let Some(ToolbarPosition { top, left }) = state.position() else {
        return None;
    };

    let (fill, border, hover) = if is_dark {
        (
            egui::Color32::from_rgb(31, 41, 55),
            egui::Color32::from_rgb(55, 65, 81),
            egui::Color32::from_rgb(55, 65, 81),
        )
    } else {
        (
            egui::Color32::WHITE,
            egui::Color32::from_rgb(229, 231, 235),
            egui::Color32::from_rgb(243, 244, 246),
        )
    };

    let mut clicked = None;
    egui::Area::new(egui::Id::new("selection_toolbar"))
        .order(egui::Order::Foreground)
        .fixed_pos(origin + egui::vec2(left, top))
        .pivot(egui::Align2::CENTER_TOP)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, border))
                .inner_margin(egui::Margin::same(4.0))
                .rounding(8.0)
                .shadow(egui::epaint::Shadow {
                    offset: egui::vec2(0.0, 2.0),
                    blur: 8.0,
                    spread: 0.0,
                    color: egui::Color32::from_black_alpha(40),
                })
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.visuals_mut().widgets.hovered.weak_bg_fill = hover;
                        for kind in FormatKind::TOOLBAR {
                            let button = egui::Button::new(egui::RichText::new(kind.label()).strong())
                                .frame(false)
                                .min_size(egui::vec2(32.0, 32.0));
                            if ui.add(button).on_hover_text(kind.tooltip()).clicked() {
                                clicked = Some(kind);
                            }
                        }
                    });
                });
        });

    clicked
}

/// Map a key press to a format kind, using the labels from
/// [`FormatKind::shortcut_label`].
pub fn shortcut_for(modifiers: Modifiers, key: Key) -> Option<FormatKind> {
    if !modifiers.command || modifiers.alt {
        return None;
    }

    let kind = match (modifiers.shift, key) {
        (false, Key::B) => FormatKind::Bold,
        (false, Key::I) => FormatKind::Italic,
        (false, Key::Num1) => FormatKind::Heading1,
        (false, Key::Num2) => FormatKind::Heading2,
        (true, Key::Num8) => FormatKind::BulletList,
        (true, Key::Num7) => FormatKind::NumberedList,
        (false, Key::K) => FormatKind::Link,
        (true, Key::K) => FormatKind::Image,
        (false, Key::E) => FormatKind::Code,
        (false, Key::Q) => FormatKind::Quote,
        _ => return None,
    };
    Some(kind)
}

/// Take this frame's formatting shortcut out of the input queue.
///
/// Must run before the editor is shown: `TextEdit` binds some of the same
/// chords (Ctrl+K deletes to the end of the paragraph). Both press and
/// release events of every formatting chord are removed; the first press
/// found is returned.
pub fn consume_shortcut(ctx: &egui::Context) -> Option<FormatKind> {
    ctx.input_mut(|i| {
        let mut found = None;
        i.events.retain(|event| {
            let egui::Event::Key {
                key,
                pressed,
                modifiers,
                ..
            } = event
            else {
                return true;
            };
            match shortcut_for(*modifiers, *key) {
                Some(kind) => {
                    if *pressed && found.is_none() {
                        found = Some(kind);
                    }
                    false
                }
                None => true,
            }
        });
        found
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
