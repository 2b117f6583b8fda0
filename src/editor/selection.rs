//! Selection tracking for the floating formatting toolbar
//!
//! Given the selected character count and two rectangles (the editor pane and
//! the bounding box of the selected text), this module decides whether the
//! contextual toolbar is shown and where. It keeps no state: the toolbar is
//! recomputed from the current selection on every pointer or key release.

/// Vertical distance the toolbar floats above the selection.
pub const TOOLBAR_VERTICAL_OFFSET: f32 = 40.0;

/// Minimum horizontal distance between the toolbar center and either edge of
/// the container.
pub const TOOLBAR_EDGE_MARGIN: f32 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in screen units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

impl From<egui::Rect> for Bounds {
    fn from(rect: egui::Rect) -> Self {
        Self::new(rect.min.y, rect.min.x, rect.width(), rect.height())
    }
}

/// Toolbar anchor relative to the container's top-left corner.
///
/// `left` is the horizontal center of the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ToolbarPosition {
    pub top: f32,
    pub left: f32,
}

/// Visibility and placement of the contextual toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ToolbarState {
    #[default]
    Hidden,
    Visible(ToolbarPosition),
}

impl ToolbarState {
    #[allow(dead_code)]
    pub fn is_visible(&self) -> bool {
        matches!(self, ToolbarState::Visible(_))
    }

    pub fn position(&self) -> Option<ToolbarPosition> {
        match self {
            ToolbarState::Visible(pos) => Some(*pos),
            ToolbarState::Hidden => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Toolbar Placement
// ─────────────────────────────────────────────────────────────────────────────

/// Compute the toolbar state for the current selection.
///
/// `selected_len` is the number of selected characters. An empty selection
/// always hides the toolbar.
pub fn on_selection_changed(
    selected_len: usize,
    container: Bounds,
    range: Bounds,
) -> ToolbarState {
    if selected_len == 0 {
        return ToolbarState::Hidden;
    }

    let top = range.top - container.top - TOOLBAR_VERTICAL_OFFSET;
    let mut left = range.left - container.left + range.width / 2.0;

    // Lower bound first; a container narrower than twice the margin ends up
    // pinned to the upper bound.
    if left < TOOLBAR_EDGE_MARGIN {
        left = TOOLBAR_EDGE_MARGIN;
    }
    if left > container.width - TOOLBAR_EDGE_MARGIN {
        left = container.width - TOOLBAR_EDGE_MARGIN;
    }

    ToolbarState::Visible(ToolbarPosition { top, left })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Bounds {
        Bounds::new(50.0, 20.0, 800.0, 600.0)
    }

    #[test]
    fn test_empty_selection_hides_toolbar() {
        let state = on_selection_changed(0, container(), Bounds::new(300.0, 400.0, 80.0, 20.0));
        assert_eq!(state, ToolbarState::Hidden);
        assert!(!state.is_visible());
        assert_eq!(state.position(), None);
    }

    #[test]
    fn test_toolbar_centered_above_selection() {
        let range = Bounds::new(300.0, 400.0, 80.0, 20.0);
        let state = on_selection_changed(5, container(), range);
        assert!(state.is_visible());
        assert_eq!(
            state.position(),
            Some(ToolbarPosition {
                top: 300.0 - 50.0 - 40.0,
                left: 400.0 - 20.0 + 40.0,
            })
        );
    }

    #[test]
    fn test_left_clamps_to_margin() {
        let range = Bounds::new(100.0, 30.0, 10.0, 20.0);
        let state = on_selection_changed(1, container(), range);
        assert_eq!(state.position().map(|p| p.left), Some(100.0));
    }

    #[test]
    fn test_right_clamps_to_width_minus_margin() {
        let range = Bounds::new(100.0, 790.0, 40.0, 20.0);
        let state = on_selection_changed(3, container(), range);
        assert_eq!(state.position().map(|p| p.left), Some(700.0));
    }

    #[test]
    fn test_exact_bounds_are_kept() {
        // left = 120 - 20 + 0 = 100, on the inclusive bound
        let range = Bounds::new(100.0, 120.0, 0.0, 20.0);
        let state = on_selection_changed(1, container(), range);
        assert_eq!(state.position().map(|p| p.left), Some(100.0));
    }

    #[test]
    fn test_narrow_container_pins_to_upper_bound() {
        let narrow = Bounds::new(0.0, 0.0, 150.0, 100.0);
        let range = Bounds::new(10.0, 10.0, 20.0, 10.0);
        let state = on_selection_changed(2, narrow, range);
        assert_eq!(state.position().map(|p| p.left), Some(50.0));
    }

    #[test]
    fn test_top_can_go_negative() {
        // Selection on the first line floats above the container.
        let range = Bounds::new(55.0, 400.0, 10.0, 20.0);
        let state = on_selection_changed(1, container(), range);
        assert_eq!(state.position().map(|p| p.top), Some(-35.0));
    }

    #[test]
    fn test_bounds_from_egui_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(30.0, 40.0));
        assert_eq!(Bounds::from(rect), Bounds::new(20.0, 10.0, 30.0, 40.0));
    }
}
