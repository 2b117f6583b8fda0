//! UI components for MarkText
//!
//! Panels that sit around the editor pane.

mod settings;

pub use settings::FontPopover;
