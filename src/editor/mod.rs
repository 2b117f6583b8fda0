//! Editor module for MarkText
//!
//! This module contains the markdown text pane, the selection-driven
//! floating toolbar, and word/character statistics.

pub mod selection;
mod stats;
mod toolbar;
mod widget;

pub use selection::{on_selection_changed, Bounds};
pub use stats::TextStats;
pub use toolbar::{consume_shortcut, show_toolbar};
pub use widget::EditorWidget;
