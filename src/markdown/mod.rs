//! Markdown rendering and formatting module
//!
//! This module provides the two text transformations of the editor:
//! rendering markdown to preview HTML, and inserting markdown syntax around
//! a selection.
//!
//! # Features
//! - Ordered, individually addressable rewrite stages for rendering
//! - Headings, emphasis, lists, code, links and images
//! - Placeholder-aware formatting insertion for ten syntax kinds
//!
//! # Example
//! ```ignore
//! use crate::markdown::{apply_format, render, FormatKind};
//!
//! let html = render("# Hello\n**bold** text");
//! let edit = apply_format("Hello", 0, 5, FormatKind::Italic);
//! ```

pub mod formatting;
pub mod preview;
pub mod render;

pub use formatting::{apply_format, FormatKind};
pub use preview::{parse_preview, PreviewWidget};
pub use render::render;
