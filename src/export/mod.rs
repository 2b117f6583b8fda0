//! Document Export Module
//!
//! This module exports the rendered preview as a Word-compatible document.
//!
//! # Architecture
//!
//! - `word.rs` - document template and export bundle
//! - `dialogs.rs` - native save dialog and file writing

pub mod dialogs;
pub mod word;

pub use dialogs::{save_export_dialog, write_export};
pub use word::WordExport;
