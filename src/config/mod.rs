//! Configuration module for MarkText
//!
//! This module holds the style preferences of an editor session and loads
//! optional defaults from the platform config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
