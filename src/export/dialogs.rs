//! Delivering exports to disk
//!
//! The native save dialog stands in for a browser download: it is pre-filled
//! with the export's file name and the bytes are written where the user
//! points it.

use super::word::WordExport;
use crate::error::{Error, Result};
use log::info;
use rfd::FileDialog;
use std::fs;
use std::path::{Path, PathBuf};

const WORD_EXTENSIONS: &[&str] = &["doc"];

/// Opens a native save dialog for a Word export.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_export_dialog(export: &WordExport) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Export to Word")
        .add_filter("Word Documents", WORD_EXTENSIONS)
        .set_file_name(export.file_name)
        .save_file()
}

/// Write an export to `path`.
///
/// # Errors
///
/// Returns `Error::FileWrite` if the file cannot be written.
pub fn write_export(export: &WordExport, path: &Path) -> Result<()> {
    fs::write(path, &export.bytes).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(
        "Exported {} bytes ({}) to {}",
        export.bytes.len(),
        export.content_type,
        path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_export_creates_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("document.doc");
        let export = WordExport::new("<h1>Hi</h1>", "Inter", 18);

        write_export(&export, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(written, export.bytes);
    }

    #[test]
    fn test_write_export_missing_dir_is_file_write_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("document.doc");
        let export = WordExport::new("", "Inter", 18);

        let err = write_export(&export, &path).unwrap_err();
        assert!(matches!(err, Error::FileWrite { path: p, .. } if p == path));
    }
}
