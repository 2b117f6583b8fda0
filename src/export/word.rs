//! Word-compatible document export
//!
//! Word processors open an HTML document carrying the Office XML namespaces
//! as a native document. Export wraps the already-rendered preview HTML in a
//! fixed header and footer that set the font family and size as inline CSS.

/// File name offered in the save dialog.
pub const EXPORT_FILE_NAME: &str = "document.doc";

/// Content type declared for the exported document.
pub const EXPORT_CONTENT_TYPE: &str = "application/vnd.ms-word;charset=utf-8";

const FOOTER: &str = "</body></html>";

/// A ready-to-save export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordExport {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl WordExport {
    /// Build the export for the given preview HTML and style.
    pub fn new(html: &str, font_family: &str, font_size_px: u32) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            content_type: EXPORT_CONTENT_TYPE,
            bytes: export_document(html, font_family, font_size_px),
        }
    }
}

/// Produce the UTF-8 bytes of a self-contained Word-compatible document.
///
/// The HTML body is embedded unchanged.
pub fn export_document(html: &str, font_family: &str, font_size_px: u32) -> Vec<u8> {
    let mut doc = header(font_family, font_size_px);
    doc.push_str(html);
    doc.push_str(FOOTER);
    doc.into_bytes()
}

fn header(font_family: &str, font_size_px: u32) -> String {
    format!(
        r#"
<html xmlns:o='urn:schemas-microsoft-com:office:office'
      xmlns:w='urn:schemas-microsoft-com:office:word'
      xmlns='http://www.w3.org/TR/REC-html40'>
<head>
  <meta charset="utf-8">
  <title>Document</title>
  <style>
    body {{ font-family: {family}, sans-serif; font-size: {size}px; }}
  </style>
</head>
<body>
"#,
        family = font_family,
        size = font_size_px,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
