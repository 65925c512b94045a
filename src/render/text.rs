//! Plain text renderer implementation.

use crate::error::Result;
use crate::model::Document;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Join paragraph strings with a single newline between entries.
///
/// No trailing newline is added, so `N` paragraphs produce `N - 1`
/// separators.
pub fn to_text<S: AsRef<str>>(paragraphs: &[S]) -> String {
    let mut output = String::new();
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(paragraph.as_ref());
    }
    output
}

/// Render a parsed document as plain text.
pub fn document_to_text(doc: &Document) -> String {
    to_text(&doc.paragraph_texts())
}

/// Write text to `path` as UTF-8, creating or truncating the file.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote text output");
    Ok(())
}
