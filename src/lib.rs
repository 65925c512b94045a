//! # docx2txt
//!
//! Plain text extraction from Word (.docx) documents.
//!
//! A package is opened as a ZIP archive, its `word/document.xml` part is
//! parsed into a typed tree of paragraphs, runs and text nodes, and each
//! paragraph becomes one line of output.
//!
//! ## Quick Start
//!
//! ```no_run
//! // One string per paragraph
//! let paragraphs = docx2txt::extract_paragraphs("document.docx")?;
//! println!("{} paragraphs", paragraphs.len());
//!
//! // Paragraphs joined with newlines
//! let text = docx2txt::extract_text("document.docx")?;
//! println!("{}", text);
//!
//! // Extract and write in one step, with every failure captured
//! let report = docx2txt::convert("document.docx", "docx_content.txt");
//! println!("{}", report.message());
//! # Ok::<(), docx2txt::Error>(())
//! ```
//!
//! ## Structured access
//!
//! ```no_run
//! use docx2txt::docx::DocxParser;
//!
//! let doc = DocxParser::open("report.docx")?.parse()?;
//! for paragraph in &doc.paragraphs {
//!     println!("{} runs: {}", paragraph.runs.len(), paragraph.plain_text());
//! }
//! # Ok::<(), docx2txt::Error>(())
//! ```

pub mod container;
pub mod docx;
pub mod error;
pub mod model;
pub mod render;
pub mod report;

// Re-exports
pub use container::{OoxmlContainer, DOCUMENT_PART};
pub use error::{Error, ErrorKind, Result};
pub use model::{Document, Paragraph, Run, TextNode};
pub use report::{convert, ConversionReport};

use std::path::Path;

/// Default destination used by the command-line tool.
pub const DEFAULT_OUTPUT: &str = "docx_content.txt";

/// Parse a document file into its paragraph tree.
///
/// # Example
///
/// ```no_run
/// let doc = docx2txt::parse_file("document.docx")?;
/// println!("Paragraphs: {}", doc.paragraphs.len());
/// # Ok::<(), docx2txt::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    docx::DocxParser::open(path)?.parse()
}

/// Parse a document held in memory.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    docx::DocxParser::from_bytes(data.to_vec())?.parse()
}

/// Extract one string per paragraph, in document order.
///
/// Paragraphs without text yield empty strings rather than being skipped.
pub fn extract_paragraphs(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(parse_file(path)?.paragraph_texts())
}

/// Extract the document text with paragraphs separated by `\n`.
///
/// # Example
///
/// ```no_run
/// let text = docx2txt::extract_text("document.docx")?;
/// println!("{}", text);
/// # Ok::<(), docx2txt::Error>(())
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::document_to_text(&doc))
}

/// Join paragraphs with newlines and write them to `path` as UTF-8.
pub fn write_paragraphs<S: AsRef<str>>(paragraphs: &[S], path: impl AsRef<Path>) -> Result<()> {
    render::write_text(path, &render::to_text(paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        zip.start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_parse_bytes() {
        let xml = format!(
            r#"<w:document xmlns:w="{}"><w:body><w:p><w:r><w:t>Hi</w:t></w:r></w:p><w:p/></w:body></w:document>"#,
            docx::WML_NAMESPACE
        );
        let doc = parse_bytes(&docx_bytes(&xml)).unwrap();
        assert_eq!(doc.paragraph_texts(), vec!["Hi", ""]);
    }

    #[test]
    fn test_parse_bytes_malformed_body() {
        let err = parse_bytes(&docx_bytes("<w:document")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_parse_bytes_not_a_package() {
        let err = parse_bytes(b"PK but not really").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Package);
    }

    #[test]
    fn test_write_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        write_paragraphs(&["Hello", "", "World"], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello\n\nWorld");
    }
}
