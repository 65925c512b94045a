//! DOCX (Word) document parser.
//!
//! This module reads the main document part of a Word package and turns
//! its paragraphs, runs and text elements into the [`crate::model`] tree.

mod parser;

pub use parser::{parse_document_xml, DocxParser, WML_NAMESPACE};
