//! Document model structures.

use super::Paragraph;

/// Parsed body of a Word document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// One string per paragraph, empty paragraphs included.
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.paragraphs.iter().map(Paragraph::plain_text).collect()
    }
}
