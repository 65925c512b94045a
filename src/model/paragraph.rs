//! Paragraph, run and text node models.

/// A single `w:t` text element.
///
/// `content` is `None` when the element carried no character data
/// (`<w:t/>` or `<w:t></w:t>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    pub content: Option<String>,
}

impl TextNode {
    /// Create a text node holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }

    /// Create a text node with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The node's text, or `""` when absent.
    pub fn as_str(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.content.get_or_insert_with(String::new).push_str(text);
    }
}

/// A `w:r` run: an ordered sequence of text nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub texts: Vec<TextNode>,
}

impl Run {
    /// Create an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a run with a single text node.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            texts: vec![TextNode::new(text)],
        }
    }

    /// Concatenated text of all nodes in the run.
    pub fn plain_text(&self) -> String {
        self.texts.iter().map(TextNode::as_str).collect()
    }
}

/// A `w:p` paragraph: an ordered sequence of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single run of text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::with_text(text)],
        }
    }

    /// Concatenated text of every run, with no separator between fragments.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(Run::plain_text).collect()
    }
}
