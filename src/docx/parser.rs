//! DOCX body parser.

use crate::container::{OoxmlContainer, DOCUMENT_PART};
use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Run, TextNode};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::path::Path;
use tracing::{debug, trace};

/// WordprocessingML main namespace.
pub const WML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Parser for the body of a Word package.
#[derive(Debug)]
pub struct DocxParser {
    container: OoxmlContainer,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Ok(Self::from_container(container))
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Ok(Self::from_container(container))
    }

    /// Create a parser from an already opened container.
    pub fn from_container(container: OoxmlContainer) -> Self {
        Self { container }
    }

    /// Read `word/document.xml` and build the document tree.
    pub fn parse(&self) -> Result<Document> {
        let xml = self.container.read_xml(DOCUMENT_PART)?;
        let doc = parse_document_xml(&xml)?;
        debug!(paragraphs = doc.paragraphs.len(), "parsed document body");
        Ok(doc)
    }

    /// Get the underlying container.
    pub fn container(&self) -> &OoxmlContainer {
        &self.container
    }
}

/// Build a [`Document`] from the markup of a document part.
///
/// Paragraphs are collected wherever they appear (body, table cells, text
/// boxes) in start-tag order. A run is attached to its nearest enclosing
/// paragraph and a text node to its nearest enclosing run; text is never
/// carried across a paragraph boundary.
pub fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut reader = NsReader::from_str(xml);
    // Whitespace inside w:t is content
    reader.config_mut().trim_text(false);

    let mut builder = TreeBuilder::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_resolved_event_into(&mut buf)? {
            (ns, Event::Start(e)) => {
                let kind = NodeKind::resolve(&ns, e.local_name().as_ref())?;
                builder.open(kind)?;
            }
            (ns, Event::Empty(e)) => {
                let kind = NodeKind::resolve(&ns, e.local_name().as_ref())?;
                builder.open(kind)?;
                builder.close()?;
            }
            (_, Event::End(_)) => builder.close()?,
            (_, Event::Text(e)) => builder.text(&e.unescape()?)?,
            (_, Event::CData(e)) => builder.text(&String::from_utf8_lossy(&e))?,
            (_, Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }

    builder.finish()
}

/// Element kinds the extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Paragraph,
    Run,
    Text,
    Other,
}

impl NodeKind {
    fn resolve(ns: &ResolveResult, local_name: &[u8]) -> Result<Self> {
        match ns {
            ResolveResult::Bound(Namespace(uri)) if *uri == WML_NAMESPACE.as_bytes() => {
                Ok(match local_name {
                    b"p" => NodeKind::Paragraph,
                    b"r" => NodeKind::Run,
                    b"t" => NodeKind::Text,
                    _ => NodeKind::Other,
                })
            }
            ResolveResult::Unknown(prefix) => Err(Error::Format(format!(
                "unbound namespace prefix '{}'",
                String::from_utf8_lossy(prefix)
            ))),
            _ => Ok(NodeKind::Other),
        }
    }
}

/// An element currently open in the reader.
///
/// Runs and text nodes get their slot in the tree when they open, so the
/// tree keeps start-tag order however the elements nest.
enum Frame {
    /// Index into `Document::paragraphs`
    Paragraph(usize),
    /// Paragraph and run index, `None` outside any paragraph
    Run(Option<(usize, usize)>),
    /// Paragraph, run and text index, `None` outside any run
    Text(Option<(usize, usize, usize)>),
    Other,
}

#[derive(Default)]
struct TreeBuilder {
    document: Document,
    stack: Vec<Frame>,
    saw_root: bool,
    root_closed: bool,
}

impl TreeBuilder {
    fn open(&mut self, kind: NodeKind) -> Result<()> {
        if self.root_closed {
            return Err(Error::Format(
                "element after the end of the root element".to_string(),
            ));
        }
        self.saw_root = true;

        let frame = match kind {
            NodeKind::Paragraph => {
                self.document.add_paragraph(Paragraph::new());
                Frame::Paragraph(self.document.paragraphs.len() - 1)
            }
            NodeKind::Run => {
                let slot = self.enclosing_paragraph().map(|p| {
                    let runs = &mut self.document.paragraphs[p].runs;
                    runs.push(Run::new());
                    (p, runs.len() - 1)
                });
                if slot.is_none() {
                    trace!("dropping run outside any paragraph");
                }
                Frame::Run(slot)
            }
            NodeKind::Text => {
                let slot = self.enclosing_run().map(|(p, r)| {
                    let texts = &mut self.document.paragraphs[p].runs[r].texts;
                    texts.push(TextNode::empty());
                    (p, r, texts.len() - 1)
                });
                if slot.is_none() {
                    trace!("dropping text outside any run");
                }
                Frame::Text(slot)
            }
            NodeKind::Other => Frame::Other,
        };
        self.stack.push(frame);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.stack
            .pop()
            .ok_or_else(|| Error::Format("closing tag without matching start".to_string()))?;

        if self.stack.is_empty() {
            self.root_closed = true;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        match self.stack.last() {
            Some(&Frame::Text(Some((p, r, t)))) => {
                self.document.paragraphs[p].runs[r].texts[t].push_str(text);
            }
            // Only whitespace may surround the root element
            None if !text.trim().is_empty() => {
                return Err(Error::Format(
                    "text outside the root element".to_string(),
                ));
            }
            _ => {}
        }
        Ok(())
    }

    fn enclosing_paragraph(&self) -> Option<usize> {
        self.stack.iter().rev().find_map(|frame| match frame {
            Frame::Paragraph(index) => Some(*index),
            _ => None,
        })
    }

    fn enclosing_run(&self) -> Option<(usize, usize)> {
        for frame in self.stack.iter().rev() {
            match frame {
                Frame::Run(slot) => return *slot,
                Frame::Paragraph(_) => return None,
                _ => {}
            }
        }
        None
    }

    fn finish(self) -> Result<Document> {
        if !self.saw_root {
            return Err(Error::Format("no root element".to_string()));
        }
        if !self.stack.is_empty() {
            return Err(Error::Format(format!(
                "unexpected end of document: {} unclosed element(s)",
                self.stack.len()
            )));
        }
        Ok(self.document)
    }
}
