//! Typed document tree for Word bodies.
//!
//! The parser builds a [`Document`] of [`Paragraph`]s, each holding [`Run`]s
//! of [`TextNode`]s, in document order.

mod document;
mod paragraph;

pub use document::*;
pub use paragraph::*;
