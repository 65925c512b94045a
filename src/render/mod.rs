//! Output rendering for extracted paragraphs.

mod text;

pub use text::{document_to_text, to_text, write_text};
