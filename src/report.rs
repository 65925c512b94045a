//! Top-level conversion with a success/failure report.

use crate::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a [`convert`] call.
///
/// Every failure is captured here instead of being propagated.
#[derive(Debug)]
pub struct ConversionReport {
    output: PathBuf,
    result: Result<usize, Error>,
}

impl ConversionReport {
    /// Whether the output file was fully written.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Destination path that was requested.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Number of paragraphs written, if the conversion succeeded.
    pub fn paragraphs(&self) -> Option<usize> {
        self.result.as_ref().ok().copied()
    }

    /// The error that stopped the conversion, if any.
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }

    /// Human-readable summary of the outcome.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(_) => write!(f, "Successfully wrote content to {}", self.output.display()),
            Err(e) => write!(f, "Error reading .docx file: {}: {}", e.kind(), e),
        }
    }
}

/// Extract the text of `input` and write it to `output`.
///
/// The document is extracted completely before the destination is touched,
/// so a package or format failure never creates or overwrites `output`.
///
/// # Example
///
/// ```no_run
/// let report = docx2txt::convert("report.docx", "docx_content.txt");
/// println!("{}", report.message());
/// assert!(report.is_success());
/// ```
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> ConversionReport {
    let input = input.as_ref();
    let output = output.as_ref();

    let result = crate::extract_paragraphs(input).and_then(|paragraphs| {
        crate::write_paragraphs(&paragraphs, output)?;
        Ok(paragraphs.len())
    });

    if let Err(ref e) = result {
        debug!(input = %input.display(), kind = %e.kind(), "conversion failed");
    }

    ConversionReport {
        output: output.to_path_buf(),
        result,
    }
}
