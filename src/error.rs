//! Error types for the docx2txt library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for docx2txt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting text from a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is unreadable, not a ZIP archive, or lacks a required part.
    #[error("{0}")]
    Package(String),

    /// The document body is not well-formed XML.
    #[error("{0}")]
    Format(String),

    /// The output could not be created or written.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Package,
    Format,
    Io,
}

impl ErrorKind {
    /// Name shown to users alongside the error detail.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Package => "PackageError",
            ErrorKind::Format => "FormatError",
            ErrorKind::Io => "IOError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Package(_) => ErrorKind::Package,
            Error::Format(_) => ErrorKind::Format,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Package(format!("invalid ZIP archive: {}", err))
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Format(format!("malformed XML: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Package("missing part 'word/document.xml'".to_string());
        assert_eq!(err.to_string(), "missing part 'word/document.xml'");
        assert_eq!(err.kind().to_string(), "PackageError");

        let err = Error::Format("no root element".to_string());
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.kind().name(), "FormatError");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind().name(), "IOError");
    }

    #[test]
    fn test_error_from_zip() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert_eq!(err.kind(), ErrorKind::Package);
        assert!(err.to_string().starts_with("invalid ZIP archive"));
    }
}
