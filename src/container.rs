//! ZIP container abstraction for Word packages.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

/// Path of the main document part inside a Word package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Fix XML encoding declaration from UTF-16 to UTF-8.
///
/// After UTF-16 content has been decoded into a Rust `String` the declaration
/// still announces UTF-16, which would make the XML reader reinterpret the
/// text.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}

/// Decode XML bytes handling UTF-8 and UTF-16 (LE/BE) content.
///
/// Word writes UTF-8, but packages produced by other tools occasionally
/// carry UTF-16 parts.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(rest.to_vec())
            .map_err(|e| Error::Format(format!("invalid UTF-8: {}", e)));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        let content = decode_utf16(rest, u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let content = decode_utf16(rest, u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(e) => {
            // ASCII markup in UTF-16 leaves a zero in every other byte
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                decode_utf16(bytes, u16::from_le_bytes)
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                decode_utf16(bytes, u16::from_be_bytes)
            } else if let Some(encoding) = declared_encoding(bytes) {
                Err(Error::Format(format!(
                    "unsupported encoding '{}': {}",
                    encoding, e
                )))
            } else {
                Err(Error::Format(format!("invalid UTF-8: {}", e)))
            }
        }
    }
}

/// Encoding named in the XML declaration, unless it is UTF-8.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&bytes[..end]).ok()?;
    if !decl.starts_with("<?xml") {
        return None;
    }

    let value = decl.split("encoding=").nth(1)?;
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let name = value[1..].split(quote).next()?;
    if name.eq_ignore_ascii_case("utf-8") {
        None
    } else {
        Some(name.to_string())
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Format(format!("invalid UTF-16: {}", e)))
}

/// Word package opened from a ZIP archive.
///
/// The whole archive is held in memory; the source file is closed as soon
/// as it has been read.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlContainer {
    /// Open a package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docx2txt::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("document.docx")?;
    /// assert!(container.exists("word/document.xml"));
    /// # Ok::<(), docx2txt::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unreadable =
            |e: std::io::Error| Error::Package(format!("cannot read {}: {}", path.display(), e));

        let file = File::open(path).map_err(unreadable)?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(unreadable)?;

        debug!(path = %path.display(), bytes = data.len(), "read package");
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        debug!(entries = archive.len(), "opened package archive");
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| Error::Package(format!("cannot read package: {}", e)))?;
        Self::from_bytes(data)
    }

    /// Read the raw bytes of an entry.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive.by_name(path).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => {
                Error::Package(format!("missing part '{}'", path))
            }
            other => other.into(),
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| Error::Package(format!("cannot read part '{}': {}", path, e)))?;
        Ok(data)
    }

    /// Read an XML entry as a string, decoding UTF-8 or UTF-16.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        decode_xml_bytes(&bytes)
    }

    /// Check if an entry exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all entries in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}
