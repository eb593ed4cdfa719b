//! Document intake: the patent text handed to a keyword source.
//!
//! Only plain UTF-8 text is accepted. PDFs are recognised by their magic bytes
//! and rejected; their text has to be extracted before it reaches wordz.

use std::io::Read;
use std::path::Path;

use crate::error::ExtractError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Trimmed, non-empty patent text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    /// Wrap already-loaded text. Fails when nothing but whitespace is left.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ExtractError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExtractError::EmptyDocument);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
        Self::from_bytes(bytes)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, ExtractError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(bytes)
    }

    fn from_bytes(bytes: Vec<u8>) -> Result<Self, ExtractError> {
        if bytes.starts_with(PDF_MAGIC) {
            return Err(ExtractError::UnsupportedDocument(
                "PDF input is not supported; extract its text first".to_string(),
            ));
        }
        let text = String::from_utf8(bytes).map_err(|_| {
            ExtractError::UnsupportedDocument("document is not valid UTF-8 text".to_string())
        })?;
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
