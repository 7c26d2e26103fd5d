//! Owned document text and where it came from.
//!
//! A [`SourceDocument`] is passed around explicitly by whoever edits or
//! displays a document. It pairs the raw text with its file location so the
//! text can be saved back after editing.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::ast::Document;
use crate::error::SourceError;
use crate::parser::Parser;

/// Raw document text plus its origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
    path: Option<PathBuf>,
    modified: bool,
}

impl SourceDocument {
    /// Create a document from text that has no file behind it.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
            modified: false,
        }
    }

    /// Load a document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded {} bytes from {}", text.len(), path.display());
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
            modified: false,
        })
    }

    /// Read a whole document from a stream such as stdin.
    pub fn read_from(mut reader: impl Read) -> Result<Self, SourceError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(SourceError::Stream)?;
        Ok(Self::from_text(text))
    }

    /// The document text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The file the document was loaded from or last saved to.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the text changed since it was loaded or saved.
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replace the document text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.modified = true;
    }

    /// Write the text back to the file it was loaded from.
    pub fn save(&mut self) -> Result<(), SourceError> {
        let path = self.path.clone().ok_or(SourceError::NoPath)?;
        self.write(&path)
    }

    /// Write the text to `path`, which becomes the document's location.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<(), SourceError> {
        let path = path.as_ref().to_path_buf();
        self.write(&path)?;
        self.path = Some(path);
        Ok(())
    }

    fn write(&mut self, path: &Path) -> Result<(), SourceError> {
        fs::write(path, self.text.as_bytes()).map_err(|source| SourceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved {} bytes to {}", self.text.len(), path.display());
        self.modified = false;
        Ok(())
    }

    /// Parse the current text.
    pub fn parse(&self) -> Document<'_> {
        Parser::new().parse(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Block;

    #[test]
    fn load_edit_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Notes").unwrap();

        let mut doc = SourceDocument::load(&path).unwrap();
        assert_eq!(doc.text(), "# Notes");
        assert_eq!(doc.path(), Some(path.as_path()));
        assert!(!doc.is_modified());

        doc.set_text("## Changed");
        assert!(doc.is_modified());
        doc.save().unwrap();
        assert!(!doc.is_modified());

        assert_eq!(fs::read_to_string(&path).unwrap(), "## Changed");
        assert!(matches!(
            doc.parse().blocks.as_slice(),
            [Block::Header { level: 2, .. }, Block::Divider]
        ));
    }

    #[test]
    fn save_without_path_fails() {
        let mut doc = SourceDocument::from_text("text");
        assert!(matches!(doc.save(), Err(SourceError::NoPath)));
    }

    #[test]
    fn save_to_sets_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        let mut doc = SourceDocument::from_text("body");
        doc.save_to(&path).unwrap();
        assert_eq!(doc.path(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "body");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");

        let err = SourceDocument::load(&path).unwrap_err();
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn read_from_stream() {
        let doc = SourceDocument::read_from("a\nb".as_bytes()).unwrap();
        assert_eq!(doc.text(), "a\nb");
        assert_eq!(doc.path(), None);
    }
}
