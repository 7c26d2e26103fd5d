//! Errors raised around the parser.
//!
//! Parsing itself never fails. These errors come from the storage side:
//! loading a document's text and saving it back.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or save a [`SourceDocument`](crate::source::SourceDocument).
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a document from disk failed.
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing a document to disk failed.
    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading a document from a stream failed.
    #[error("failed to read document from stream")]
    Stream(#[source] io::Error),
    /// The document was not loaded from a file and no target was given.
    #[error("document has no location to save to")]
    NoPath,
}

impl SourceError {
    /// Path involved in the failure, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SourceError::Read { path, .. } | SourceError::Write { path, .. } => Some(path),
            SourceError::Stream(_) | SourceError::NoPath => None,
        }
    }
}
