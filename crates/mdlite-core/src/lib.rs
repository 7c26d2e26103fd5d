//! # mdlite Core
//!
//! A minimal two-stage Markdown parser.
//!
//! The block parser splits a document into headers, paragraphs, images, pipe
//! tables, and dividers. The inline parser turns the text of headers and
//! paragraphs into plain, bold, italic, and strikethrough spans.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdlite_core::{Block, Inline};
//!
//! let doc = mdlite_core::parse("# Hello World\n\nThis is **bold** text.");
//!
//! assert_eq!(doc.len(), 3);
//! assert!(matches!(doc.blocks[1], Block::Divider));
//! assert_eq!(
//!     doc.blocks[2].content().unwrap()[1],
//!     Inline::Bold("bold".into())
//! );
//! ```
//!
//! ## Totality
//!
//! Parsing never fails. Anything the grammar does not recognise becomes a
//! paragraph, unterminated delimiters stay in the text, and blank lines are
//! skipped:
//!
//! ```rust
//! let doc = mdlite_core::parse("   \n\nunmatched **bold\n");
//! assert_eq!(doc.len(), 1);
//! ```
//!
//! ## Grammar
//!
//! - `#`..: header, level = number of `#`; levels 1 and 2 are followed by a divider
//! - `![alt](url)`: image, alt text dropped
//! - `| a | b |`: pipe table; the next line is the delimiter row and is skipped
//! - anything else: paragraph
//! - inline: `**bold**`, `*italic*`, `~~strikethrough~~`, never nested

pub mod ast;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod source;

pub use ast::{Block, CowStr, Document, Inline};
pub use error::SourceError;
pub use inline::parse_inline;
pub use parser::Parser;
pub use render::{RenderOptions, Renderer, Style};
pub use source::SourceDocument;

/// Parse a document with a default [`Parser`].
#[inline]
pub fn parse(input: &str) -> Document<'_> {
    Parser::new().parse(input)
}
