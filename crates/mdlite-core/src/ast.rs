//! Abstract Syntax Tree types for mdlite documents.
//!
//! This module contains all the AST node types produced by the parser.
//! The AST is designed to be:
//!
//! - **Zero-copy**: Uses `Cow<'a, str>` to borrow from input when possible
//! - **Flat**: Blocks are a single ordered sequence, inline spans never nest
//! - **Owned on demand**: [`Document::into_owned`] detaches a document from its input

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = Cow<'a, str>;

/// A parsed document.
///
/// The document is the root of the AST. Blocks appear in source line order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document<'a> {
    /// Content blocks in document order.
    pub blocks: Vec<Block<'a>>,
}

impl<'a> Document<'a> {
    /// Create a document from an already built block sequence.
    pub fn new(blocks: Vec<Block<'a>>) -> Self {
        Self { blocks }
    }

    /// Number of blocks, dividers included.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block<'a>> {
        self.blocks.iter()
    }

    /// Iterate over `(level, content)` of every header in the document.
    pub fn headings(&self) -> impl Iterator<Item = (u32, &[Inline<'a>])> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Header { level, content } => Some((*level, content.as_slice())),
            _ => None,
        })
    }

    /// Convert into a document that owns all of its text.
    ///
    /// Useful when the input string does not outlive the parsed result.
    pub fn into_owned(self) -> Document<'static> {
        Document {
            blocks: self.blocks.into_iter().map(Block::into_owned).collect(),
        }
    }
}

impl<'a> IntoIterator for Document<'a> {
    type Item = Block<'a>;
    type IntoIter = std::vec::IntoIter<Block<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'d, 'a> IntoIterator for &'d Document<'a> {
    type Item = &'d Block<'a>;
    type IntoIter = std::slice::Iter<'d, Block<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Block-level AST nodes.
///
/// Blocks are the structural elements of a document. Each one comes from
/// a single source line, except tables which span a run of `|` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Block<'a> {
    /// Header line (`#` run). The level is not clamped, `####### x` is level 7.
    Header {
        /// Number of leading `#` characters.
        level: u32,
        /// Inline content (may be empty when the header has no text).
        content: Vec<Inline<'a>>,
    },
    /// Text paragraph with inline formatting.
    Paragraph {
        /// Inline content.
        content: Vec<Inline<'a>>,
    },
    /// Standalone image line. Alt text is not kept.
    Image {
        /// Image source URL or path.
        url: CowStr<'a>,
    },
    /// Pipe table. Rows are not reconciled against the header width.
    Table {
        /// Header cells.
        headers: Vec<CowStr<'a>>,
        /// Data rows, each with its own cell count.
        rows: Vec<Vec<CowStr<'a>>>,
    },
    /// Rule inserted after level 1 and level 2 headers.
    Divider,
}

impl<'a> Block<'a> {
    /// Inline content of headers and paragraphs.
    pub fn content(&self) -> Option<&[Inline<'a>]> {
        match self {
            Block::Header { content, .. } | Block::Paragraph { content } => Some(content),
            _ => None,
        }
    }

    /// Convert into a block that owns all of its text.
    pub fn into_owned(self) -> Block<'static> {
        match self {
            Block::Header { level, content } => Block::Header {
                level,
                content: content.into_iter().map(Inline::into_owned).collect(),
            },
            Block::Paragraph { content } => Block::Paragraph {
                content: content.into_iter().map(Inline::into_owned).collect(),
            },
            Block::Image { url } => Block::Image {
                url: Cow::Owned(url.into_owned()),
            },
            Block::Table { headers, rows } => Block::Table {
                headers: headers.into_iter().map(owned).collect(),
                rows: rows
                    .into_iter()
                    .map(|row| row.into_iter().map(owned).collect())
                    .collect(),
            },
            Block::Divider => Block::Divider,
        }
    }
}

/// Inline-level AST nodes (within paragraphs and headers).
///
/// Each span carries only its inner text, delimiters stripped.
/// Spans never nest: a `*` inside a bold span stays part of its text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "type", content = "text", rename_all = "snake_case")
)]
pub enum Inline<'a> {
    /// Plain text content.
    Text(CowStr<'a>),
    /// Strong text (`**bold**`).
    Bold(CowStr<'a>),
    /// Emphasized text (`*italic*`).
    Italic(CowStr<'a>),
    /// Struck-out text (`~~deleted~~`).
    Strikethrough(CowStr<'a>),
}

impl<'a> Inline<'a> {
    /// The span's text without delimiters.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(t) | Inline::Bold(t) | Inline::Italic(t) | Inline::Strikethrough(t) => t,
        }
    }

    /// The delimiter written on both sides of this span kind.
    #[inline]
    pub fn delimiter(&self) -> &'static str {
        match self {
            Inline::Text(_) => "",
            Inline::Bold(_) => "**",
            Inline::Italic(_) => "*",
            Inline::Strikethrough(_) => "~~",
        }
    }

    /// Re-serialise the span with its delimiters.
    pub fn to_markup(&self) -> String {
        let delim = self.delimiter();
        let text = self.text();
        let mut out = String::with_capacity(text.len() + delim.len() * 2);
        out.push_str(delim);
        out.push_str(text);
        out.push_str(delim);
        out
    }

    /// Convert into a span that owns its text.
    pub fn into_owned(self) -> Inline<'static> {
        match self {
            Inline::Text(t) => Inline::Text(owned(t)),
            Inline::Bold(t) => Inline::Bold(owned(t)),
            Inline::Italic(t) => Inline::Italic(owned(t)),
            Inline::Strikethrough(t) => Inline::Strikethrough(owned(t)),
        }
    }
}

#[inline]
fn owned(s: CowStr<'_>) -> CowStr<'static> {
    Cow::Owned(s.into_owned())
}
