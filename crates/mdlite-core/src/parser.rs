//! Zero-allocation block parser for mdlite.
//!
//! Borrows directly from input, avoiding String allocations.
//! The parser is total: every input yields a document, malformed constructs
//! degrade to paragraphs and blank lines are skipped.

use std::borrow::Cow;

use crate::ast::{Block, CowStr, Document};
use crate::inline::parse_inline;
use crate::lexer::{Lexer, Line};

/// mdlite block parser.
///
/// Holds no state between calls; one instance can parse any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    _private: (),
}

impl Parser {
    /// Create a new parser.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole document.
    ///
    /// Each non-blank line is dispatched on its trimmed form, in priority
    /// order: header (`#`), image (`![..](..)`), table (`|`), paragraph.
    pub fn parse<'a>(&self, input: &'a str) -> Document<'a> {
        let mut lexer = Lexer::new(input);
        let blocks = self.parse_blocks(&mut lexer);
        log::debug!("parsed {} blocks from {} bytes", blocks.len(), input.len());
        Document::new(blocks)
    }

    #[inline]
    fn parse_blocks<'a>(&self, lexer: &mut Lexer<'a>) -> Vec<Block<'a>> {
        let mut blocks = Vec::with_capacity(16);

        while !lexer.is_eof() {
            lexer.skip_blank_lines();

            if lexer.is_eof() {
                break;
            }

            self.parse_block(lexer, &mut blocks);
        }

        blocks
    }

    #[inline]
    fn parse_block<'a>(&self, lexer: &mut Lexer<'a>, blocks: &mut Vec<Block<'a>>) {
        let Some(line) = lexer.next_line() else {
            return;
        };
        let trimmed = line.trimmed();

        match trimmed.as_bytes().first() {
            Some(b'#') => self.parse_heading(line, blocks),
            Some(b'!') if image_url(trimmed).is_some() => blocks.push(self.parse_image(line)),
            Some(b'|') => blocks.push(self.parse_table(line, lexer)),
            _ => blocks.push(self.parse_paragraph(line)),
        }
    }

    #[inline]
    fn parse_heading<'a>(&self, line: Line<'a>, blocks: &mut Vec<Block<'a>>) {
        let trimmed = line.trimmed();
        let marker_len = trimmed.bytes().take_while(|&b| b == b'#').count();
        let level = marker_len as u32;
        let text = trimmed[marker_len..].trim();

        log::debug!("line {}: header level {}", line.number, level);

        blocks.push(Block::Header {
            level,
            content: parse_inline(text),
        });

        // Top-level headers are underlined
        if level == 1 || level == 2 {
            blocks.push(Block::Divider);
        }
    }

    #[inline]
    fn parse_image<'a>(&self, line: Line<'a>) -> Block<'a> {
        let url = image_url(line.trimmed()).unwrap_or_default();
        log::debug!("line {}: image {}", line.number, url);
        Block::Image {
            url: Cow::Borrowed(url),
        }
    }

    /// Parse a pipe table starting at its header line.
    ///
    /// The line after the header is the delimiter row and is skipped without
    /// looking at it. Rows continue while lines start with `|`.
    #[inline]
    fn parse_table<'a>(&self, header: Line<'a>, lexer: &mut Lexer<'a>) -> Block<'a> {
        let headers = split_table_row(header.trimmed());

        lexer.next_line();

        let mut rows: Vec<Vec<CowStr<'a>>> = Vec::with_capacity(8);
        loop {
            match lexer.peek_line() {
                Some(line) if line.trimmed().starts_with('|') => {}
                _ => break,
            }
            let Some(line) = lexer.next_line() else {
                break;
            };
            rows.push(split_table_row(line.trimmed()));
        }

        log::debug!(
            "line {}: table with {} header cells and {} rows",
            header.number,
            headers.len(),
            rows.len()
        );

        Block::Table { headers, rows }
    }

    #[inline]
    fn parse_paragraph<'a>(&self, line: Line<'a>) -> Block<'a> {
        Block::Paragraph {
            content: parse_inline(line.trimmed()),
        }
    }
}

/// URL of an image line: after the first `](`, up to the final `)`.
///
/// Alt text between `![` and `](` is dropped.
#[inline]
fn image_url(trimmed: &str) -> Option<&str> {
    if !trimmed.starts_with("![") || !trimmed.ends_with(')') {
        return None;
    }
    let open = trimmed.find("](")?;
    // `](` cannot touch the final `)`, so the range is never inverted.
    Some(&trimmed[open + 2..trimmed.len() - 1])
}

/// Split one table line into trimmed cells.
///
/// An empty first and/or last cell produced by outer pipes is dropped.
/// Every line is handled on its own, rows are never padded to a width.
#[inline]
fn split_table_row(line: &str) -> Vec<CowStr<'_>> {
    let cells: Vec<&str> = line.split('|').map(str::trim).collect();

    let first_empty = cells.first().is_some_and(|c| c.is_empty());
    let last_empty = cells.last().is_some_and(|c| c.is_empty());

    let kept = match (first_empty, last_empty) {
        (true, true) if cells.len() > 1 => &cells[1..cells.len() - 1],
        (true, _) => &cells[1..],
        (false, true) => &cells[..cells.len() - 1],
        (false, false) => &cells[..],
    };

    kept.iter().copied().map(Cow::Borrowed).collect()
}
