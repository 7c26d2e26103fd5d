//! Line-based lexer with SIMD-accelerated scanning.
//!
//! The lexer splits input into lines for the block parser.
//! It uses `memchr` for fast line break detection (SIMD on supported platforms).
//!
//! Line breaks are `\n`, `\r\n`, and a lone `\r`.

use memchr::memchr2;

/// A single line from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without line break).
    pub text: &'a str,
    /// 1-based line number in the input.
    pub number: usize,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Get the line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Line-based lexer for the block parser.
///
/// Provides peek/consume access to lines so a block can span several of them.
pub struct Lexer<'a> {
    /// The complete input text.
    input: &'a str,
    /// Input as bytes for efficient scanning.
    bytes: &'a [u8],
    /// Current byte offset.
    offset: usize,
    /// Number of lines read so far.
    line_count: usize,
    /// Peeked line (for lookahead).
    peeked: Option<Line<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            line_count: 0,
            peeked: None,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.peeked.is_none() && self.offset >= self.bytes.len()
    }

    /// Peek at the next line without consuming it.
    ///
    /// Returns `None` if at end of input.
    #[inline]
    pub fn peek_line(&mut self) -> Option<&Line<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.as_ref()
    }

    /// Consume and return the next line.
    ///
    /// Returns `None` if at end of input.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if let Some(line) = self.peeked.take() {
            return Some(line);
        }
        self.read_line()
    }

    /// Skip blank lines and return the count skipped.
    #[inline]
    pub fn skip_blank_lines(&mut self) -> usize {
        let mut count = 0;
        while let Some(line) = self.peek_line() {
            if !line.is_blank() {
                break;
            }
            self.next_line();
            count += 1;
        }
        count
    }

    /// Read the next line from input.
    #[inline(always)]
    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;

        let (end, next) = match memchr2(b'\n', b'\r', &self.bytes[start..]) {
            Some(pos) => {
                let end = start + pos;
                let crlf = self.bytes[end] == b'\r' && self.bytes.get(end + 1) == Some(&b'\n');
                (end, if crlf { end + 2 } else { end + 1 })
            }
            None => (self.bytes.len(), self.bytes.len()),
        };

        self.offset = next;
        self.line_count += 1;

        Some(Line {
            // SAFETY: `start` is 0 or just past an ASCII line break, and `end` is
            // either at an ASCII line break or at the end of input. Both are char
            // boundaries because `\n` and `\r` never occur inside a UTF-8 sequence.
            text: unsafe { self.input.get_unchecked(start..end) },
            number: self.line_count,
        })
    }
}
