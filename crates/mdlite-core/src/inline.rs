//! Zero-allocation inline span scanner.
//!
//! Uses SIMD-accelerated scanning to jump between `*` and `~` candidates and
//! borrows span text directly from the input.
//!
//! At each candidate position three alternatives are tried in order:
//! `**bold**`, `*italic*`, `~~strikethrough~~`. Every alternative matches
//! lazily (the shortest valid span wins) and matches never overlap: scanning
//! resumes right after the closing delimiter. Spans never nest, so an
//! unpaired `*` inside a bold span is kept as part of its text.

use std::borrow::Cow;

use memchr::{memchr2, memmem};

use crate::ast::Inline;

const STRONG: &[u8] = b"**";
const EMPHASIS: &[u8] = b"*";
const STRIKE: &[u8] = b"~~";

/// Parse the inline spans of a single line of text.
///
/// Total over all inputs. Empty text yields no spans; non-empty text always
/// yields at least one.
#[inline]
pub fn parse_inline(text: &str) -> Vec<Inline<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut parser = InlineParser::new(text);
    parser.parse()
}

/// Re-serialise spans to markup, re-inserting each span's delimiters.
pub fn to_markup(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::to_markup).collect()
}

/// Concatenate span text, delimiters stripped.
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text).collect()
}

struct InlineParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> InlineParser<'a> {
    #[inline]
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> Vec<Inline<'a>> {
        let mut inlines = Vec::with_capacity(8);
        let mut text_start = 0;

        while self.pos < self.bytes.len() {
            // Fast scan for next delimiter candidate using SIMD
            let next_special = match memchr2(b'*', b'~', &self.bytes[self.pos..]) {
                Some(offset) => self.pos + offset,
                None => break,
            };

            self.pos = next_special;

            let parsed = match self.bytes[self.pos] {
                b'*' => {
                    self.try_parse_strong(&mut inlines, &mut text_start)
                        || self.try_parse_emphasis(&mut inlines, &mut text_start)
                }
                b'~' => self.try_parse_strikethrough(&mut inlines, &mut text_start),
                _ => false,
            };

            if !parsed {
                self.pos += 1;
            }
        }

        // Flush remaining text
        if text_start < self.bytes.len() {
            inlines.push(Inline::Text(Cow::Borrowed(&self.text[text_start..])));
        }

        inlines
    }

    #[inline(always)]
    fn flush_text(&self, inlines: &mut Vec<Inline<'a>>, text_start: usize) {
        if text_start < self.pos {
            inlines.push(Inline::Text(Cow::Borrowed(
                &self.text[text_start..self.pos],
            )));
        }
    }

    /// Flush pending text, push `span`, and resume scanning at `end`.
    #[inline]
    fn emit(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
        span: Inline<'a>,
        end: usize,
    ) {
        self.flush_text(inlines, *text_start);
        inlines.push(span);
        self.pos = end;
        *text_start = end;
    }

    #[inline]
    fn try_parse_strong(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        if !self.bytes[self.pos..].starts_with(STRONG) {
            return false;
        }

        let content_start = self.pos + STRONG.len();
        let Some(close) = self.find_emphasis_close(content_start, STRONG) else {
            return false;
        };

        log::trace!("bold span at byte {}..{}", self.pos, close + STRONG.len());
        let content = Cow::Borrowed(&self.text[content_start..close]);
        self.emit(inlines, text_start, Inline::Bold(content), close + STRONG.len());
        true
    }

    #[inline]
    fn try_parse_emphasis(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
    ) -> bool {
        let content_start = self.pos + EMPHASIS.len();

        // A `**` opener belongs to bold, never to italic
        if self.bytes.get(content_start) == Some(&b'*') {
            return false;
        }

        let Some(close) = self.find_emphasis_close(content_start, EMPHASIS) else {
            return false;
        };

        log::trace!("italic span at byte {}..{}", self.pos, close + EMPHASIS.len());
        let content = Cow::Borrowed(&self.text[content_start..close]);
        self.emit(
            inlines,
            text_start,
            Inline::Italic(content),
            close + EMPHASIS.len(),
        );
        true
    }

    #[inline]
    fn try_parse_strikethrough(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
    ) -> bool {
        if !self.bytes[self.pos..].starts_with(STRIKE) {
            return false;
        }

        let content_start = self.pos + STRIKE.len();
        let Some(offset) = memmem::find(&self.bytes[content_start..], STRIKE) else {
            return false;
        };
        let close = content_start + offset;

        let content = &self.text[content_start..close];
        if content.chars().any(is_line_terminator) {
            return false;
        }

        log::trace!("strikethrough span at byte {}..{}", self.pos, close + STRIKE.len());
        self.emit(
            inlines,
            text_start,
            Inline::Strikethrough(Cow::Borrowed(content)),
            close + STRIKE.len(),
        );
        true
    }

    /// Find the shortest emphasis content starting at `content_start`.
    ///
    /// The first and last content characters must be boundary characters and
    /// the last one must be directly followed by `closer`. Characters in
    /// between are unconstrained apart from line terminators. Returns the byte
    /// offset of the closing delimiter.
    fn find_emphasis_close(&self, content_start: usize, closer: &[u8]) -> Option<usize> {
        let mut chars = self.text[content_start..].char_indices();

        let (_, first) = chars.next()?;
        if !is_boundary_char(first) {
            return None;
        }

        let (mut at, mut c) = (content_start, first);
        loop {
            let after = at + c.len_utf8();
            if is_boundary_char(c) && self.bytes[after..].starts_with(closer) {
                return Some(after);
            }
            if at != content_start && is_line_terminator(c) {
                return None;
            }

            let (offset, next) = chars.next()?;
            at = content_start + offset;
            c = next;
        }
    }
}

/// Characters allowed first and last in bold and italic content.
#[inline(always)]
fn is_boundary_char(c: char) -> bool {
    !matches!(c, '*' | ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[inline(always)]
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}
