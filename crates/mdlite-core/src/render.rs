//! Plain-text presentation of parsed documents.
//!
//! Maps each block to a terminal-friendly primitive: headers become marked
//! lines, tables become padded grids, dividers become rules, and images are
//! shown as a placeholder since nothing is fetched.

use crate::ast::{Block, CowStr, Document, Inline};

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_ITALIC: &str = "\x1b[3m";
const ANSI_STRIKE: &str = "\x1b[9m";
const ANSI_RESET: &str = "\x1b[0m";

/// How inline styles are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Span text only.
    #[default]
    Plain,
    /// ANSI escape sequences for bold, italic, and strikethrough.
    Ansi,
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Inline styling.
    pub style: Style,
    /// Prefix headers with `header_marker` repeated per level.
    pub header_markers: bool,
    /// Marker used for header prefixes.
    pub header_marker: String,
    /// Character dividers are drawn with.
    pub rule_char: char,
    /// Divider length in characters.
    pub rule_width: usize,
    /// Image placeholder; `{url}` is replaced by the image URL.
    pub image_placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: Style::Plain,
            header_markers: true,
            header_marker: "#".to_string(),
            rule_char: '─',
            rule_width: 40,
            image_placeholder: "[image: {url}]".to_string(),
        }
    }
}

/// Renders documents to plain text.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a whole document, one block after another.
    pub fn render(&self, doc: &Document) -> String {
        let mut out = String::new();
        for block in doc {
            self.render_block(block, &mut out);
            out.push('\n');
        }
        out
    }

    /// Render one block without a trailing newline.
    pub fn render_block(&self, block: &Block, out: &mut String) {
        match block {
            Block::Header { level, content } => self.render_header(*level, content, out),
            Block::Paragraph { content } => self.render_inlines(content, None, out),
            Block::Image { url } => {
                out.push_str(&self.options.image_placeholder.replace("{url}", url));
            }
            Block::Table { headers, rows } => self.render_table(headers, rows, out),
            Block::Divider => {
                let rule = std::iter::repeat(self.options.rule_char).take(self.options.rule_width);
                out.extend(rule);
            }
        }
    }

    fn render_header(&self, level: u32, content: &[Inline], out: &mut String) {
        if self.options.header_markers {
            // No dedicated style past level 6
            let depth = if (1..=6).contains(&level) { level } else { 1 };
            for _ in 0..depth {
                out.push_str(&self.options.header_marker);
            }
            out.push(' ');
        }

        if self.options.style == Style::Ansi {
            out.push_str(ANSI_BOLD);
            self.render_inlines(content, Some(ANSI_BOLD), out);
            out.push_str(ANSI_RESET);
        } else {
            self.render_inlines(content, None, out);
        }
    }

    /// `restore` is re-emitted after each span reset to keep the enclosing
    /// style.
    fn render_inlines(&self, inlines: &[Inline], restore: Option<&str>, out: &mut String) {
        for inline in inlines {
            let open = match (self.options.style, inline) {
                (Style::Plain, _) | (_, Inline::Text(_)) => None,
                (Style::Ansi, Inline::Bold(_)) => Some(ANSI_BOLD),
                (Style::Ansi, Inline::Italic(_)) => Some(ANSI_ITALIC),
                (Style::Ansi, Inline::Strikethrough(_)) => Some(ANSI_STRIKE),
            };
            match open {
                Some(code) => {
                    out.push_str(code);
                    out.push_str(inline.text());
                    out.push_str(ANSI_RESET);
                    if let Some(code) = restore {
                        out.push_str(code);
                    }
                }
                None => out.push_str(inline.text()),
            }
        }
    }

    /// Padded grid: header line, `-` rule, data rows. Ragged rows keep their
    /// own length.
    fn render_table<'a>(
        &self,
        headers: &[CowStr<'a>],
        rows: &[Vec<CowStr<'a>>],
        out: &mut String,
    ) {
        let columns = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        push_table_row(headers, &widths, out);
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        for row in rows {
            out.push('\n');
            push_table_row(row, &widths, out);
        }
    }
}

fn push_table_row(cells: &[CowStr], widths: &[usize], out: &mut String) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
}
