//! mdl - Parse, inspect, and render mdlite documents
//!
//! Usage:
//!   mdl [OPTIONS] <COMMAND> [FILE]
//!
//! Commands:
//!   parse     Display document structure, or JSON with --json
//!   render    Render the document as plain text
//!   stats     Show document statistics

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as _;
use mdlite_core::inline::to_markup;
use mdlite_core::lexer::Lexer;
use mdlite_core::{Block, Document, Inline, Renderer, SourceDocument};

mod cli;
mod config;

use cli::{Cli, Commands};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse { file, json } => {
            let source = read_source(file.as_deref())?;
            let doc = source.parse();
            if json {
                print_json(&doc)
            } else {
                print_document_summary(&doc, cli.verbose);
                Ok(())
            }
        }
        Commands::Render { file, ansi } => {
            let config = load_config(cli.config.as_deref())?;
            let source = read_source(file.as_deref())?;
            cmd_render(&source, &config, ansi);
            Ok(())
        }
        Commands::Stats { file } => {
            let source = read_source(file.as_deref())?;
            cmd_stats(&source);
            Ok(())
        }
    }
}

/// Only `render` reads the configuration.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let (config, config_path) = config::load(explicit, &cwd)?;
    match &config_path {
        Some(path) => log::debug!("using config from {}", path.display()),
        None => log::debug!("using default config"),
    }
    Ok(config)
}

/// Read the input document; `None` and `-` mean stdin.
fn read_source(file: Option<&Path>) -> Result<SourceDocument> {
    match file {
        Some(path) if path != Path::new("-") => Ok(SourceDocument::load(path)?),
        _ => Ok(SourceDocument::read_from(io::stdin().lock())?),
    }
}

fn source_name(source: &SourceDocument) -> PathBuf {
    source
        .path()
        .map_or_else(|| PathBuf::from("<stdin>"), Path::to_path_buf)
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(source: &SourceDocument, config: &Config, ansi: bool) {
    let renderer = Renderer::new(config.render.to_options(ansi));
    let doc = source.parse();
    log::debug!(
        "rendering {} blocks from {}",
        doc.len(),
        source_name(source).display()
    );
    print!("{}", renderer.render(&doc));
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
struct DocumentStats {
    total_blocks: usize,
    headers: usize,
    paragraphs: usize,
    images: usize,
    tables: usize,
    dividers: usize,
    bold: usize,
    italic: usize,
    strikethrough: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn collect(text: &str, doc: &Document) -> Self {
        let mut stats = Self {
            total_blocks: doc.len(),
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
            lines: count_lines(text),
            ..Self::default()
        };

        for block in doc {
            match block {
                Block::Header { .. } => stats.headers += 1,
                Block::Paragraph { .. } => stats.paragraphs += 1,
                Block::Image { .. } => stats.images += 1,
                Block::Table { .. } => stats.tables += 1,
                Block::Divider => stats.dividers += 1,
            }
            for inline in block.content().unwrap_or_default() {
                match inline {
                    Inline::Text(_) => {}
                    Inline::Bold(_) => stats.bold += 1,
                    Inline::Italic(_) => stats.italic += 1,
                    Inline::Strikethrough(_) => stats.strikethrough += 1,
                }
            }
        }

        stats
    }
}

/// Line count using the parser's line breaks, lone `\r` included.
fn count_lines(text: &str) -> usize {
    let mut lexer = Lexer::new(text);
    let mut count = 0;
    while lexer.next_line().is_some() {
        count += 1;
    }
    count
}

fn cmd_stats(source: &SourceDocument) {
    let doc = source.parse();
    let stats = DocumentStats::collect(source.text(), &doc);

    println!("Document Statistics");
    println!("-------------------");
    println!("Source:         {}", source_name(source).display());
    println!();
    println!("Blocks:");
    println!("  Total:          {}", stats.total_blocks);
    println!("  Headers:        {}", stats.headers);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Images:         {}", stats.images);
    println!("  Tables:         {}", stats.tables);
    println!("  Dividers:       {}", stats.dividers);
    println!();
    println!("Spans:");
    println!("  Bold:           {}", stats.bold);
    println!("  Italic:         {}", stats.italic);
    println!("  Strikethrough:  {}", stats.strikethrough);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words:          {}", stats.words);
    println!("  Lines:          {}", stats.lines);
}

// =============================================================================
// Parse Command
// =============================================================================

fn print_json(doc: &Document) -> Result<()> {
    let json = serde_json::to_string_pretty(doc).context("failed to serialise document")?;
    println!("{}", json);
    Ok(())
}

fn print_document_summary(doc: &Document, verbose: bool) {
    println!("Blocks: {}", doc.len());
    for (i, block) in doc.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_block(block));
        if verbose {
            print_block_verbose(block, 2);
        }
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Header { level, content } => {
            format!("Header (level {}, {} spans)", level, content.len())
        }
        Block::Paragraph { content } => format!("Paragraph ({} spans)", content.len()),
        Block::Image { url } => format!("Image (url: {})", url),
        Block::Table { headers, rows } => {
            format!("Table ({} columns, {} rows)", headers.len(), rows.len())
        }
        Block::Divider => "Divider".to_string(),
    }
}

fn print_block_verbose(block: &Block, indent: usize) {
    let prefix = "  ".repeat(indent);

    match block {
        Block::Header { content, .. } | Block::Paragraph { content } => {
            println!("{}Content: {}", prefix, to_markup(content));
        }
        Block::Table { headers, rows } => {
            println!("{}Header: {}", prefix, headers.join(" | "));
            for (i, row) in rows.iter().enumerate() {
                println!("{}Row {}: {}", prefix, i + 1, row.join(" | "));
            }
        }
        Block::Image { .. } | Block::Divider => {}
    }
}
