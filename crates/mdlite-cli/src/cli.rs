use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mdl")]
#[command(author, version)]
#[command(about = "Parse, inspect, and render mdlite documents")]
#[command(after_help = "\
EXAMPLES:

    # Show the block structure of a file
    mdl parse notes.md

    # Dump the document as JSON
    mdl parse --json notes.md

    # Render from stdin with terminal styling
    cat notes.md | mdl render --ansi

    # Count blocks, words, and lines
    mdl stats notes.md

CONFIGURATION:

Without --config, mdlite.toml in the current directory is used if present.

    [render]
    header_markers = true
    header_marker = \"#\"
    rule_char = \"─\"
    rule_width = 40
    image_placeholder = \"[image: {url}]\"
    ansi = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show block content and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a document and print its block structure
    Parse {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Print the document as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Render a document as plain text
    Render {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Style spans with ANSI escape codes
        #[arg(long)]
        ansi: bool,
    },
    /// Show document statistics
    Stats {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
}
