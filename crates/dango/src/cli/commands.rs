//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sanitize chat text for markdown display.
#[derive(Debug, Parser)]
#[command(name = "dango", version, about)]
pub struct Cli {
    /// Formatter configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Transform to apply
    #[command(subcommand)]
    pub command: Commands,
}

/// Available transforms. Each reads TEXT, or stdin when TEXT is omitted.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Backslash-escape `*`, `` ` `` and `_`
    EscapeFormatting {
        /// Text to transform
        text: Option<String>,
    },
    /// Defuse @everyone, @here and user mentions
    EscapeMentions {
        /// Text to transform
        text: Option<String>,
    },
    /// Escape a dangling backtick run
    Newline {
        /// Text to transform
        text: Option<String>,
    },
    /// Render as a plain reply (formatting and mentions escaped)
    Plain {
        /// Text to transform
        text: Option<String>,
    },
    /// Render as inline code, falling back to a fenced block
    Inline {
        /// Text to transform
        text: Option<String>,

        /// Fail instead of falling back when inline code is ambiguous
        #[arg(long)]
        strict: bool,
    },
    /// Render as a fenced code block
    Block {
        /// Text to transform
        text: Option<String>,

        /// Language tag, overriding the configured one
        #[arg(short, long)]
        language: Option<String>,
    },
}
