//! Sanitize command handler.

use super::Commands;
use anyhow::{Context, Result};
use dango_utils::{
    FormatterConfig, ReplyFormatter, clean_newline_backtick, escape_formatting, escape_mentions,
    inline_code,
};
use std::io::Read;
use std::path::PathBuf;

/// Run one transform and return the text to print.
#[tracing::instrument(skip_all, fields(config = ?config))]
pub fn handle_sanitize_command(config: Option<PathBuf>, command: Commands) -> Result<String> {
    let config = match config {
        Some(path) => FormatterConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FormatterConfig::default(),
    };

    let output = match command {
        Commands::EscapeFormatting { text } => escape_formatting(&read_input(text)?),
        Commands::EscapeMentions { text } => escape_mentions(&read_input(text)?),
        Commands::Newline { text } => clean_newline_backtick(&read_input(text)?),
        Commands::Plain { text } => ReplyFormatter::new(config).plain(&read_input(text)?)?,
        Commands::Inline { text, strict: true } => inline_code(&read_input(text)?)?,
        Commands::Inline { text, strict: false } => {
            ReplyFormatter::new(config).inline(&read_input(text)?)?
        }
        Commands::Block { text, language } => {
            let config = match language {
                Some(language) => config.with_block_language(language),
                None => config,
            };
            ReplyFormatter::new(config).code(&read_input(text)?)?
        }
    };

    tracing::info!(chars = output.chars().count(), "Transform complete");
    Ok(output)
}

fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    // A trailing newline from the shell is not part of the message.
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}
