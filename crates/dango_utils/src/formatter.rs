//! Reply formatting for echoing user text back to a channel.

use crate::markdown::{code_block, display_code, escape_formatting, escape_mentions};
use dango_error::{ConfigError, DangoResult, MarkdownError, MarkdownErrorKind, MarkdownResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Default platform message limit, in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2000;

fn default_max_message_length() -> usize {
    DEFAULT_MAX_MESSAGE_LENGTH
}

fn default_escape_mentions() -> bool {
    true
}

/// Reply formatting configuration.
///
/// ```toml
/// max_message_length = 2000
/// escape_mentions = true
/// block_language = "json"
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_new::new,
)]
#[setters(prefix = "with_")]
pub struct FormatterConfig {
    /// Longest reply allowed, in characters
    #[serde(default = "default_max_message_length")]
    #[new(value = "DEFAULT_MAX_MESSAGE_LENGTH")]
    max_message_length: usize,

    /// Whether plain replies defuse mentions
    #[serde(default = "default_escape_mentions")]
    #[new(value = "true")]
    escape_mentions: bool,

    /// Language tag for fenced code blocks
    #[serde(default)]
    #[new(default)]
    #[setters(strip_option, into)]
    block_language: Option<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterConfig {
    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> DangoResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> DangoResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.max_message_length == 0 {
            return Err(ConfigError::new("max_message_length must be positive").into());
        }
        debug!(?config, "Loaded formatter config");
        Ok(config)
    }
}

/// Formats replies that echo arbitrary user text.
#[derive(Debug, Clone, Default, derive_getters::Getters, derive_new::new)]
pub struct ReplyFormatter {
    config: FormatterConfig,
}

impl ReplyFormatter {
    /// Plain message text with formatting (and, if enabled, mentions) escaped.
    #[instrument(skip_all)]
    pub fn plain(&self, text: &str) -> MarkdownResult<String> {
        let mut reply = escape_formatting(text);
        if self.config.escape_mentions {
            reply = escape_mentions(&reply);
        }
        self.checked(reply)
    }

    /// Text shown verbatim in a fenced code block.
    #[instrument(skip_all)]
    pub fn code(&self, text: &str) -> MarkdownResult<String> {
        self.checked(code_block(text, self.config.block_language.as_deref()))
    }

    /// Text shown verbatim as inline code, or as a fenced block when inline
    /// code cannot represent it.
    #[instrument(skip_all)]
    pub fn inline(&self, text: &str) -> MarkdownResult<String> {
        self.checked(display_code(text))
    }

    fn checked(&self, reply: String) -> MarkdownResult<String> {
        let length = reply.chars().count();
        let limit = self.config.max_message_length;
        if length > limit {
            debug!(length, limit, "Reply exceeds message limit");
            return Err(MarkdownError::new(MarkdownErrorKind::MessageTooLong {
                length,
                limit,
            }));
        }
        Ok(reply)
    }
}
