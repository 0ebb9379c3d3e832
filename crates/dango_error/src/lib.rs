//! Error types for the dango chat utility library.
//!
//! Each concern has its own location-tracking error type. [`DangoError`]
//! wraps all of them for callers that just want one error type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod markdown;

pub use config::ConfigError;
pub use markdown::{MarkdownError, MarkdownErrorKind, MarkdownResult};

/// Union of the specific error types.
#[derive(Debug, derive_more::From)]
pub enum DangoErrorKind {
    /// Markdown sanitizing error
    Markdown(MarkdownError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for DangoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DangoErrorKind::Markdown(e) => write!(f, "{}", e),
            DangoErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Dango error wrapping one of the specific error types.
#[derive(Debug)]
pub struct DangoError(Box<DangoErrorKind>);

impl DangoError {
    /// Create a new error from a kind.
    pub fn new(kind: DangoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DangoErrorKind {
        &self.0
    }
}

impl std::fmt::Display for DangoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dango Error: {}", self.0)
    }
}

impl std::error::Error for DangoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            DangoErrorKind::Markdown(e) => Some(e),
            DangoErrorKind::Config(e) => Some(e),
        }
    }
}

impl<T> From<T> for DangoError
where
    T: Into<DangoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for dango operations.
pub type DangoResult<T> = std::result::Result<T, DangoError>;
