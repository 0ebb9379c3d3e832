//! Markdown sanitizing error types.

/// Kinds of markdown sanitizing errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MarkdownErrorKind {
    /// A lone backtick inside the text cannot be represented in an inline code span
    #[display("Ambiguous escape: lone backtick at character {}", position)]
    AmbiguousEscape {
        /// Character index of the offending backtick
        position: usize,
    },
    /// Rendered reply exceeds the platform message limit
    #[display("Message too long: {} characters, limit is {}", length, limit)]
    MessageTooLong {
        /// Length of the rendered reply in characters
        length: usize,
        /// Configured maximum length
        limit: usize,
    },
}

/// Markdown error with location tracking.
///
/// # Examples
///
/// ```
/// use dango_error::{MarkdownError, MarkdownErrorKind};
///
/// let err = MarkdownError::new(MarkdownErrorKind::AmbiguousEscape { position: 5 });
/// assert!(format!("{}", err).contains("lone backtick"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Markdown Error: {} at line {} in {}", kind, line, file)]
pub struct MarkdownError {
    /// The kind of error that occurred
    pub kind: MarkdownErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MarkdownError {
    /// Create a new markdown error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MarkdownErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarkdownErrorKind {
        &self.kind
    }
}

/// Result type for markdown operations.
pub type MarkdownResult<T> = Result<T, MarkdownError>;
