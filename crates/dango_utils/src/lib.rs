//! Utility library for the dango chat bot.
//!
//! Two independent components:
//!
//! - [`TypeMap`] resolves a value for a runtime type by walking its declared
//!   ancestor chain ([`TypeDescriptor`]), caching the answer per type. Commands
//!   use it to pick per-kind behavior, e.g. how to describe a chat object.
//! - The [`markdown`] transforms let arbitrary user text be echoed inside chat
//!   markdown (plain text, inline code, fenced blocks) without breaking the
//!   rendering. [`ReplyFormatter`] bundles them behind a [`FormatterConfig`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod descriptor;
mod formatter;
pub mod markdown;
mod type_map;

pub use dango_error::{
    ConfigError, DangoError, DangoErrorKind, DangoResult, MarkdownError, MarkdownErrorKind,
    MarkdownResult,
};
pub use descriptor::{Described, TypeDescriptor};
pub use formatter::{DEFAULT_MAX_MESSAGE_LENGTH, FormatterConfig, ReplyFormatter};
pub use markdown::{
    ZERO_WIDTH_SPACE, clean_newline_backtick, clean_single_backtick, clean_triple_backtick,
    code_block, display_code, escape_formatting, escape_mentions, inline_code, strip_markers,
};
pub use type_map::TypeMap;
