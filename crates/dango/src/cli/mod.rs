//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the dango binary.

mod commands;
mod sanitize;

pub use commands::{Cli, Commands};
pub use sanitize::handle_sanitize_command;
