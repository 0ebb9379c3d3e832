//! Markdown-safe text sanitizing.
//!
//! These transforms prepare arbitrary user text for being echoed back inside
//! chat markdown. The `escape_*` functions neutralize formatting and pings in
//! plain messages. The `clean_*` functions rewrite text so it can be wrapped
//! in an inline code span or a fenced code block and still display exactly as
//! typed. They only ever insert zero-width spaces, so [`strip_markers`]
//! recovers the input.
//!
//! All positions are counted in characters (Unicode scalar values), not bytes.

use dango_error::{MarkdownError, MarkdownErrorKind, MarkdownResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Invisible separator used to break up markdown tokens.
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

const BACKTICK: char = '`';

static MASS_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(everyone|here)").expect("valid mass mention pattern"));

static ID_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@([!&]?[0-9]+>)").expect("valid id mention pattern"));

/// Maximal run of consecutive backticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    len: usize,
}

impl Run {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Find backtick runs. With `skip_escaped`, a backtick preceded by an
/// unescaped backslash is literal and does not start a run.
fn backtick_runs(chars: &[char], skip_escaped: bool) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != BACKTICK || (skip_escaped && is_escaped(chars, i)) {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i] == BACKTICK {
            i += 1;
        }
        runs.push(Run {
            start,
            len: i - start,
        });
    }
    runs
}

fn is_escaped(chars: &[char], i: usize) -> bool {
    chars[..i].iter().rev().take_while(|&&c| c == '\\').count() % 2 == 1
}

/// Backslash-escape `*`, `` ` `` and `_` so they render literally.
///
/// ```
/// assert_eq!(dango_utils::escape_formatting("__init__"), r"\_\_init\_\_");
/// ```
pub fn escape_formatting(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '`' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Defuse `@everyone`, `@here` and user/role mentions.
///
/// A zero-width space goes right after the `@`, so the text still reads the
/// same but no longer notifies anyone.
pub fn escape_mentions(text: &str) -> String {
    let text = MASS_MENTION.replace_all(text, "@\u{200b}$1");
    ID_MENTION.replace_all(&text, "<@\u{200b}$1").into_owned()
}

/// Prepare `text` for a single-backtick inline code span.
///
/// A leading run of two or more backticks gets a zero-width space in front
/// of it and a trailing run of any length gets one after it, so neither
/// merges with the wrapping delimiter. Interior runs of two or more are left
/// alone.
///
/// # Errors
///
/// Fails with [`MarkdownErrorKind::AmbiguousEscape`] when a single backtick
/// sits in the interior of the text; it would close the span early.
#[instrument(skip_all, fields(chars))]
pub fn clean_single_backtick(text: &str) -> MarkdownResult<String> {
    let chars: Vec<char> = text.chars().collect();
    tracing::Span::current().record("chars", chars.len());
    let runs = backtick_runs(&chars, false);

    if let Some(lone) = runs
        .iter()
        .find(|r| r.len == 1 && r.start != 0 && r.end() != chars.len())
    {
        debug!(position = lone.start, "Lone interior backtick");
        return Err(MarkdownError::new(MarkdownErrorKind::AmbiguousEscape {
            position: lone.start,
        }));
    }

    let mut out = String::with_capacity(text.len() + 2 * ZERO_WIDTH_SPACE.len_utf8());
    if runs.first().is_some_and(|r| r.start == 0 && r.len >= 2) {
        out.push(ZERO_WIDTH_SPACE);
    }
    out.push_str(text);
    if runs.last().is_some_and(|r| r.end() == chars.len()) {
        out.push(ZERO_WIDTH_SPACE);
    }
    Ok(out)
}

/// Prepare `text` for a triple-backtick fenced code block.
///
/// Every run of three or more backticks is split into pairs separated by
/// zero-width spaces, and a run that ends the text gets a zero-width space
/// appended so it cannot extend the closing fence. Never fails.
///
/// ```
/// assert_eq!(dango_utils::clean_triple_backtick("```"), "``\u{200b}`\u{200b}");
/// ```
#[instrument(skip_all, fields(chars))]
pub fn clean_triple_backtick(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    tracing::Span::current().record("chars", chars.len());
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for run in backtick_runs(&chars, false) {
        out.extend(&chars[copied..run.start]);
        for n in 0..run.len {
            if n > 0 && n % 2 == 0 {
                out.push(ZERO_WIDTH_SPACE);
            }
            out.push(BACKTICK);
        }
        if run.end() == chars.len() {
            out.push(ZERO_WIDTH_SPACE);
        }
        copied = run.end();
    }
    out.extend(&chars[copied..]);
    out
}

/// Escape a backtick run that never gets closed.
///
/// Runs pair up left to right, each one closing the run before it. When the
/// count is odd, the last run is dangling and would swallow whatever follows
/// the text (typically the next line of a reply), so each of its backticks is
/// backslash-escaped. Backticks that are already escaped are not counted.
pub fn clean_newline_backtick(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let runs = backtick_runs(&chars, true);
    let Some(dangling) = runs.last().filter(|_| runs.len() % 2 == 1) else {
        return text.to_string();
    };
    debug!(start = dangling.start, len = dangling.len, "Escaping unclosed backtick run");

    let mut out = String::with_capacity(text.len() + dangling.len);
    out.extend(&chars[..dangling.start]);
    for _ in 0..dangling.len {
        out.push('\\');
        out.push(BACKTICK);
    }
    out.extend(&chars[dangling.end()..]);
    out
}

/// Remove every zero-width space, undoing the `clean_*` transforms.
pub fn strip_markers(text: &str) -> String {
    text.chars().filter(|&c| c != ZERO_WIDTH_SPACE).collect()
}

/// Wrap `text` in an inline code span.
///
/// # Errors
///
/// Same as [`clean_single_backtick`].
pub fn inline_code(text: &str) -> MarkdownResult<String> {
    Ok(format!("`{}`", clean_single_backtick(text)?))
}

/// Wrap `text` in a fenced code block, optionally tagged with a language.
///
/// ```
/// assert_eq!(dango_utils::code_block("{}", Some("json")), "```json\n{}```");
/// ```
pub fn code_block(text: &str, language: Option<&str>) -> String {
    let header = language.map(|l| format!("{l}\n")).unwrap_or_default();
    format!("```{}{}```", header, clean_triple_backtick(text))
}

/// Wrap `text` in inline code, or in a fenced block when inline code cannot
/// represent it.
pub fn display_code(text: &str) -> String {
    match inline_code(text) {
        Ok(inline) => inline,
        Err(e) => {
            debug!(error = %e, "Falling back to fenced code block");
            code_block(text, None)
        }
    }
}
