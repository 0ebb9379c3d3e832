//! Tests for reply formatting and its configuration.

use dango_utils::*;
use std::io::Write;

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = FormatterConfig::default();
    assert_eq!(*config.max_message_length(), DEFAULT_MAX_MESSAGE_LENGTH);
    assert!(*config.escape_mentions());
    assert_eq!(config.block_language(), &None);
}

#[test]
fn test_config_empty_toml_uses_defaults() {
    let config = FormatterConfig::from_toml("").unwrap();
    assert_eq!(config, FormatterConfig::default());
}

#[test]
fn test_config_from_toml() {
    let config = FormatterConfig::from_toml(
        r#"
        max_message_length = 500
        escape_mentions = false
        block_language = "json"
        "#,
    )
    .unwrap();

    assert_eq!(*config.max_message_length(), 500);
    assert!(!*config.escape_mentions());
    assert_eq!(config.block_language().as_deref(), Some("json"));
}

#[test]
fn test_config_rejects_zero_limit() {
    let err = FormatterConfig::from_toml("max_message_length = 0").unwrap_err();
    assert!(matches!(err.kind(), DangoErrorKind::Config(_)));
}

#[test]
fn test_config_rejects_bad_toml() {
    let err = FormatterConfig::from_toml("max_message_length = \"lots\"").unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "block_language = \"rust\"").unwrap();

    let config = FormatterConfig::from_file(file.path()).unwrap();
    assert_eq!(config.block_language().as_deref(), Some("rust"));
    assert_eq!(*config.max_message_length(), DEFAULT_MAX_MESSAGE_LENGTH);
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FormatterConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_plain_escapes_formatting_and_mentions() {
    let formatter = ReplyFormatter::default();
    assert_eq!(
        formatter.plain("**hi** @everyone").unwrap(),
        "\\*\\*hi\\*\\* @\u{200b}everyone"
    );
}

#[test]
fn test_plain_without_mention_escaping() {
    let config = FormatterConfig::new().with_escape_mentions(false);
    let formatter = ReplyFormatter::new(config);
    assert_eq!(formatter.plain("_hi_ @here").unwrap(), r"\_hi\_ @here");
}

#[test]
fn test_code_uses_configured_language() {
    let config = FormatterConfig::new().with_block_language("json");
    let formatter = ReplyFormatter::new(config);
    assert_eq!(formatter.code("{}").unwrap(), "```json\n{}```");
}

#[test]
fn test_inline_falls_back_to_block() {
    let formatter = ReplyFormatter::default();
    assert_eq!(formatter.inline("x").unwrap(), "`x`");
    assert_eq!(formatter.inline("a ` b").unwrap(), "```a ` b```");
}

#[test]
fn test_message_limit() {
    let config = FormatterConfig::new().with_max_message_length(8);
    let formatter = ReplyFormatter::new(config);

    assert_eq!(formatter.code("ab").unwrap(), "```ab```");
    let err = formatter.code("abc").unwrap_err();
    assert_eq!(
        err.kind(),
        &MarkdownErrorKind::MessageTooLong {
            length: 9,
            limit: 8
        }
    );
}

#[test]
fn test_message_limit_counts_characters() {
    let config = FormatterConfig::new().with_max_message_length(4);
    let formatter = ReplyFormatter::new(config);
    assert_eq!(formatter.plain("éééé").unwrap(), "éééé");
}
