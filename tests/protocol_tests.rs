//! Tests for the command protocol
//!
//! These tests verify:
//! - Parsing of all three command forms
//! - Argument-count rules per verb
//! - Case-insensitive verbs
//! - Reply rendering

use emberkv::protocol::{Command, Reply};

// =============================================================================
// Command Parsing Tests
// =============================================================================

#[test]
fn test_parse_set() {
    let command = Command::parse("SET key value").unwrap();

    assert_eq!(
        command,
        Command::Set {
            key: "key".to_string(),
            value: "value".to_string(),
        }
    );
}

#[test]
fn test_parse_set_value_is_everything_after_key() {
    let command = Command::parse("SET greeting hello world again").unwrap();

    assert_eq!(
        command,
        Command::Set {
            key: "greeting".to_string(),
            value: "hello world again".to_string(),
        }
    );
}

#[test]
fn test_parse_get() {
    let command = Command::parse("GET key").unwrap();

    assert_eq!(
        command,
        Command::Get {
            key: "key".to_string(),
        }
    );
}

#[test]
fn test_parse_exit() {
    assert_eq!(Command::parse("EXIT").unwrap(), Command::Exit);
}

#[test]
fn test_parse_verbs_are_case_insensitive() {
    assert!(matches!(
        Command::parse("set a 1").unwrap(),
        Command::Set { .. }
    ));
    assert!(matches!(
        Command::parse("get a").unwrap(),
        Command::Get { .. }
    ));
    assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
}

#[test]
fn test_parse_wrong_argument_counts_are_invalid() {
    assert!(Command::parse("SET key").is_err());
    assert!(Command::parse("GET key extra").is_err());
    assert!(Command::parse("GET").is_err());
    assert!(Command::parse("EXIT now").is_err());
}

#[test]
fn test_parse_unknown_verbs_are_invalid() {
    assert!(Command::parse("DEL key").is_err());
    assert!(Command::parse("hello").is_err());
}

// =============================================================================
// Reply Rendering Tests
// =============================================================================

#[test]
fn test_reply_value_renders_as_itself() {
    assert_eq!(Reply::value("hello world").to_string(), "hello world");
}

#[test]
fn test_reply_not_found_renders_null() {
    assert_eq!(Reply::not_found().to_string(), "NULL");
}

#[test]
fn test_reply_invalid_echoes_the_line() {
    assert_eq!(
        Reply::invalid("FROB a b").to_string(),
        "Invalid command: FROB a b"
    );
}
