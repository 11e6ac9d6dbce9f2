//! Session Tests
//!
//! Input interpretation, prompt text and database tracking.

use kvwire::error::TokenizeError;
use kvwire::protocol::Reply;
use kvwire::shell::{Input, Session};

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Input Tests
// =============================================================================

#[test]
fn test_parse_command() {
    assert_eq!(
        Session::parse_input("SET k \"v 1\"\n").unwrap(),
        Input::Command(args(&["SET", "k", "v 1"]))
    );
}

#[test]
fn test_blank_lines_never_reach_the_encoder() {
    assert_eq!(Session::parse_input("").unwrap(), Input::Empty);
    assert_eq!(Session::parse_input("   \r\n").unwrap(), Input::Empty);
    assert_eq!(Session::parse_input("\t\t").unwrap(), Input::Empty);
}

#[test]
fn test_quit_is_case_insensitive() {
    assert_eq!(Session::parse_input("quit").unwrap(), Input::Quit);
    assert_eq!(Session::parse_input("  QUIT \n").unwrap(), Input::Quit);
    assert_eq!(
        Session::parse_input("quit now").unwrap(),
        Input::Command(args(&["quit", "now"]))
    );
}

#[test]
fn test_outer_tabs_are_trimmed() {
    assert_eq!(
        Session::parse_input("\tGET k\t").unwrap(),
        Input::Command(args(&["GET", "k"]))
    );
}

#[test]
fn test_tokenize_error_surfaces() {
    assert!(matches!(
        Session::parse_input("GET \"k"),
        Err(TokenizeError::UnterminatedQuote { .. })
    ));
}

// =============================================================================
// Prompt and Database Tests
// =============================================================================

#[test]
fn test_default_prompt() {
    let session = Session::new("127.0.0.1:6379");
    assert_eq!(session.prompt(), "redis 127.0.0.1:6379>");
    assert_eq!(session.db(), 0);
}

#[test]
fn test_select_changes_prompt() {
    let mut session = Session::new("127.0.0.1:6379");
    session.observe(&args(&["select", "2"]), &Reply::Status("OK".into()));

    assert_eq!(session.db(), 2);
    assert_eq!(session.prompt(), "redis 127.0.0.1:6379[2]>");

    session.observe(&args(&["SELECT", "0"]), &Reply::Status("OK".into()));
    assert_eq!(session.prompt(), "redis 127.0.0.1:6379>");
}

#[test]
fn test_failed_select_keeps_database() {
    let mut session = Session::new("h:1");
    session.observe(&args(&["SELECT", "3"]), &Reply::Status("OK".into()));
    session.observe(
        &args(&["SELECT", "99"]),
        &Reply::Error("ERR DB index is out of range".into()),
    );

    assert_eq!(session.db(), 3);
}

#[test]
fn test_other_commands_ignored() {
    let mut session = Session::new("h:1");
    session.observe(&args(&["SET", "5"]), &Reply::Status("OK".into()));
    session.observe(&args(&["SELECT"]), &Reply::Status("OK".into()));
    session.observe(&args(&["SELECT", "abc"]), &Reply::Status("OK".into()));

    assert_eq!(session.db(), 0);
}
