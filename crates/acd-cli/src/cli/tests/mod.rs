//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_check_id() {
    match parse(&["acd", "check-id", "abc", "def"]) {
        CliCommand::CheckId { ids } => assert_eq!(ids, vec!["abc", "def"]),
        _ => panic!("expected CheckId"),
    }
}

#[test]
fn cli_parse_check_id_requires_an_id() {
    assert!(Cli::try_parse_from(["acd", "check-id"]).is_err());
}

#[test]
fn cli_parse_get() {
    match parse(&["acd", "get", "https://example.com/nodes"]) {
        CliCommand::Get { url, content } => {
            assert_eq!(url, "https://example.com/nodes");
            assert!(!content);
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_content() {
    match parse(&["acd", "get", "nodes/abc/content", "--content"]) {
        CliCommand::Get { url, content } => {
            assert_eq!(url, "nodes/abc/content");
            assert!(content);
        }
        _ => panic!("expected Get --content"),
    }
}

#[test]
fn cli_parse_codes() {
    match parse(&["acd", "codes"]) {
        CliCommand::Codes { json } => assert!(!json),
        _ => panic!("expected Codes"),
    }
    match parse(&["acd", "codes", "--json"]) {
        CliCommand::Codes { json } => assert!(json),
        _ => panic!("expected Codes --json"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["acd", "sync"]).is_err());
}
