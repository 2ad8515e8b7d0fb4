//! Tests for list and tools.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_list() {
    match parse(&["twdl", "list", "a.txt", "https://x.com/u/status/1"]) {
        CliCommand::List { targets } => {
            assert_eq!(targets, vec!["a.txt", "https://x.com/u/status/1"])
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_requires_targets() {
    assert!(Cli::try_parse_from(["twdl", "list"]).is_err());
}

#[test]
fn cli_parse_tools() {
    match parse(&["twdl", "tools"]) {
        CliCommand::Tools => {}
        _ => panic!("expected Tools"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["twdl", "fetch", "u"]).is_err());
}
