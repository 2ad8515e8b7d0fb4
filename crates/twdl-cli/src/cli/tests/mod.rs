//! CLI parse tests.

use super::{Cli, CliCommand, GetArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn parse_get(args: &[&str]) -> GetArgs {
    match parse(args) {
        CliCommand::Get(get) => get,
        other => panic!("expected Get, got {:?}", other),
    }
}

mod rest;
