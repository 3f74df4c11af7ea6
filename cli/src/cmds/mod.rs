use std::error::Error;

use crate::{App, Result};

use clap::{ArgMatches, ErrorKind};
use lodb_core::object::Id;

mod cat_file;
mod decompress;
mod hash_object;
mod init;
mod ls_tree;
mod mktree;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(cat_file::subcommand())
        .subcommand(decompress::subcommand())
        .subcommand(hash_object::subcommand())
        .subcommand(init::subcommand())
        .subcommand(ls_tree::subcommand())
        .subcommand(mktree::subcommand())
}

/// A fully parsed subcommand invocation.
#[derive(Debug)]
pub(crate) enum Command {
    CatFile(cat_file::Args),
    Decompress,
    HashObject(hash_object::Args),
    Init(init::Args),
    LsTree(ls_tree::Args),
    MkTree(mktree::Args),
}

impl Command {
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Command> {
        match matches.subcommand() {
            ("cat-file", Some(m)) => Ok(Command::CatFile(cat_file::Args::from_matches(m)?)),
            ("decompress", Some(_)) => Ok(Command::Decompress),
            ("hash-object", Some(m)) => Ok(Command::HashObject(hash_object::Args::from_matches(m)?)),
            ("init", Some(m)) => Ok(Command::Init(init::Args::from_matches(m))),
            ("ls-tree", Some(m)) => Ok(Command::LsTree(ls_tree::Args::from_matches(m)?)),
            ("mktree", Some(m)) => Ok(Command::MkTree(mktree::Args::from_matches(m))),
            // clap exits with help before we get here when no subcommand
            // is given.
            (name, _) => Err(usage_error(
                ErrorKind::UnrecognizedSubcommand,
                format!("unrecognized subcommand '{}'", name),
            )),
        }
    }
}

pub(crate) fn dispatch(app: &mut App) -> Result<()> {
    let command = Command::from_matches(&app.arg_matches)?;

    match command {
        Command::CatFile(args) => cat_file::run(app, args),
        Command::Decompress => decompress::run(app),
        Command::HashObject(args) => hash_object::run(app, args),
        Command::Init(args) => init::run(app, args),
        Command::LsTree(args) => ls_tree::run(app, args),
        Command::MkTree(args) => mktree::run(app, args),
    }
}

pub(crate) fn usage_error<S: Into<String>>(kind: ErrorKind, message: S) -> Box<dyn Error> {
    Box::new(clap::Error {
        message: message.into(),
        kind,
        info: None,
    })
}

pub(crate) fn parse_id(value: &str) -> Result<Id> {
    value.parse::<Id>().map_err(|err| {
        usage_error(
            ErrorKind::InvalidValue,
            format!("not a valid object name {}: {}", value, err),
        )
    })
}
