use std::io::Write;

use super::parse_id;
use crate::{find_repo, App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use lodb_core::object::{FileMode, Id, Kind, TreeEntry};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("ls-tree")
        .about("List the contents of a tree object")
        .arg(
            Arg::with_name("name-only")
                .long("name-only")
                .help("List only filenames, one per line"),
        )
        .arg(
            Arg::with_name("tree")
                .required(true)
                .help("ID of the tree to list"),
        )
}

#[derive(Debug)]
pub(crate) struct Args {
    id: Id,
    name_only: bool,
}

impl Args {
    pub(crate) fn from_matches(m: &ArgMatches) -> Result<Args> {
        Ok(Args {
            id: parse_id(m.value_of("tree").unwrap_or_default())?,
            name_only: m.is_present("name-only"),
        })
    }
}

pub(crate) fn run(app: &mut App, args: Args) -> Result<()> {
    let repo = find_repo::from_git_dir_or_cwd(app.git_dir())?;
    let entries = repo.list_tree(&args.id)?;

    for entry in &entries {
        if args.name_only {
            writeln!(app, "{}", entry.name())?;
        } else {
            writeln!(app, "{}", format_entry(entry))?;
        }
    }

    Ok(())
}

/// The kind of object a tree entry with this mode points at.
pub(crate) fn entry_kind(mode: FileMode) -> Kind {
    match mode {
        FileMode::Tree => Kind::Tree,
        FileMode::Submodule => Kind::Commit,
        FileMode::Normal | FileMode::Executable | FileMode::SymbolicLink => Kind::Blob,
    }
}

/// Render an entry as `<mode> <kind> <id>\t<name>`, with the mode padded
/// to six digits.
pub(crate) fn format_entry(entry: &TreeEntry) -> String {
    format!(
        "{:06o} {} {}\t{}",
        entry.mode().to_value(),
        entry_kind(entry.mode()),
        entry.id(),
        entry.name()
    )
}
