use std::io::Write;

use super::{ls_tree::entry_kind, parse_id, usage_error};
use crate::{find_repo, App, Result};

use clap::{Arg, ArgMatches, ErrorKind, SubCommand};
use lodb_core::object::{FileMode, Kind, TreeEntry};
use lodb_on_disk::OnDiskRepo;
use tracing::debug;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("mktree")
        .about("Build a tree object from ls-tree formatted text on stdin")
        .arg(
            Arg::with_name("missing")
                .long("missing")
                .help("Allow missing objects"),
        )
}

#[derive(Debug)]
pub(crate) struct Args {
    allow_missing: bool,
}

impl Args {
    pub(crate) fn from_matches(m: &ArgMatches) -> Args {
        Args {
            allow_missing: m.is_present("missing"),
        }
    }
}

pub(crate) fn run(app: &mut App, args: Args) -> Result<()> {
    let repo = find_repo::from_git_dir_or_cwd(app.git_dir())?;

    let mut input = String::new();
    app.stdin.read_to_string(&mut input)?;

    let mut entries = Vec::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let entry = parse_line(line)?;
        if !args.allow_missing {
            check_present(&repo, &entry)?;
        }
        entries.push(entry);
    }

    debug!(entries = entries.len(), "building tree");
    let id = repo.write_tree(&entries)?;
    writeln!(app, "{}", id)?;

    Ok(())
}

// Parse `<mode> SP <kind> SP <id> TAB <name>`, the format ls-tree prints.
fn parse_line(line: &str) -> Result<TreeEntry> {
    let malformed = || usage_error(ErrorKind::InvalidValue, format!("input format error: {}", line));

    let (meta, name) = split_once(line, '\t').ok_or_else(malformed)?;

    let mut fields = meta.split(' ');
    let (mode, kind, id) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(mode), Some(kind), Some(id), None) => (mode, kind, id),
        _ => return Err(malformed()),
    };

    // ls-tree pads the tree mode to six digits; accept either form.
    let mode = u32::from_str_radix(mode, 8)
        .ok()
        .and_then(FileMode::from_value)
        .ok_or_else(malformed)?;

    let kind: Kind = kind.parse().map_err(|_| malformed())?;
    if kind != entry_kind(mode) {
        return Err(usage_error(
            ErrorKind::InvalidValue,
            format!("entry '{}' object type ({}) doesn't match mode type ({})", name, kind, entry_kind(mode)),
        ));
    }

    Ok(TreeEntry::new(mode, name, parse_id(id)?)?)
}

fn split_once(s: &str, c: char) -> Option<(&str, &str)> {
    let pos = s.find(c)?;
    Some((&s[..pos], &s[pos + c.len_utf8()..]))
}

// Submodule entries name commits in another repository, so they are never
// expected locally.
fn check_present(repo: &OnDiskRepo, entry: &TreeEntry) -> Result<()> {
    if entry.mode() == FileMode::Submodule || repo.has_object(entry.id()) {
        Ok(())
    } else {
        Err(usage_error(
            ErrorKind::InvalidValue,
            format!("entry '{}' object {} is unavailable", entry.name(), entry.id()),
        ))
    }
}
