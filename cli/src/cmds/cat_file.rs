use std::io::Write;

use super::{ls_tree::format_entry, parse_id, usage_error};
use crate::{find_repo, App, Result};

use clap::{Arg, ArgGroup, ArgMatches, ErrorKind, SubCommand};
use lodb_core::object::{Id, Kind};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content, type, or size information for an object")
        .arg(
            Arg::with_name("t")
                .short("t")
                .help("Show the object type"),
        )
        .arg(
            Arg::with_name("s")
                .short("s")
                .help("Show the object size"),
        )
        .arg(
            Arg::with_name("p")
                .short("p")
                .help("Pretty-print the object's content"),
        )
        .group(ArgGroup::with_name("query").args(&["t", "s", "p"]))
        .arg(
            Arg::with_name("args")
                .value_name("type> <object")
                .required(true)
                .multiple(true)
                .max_values(2)
                .help("Object ID, preceded by the expected type unless -t, -s, or -p is given"),
        )
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Query {
    Kind,
    Size,
    Pretty,
    Body(Kind),
}

#[derive(Debug)]
pub(crate) struct Args {
    query: Query,
    id: Id,
}

impl Args {
    pub(crate) fn from_matches(m: &ArgMatches) -> Result<Args> {
        let positional: Vec<&str> = m
            .values_of("args")
            .map(|values| values.collect())
            .unwrap_or_default();

        let flag = if m.is_present("t") {
            Some(Query::Kind)
        } else if m.is_present("s") {
            Some(Query::Size)
        } else if m.is_present("p") {
            Some(Query::Pretty)
        } else {
            None
        };

        match (flag, positional.as_slice()) {
            (Some(query), [id]) => Ok(Args {
                query,
                id: parse_id(id)?,
            }),
            (None, [kind, id]) => {
                let kind = kind.parse::<Kind>().map_err(|_| {
                    usage_error(
                        ErrorKind::InvalidValue,
                        format!("invalid object type \"{}\"", kind),
                    )
                })?;
                Ok(Args {
                    query: Query::Body(kind),
                    id: parse_id(id)?,
                })
            }
            _ => Err(usage_error(
                ErrorKind::WrongNumberOfValues,
                "expected one of -t, -s, -p, or <type> followed by exactly one <object>",
            )),
        }
    }
}

pub(crate) fn run(app: &mut App, args: Args) -> Result<()> {
    let repo = find_repo::from_git_dir_or_cwd(app.git_dir())?;

    match args.query {
        Query::Kind => {
            let object = repo.read_object(&args.id)?;
            writeln!(app, "{}", object.kind())?;
        }
        Query::Size => {
            let object = repo.read_object(&args.id)?;
            writeln!(app, "{}", object.len())?;
        }
        Query::Pretty => {
            let object = repo.read_object(&args.id)?;
            if object.kind() == Kind::Tree {
                for entry in object.tree_entries()? {
                    writeln!(app, "{}", format_entry(&entry))?;
                }
            } else {
                app.write_all(object.body())?;
            }
        }
        Query::Body(kind) => {
            let object = repo.read_object_as(&args.id, kind)?;
            app.write_all(object.body())?;
        }
    }

    Ok(())
}
