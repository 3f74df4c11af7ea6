use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{find_repo::REPO_DIR, App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use lodb_on_disk::{Config, OnDiskRepo};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty repository or reinitialize an existing one")
        .arg(
            Arg::with_name("initial-branch")
                .short("b")
                .long("initial-branch")
                .value_name("branch-name")
                .env("LODB_INITIAL_BRANCH")
                .help("Name of the branch HEAD points to (default 'master')"),
        )
        .arg(
            Arg::with_name("directory")
                .help("Working directory to create the repository in (default: current directory)"),
        )
}

#[derive(Debug)]
pub(crate) struct Args {
    directory: Option<PathBuf>,
    initial_branch: Option<String>,
}

impl Args {
    pub(crate) fn from_matches(m: &ArgMatches) -> Args {
        Args {
            directory: m.value_of_os("directory").map(PathBuf::from),
            initial_branch: m.value_of("initial-branch").map(str::to_string),
        }
    }
}

pub(crate) fn run(app: &mut App, args: Args) -> Result<()> {
    // An explicit --git-dir names the repository itself; a directory
    // argument names the working directory that holds it.
    let root = match (app.git_dir(), &args.directory) {
        (Some(git_dir), None) => git_dir.to_path_buf(),
        (_, Some(dir)) => dir.join(REPO_DIR),
        (None, None) => std::env::current_dir()?.join(REPO_DIR),
    };

    let mut config = Config::default();
    if let Some(branch) = args.initial_branch {
        config = config.with_default_branch(branch);
    }

    let existed = is_repo(&root);
    OnDiskRepo::init_with_config(&root, config)?;

    let verb = if existed {
        "Reinitialized existing"
    } else {
        "Initialized empty"
    };
    writeln!(app, "{} repository in {}", verb, root.display())?;

    Ok(())
}

fn is_repo(root: &Path) -> bool {
    OnDiskRepo::open(root).is_ok()
}
