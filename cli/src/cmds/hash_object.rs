use std::{
    fs,
    io::Write,
    path::PathBuf,
};

use super::usage_error;
use crate::{find_repo, App, Result};

use clap::{Arg, ArgMatches, ErrorKind, SubCommand};
use lodb_core::object::{tree, Kind, Object};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally create an object from a file")
        .arg(
            Arg::with_name("t")
                .short("t")
                .value_name("type")
                .help("Specify the type (default 'blob')"),
        )
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(
            Arg::with_name("literally")
                .long("literally")
                .help("Bypass validity checks"),
        )
        .arg(Arg::with_name("file"))
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug)]
pub(crate) struct Args {
    kind: Kind,
    write: bool,
    literally: bool,
    source: Source,
}

impl Args {
    pub(crate) fn from_matches(m: &ArgMatches) -> Result<Args> {
        let kind = match m.value_of("t") {
            Some(label) => label.parse::<Kind>().map_err(|_| {
                usage_error(
                    ErrorKind::InvalidValue,
                    "-t must be one of blob, commit, or tree",
                )
            })?,
            None => Kind::Blob,
        };

        let source = match (m.is_present("stdin"), m.value_of_os("file")) {
            (true, None) => Source::Stdin,
            (false, Some(file)) => Source::File(PathBuf::from(file)),
            _ => {
                return Err(usage_error(
                    ErrorKind::MissingRequiredArgument,
                    "content source must be either --stdin or a file path",
                ))
            }
        };

        Ok(Args {
            kind,
            write: m.is_present("w"),
            literally: m.is_present("literally"),
            source,
        })
    }
}

pub(crate) fn run(app: &mut App, args: Args) -> Result<()> {
    let body = match &args.source {
        Source::Stdin => {
            let mut body = Vec::new();
            app.stdin.read_to_end(&mut body)?;
            body
        }
        Source::File(path) => fs::read(path)?,
    };

    if !args.literally && args.kind == Kind::Tree {
        tree::decode(&body).map_err(|err| {
            usage_error(ErrorKind::InvalidValue, format!("corrupt tree: {}", err))
        })?;
    }

    let object = Object::new(args.kind, body);

    let id = if args.write {
        let repo = find_repo::from_git_dir_or_cwd(app.git_dir())?;
        repo.put_loose_object(&object)?
    } else {
        object.id()
    };

    writeln!(app, "{}", id)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{temp_cwd::TempCwd, App};

    use lodb_core::object::{FileMode, Id, Kind, Object, TreeEntry};
    use lodb_on_disk::OnDiskRepo;
    use serial_test::serial;

    const HELLO_SHA1: &str = "5e1c309dae7f45e0f39b1bf3ac3cd9db12e7d689";

    #[test]
    fn hash_stdin_without_repo() {
        let stdout =
            App::run_with_stdin_and_args(b"Hello World".to_vec(), vec!["hash-object", "--stdin"])
                .unwrap();

        assert_eq!(stdout, format!("{}\n", HELLO_SHA1).as_bytes());
    }

    #[test]
    fn hash_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("hello");
        fs::write(&path, b"Hello World").unwrap();

        let stdout = App::run_with_args(vec!["hash-object", path.to_str().unwrap()]).unwrap();

        assert_eq!(stdout, format!("{}\n", HELLO_SHA1).as_bytes());
    }

    #[test]
    fn write_with_git_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let git_dir = temp_dir.path().join(".git");
        let repo = OnDiskRepo::init(&git_dir).unwrap();

        let stdout = App::run_with_stdin_and_args(
            b"Hello World".to_vec(),
            vec![
                "--git-dir",
                git_dir.to_str().unwrap(),
                "hash-object",
                "-w",
                "--stdin",
            ],
        )
        .unwrap();

        assert_eq!(stdout, format!("{}\n", HELLO_SHA1).as_bytes());

        let id: Id = HELLO_SHA1.parse().unwrap();
        let object = repo.read_object(&id).unwrap();
        assert_eq!(object, Object::blob("Hello World"));
    }

    #[test]
    #[serial]
    fn write_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = OnDiskRepo::init(temp_dir.path().join(".git")).unwrap();

        let stdout = {
            let _cwd = TempCwd::new(temp_dir.path());
            App::run_with_stdin_and_args(
                b"test content\n".to_vec(),
                vec!["hash-object", "-w", "--stdin"],
            )
            .unwrap()
        };

        assert_eq!(stdout, b"d670460b4b4aece5915caf5c68d12f560a9fe3e4\n");

        let id: Id = "d670460b4b4aece5915caf5c68d12f560a9fe3e4".parse().unwrap();
        assert!(repo.has_object(&id));
    }

    #[test]
    fn typed_tree() {
        let blob_id = Object::blob("x").id();
        let tree = Object::tree(&[TreeEntry::new(FileMode::Normal, "x", blob_id).unwrap()]).unwrap();

        let stdout = App::run_with_stdin_and_args(
            tree.body().to_vec(),
            vec!["hash-object", "-t", "tree", "--stdin"],
        )
        .unwrap();

        assert_eq!(stdout, format!("{}\n", tree.id()).as_bytes());
    }

    #[test]
    fn commit_kind_is_not_validated() {
        let stdout = App::run_with_stdin_and_args(
            b"whatever".to_vec(),
            vec!["hash-object", "-t", "commit", "--stdin"],
        )
        .unwrap();

        let expected = Object::new(Kind::Commit, &b"whatever"[..]).id();
        assert_eq!(stdout, format!("{}\n", expected).as_bytes());
    }

    #[test]
    fn error_corrupt_tree() {
        let err = App::run_with_stdin_and_args(
            b"not a tree".to_vec(),
            vec!["hash-object", "-t", "tree", "--stdin"],
        )
        .unwrap_err();

        assert!(
            err.to_string().contains("corrupt tree"),
            "\nincorrect error message:\n\n{}",
            err
        );
    }

    #[test]
    fn literally_skips_tree_check() {
        let stdout = App::run_with_stdin_and_args(
            b"not a tree".to_vec(),
            vec!["hash-object", "-t", "tree", "--literally", "--stdin"],
        )
        .unwrap();

        let expected = Object::new(Kind::Tree, &b"not a tree"[..]).id();
        assert_eq!(stdout, format!("{}\n", expected).as_bytes());
    }

    #[test]
    fn error_unknown_type() {
        let err =
            App::run_with_args(vec!["hash-object", "-t", "tag", "--stdin"]).unwrap_err();

        assert!(
            err.to_string().contains("-t must be one of"),
            "\nincorrect error message:\n\n{}",
            err
        );
    }

    #[test]
    fn error_stdin_and_file() {
        let err = App::run_with_args(vec!["hash-object", "--stdin", "file"]).unwrap_err();

        assert!(
            err.to_string()
                .contains("content source must be either --stdin or a file path"),
            "\nincorrect error message:\n\n{}",
            err
        );
    }

    #[test]
    fn error_no_repo() {
        let temp_dir = tempfile::tempdir().unwrap();
        let git_dir = temp_dir.path().join("missing");

        let err = App::run_with_stdin_and_args(
            b"x".to_vec(),
            vec![
                "--git-dir",
                git_dir.to_str().unwrap(),
                "hash-object",
                "-w",
                "--stdin",
            ],
        )
        .unwrap_err();

        assert!(
            err.to_string().contains("not a repository"),
            "\nincorrect error message:\n\n{}",
            err
        );
    }
}
