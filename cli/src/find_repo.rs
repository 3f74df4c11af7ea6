use std::{env, path::Path};

use lodb_core::Result;
use lodb_on_disk::OnDiskRepo;

/// Name of the repository directory inside a working directory.
pub(crate) const REPO_DIR: &str = ".git";

// Open the repository for a command.
//
// An explicit `--git-dir` (or `LODB_DIR`) wins. Otherwise this handles only
// the simple case of a `.git` directory nested within the current
// working directory.
pub(crate) fn from_git_dir_or_cwd(git_dir: Option<&Path>) -> Result<OnDiskRepo> {
    match git_dir {
        Some(git_dir) => OnDiskRepo::open(git_dir),
        None => from_current_dir(),
    }
}

// Discover a repo within the given working directory.
pub(crate) fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDiskRepo> {
    OnDiskRepo::open(path.as_ref().join(REPO_DIR))
}

#[cfg(not(tarpaulin_include))]
pub(crate) fn from_current_dir() -> Result<OnDiskRepo> {
    let path = env::current_dir()?;
    from_path(path)
}
