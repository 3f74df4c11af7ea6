#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const HELLO_CONTENT: &[u8; 11] = b"Hello World";
pub const HELLO_SHA1: &str = "5e1c309dae7f45e0f39b1bf3ac3cd9db12e7d689";
pub const EMPTY_TREE_SHA1: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

// A scratch working directory holding an initialized `.git` repository.
pub struct TempRepo {
    dir: TempDir,
}

impl TempRepo {
    pub fn new() -> TempRepo {
        let dir = tempfile::tempdir().unwrap();
        lodb_in(dir.path()).arg("init").assert().success();
        TempRepo { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git_dir(&self) -> PathBuf {
        self.dir.path().join(".git")
    }

    pub fn object_path(&self, id: &str) -> PathBuf {
        self.git_dir().join("objects").join(&id[..2]).join(&id[2..])
    }

    // Run lodb from the working directory.
    pub fn lodb(&self) -> Command {
        lodb_in(self.path())
    }

    // Store `content` as a blob and return its ID.
    pub fn write_blob(&self, content: &[u8]) -> String {
        let output = self
            .lodb()
            .args(&["hash-object", "-w", "--stdin"])
            .write_stdin(content)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim_end().to_string()
    }
}

// A lodb command run in `dir` with no inherited repository or log settings.
pub fn lodb_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lodb").unwrap();
    cmd.current_dir(dir)
        .env_remove("LODB_DIR")
        .env_remove("LODB_INITIAL_BRANCH")
        .env_remove("LODB_LOG");
    cmd
}
