use std::fs;

use predicates::prelude::*;

mod common;

use common::{TempRepo, HELLO_CONTENT, HELLO_SHA1};

// --- Argument checking

#[test]
fn error_multiple_stdin_args() {
    let repo = TempRepo::new();

    repo.lodb()
        .args(&["hash-object", "--stdin", "--stdin"])
        .write_stdin(&b"test content\n"[..])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn error_no_source() {
    let repo = TempRepo::new();

    repo.lodb()
        .arg("hash-object")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("either --stdin or a file path"));
}

#[test]
fn error_missing_file() {
    let repo = TempRepo::new();

    repo.lodb()
        .args(&["hash-object", "no-such-file"])
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

// --- Behavior

#[test]
fn hash_file_without_writing() {
    let repo = TempRepo::new();
    let hello_path = repo.path().join("hello");
    fs::write(&hello_path, HELLO_CONTENT).unwrap();

    repo.lodb()
        .args(&["hash-object", hello_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("{}\n", HELLO_SHA1));

    assert!(!repo.object_path(HELLO_SHA1).exists());
}

#[test]
fn hash_file_without_writing_from_stdin() {
    let repo = TempRepo::new();

    repo.lodb()
        .args(&["hash-object", "--stdin"])
        .write_stdin(&HELLO_CONTENT[..])
        .assert()
        .success()
        .stdout(format!("{}\n", HELLO_SHA1));

    assert!(!repo.object_path(HELLO_SHA1).exists());
}

#[test]
fn hash_file_and_write_to_database() {
    let repo = TempRepo::new();
    let hello_path = repo.path().join("hello");
    fs::write(&hello_path, HELLO_CONTENT).unwrap();

    repo.lodb()
        .args(&["hash-object", "-w", hello_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("{}\n", HELLO_SHA1));

    assert!(repo.object_path(HELLO_SHA1).is_file());
}

#[test]
fn hash_file_write_std_to_db_args_swapped() {
    let repo = TempRepo::new();

    repo.lodb()
        .args(&["hash-object", "--stdin", "-w"])
        .write_stdin(&HELLO_CONTENT[..])
        .assert()
        .success()
        .stdout(format!("{}\n", HELLO_SHA1));

    repo.lodb()
        .args(&["cat-file", "-p", HELLO_SHA1])
        .assert()
        .success()
        .stdout(&HELLO_CONTENT[..]);
}

#[test]
fn hash_empty_blob() {
    let repo = TempRepo::new();

    repo.lodb()
        .args(&["hash-object", "--stdin"])
        .write_stdin(&b""[..])
        .assert()
        .success()
        .stdout("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391\n");
}

#[test]
fn hash_empty_tree() {
    let repo = TempRepo::new();

    repo.lodb()
        .args(&["hash-object", "-t", "tree", "--stdin"])
        .write_stdin(&b""[..])
        .assert()
        .success()
        .stdout(format!("{}\n", common::EMPTY_TREE_SHA1));
}

#[test]
fn error_corrupt_tree() {
    let repo = TempRepo::new();

    repo.lodb()
        .args(&["hash-object", "-t", "tree", "-w", "--stdin"])
        .write_stdin(&b"100644 missing-nul"[..])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("corrupt tree"));

    let objects: Vec<_> = fs::read_dir(repo.git_dir().join("objects"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(objects.len(), 2, "unexpected entries {:?}", objects);
}
