use super::super::*;

use lodb_core::object::{FileMode, Kind, Object};

use tempfile::tempdir;

#[test]
fn entries_come_back_sorted() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let x = r.write_blob("x").unwrap();
    let y = r.write_blob("y").unwrap();

    let tree = r
        .write_tree(&[
            TreeEntry::new(FileMode::Normal, "b.txt", x).unwrap(),
            TreeEntry::new(FileMode::Normal, "a.txt", y).unwrap(),
        ])
        .unwrap();

    let entries = r.list_tree(&tree).unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name(), "a.txt");
    assert_eq!(entries[0].mode(), FileMode::Normal);
    assert_eq!(entries[0].id(), &y);

    assert_eq!(entries[1].name(), "b.txt");
    assert_eq!(entries[1].id(), &x);
}

#[test]
fn nested_trees() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let readme = r.write_blob("# hello\n").unwrap();
    let main = r.write_blob("fn main() {}\n").unwrap();

    let src = r
        .write_tree(&[TreeEntry::new(FileMode::Normal, "main.rs", main).unwrap()])
        .unwrap();
    let root = r
        .write_tree(&[
            TreeEntry::new(FileMode::Tree, "src", src).unwrap(),
            TreeEntry::new(FileMode::Normal, "README.md", readme).unwrap(),
        ])
        .unwrap();

    let entries = r.list_tree(&root).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["README.md", "src"]);

    let sub = r.list_tree(entries[1].id()).unwrap();
    assert_eq!(sub.len(), 1);
    assert_eq!(sub[0].name(), "main.rs");
    assert_eq!(sub[0].id(), &main);
}

#[test]
fn empty_tree() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let id = r.write_tree(&[]).unwrap();
    assert_eq!(id.to_string(), "4b825dc642cb6eb9a060e54bf8d69288fbee4904");
    assert!(r.list_tree(&id).unwrap().is_empty());
}

#[test]
fn not_a_tree() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let id = r.write_blob("just a blob").unwrap();
    match r.list_tree(&id).unwrap_err() {
        Error::UnexpectedKind {
            expected, found, ..
        } => {
            assert_eq!(expected, Kind::Tree);
            assert_eq!(found, Kind::Blob);
        }
        err => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn missing_tree() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let id = Object::tree(&[]).unwrap().id();
    match r.list_tree(&id).unwrap_err() {
        Error::ObjectNotFound(err_id) => assert_eq!(err_id, id),
        err => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn malformed_tree_body() {
    let temp = tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();

    let id = r
        .put_loose_object(&Object::new(Kind::Tree, "100644 truncated"))
        .unwrap();

    match r.list_tree(&id).unwrap_err() {
        Error::MalformedHeader(_) => (),
        err => panic!("Unexpected error {:?}", err),
    }
}
