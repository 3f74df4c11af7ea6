use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

mod list_tree;

// Every file below `root/objects`, sorted.
fn object_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root.join("objects"))
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

// Every path below `root` with its size and modification time, so a test
// can tell whether an operation wrote anything.
fn snapshot(root: &Path) -> Vec<(PathBuf, u64, SystemTime)> {
    let mut entries: Vec<(PathBuf, u64, SystemTime)> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let meta = e.metadata().unwrap();
            (e.path().to_path_buf(), meta.len(), meta.modified().unwrap())
        })
        .collect();
    entries.sort();
    entries
}
