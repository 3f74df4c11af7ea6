use std::fs;
use std::path::{Path, PathBuf};

use lodb_core::object::{Id, Kind, Object, TreeEntry};
use lodb_core::{Error, Result};

use tracing::debug;

use crate::{Config, Head};

mod atomic;
mod init;
mod loose;

/// An object database stored in a directory on the local file system.
///
/// `root` corresponds to a `.git` directory: it holds `HEAD`, `objects/`
/// and `refs/` directly.
#[derive(Debug)]
pub struct OnDiskRepo {
    root: PathBuf,
    config: Config,
}

impl OnDiskRepo {
    /// Create a new, empty repository at `root` using the default `Config`.
    ///
    /// Analogous to `git init --bare`. Safe to call on an existing
    /// repository: directories are created only if missing, and an existing
    /// `HEAD` or object is never touched.
    pub fn init<P: AsRef<Path>>(root: P) -> Result<Self> {
        OnDiskRepo::init_with_config(root, Config::default())
    }

    pub fn init_with_config<P: AsRef<Path>>(root: P, config: Config) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        init::create_layout(&root, &config)?;
        debug!(root = %root.display(), "initialized repository");

        Ok(OnDiskRepo { root, config })
    }

    /// Open an existing repository at `root` using the default `Config`.
    ///
    /// Returns `NotARepository` unless `root` contains a `HEAD` file and an
    /// `objects` directory. Never writes to the file system.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        OnDiskRepo::open_with_config(root, Config::default())
    }

    pub fn open_with_config<P: AsRef<Path>>(root: P, config: Config) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.join("HEAD").is_file() || !root.join("objects").is_dir() {
            return Err(Error::NotARepository(root));
        }

        debug!(root = %root.display(), "opened repository");
        Ok(OnDiskRepo { root, config })
    }

    /// Return the repository's root directory.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Store `content` as a blob and return its ID.
    pub fn write_blob<B: Into<Vec<u8>>>(&self, content: B) -> Result<Id> {
        self.put_loose_object(&Object::blob(content))
    }

    /// Store a tree built from `entries` (in any order) and return its ID.
    pub fn write_tree(&self, entries: &[TreeEntry]) -> Result<Id> {
        self.put_loose_object(&Object::tree(entries)?)
    }

    /// Load the object with the given ID.
    pub fn read_object(&self, id: &Id) -> Result<Object> {
        self.get_loose_object(id)
    }

    /// Load the object with the given ID, requiring it to be of `kind`.
    pub fn read_object_as(&self, id: &Id, kind: Kind) -> Result<Object> {
        let object = self.read_object(id)?;
        if object.kind() != kind {
            return Err(Error::UnexpectedKind {
                id: *id,
                expected: kind,
                found: object.kind(),
            });
        }

        Ok(object)
    }

    /// Return the entries of a tree, sorted by name.
    pub fn list_tree(&self, id: &Id) -> Result<Vec<TreeEntry>> {
        self.read_object_as(id, Kind::Tree)?.tree_entries()
    }

    /// Returns true if an object with this ID is stored.
    pub fn has_object(&self, id: &Id) -> bool {
        self.has_loose_object(id)
    }

    /// Read and parse the `HEAD` file.
    pub fn head(&self) -> Result<Head> {
        let content = fs::read(self.head_path())?;
        let content = String::from_utf8(content)
            .map_err(|_| Error::InvalidHead("content is not valid UTF-8".to_string()))?;
        Head::parse(&content)
    }

    /// Point `HEAD` somewhere else. The file is replaced in one atomic rename.
    ///
    /// Returns `InvalidHead` without touching the file if a symbolic `head`
    /// names a malformed reference.
    pub fn set_head(&self, head: &Head) -> Result<()> {
        head.validate()?;
        atomic::replace(&self.head_path(), head.to_file_content().as_bytes())?;
        debug!(%head, "updated HEAD");
        Ok(())
    }

    fn head_path(&self) -> PathBuf {
        self.root.join("HEAD")
    }
}

#[cfg(test)]
mod tests;
