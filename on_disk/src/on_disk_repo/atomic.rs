use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Prefix for files staged next to their final destination.
pub(crate) const TEMP_PREFIX: &str = "tmp_obj_";

// Write `bytes` to a private temporary file in the same directory as `path`
// and flush it to disk. The caller publishes it with a rename.
fn stage(path: &Path, bytes: &[u8]) -> io::Result<NamedTempFile> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)?;

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

fn set_read_only(file: &File) -> io::Result<()> {
    let mut permissions = file.metadata()?.permissions();
    permissions.set_readonly(true);
    file.set_permissions(permissions)
}

/// Publish `bytes` at `path` unless something is already there.
///
/// Returns `Ok(false)` if `path` already existed, in which case nothing is
/// changed. A reader never observes a partially written file at `path`.
pub(crate) fn publish_new(path: &Path, bytes: &[u8], read_only: bool) -> io::Result<bool> {
    let tmp = stage(path, bytes)?;
    if read_only {
        set_read_only(tmp.as_file())?;
    }

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(err.error),
    }
}

/// Replace the content of `path` with `bytes` in a single rename.
pub(crate) fn replace(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = stage(path, bytes)?;
    tmp.persist(path)?;
    Ok(())
}
