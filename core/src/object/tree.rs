//! Codec for the body of a tree object.
//!
//! A tree body is a sequence of entries, each encoded as
//! `<mode> <name>\0<20-byte raw id>`, sorted by the raw bytes of `name`.

use super::{parse_utils, FileMode, Id, ID_LEN};

use crate::{Error, Result};

/// One named child of a tree object.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TreeEntry {
    mode: FileMode,
    name: String,
    id: Id,
}

impl TreeEntry {
    /// Create a new tree entry.
    ///
    /// Returns `InvalidEntry` if `name` is empty, is `.` or `..`, or
    /// contains a NUL byte or a `/`.
    pub fn new<S: Into<String>>(mode: FileMode, name: S, id: Id) -> Result<TreeEntry> {
        let name = name.into();
        check_name(name.as_bytes())?;
        Ok(TreeEntry { mode, name, id })
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &Id {
        &self.id
    }
}

fn check_name(name: &[u8]) -> Result<()> {
    let problem = if name.is_empty() {
        "name is empty"
    } else if name == b"." || name == b".." {
        "name is a relative path component"
    } else if name.contains(&0) {
        "name contains a NUL byte"
    } else if name.contains(&b'/') {
        "name contains a path separator"
    } else {
        return Ok(());
    };

    Err(Error::InvalidEntry(format!(
        "{} ({:?})",
        problem,
        String::from_utf8_lossy(name)
    )))
}

/// Encode a set of entries as a canonical tree body.
///
/// Entries are sorted by name first, so the same set always produces the
/// same bytes regardless of the order given. Two entries with the same name
/// are rejected with `InvalidEntry`.
pub fn encode(entries: &[TreeEntry]) -> Result<Vec<u8>> {
    let mut sorted: Vec<&TreeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    if let Some(pair) = sorted.windows(2).find(|pair| pair[0].name == pair[1].name) {
        return Err(Error::InvalidEntry(format!(
            "duplicate name {:?}",
            pair[0].name
        )));
    }

    let mut body = Vec::with_capacity(sorted.iter().map(|e| e.name.len() + 28).sum());
    for entry in sorted {
        body.extend_from_slice(entry.mode.to_string().as_bytes());
        body.push(b' ');
        body.extend_from_slice(entry.name.as_bytes());
        body.push(0);
        body.extend_from_slice(entry.id.as_bytes());
    }

    Ok(body)
}

/// Decode a tree body into its entries, in stored (name-sorted) order.
///
/// Fails with `MalformedHeader` if the body ends partway through an entry
/// or an entry's `<mode> <name>` prefix doesn't parse, and with
/// `InvalidEntry` if a name is invalid or the entries aren't strictly
/// sorted by name.
pub fn decode(body: &[u8]) -> Result<Vec<TreeEntry>> {
    let mut entries: Vec<TreeEntry> = Vec::new();
    let mut rest = body;

    while !rest.is_empty() {
        let (mode_name, after) = parse_utils::split_once(rest, 0).ok_or_else(|| {
            Error::MalformedHeader(format!("tree entry {} is not terminated", entries.len()))
        })?;

        let (mode, name) = parse_utils::split_once(mode_name, b' ').ok_or_else(|| {
            Error::MalformedHeader(format!("tree entry {} has no mode", entries.len()))
        })?;

        let mode = FileMode::from_octal_slice(mode).ok_or_else(|| {
            Error::MalformedHeader(format!(
                "tree entry {} has invalid mode {:?}",
                entries.len(),
                String::from_utf8_lossy(mode)
            ))
        })?;

        if after.len() < ID_LEN {
            return Err(Error::MalformedHeader(format!(
                "tree entry {} is truncated in its object ID",
                entries.len()
            )));
        }
        let (id, after) = after.split_at(ID_LEN);

        check_name(name)?;
        let name = String::from_utf8(name.to_vec())
            .map_err(|_| Error::InvalidEntry("name is not valid UTF-8".to_string()))?;

        if let Some(previous) = entries.last() {
            if previous.name.as_bytes() >= name.as_bytes() {
                return Err(Error::InvalidEntry(format!(
                    "{:?} is out of order after {:?}",
                    name, previous.name
                )));
            }
        }

        entries.push(TreeEntry {
            mode,
            name,
            id: Id::new(id)?,
        });
        rest = after;
    }

    Ok(entries)
}
