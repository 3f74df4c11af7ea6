use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::Error;

/// Describes the fundamental object type (blob, tree, or commit).
///
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
}

impl Kind {
    /// The fixed lowercase label used in the object header.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Blob => "blob",
            Kind::Tree => "tree",
            Kind::Commit => "commit",
        }
    }

    /// Parse a header label. Returns `None` for anything other than the
    /// three recognized labels.
    pub fn from_label(label: &[u8]) -> Option<Kind> {
        match label {
            b"blob" => Some(Kind::Blob),
            b"tree" => Some(Kind::Tree),
            b"commit" => Some(Kind::Commit),
            _ => None,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_label(s.as_bytes()).ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
