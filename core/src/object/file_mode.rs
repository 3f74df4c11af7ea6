use std::fmt::{self, Display, Formatter};

/// Describes the type of a tree entry.
///
/// Modes use a variation on the Unix file permissions flags. The following
/// values are recognized:
///
/// * `100644` - normal file
/// * `100755` - executable file
/// * `120000` - symbolic link
/// * `40000` - tree (subdirectory)
/// * `160000` - submodule
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum FileMode {
    Normal,
    Executable,
    SymbolicLink,
    Tree,
    Submodule,
}

impl FileMode {
    /// Convert from a file-mode integer to `FileMode` enum.
    ///
    /// Returns `None` if the value is not one of the recognized constants.
    pub fn from_value(value: u32) -> Option<FileMode> {
        match value {
            0o100644 => Some(FileMode::Normal),
            0o100755 => Some(FileMode::Executable),
            0o120000 => Some(FileMode::SymbolicLink),
            0o040000 => Some(FileMode::Tree),
            0o160000 => Some(FileMode::Submodule),
            _ => None,
        }
    }

    /// Convert from `FileMode` enum to a file-mode integer.
    pub fn to_value(self) -> u32 {
        match self {
            FileMode::Normal => 0o100644,
            FileMode::Executable => 0o100755,
            FileMode::SymbolicLink => 0o120000,
            FileMode::Tree => 0o040000,
            FileMode::Submodule => 0o160000,
        }
    }

    /// Parse the textual mode token of a tree entry.
    ///
    /// The token must be octal digits with no leading zero, exactly as
    /// `Display` renders it.
    pub fn from_octal_slice(s: &[u8]) -> Option<FileMode> {
        if s.is_empty() || s.len() > 6 || s[0] == b'0' {
            return None;
        }

        let mut value = 0u32;
        for c in s {
            match c {
                b'0'..=b'7' => value = (value << 3) | u32::from(c - b'0'),
                _ => return None,
            }
        }

        FileMode::from_value(value)
    }

    /// Returns true if entries with this mode refer to a tree object.
    pub fn is_tree(self) -> bool {
        self == FileMode::Tree
    }
}

impl Display for FileMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:o}", self.to_value())
    }
}
