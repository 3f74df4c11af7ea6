use std::path::PathBuf;

use thiserror::Error;

use crate::object::{Id, Kind, ParseIdError};

/// Describes the error conditions that can arise while encoding, decoding,
/// storing, or loading objects.
#[derive(Debug, Error)]
pub enum Error {
    /// The `<kind> <size>\0` header (or a tree entry's `<mode> <name>\0`
    /// prefix) could not be parsed.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("unknown object kind `{0}`")]
    UnknownKind(String),

    /// The declared size doesn't parse, or doesn't match the body.
    #[error("size mismatch: header declares {declared}, found {actual}")]
    SizeMismatch { declared: String, actual: usize },

    /// An object is larger than the configured maximum. `size` is the
    /// declared body size when decoding, or the number of bytes inflated
    /// before giving up when decompressing.
    #[error("object too large: {size} bytes, limit is {limit}")]
    ObjectTooLarge { size: u64, limit: usize },

    /// A stored object failed to decompress or decode.
    #[error("object {id} is corrupt")]
    CorruptObject {
        id: Id,
        #[source]
        source: Box<Error>,
    },

    /// A stored object's content doesn't hash to the ID it was stored under.
    #[error("content hashes to {actual}")]
    HashMismatch { actual: Id },

    #[error("object {0} not found")]
    ObjectNotFound(Id),

    #[error("object {id} is a {found}, not a {expected}")]
    UnexpectedKind { id: Id, expected: Kind, found: Kind },

    #[error("invalid tree entry: {0}")]
    InvalidEntry(String),

    #[error("not a repository: {0}")]
    NotARepository(PathBuf),

    #[error("invalid HEAD: {0}")]
    InvalidHead(String),

    #[error(transparent)]
    ParseId(#[from] ParseIdError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a decode or decompression failure with the ID of the object
    /// being read.
    pub fn corrupt(id: &Id, source: Error) -> Error {
        Error::CorruptObject {
            id: *id,
            source: Box::new(source),
        }
    }
}

/// A specialized `Result` type for lodb operations.
pub type Result<T> = std::result::Result<T, Error>;
