//! Represents the concept of an "object" which is a tuple of object kind
//! and binary data, identified by the hash of its canonical encoding.
//!
//! The canonical encoding is `<kind> <size>\0<body>`, where `<size>` is the
//! decimal length of `<body>`. The object's ID is the SHA-1 digest of exactly
//! those bytes.

use sha1::{Digest, Sha1};

use crate::{Error, Result};

mod file_mode;
pub use file_mode::FileMode;

mod id;
pub use id::{Id, ParseIdError, HEX_LEN, ID_LEN};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

pub mod tree;
pub use tree::TreeEntry;

/// How far into an encoded object we look for the NUL that ends the header.
///
/// The longest legitimate header is `commit <20 digits>\0`.
pub const MAX_HEADER_LEN: usize = 32;

/// Default upper bound on the declared body size accepted by `decode`.
pub const DEFAULT_MAX_OBJECT_SIZE: usize = 1 << 30;

/// One immutable unit of stored content.
///
/// Objects are never modified in place. Any change produces a new object
/// with a new ID.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    kind: Kind,
    body: Vec<u8>,
}

impl Object {
    /// Create a new Object.
    pub fn new<B: Into<Vec<u8>>>(kind: Kind, body: B) -> Object {
        Object {
            kind,
            body: body.into(),
        }
    }

    /// Create a blob holding arbitrary content.
    pub fn blob<B: Into<Vec<u8>>>(content: B) -> Object {
        Object::new(Kind::Blob, content)
    }

    /// Create a tree from a set of entries, in any order.
    pub fn tree(entries: &[TreeEntry]) -> Result<Object> {
        Ok(Object::new(Kind::Tree, tree::encode(entries)?))
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the object's body (content without header).
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Return the size (in bytes) of the body.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Computes the object's ID from its kind, size, and body.
    ///
    /// This is functionally equivalent to `git hash-object` without the
    /// `-w` option that would write the object to the repo.
    pub fn id(&self) -> Id {
        address(self.kind, &self.body)
    }

    /// Decode this object's body as a list of tree entries.
    ///
    /// Returns `UnexpectedKind` if this isn't a tree.
    pub fn tree_entries(&self) -> Result<Vec<TreeEntry>> {
        if self.kind != Kind::Tree {
            return Err(Error::UnexpectedKind {
                id: self.id(),
                expected: Kind::Tree,
                found: self.kind,
            });
        }

        tree::decode(&self.body)
    }

    /// Produce the canonical encoding: `<kind> <size>\0<body>`.
    pub fn encode(&self) -> Vec<u8> {
        let header = header(self.kind, self.body.len());
        let mut encoded = Vec::with_capacity(header.len() + self.body.len());
        encoded.extend_from_slice(header.as_bytes());
        encoded.extend_from_slice(&self.body);
        encoded
    }

    /// Parse a canonical encoding produced by `encode`.
    pub fn decode(encoded: &[u8]) -> Result<Object> {
        Object::decode_with_limit(encoded, DEFAULT_MAX_OBJECT_SIZE)
    }

    /// Parse a canonical encoding, rejecting any declared body size larger
    /// than `max_size` before it is used.
    pub fn decode_with_limit(encoded: &[u8], max_size: usize) -> Result<Object> {
        let window = &encoded[..encoded.len().min(MAX_HEADER_LEN)];
        let (header, _) = parse_utils::split_once(window, 0).ok_or_else(|| {
            Error::MalformedHeader(format!(
                "no NUL terminator in the first {} bytes",
                window.len()
            ))
        })?;
        let rest = &encoded[header.len() + 1..];

        let (kind, size) = parse_utils::split_once(header, b' ').ok_or_else(|| {
            Error::MalformedHeader(format!(
                "expected `<kind> <size>`, found {:?}",
                String::from_utf8_lossy(header)
            ))
        })?;

        let kind = Kind::from_label(kind)
            .ok_or_else(|| Error::UnknownKind(String::from_utf8_lossy(kind).into_owned()))?;

        let declared = parse_utils::parse_decimal(size).ok_or_else(|| Error::SizeMismatch {
            declared: String::from_utf8_lossy(size).into_owned(),
            actual: rest.len(),
        })?;

        if declared > max_size as u64 {
            return Err(Error::ObjectTooLarge {
                size: declared,
                limit: max_size,
            });
        }

        if declared != rest.len() as u64 {
            return Err(Error::SizeMismatch {
                declared: declared.to_string(),
                actual: rest.len(),
            });
        }

        Ok(Object::new(kind, rest))
    }
}

/// Compute the ID of an object with the given kind and body.
///
/// The ID is the lowercase hex SHA-1 of `<kind> <len(body)>\0<body>`. This
/// is a total function: the same input yields the same ID on any machine.
pub fn address(kind: Kind, body: &[u8]) -> Id {
    let mut hasher = Sha1::new();
    hasher.update(header(kind, body.len()));
    hasher.update(body);
    digest_to_id(&hasher.finalize())
}

/// Compute the ID of bytes that are already in canonical encoded form.
pub fn address_encoded(encoded: &[u8]) -> Id {
    digest_to_id(&Sha1::digest(encoded))
}

fn digest_to_id(digest: &[u8]) -> Id {
    let mut raw = [0u8; ID_LEN];
    raw.copy_from_slice(digest);
    Id::from(raw)
}

fn header(kind: Kind, len: usize) -> String {
    format!("{} {}\0", kind, len)
}
