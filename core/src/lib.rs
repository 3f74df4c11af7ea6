//! This crate implements the core data model for a content-addressed object
//! database: object IDs, the canonical object encoding, the tree codec, and
//! the compression envelope applied at the storage boundary.
//!
//! Nothing in this crate touches the file system. See `lodb_on_disk` for the
//! loose object store that builds on it.

#![deny(warnings)]

pub mod envelope;

mod error;
pub use error::{Error, Result};

pub mod object;
