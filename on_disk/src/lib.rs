//! This crate provides an object database that stores content on the local
//! file system.
//!
//! The layout is the same loose-object format that command-line git uses:
//!
//! ```text
//! <root>/
//!   HEAD                         "ref: refs/heads/<branch>\n"
//!   config
//!   objects/<xx>/<38 hex chars>  zlib-compressed "<kind> <size>\0<body>"
//!   refs/heads/
//!   refs/tags/
//! ```
//!
//! Writes are staged to a temporary file in the destination directory and
//! published with an atomic rename, so concurrent writers and readers need
//! no locking: a published object never changes.

#![deny(warnings)]

mod config;
pub use config::Config;

mod head;
pub use head::Head;

mod on_disk_repo;
pub use on_disk_repo::OnDiskRepo;
