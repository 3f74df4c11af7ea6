use std::fs;
use std::io;
use std::path::PathBuf;

use lodb_core::envelope;
use lodb_core::object::{address_encoded, Id, Object, MAX_HEADER_LEN};
use lodb_core::{Error, Result};

use tracing::{debug, trace, warn};

use super::{atomic, OnDiskRepo};

impl OnDiskRepo {
    /// Return the path where the object with this ID is (or would be) stored:
    /// `objects/<first 2 hex digits>/<remaining 38 hex digits>`.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        let hex = id.to_hex();
        let path = self.root.join("objects").join(&hex[..2]).join(&hex[2..]);
        trace!(%id, path = %path.display(), "object path");
        path
    }

    /// Store an object as a loose object and return its ID.
    ///
    /// If the object is already present, it is left untouched and its ID is
    /// returned. Otherwise the compressed object is written to a temporary
    /// file in the fan-out directory and renamed into place.
    pub fn put_loose_object(&self, object: &Object) -> Result<Id> {
        let encoded = object.encode();
        let id = address_encoded(&encoded);
        let path = self.object_path(&id);

        if path.exists() {
            debug!(%id, kind = %object.kind(), "object already stored");
            return Ok(id);
        }

        let packed = envelope::pack(&encoded, self.config.compression_level())?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        if atomic::publish_new(&path, &packed, true)? {
            debug!(%id, kind = %object.kind(), size = object.len(), "stored object");
        } else {
            debug!(%id, kind = %object.kind(), "object stored concurrently");
        }

        Ok(id)
    }

    /// Load a loose object.
    ///
    /// Returns `ObjectNotFound` if there is no such object, and
    /// `CorruptObject` if the stored bytes don't inflate, don't decode, or
    /// don't hash to `id`.
    pub fn get_loose_object(&self, id: &Id) -> Result<Object> {
        let path = self.object_path(id);

        let packed = match fs::read(&path) {
            Ok(packed) => packed,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(*id));
            }
            Err(err) => return Err(err.into()),
        };

        let object = self.decode_stored(id, &packed).map_err(|err| {
            warn!(%id, error = %err, "stored object is corrupt");
            Error::corrupt(id, err)
        })?;

        debug!(%id, kind = %object.kind(), size = object.len(), "read object");
        Ok(object)
    }

    /// Returns true if a loose object with this ID exists.
    ///
    /// Only checks for the file; its content is not read.
    pub fn has_loose_object(&self, id: &Id) -> bool {
        self.object_path(id).is_file()
    }

    fn decode_stored(&self, id: &Id, packed: &[u8]) -> Result<Object> {
        let max_size = self.config.max_object_size();
        // Leave room for the header; the body itself is checked against
        // `max_size` by the decode below.
        let encoded = envelope::unpack(packed, max_size.saturating_add(MAX_HEADER_LEN)).map_err(
            |err| match err {
                Error::ObjectTooLarge { size, .. } => Error::ObjectTooLarge {
                    size,
                    limit: max_size,
                },
                err => err,
            },
        )?;

        let object = Object::decode_with_limit(&encoded, max_size)?;

        let actual = address_encoded(&encoded);
        if actual != *id {
            return Err(Error::HashMismatch { actual });
        }

        Ok(object)
    }
}
