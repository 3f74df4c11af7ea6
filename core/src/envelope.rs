//! The compression envelope applied to encoded objects at the storage
//! boundary. Objects are stored as zlib streams.

use std::io::{self, Write};

use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};

use crate::{Error, Result};

/// zlib's own default compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

const INFLATE_CHUNK: usize = 8192;

/// Compress `bytes` as a zlib stream at the given level (0 to 9).
pub fn pack(bytes: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level.min(9)));
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Inflate a complete zlib stream.
///
/// The stream must be well-formed and complete, including its trailing
/// checksum. A truncated stream fails with `UnexpectedEof` instead of
/// returning the bytes inflated so far. Output is never grown past `limit`
/// bytes (plus one, to tell an exact fit from an overflow), so a corrupt or
/// hostile stream can't force an unbounded allocation.
pub fn unpack(compressed: &[u8], limit: usize) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out: Vec<u8> = Vec::with_capacity(limit.min(compressed.len() * 2 + 64));

    loop {
        if out.len() == out.capacity() {
            if out.len() > limit {
                return Err(too_large(&out, limit));
            }
            let room = (limit.saturating_add(1) - out.len()).min(out.len().max(INFLATE_CHUNK));
            out.reserve_exact(room);
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        let status = inflater
            .decompress_vec(&compressed[consumed..], &mut out, FlushDecompress::None)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() as usize == consumed
                    && inflater.total_out() == produced
                    && out.len() < out.capacity();
                if stalled {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "compressed stream ends early",
                    )
                    .into());
                }
            }
        }
    }

    // The stream can end on the same call that fills the extra byte.
    if out.len() > limit {
        return Err(too_large(&out, limit));
    }

    if (inflater.total_in() as usize) < compressed.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "unexpected data after compressed stream",
        )
        .into());
    }

    Ok(out)
}

fn too_large(out: &[u8], limit: usize) -> Error {
    Error::ObjectTooLarge {
        size: out.len() as u64,
        limit,
    }
}
