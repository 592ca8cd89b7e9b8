use std::io::{ErrorKind, Read};

use bytes::Bytes;

use crate::error::{EncodingError, Result};

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Read a single byte.
pub fn read_u8<R: Read>(r: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    read_exact(r, &mut buf)?;
    Ok(buf[0])
}

/// Read a big-endian `u16`.
pub fn read_u16_be<R: Read>(r: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    read_exact(r, &mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

/// Fill `buf` completely from the stream.
///
/// Retries `Interrupted` reads. A stream that ends early fails with
/// [`EncodingError::UnexpectedEof`] reporting how many bytes were read
/// before EOF; partial fills are never returned.
pub fn read_exact<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize> {
    let needed = buf.len();
    let mut got = 0usize;

    while got < needed {
        match r.read(&mut buf[got..]) {
            Ok(0) => return Err(EncodingError::UnexpectedEof { needed, got }),
            Ok(n) => got += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(EncodingError::Io(err)),
        }
    }

    Ok(needed)
}

/// Read exactly `len` bytes into a freshly allocated buffer.
pub fn read_bytes<R: Read>(r: &mut R, len: usize) -> Result<Bytes> {
    let mut buf = vec![0u8; len];
    read_exact(r, &mut buf)?;
    Ok(Bytes::from(buf))
}

/// Drain the stream to EOF.
///
/// The caller must hand a reader that ends at the intended boundary
/// (one datagram, or an `io::Take` sized by an outer length field);
/// this function does no framing of its own.
pub fn read_to_end<R: Read>(r: &mut R) -> Result<Bytes> {
    let mut out = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        match r.read(&mut chunk) {
            Ok(0) => return Ok(Bytes::from(out)),
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(EncodingError::Io(err)),
        }
    }
}
