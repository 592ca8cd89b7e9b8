use std::io::{ErrorKind, Write};

use crate::error::{EncodingError, Result};

/// Write a single byte.
pub fn write_u8<W: Write>(w: &mut W, value: u8) -> Result<usize> {
    write_all(w, &[value])
}

/// Write a big-endian `u16`.
pub fn write_u16_be<W: Write>(w: &mut W, value: u16) -> Result<usize> {
    write_all(w, &value.to_be_bytes())
}

/// Write the whole buffer to the sink.
///
/// Retries `Interrupted` and `WouldBlock`; a sink that accepts zero bytes
/// fails with [`EncodingError::WriteZero`]. Partial writes are never
/// reported as success.
pub fn write_all<W: Write>(w: &mut W, buf: &[u8]) -> Result<usize> {
    let mut offset = 0usize;

    while offset < buf.len() {
        match w.write(&buf[offset..]) {
            Ok(0) => return Err(EncodingError::WriteZero),
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
            Err(err) => return Err(EncodingError::Io(err)),
        }
    }

    Ok(buf.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_scalars() {
        let mut out = Vec::new();
        assert_eq!(write_u8(&mut out, 0x2B).unwrap(), 1);
        assert_eq!(write_u16_be(&mut out, 0x1102).unwrap(), 2);
        assert_eq!(out, vec![0x2B, 0x11, 0x02]);
    }

    #[test]
    fn write_all_counts_bytes() {
        let mut out = Vec::new();
        let n = write_all(&mut out, b"abcd").unwrap();
        assert_eq!(n, 4);
        assert_eq!(out, b"abcd");
    }

    #[test]
    fn write_all_empty_buffer() {
        let mut out = Vec::new();
        assert_eq!(write_all(&mut out, b"").unwrap(), 0);
    }

    #[test]
    fn write_all_retries_interrupted_and_would_block() {
        let mut sink = FlakyWriter {
            failures: vec![ErrorKind::Interrupted, ErrorKind::WouldBlock],
            data: Vec::new(),
        };
        let n = write_all(&mut sink, b"retry").unwrap();
        assert_eq!(n, 5);
        assert_eq!(sink.data, b"retry");
    }

    #[test]
    fn write_all_handles_partial_writes() {
        let mut sink = OneByteWriter { data: Vec::new() };
        write_all(&mut sink, b"slow").unwrap();
        assert_eq!(sink.data, b"slow");
    }

    #[test]
    fn zero_write_is_an_error() {
        let mut sink = ZeroWriter;
        let err = write_all(&mut sink, b"x").unwrap_err();
        assert!(matches!(err, EncodingError::WriteZero));
    }

    struct FlakyWriter {
        failures: Vec<ErrorKind>,
        data: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Some(kind) = self.failures.pop() {
                return Err(std::io::Error::from(kind));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct OneByteWriter {
        data: Vec<u8>,
    }

    impl Write for OneByteWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.is_empty() {
                return Ok(0);
            }
            self.data.push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
