use std::io::Write;

use bytes::BytesMut;
use tracing::debug;

use knxwire_encoding as encoding;

use crate::codec::{encode_frame, CemiFrame};
use crate::error::{CemiError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 512;

/// Writes CEMI frames to any `Write` stream.
///
/// Each frame is encoded into an internal buffer first, so validation
/// failures (an oversized info field, an unencodable `L_Data` body) are
/// reported before any byte reaches the stream. The writer assumes
/// exclusive access to the stream for the duration of each call.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> FrameWriter<T> {
    /// Create a new frame writer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Encode and write one frame (blocking), returning the bytes written.
    pub fn write_frame(&mut self, frame: &CemiFrame) -> Result<usize> {
        self.buf.clear();
        let written = encode_frame(frame, &mut self.buf)?;

        encoding::write_all(&mut self.inner, &self.buf)?;
        self.flush()?;

        debug!(code = %frame.code, written, "wrote cEMI frame");
        Ok(written)
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(CemiError::Io)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::Bytes;

    use super::*;
    use crate::code::MessageCode;
    use crate::codec::{Body, MAX_INFO_LEN};
    use crate::ldata::LData;
    use crate::reader::FrameReader;

    #[test]
    fn write_busmon_frame() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        let frame = CemiFrame::busmon(Bytes::from_static(&[0xAA, 0xBB]));

        let written = writer.write_frame(&frame).unwrap();
        assert_eq!(written, 4);
        assert_eq!(
            writer.into_inner().into_inner(),
            vec![0x2B, 0x00, 0xAA, 0xBB]
        );
    }

    #[test]
    fn oversized_info_writes_nothing() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        let frame = CemiFrame::new(
            MessageCode::L_BUSMON_IND,
            vec![0u8; MAX_INFO_LEN + 1],
            Body::RawCapture(Bytes::new()),
        );

        let err = writer.write_frame(&frame).unwrap_err();
        assert!(matches!(err, CemiError::InfoTooLong { .. }));
        assert!(writer.into_inner().into_inner().is_empty());
    }

    #[test]
    fn written_frames_read_back() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        let frame = CemiFrame::link_data(MessageCode::L_DATA_REQ, LData::default());
        writer.write_frame(&frame).unwrap();

        let wire = writer.into_inner().into_inner();
        let mut reader = FrameReader::new(Cursor::new(wire));
        assert_eq!(reader.read_frame().unwrap().0, frame);
    }

    #[test]
    fn partial_writes_complete() {
        let mut writer = FrameWriter::new(OneByteWriter { data: Vec::new() });
        let frame = CemiFrame::busmon(Bytes::from_static(&[1, 2, 3]));

        writer.write_frame(&frame).unwrap();
        assert_eq!(writer.into_inner().data, vec![0x2B, 0x00, 1, 2, 3]);
    }

    #[test]
    fn write_error_propagates() {
        let mut writer = FrameWriter::new(ZeroWriter);
        let frame = CemiFrame::busmon(Bytes::from_static(&[1]));
        let err = writer.write_frame(&frame).unwrap_err();
        assert!(matches!(err, CemiError::Encoding(_)));
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        let _ = writer.get_ref();
        let _ = writer.get_mut();
        let _inner = writer.into_inner();
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
