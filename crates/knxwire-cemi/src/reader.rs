use std::io::Read;

use tracing::debug;

use crate::codec::{decode_frame, CemiFrame};
use crate::error::Result;

/// Reads CEMI frames from any `Read` stream.
///
/// The codec performs multiple sequential reads per frame, so the reader
/// assumes exclusive access to the stream for the duration of each call;
/// callers sharing a stream across threads must serialize access
/// themselves. For raw-capture and passthrough message codes the body has
/// no length field and is consumed to end-of-stream, so the inner reader
/// must end at the frame boundary (one datagram per reader, or an
/// `io::Take` sized by the transport).
pub struct FrameReader<T> {
    inner: T,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Read the next frame (blocking), returning it together with the
    /// bytes consumed.
    ///
    /// On error no frame is produced and the stream position is no longer
    /// trustworthy with respect to frame boundaries.
    pub fn read_frame(&mut self) -> Result<(CemiFrame, usize)> {
        let (frame, consumed) = decode_frame(&mut self.inner)?;
        debug!(
            code = %frame.code,
            info_len = frame.info.len(),
            consumed,
            "decoded cEMI frame"
        );
        Ok((frame, consumed))
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
