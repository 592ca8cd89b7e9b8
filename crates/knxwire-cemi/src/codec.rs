use std::io::{Cursor, Read};

use bytes::{BufMut, Bytes, BytesMut};

use knxwire_encoding as encoding;

use crate::code::{Dispatch, MessageCode};
use crate::error::{CemiError, Result};
use crate::ldata::LData;

/// Fixed frame header: message code (1) + info length (1).
pub const HEADER_SIZE: usize = 2;

/// Maximum info-field length representable by the one-byte length prefix.
pub const MAX_INFO_LEN: usize = 255;

/// The body of a CEMI frame. The variant is fully determined by the
/// frame's message code — see [`MessageCode::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A captured link-layer frame, verbatim (bus-monitor mode).
    RawCapture(Bytes),
    /// A structured data-link transfer.
    LinkData(LData),
    /// The undecoded remainder for codes this codec does not interpret.
    Passthrough(Bytes),
}

impl Body {
    /// The size of this body on the wire.
    pub fn wire_size(&self) -> usize {
        match self {
            Body::RawCapture(bytes) | Body::Passthrough(bytes) => bytes.len(),
            Body::LinkData(ldata) => ldata.wire_size(),
        }
    }

    fn write_to(&self, dst: &mut BytesMut) -> Result<usize> {
        match self {
            Body::RawCapture(bytes) | Body::Passthrough(bytes) => {
                dst.put_slice(bytes);
                Ok(bytes.len())
            }
            Body::LinkData(ldata) => ldata.write_to(dst),
        }
    }
}

/// A CEMI frame: message code, ancillary info, and a code-dependent body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CemiFrame {
    pub code: MessageCode,
    /// Ancillary information, 0–255 bytes (the one-byte length prefix is
    /// enforced at encode time).
    pub info: Bytes,
    pub body: Body,
}

impl CemiFrame {
    /// Create a frame from its parts.
    pub fn new(code: MessageCode, info: impl Into<Bytes>, body: Body) -> Self {
        Self {
            code,
            info: info.into(),
            body,
        }
    }

    /// A bus-monitor indication carrying a raw captured frame.
    pub fn busmon(capture: impl Into<Bytes>) -> Self {
        Self::new(
            MessageCode::L_BUSMON_IND,
            Bytes::new(),
            Body::RawCapture(capture.into()),
        )
    }

    /// An `L_Data` frame with the given code and no ancillary info.
    pub fn link_data(code: MessageCode, ldata: LData) -> Self {
        Self::new(code, Bytes::new(), Body::LinkData(ldata))
    }

    /// The total wire size of this frame (header + info + body).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.info.len() + self.body.wire_size()
    }

    /// Decode a frame from a byte slice holding exactly one frame.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let (frame, _) = decode_frame(&mut cursor)?;
        Ok(frame)
    }

    /// Encode this frame into a fresh byte vector.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(self.wire_size());
        encode_frame(self, &mut buf)?;
        Ok(buf.to_vec())
    }
}

/// Decode one frame from a readable stream, returning the frame and the
/// total bytes consumed.
///
/// The stream must be positioned at a frame boundary and, for the
/// raw-capture and passthrough codes (which have no length field of their
/// own), must also *end* at the frame boundary — hand in one datagram, or
/// an `io::Take` sized by the transport. `L_Data` bodies are
/// self-describing and consume exactly their own byte count.
///
/// Any failure — short read, stream error, or an error from the `L_Data`
/// decoder — is surfaced immediately and yields no frame; the stream
/// position is indeterminate afterwards.
pub fn decode_frame<R: Read>(src: &mut R) -> Result<(CemiFrame, usize)> {
    let mut header = [0u8; HEADER_SIZE];
    encoding::read_exact(src, &mut header)?;
    let code = MessageCode(header[0]);
    let info_len = header[1] as usize;
    let mut consumed = HEADER_SIZE;

    let info = encoding::read_bytes(src, info_len)?;
    consumed += info_len;

    let body = match code.dispatch() {
        Dispatch::RawCapture => {
            let capture = encoding::read_to_end(src)?;
            consumed += capture.len();
            Body::RawCapture(capture)
        }
        Dispatch::LinkData => {
            let (ldata, n) = LData::read_from(src)?;
            consumed += n;
            Body::LinkData(ldata)
        }
        Dispatch::Passthrough => {
            let rest = encoding::read_to_end(src)?;
            consumed += rest.len();
            Body::Passthrough(rest)
        }
    };

    Ok((CemiFrame { code, info, body }, consumed))
}

/// Encode a frame into `dst`, returning the bytes written.
///
/// Fails with [`CemiError::InfoTooLong`] before writing anything if the
/// info field does not fit its one-byte length prefix; the length byte
/// always equals the number of info bytes actually written.
pub fn encode_frame(frame: &CemiFrame, dst: &mut BytesMut) -> Result<usize> {
    if frame.info.len() > MAX_INFO_LEN {
        return Err(CemiError::InfoTooLong {
            len: frame.info.len(),
        });
    }

    dst.reserve(frame.wire_size());
    dst.put_u8(frame.code.raw());
    dst.put_u8(frame.info.len() as u8);
    dst.put_slice(&frame.info);
    let body_len = frame.body.write_to(dst)?;

    Ok(HEADER_SIZE + frame.info.len() + body_len)
}
