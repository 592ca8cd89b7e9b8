//! The structured `L_Data` frame body.
//!
//! `L_Data` is the body carried by the `L_Data.req`/`.ind`/`.con` message
//! codes and represents one data-link transfer:
//!
//! ```text
//! ┌───────┬───────┬────────────┬─────────────┬──────────┬─────────────┐
//! │ Ctrl1 │ Ctrl2 │ Source     │ Destination │ NPDU len │ TPDU        │
//! │ (1B)  │ (1B)  │ (2B BE)    │ (2B BE)     │ L (1B)   │ (L+1 bytes) │
//! └───────┴───────┴────────────┴─────────────┴──────────┴─────────────┘
//! ```
//!
//! The body is self-describing: the NPDU length byte stores the TPDU
//! length minus the TPCI octet, so decoding consumes exactly `8 + L`
//! bytes and reports that count to the frame codec. Control fields are
//! kept as raw bytes with bit accessors; nothing is validated beyond the
//! layout, so every decoded body re-encodes to the bytes it came from.

use std::io::Read;

use bytes::{BufMut, Bytes, BytesMut};

use knxwire_encoding as encoding;

use crate::addr::{GroupAddress, IndividualAddress};
use crate::error::{CemiError, Result};

/// Transmission priority encoded in bits 3-2 of control field 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    System,
    Normal,
    Urgent,
    Low,
}

impl Priority {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b00 => Self::System,
            0b01 => Self::Normal,
            0b10 => Self::Urgent,
            _ => Self::Low,
        }
    }

    pub const fn to_bits(self) -> u8 {
        match self {
            Self::System => 0b00,
            Self::Normal => 0b01,
            Self::Urgent => 0b10,
            Self::Low => 0b11,
        }
    }
}

/// Control field 1.
///
/// ```text
/// Bit 7: frame type (1 = standard, 0 = extended)
/// Bit 5: repeat (1 = do not repeat)
/// Bit 4: system broadcast (1 = broadcast)
/// Bits 3-2: priority
/// Bit 1: acknowledge requested
/// Bit 0: confirm error
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlField1(pub u8);

impl ControlField1 {
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_standard_frame(self) -> bool {
        self.0 & 0x80 != 0
    }

    pub const fn do_not_repeat(self) -> bool {
        self.0 & 0x20 != 0
    }

    pub const fn is_broadcast(self) -> bool {
        self.0 & 0x10 != 0
    }

    pub const fn priority(self) -> Priority {
        Priority::from_bits((self.0 >> 2) & 0x03)
    }

    pub const fn ack_requested(self) -> bool {
        self.0 & 0x02 != 0
    }

    pub const fn has_error(self) -> bool {
        self.0 & 0x01 != 0
    }
}

impl Default for ControlField1 {
    /// Standard frame, repeat allowed, broadcast, normal priority.
    fn default() -> Self {
        Self(0x94)
    }
}

impl From<u8> for ControlField1 {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

/// Control field 2.
///
/// ```text
/// Bit 7: destination address type (1 = group, 0 = individual)
/// Bits 6-4: hop count
/// Bits 3-0: extended frame format (0 = standard)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlField2(pub u8);

impl ControlField2 {
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_group_address(self) -> bool {
        self.0 & 0x80 != 0
    }

    pub const fn hop_count(self) -> u8 {
        (self.0 >> 4) & 0x07
    }

    pub const fn extended_format(self) -> u8 {
        self.0 & 0x0F
    }
}

impl Default for ControlField2 {
    /// Group address, hop count 6, standard format.
    fn default() -> Self {
        Self(0xE0)
    }
}

impl From<u8> for ControlField2 {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

/// A data-link transfer: the structured body of the `L_Data` frame codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LData {
    pub control1: ControlField1,
    pub control2: ControlField2,
    pub source: IndividualAddress,
    /// Raw destination; interpret via [`LData::destination_group`] or
    /// [`LData::destination_individual`] depending on control field 2.
    pub destination: u16,
    /// TPCI octet followed by the transport payload. Never empty on the
    /// wire: the NPDU length byte stores `tpdu.len() - 1`.
    pub tpdu: Bytes,
}

impl LData {
    /// Fixed part of the body ahead of the TPDU (ctrl1, ctrl2, source,
    /// destination, NPDU length).
    pub const FIXED_SIZE: usize = 7;

    /// Decode a body from the stream, reporting the bytes consumed.
    pub fn read_from<R: Read>(r: &mut R) -> Result<(Self, usize)> {
        let control1 = ControlField1(encoding::read_u8(r)?);
        let control2 = ControlField2(encoding::read_u8(r)?);
        let source = IndividualAddress(encoding::read_u16_be(r)?);
        let destination = encoding::read_u16_be(r)?;
        let npdu_len = encoding::read_u8(r)? as usize;

        let tpdu = encoding::read_bytes(r, npdu_len + 1)?;

        let ldata = Self {
            control1,
            control2,
            source,
            destination,
            tpdu,
        };
        let consumed = Self::FIXED_SIZE + npdu_len + 1;
        Ok((ldata, consumed))
    }

    /// Serialize the body, returning the bytes written.
    ///
    /// Fails before writing anything if the TPDU is empty or does not fit
    /// the one-byte NPDU length field.
    pub fn write_to(&self, dst: &mut BytesMut) -> Result<usize> {
        if self.tpdu.is_empty() {
            return Err(CemiError::EmptyTpdu);
        }
        if self.tpdu.len() > 256 {
            return Err(CemiError::TpduTooLong {
                len: self.tpdu.len(),
            });
        }

        dst.reserve(self.wire_size());
        dst.put_u8(self.control1.raw());
        dst.put_u8(self.control2.raw());
        dst.put_u16(self.source.raw());
        dst.put_u16(self.destination);
        dst.put_u8((self.tpdu.len() - 1) as u8);
        dst.put_slice(&self.tpdu);

        Ok(self.wire_size())
    }

    /// The size of this body on the wire.
    pub fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + self.tpdu.len()
    }

    /// The destination as a group address, if control field 2 says so.
    pub fn destination_group(&self) -> Option<GroupAddress> {
        self.control2
            .is_group_address()
            .then(|| GroupAddress(self.destination))
    }

    /// The destination as an individual address, if control field 2 says so.
    pub fn destination_individual(&self) -> Option<IndividualAddress> {
        (!self.control2.is_group_address()).then(|| IndividualAddress(self.destination))
    }
}

impl Default for LData {
    fn default() -> Self {
        Self {
            control1: ControlField1::default(),
            control2: ControlField2::default(),
            source: IndividualAddress(0),
            destination: 0,
            tpdu: Bytes::from_static(&[0x00]),
        }
    }
}
