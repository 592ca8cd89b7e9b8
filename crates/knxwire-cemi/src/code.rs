//! CEMI message codes.
//!
//! The message code is the one-byte discriminant at offset 0 of every CEMI
//! frame. The named constants below carry the exact wire values from the
//! KNX standard; other implementations depend on them bit-for-bit. Every
//! byte value is a valid code — unrecognized codes are classified as
//! passthrough, not rejected.

/// One-byte discriminant identifying the kind and direction of a CEMI frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageCode(pub u8);

/// How the body of a frame with a given message code is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Raw captured link-layer frame, consumed verbatim to end of stream.
    RawCapture,
    /// Structured `L_Data` body with its own self-describing layout.
    LinkData,
    /// Opaque remainder, preserved undecoded.
    Passthrough,
}

impl MessageCode {
    /// Bus-monitor indication (`L_Busmon.ind`).
    pub const L_BUSMON_IND: MessageCode = MessageCode(0x2B);
    /// Data request (`L_Data.req`).
    pub const L_DATA_REQ: MessageCode = MessageCode(0x11);
    /// Data indication (`L_Data.ind`).
    pub const L_DATA_IND: MessageCode = MessageCode(0x29);
    /// Data confirmation (`L_Data.con`).
    pub const L_DATA_CON: MessageCode = MessageCode(0x2E);
    /// Raw request (`L_Raw.req`).
    pub const L_RAW_REQ: MessageCode = MessageCode(0x10);
    /// Raw indication (`L_Raw.ind`).
    pub const L_RAW_IND: MessageCode = MessageCode(0x2D);
    /// Raw confirmation (`L_Raw.con`).
    pub const L_RAW_CON: MessageCode = MessageCode(0x2F);
    /// Poll-data request (`L_PollData.req`).
    pub const L_POLL_DATA_REQ: MessageCode = MessageCode(0x13);
    /// Poll-data confirmation (`L_PollData.con`).
    pub const L_POLL_DATA_CON: MessageCode = MessageCode(0x25);

    /// The raw byte value of this code.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Classify this code into its body-decoding strategy.
    ///
    /// Total over all 256 byte values. Note that the raw and poll-data
    /// codes are named but carry no structure this codec interprets, so
    /// they dispatch to passthrough like unknown codes.
    pub const fn dispatch(self) -> Dispatch {
        match self {
            Self::L_BUSMON_IND => Dispatch::RawCapture,
            Self::L_DATA_REQ | Self::L_DATA_IND | Self::L_DATA_CON => Dispatch::LinkData,
            _ => Dispatch::Passthrough,
        }
    }

    /// Returns true if this is one of the named standard codes.
    pub const fn is_recognized(self) -> bool {
        matches!(
            self,
            Self::L_BUSMON_IND
                | Self::L_DATA_REQ
                | Self::L_DATA_IND
                | Self::L_DATA_CON
                | Self::L_RAW_REQ
                | Self::L_RAW_IND
                | Self::L_RAW_CON
                | Self::L_POLL_DATA_REQ
                | Self::L_POLL_DATA_CON
        )
    }

    /// Returns a human-readable name for this code.
    pub const fn name(self) -> &'static str {
        match self {
            Self::L_BUSMON_IND => "L_Busmon.ind",
            Self::L_DATA_REQ => "L_Data.req",
            Self::L_DATA_IND => "L_Data.ind",
            Self::L_DATA_CON => "L_Data.con",
            Self::L_RAW_REQ => "L_Raw.req",
            Self::L_RAW_IND => "L_Raw.ind",
            Self::L_RAW_CON => "L_Raw.con",
            Self::L_POLL_DATA_REQ => "L_PollData.req",
            Self::L_POLL_DATA_CON => "L_PollData.con",
            _ => "unknown",
        }
    }
}

impl From<u8> for MessageCode {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<MessageCode> for u8 {
    fn from(code: MessageCode) -> u8 {
        code.0
    }
}

impl std::fmt::Display for MessageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.0)
    }
}
