/// Errors that can occur during CEMI frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum CemiError {
    /// The info field does not fit its one-byte length prefix.
    #[error("info field too long ({len} bytes, max 255)")]
    InfoTooLong { len: usize },

    /// An `L_Data` body has no TPDU; the NPDU length byte cannot represent it.
    #[error("L_Data body has an empty TPDU")]
    EmptyTpdu,

    /// An `L_Data` TPDU does not fit the one-byte NPDU length field.
    #[error("L_Data TPDU too long ({len} bytes, max 256)")]
    TpduTooLong { len: usize },

    /// A byte-level read or write failed.
    #[error(transparent)]
    Encoding(#[from] knxwire_encoding::EncodingError),

    /// An I/O error occurred on the underlying stream.
    #[error("cEMI I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CemiError>;
