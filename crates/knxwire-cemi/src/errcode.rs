//! KNXnet/IP error codes.
//!
//! Status codes carried in KNXnet/IP connection-management responses.
//! This is a flat, stateless lookup: every byte value renders to a
//! description, unknown values included.

/// A KNXnet/IP status/error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub u8);

impl ErrorCode {
    /// Operation successful (`E_NO_ERROR`).
    pub const NO_ERROR: ErrorCode = ErrorCode(0x00);
    /// Unsupported host protocol (`E_HOST_PROTOCOL_TYPE`).
    pub const E_HOST_PROTOCOL_TYPE: ErrorCode = ErrorCode(0x01);
    /// Unsupported KNXnet/IP protocol version (`E_VERSION_NOT_SUPPORTED`).
    pub const E_VERSION_NOT_SUPPORTED: ErrorCode = ErrorCode(0x02);
    /// Out-of-order sequence number received (`E_SEQUENCE_NUMBER`).
    pub const E_SEQUENCE_NUMBER: ErrorCode = ErrorCode(0x04);
    /// No active data connection with the given ID (`E_CONNECTION_ID`).
    pub const E_CONNECTION_ID: ErrorCode = ErrorCode(0x21);
    /// Unsupported connection type (`E_CONNECTION_TYPE`).
    pub const E_CONNECTION_TYPE: ErrorCode = ErrorCode(0x22);
    /// Unsupported connection option (`E_CONNECTION_OPTION`).
    pub const E_CONNECTION_OPTION: ErrorCode = ErrorCode(0x23);
    /// The server cannot accept more connections (`E_NO_MORE_CONNECTIONS`).
    pub const E_NO_MORE_CONNECTIONS: ErrorCode = ErrorCode(0x24);
    /// No free individual address available for the connection
    /// (`E_NO_MORE_UNIQUE_CONNECTIONS`).
    pub const E_NO_MORE_UNIQUE_CONNECTIONS: ErrorCode = ErrorCode(0x25);
    /// Error with a data connection (`E_DATA_CONNECTION`).
    pub const E_DATA_CONNECTION: ErrorCode = ErrorCode(0x26);
    /// Error with a KNX connection (`E_KNX_CONNECTION`).
    pub const E_KNX_CONNECTION: ErrorCode = ErrorCode(0x27);
    /// Unsupported tunnelling layer (`E_TUNNELLING_LAYER`).
    pub const E_TUNNELLING_LAYER: ErrorCode = ErrorCode(0x29);

    /// The raw byte value of this code.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns true for any code other than [`ErrorCode::NO_ERROR`].
    pub const fn is_error(self) -> bool {
        self.0 != 0
    }

    /// A human-readable description, or `None` for codes the standard
    /// does not define.
    pub const fn description(self) -> Option<&'static str> {
        match self {
            Self::NO_ERROR => Some("no error"),
            Self::E_HOST_PROTOCOL_TYPE => Some("host protocol is not supported"),
            Self::E_VERSION_NOT_SUPPORTED => Some("KNXnet/IP version is not supported"),
            Self::E_SEQUENCE_NUMBER => Some("sequence number is out-of-order"),
            Self::E_CONNECTION_ID => Some("no active data connection"),
            Self::E_CONNECTION_TYPE => Some("unsupported connection type"),
            Self::E_CONNECTION_OPTION => Some("unsupported connection option"),
            Self::E_NO_MORE_CONNECTIONS => Some("no more connections available"),
            Self::E_NO_MORE_UNIQUE_CONNECTIONS => {
                Some("no more unique connections available")
            }
            Self::E_DATA_CONNECTION => Some("data connection error"),
            Self::E_KNX_CONNECTION => Some("KNX connection error"),
            Self::E_TUNNELLING_LAYER => Some("unsupported tunnelling layer"),
            _ => None,
        }
    }
}

impl From<u8> for ErrorCode {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        code.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.description() {
            Some(desc) => f.write_str(desc),
            None => write!(f, "unknown error code 0x{:02X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        assert_eq!(ErrorCode::NO_ERROR.raw(), 0x00);
        assert_eq!(ErrorCode::E_SEQUENCE_NUMBER.raw(), 0x04);
        assert_eq!(ErrorCode::E_CONNECTION_ID.raw(), 0x21);
        assert_eq!(ErrorCode::E_TUNNELLING_LAYER.raw(), 0x29);
    }

    #[test]
    fn descriptions() {
        assert_eq!(ErrorCode::NO_ERROR.to_string(), "no error");
        assert_eq!(
            ErrorCode::E_NO_MORE_CONNECTIONS.to_string(),
            "no more connections available"
        );
        assert_eq!(
            ErrorCode::E_VERSION_NOT_SUPPORTED.to_string(),
            "KNXnet/IP version is not supported"
        );
    }

    #[test]
    fn unknown_code_renders_hex() {
        let code = ErrorCode(0x7F);
        assert!(code.description().is_none());
        assert_eq!(code.to_string(), "unknown error code 0x7F");
    }

    #[test]
    fn is_error() {
        assert!(!ErrorCode::NO_ERROR.is_error());
        assert!(ErrorCode::E_KNX_CONNECTION.is_error());
        assert!(ErrorCode(0xCC).is_error());
    }
}
