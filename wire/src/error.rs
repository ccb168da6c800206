//! Error types for A2S_INFO encoding and decoding.

use std::fmt;

use cursor::{CursorError, WriteError};

/// Result type for wire decode operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Errors that abort an info decode.
///
/// There is no partial-record recovery: any of these means no
/// [`ServerInfo`](crate::ServerInfo) was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A primitive read requested more bytes than remain.
    OutOfBounds { requested: usize, available: usize },

    /// A C-string ran to the end of the packet without a terminator.
    UnterminatedString { start: usize },

    /// The server answered with the legacy (GoldSource) info reply.
    LegacyProtocolUnsupported,

    /// The response type byte is neither the info nor the legacy reply.
    UnexpectedHeader { found: u8 },
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A text field contains a zero byte.
    InteriorNul { field: &'static str, position: usize },
}

impl From<CursorError> for DecodeError {
    fn from(err: CursorError) -> Self {
        match err {
            CursorError::OutOfBounds {
                requested,
                available,
            } => Self::OutOfBounds {
                requested,
                available,
            },
            CursorError::UnterminatedString { start } => Self::UnterminatedString { start },
        }
    }
}

impl EncodeError {
    pub(crate) fn text_field(field: &'static str) -> impl FnOnce(WriteError) -> Self {
        move |err| match err {
            WriteError::InteriorNul { position } => Self::InteriorNul { field, position },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "packet truncated: need {requested} bytes, have {available}"
                )
            }
            Self::UnterminatedString { start } => {
                write!(f, "unterminated string at byte {start}")
            }
            Self::LegacyProtocolUnsupported => {
                write!(f, "legacy GoldSource info reply is not supported")
            }
            Self::UnexpectedHeader { found } => {
                write!(f, "unexpected response type: 0x{found:02X}")
            }
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InteriorNul { field, position } => {
                write!(f, "{field} contains a zero byte at offset {position}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl std::error::Error for EncodeError {}
