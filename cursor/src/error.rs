//! Error types for cursor operations.

use std::fmt;

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Result type for writer operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Errors that can occur while reading primitive values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Attempted to read past the end of the buffer.
    OutOfBounds {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A C-string scan reached the end of the buffer without a zero byte.
    UnterminatedString {
        /// Position where the string started.
        start: usize,
    },
}

/// Errors that can occur while writing primitive values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// Text contains a zero byte and cannot be written as a C-string.
    InteriorNul {
        /// Byte offset of the zero byte within the text.
        position: usize,
    },
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::UnterminatedString { start } => {
                write!(f, "unterminated string starting at byte {start}")
            }
        }
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InteriorNul { position } => {
                write!(f, "string contains a zero byte at offset {position}")
            }
        }
    }
}

impl std::error::Error for CursorError {}

impl std::error::Error for WriteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_out_of_bounds() {
        let err = CursorError::OutOfBounds {
            requested: 8,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("8 bytes"), "should mention requested bytes");
        assert!(msg.contains("3 bytes"), "should mention available bytes");
        assert!(msg.contains("read"), "should mention read operation");
    }

    #[test]
    fn error_display_unterminated_string() {
        let err = CursorError::UnterminatedString { start: 17 };
        let msg = err.to_string();
        assert!(msg.contains("unterminated"));
        assert!(msg.contains("17"));
    }

    #[test]
    fn error_display_interior_nul() {
        let err = WriteError::InteriorNul { position: 4 };
        assert!(err.to_string().contains("offset 4"));
    }

    #[test]
    fn error_equality() {
        let err1 = CursorError::OutOfBounds {
            requested: 8,
            available: 3,
        };
        let err2 = CursorError::OutOfBounds {
            requested: 8,
            available: 3,
        };
        let err3 = CursorError::OutOfBounds {
            requested: 8,
            available: 4,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<CursorError>();
        assert_error::<WriteError>();
    }
}
