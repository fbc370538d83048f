use std::fmt;

use crate::ValueType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The provided value does not match the requested ValueType.
    TypeMismatch {
        expected: ValueType,
        got: &'static str,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::TypeMismatch { expected, got } => {
                write!(f, "expected {:?}, got {}", expected, got)
            }
        }
    }
}

/// Error type for decoding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input slice does not contain enough bytes to decode a value.
    NotEnoughData,
    /// The byte format is invalid for the target type (e.g., invalid UTF-8).
    InvalidFormat,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotEnoughData => write!(f, "not enough data"),
            DecodeError::InvalidFormat => write!(f, "invalid format for the target type"),
        }
    }
}
