// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for vector encoding.
//!
//! Every failure is an explicit enum variant reported synchronously.
//! No `Box<dyn Error>`, no `anyhow::Result` - all errors are strongly typed.

use thiserror::Error;

use crate::types::ProtocolVersion;

/// Validation errors raised while constructing an encoder or encoding a vector.
///
/// None of these are transient: retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("Vector length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Protocol {version} does not support fixed-width {element} vectors")]
    UnsupportedVersion {
        version: ProtocolVersion,
        element: &'static str,
    },

    #[error("Vector element at index {index} is null")]
    NullElement { index: usize },

    #[error("Invalid vector dimension: {value} - {reason}")]
    InvalidDimension { value: usize, reason: String },
}

/// Errors parsing a protocol version tag from a numeric code or string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("Unknown protocol version code: {code}")]
    UnknownCode { code: u8 },

    #[error("Invalid protocol version: '{value}' (expected e.g. 'v5' or '5')")]
    Malformed { value: String },
}

/// Result type alias using VectorError.
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = VectorError::LengthMismatch {
            expected: 512,
            actual: 511,
        };
        assert!(err.to_string().contains("512"));
        assert!(err.to_string().contains("511"));
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = VectorError::UnsupportedVersion {
            version: ProtocolVersion::V2,
            element: "float",
        };
        assert_eq!(
            err.to_string(),
            "Protocol v2 does not support fixed-width float vectors"
        );
    }
}
