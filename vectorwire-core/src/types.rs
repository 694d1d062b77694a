// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers and tags for validated encoder inputs.
//!
//! All types validate their invariants at creation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VersionParseError};

/// Wire protocol version selecting the encoding rules.
///
/// Versions 1 and 2 predate fixed-width vector support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProtocolVersion {
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
}

impl ProtocolVersion {
    /// Every known version, oldest first.
    pub const ALL: [ProtocolVersion; 6] = [
        ProtocolVersion::V1,
        ProtocolVersion::V2,
        ProtocolVersion::V3,
        ProtocolVersion::V4,
        ProtocolVersion::V5,
        ProtocolVersion::V6,
    ];

    /// Numeric code carried in frame headers.
    pub fn code(&self) -> u8 {
        match self {
            ProtocolVersion::V1 => 1,
            ProtocolVersion::V2 => 2,
            ProtocolVersion::V3 => 3,
            ProtocolVersion::V4 => 4,
            ProtocolVersion::V5 => 5,
            ProtocolVersion::V6 => 6,
        }
    }

    /// Look up a version by its numeric code.
    pub fn from_code(code: u8) -> Result<Self, VersionParseError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == code)
            .ok_or(VersionParseError::UnknownCode { code })
    }

    /// Whether this version can carry fixed-width vector payloads.
    pub fn supports_fixed_width_vectors(&self) -> bool {
        *self >= ProtocolVersion::V3
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.code())
    }
}

impl FromStr for ProtocolVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let code: u8 = digits.parse().map_err(|_| VersionParseError::Malformed {
            value: s.to_string(),
        })?;

        Self::from_code(code)
    }
}

impl TryFrom<String> for ProtocolVersion {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProtocolVersion> for String {
    fn from(version: ProtocolVersion) -> Self {
        version.to_string()
    }
}

/// Validated declared vector length.
/// Must be non-zero; a fixed-dimension vector of zero elements carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct VectorDimension(usize);

impl VectorDimension {
    /// Create a new VectorDimension with validation.
    pub fn new(value: usize) -> Result<Self, VectorError> {
        if value == 0 {
            return Err(VectorError::InvalidDimension {
                value,
                reason: "Declared vector length must be at least 1".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Get the inner length value.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VectorDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for VectorDimension {
    type Error = VectorError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VectorDimension> for usize {
    fn from(dimension: VectorDimension) -> Self {
        dimension.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_codes_round_trip() {
        for version in ProtocolVersion::ALL {
            assert_eq!(ProtocolVersion::from_code(version.code()), Ok(version));
        }
        assert_eq!(
            ProtocolVersion::from_code(7),
            Err(VersionParseError::UnknownCode { code: 7 })
        );
    }

    #[test]
    fn test_version_parse() {
        assert_eq!("v5".parse::<ProtocolVersion>(), Ok(ProtocolVersion::V5));
        assert_eq!("V4".parse::<ProtocolVersion>(), Ok(ProtocolVersion::V4));
        assert_eq!(" 3 ".parse::<ProtocolVersion>(), Ok(ProtocolVersion::V3));
        assert!(matches!(
            "five".parse::<ProtocolVersion>(),
            Err(VersionParseError::Malformed { .. })
        ));
    }

    #[test]
    fn test_fixed_width_support() {
        assert!(!ProtocolVersion::V1.supports_fixed_width_vectors());
        assert!(!ProtocolVersion::V2.supports_fixed_width_vectors());
        assert!(ProtocolVersion::V3.supports_fixed_width_vectors());
        assert!(ProtocolVersion::V5.supports_fixed_width_vectors());
        assert!(ProtocolVersion::V6.supports_fixed_width_vectors());
    }

    #[test]
    fn test_version_serde() {
        let json = serde_json::to_string(&ProtocolVersion::V5).unwrap();
        assert_eq!(json, "\"v5\"");
        let parsed: ProtocolVersion = serde_json::from_str("\"v4\"").unwrap();
        assert_eq!(parsed, ProtocolVersion::V4);
        assert!(serde_json::from_str::<ProtocolVersion>("\"v9\"").is_err());
    }

    #[test]
    fn test_dimension_validation() {
        assert!(VectorDimension::new(0).is_err());
        let dim = VectorDimension::new(512).unwrap();
        assert_eq!(dim.value(), 512);
        assert_eq!(dim.to_string(), "512");
    }
}
