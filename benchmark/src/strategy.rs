// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Caller-side input representations.
//!
//! Each strategy starts from the same primitive `&[f32]` and converts it the
//! way a different kind of caller would before handing it to the encoder.
//! The encoder itself is identical for all of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vectorwire_core::{
    EncodedBuffer, FloatCodec, ProtocolVersion, Vector, VectorEncoder, VectorResult,
};

use crate::error::ConfigError;

/// Input representation fed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingStrategy {
    /// Bulk-map the primitive slice to boxed nullable slots
    CommonsToObject,
    /// Index-copy into a pre-sized boxed nullable array
    CopyToBoxedArray,
    /// Push-copy into a growable list
    CopyToList,
    /// Encode the primitive slice with no conversion
    CustomType,
}

impl EncodingStrategy {
    /// All strategies in report order.
    pub const ALL: [EncodingStrategy; 4] = [
        EncodingStrategy::CommonsToObject,
        EncodingStrategy::CopyToBoxedArray,
        EncodingStrategy::CopyToList,
        EncodingStrategy::CustomType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EncodingStrategy::CommonsToObject => "commons_to_object",
            EncodingStrategy::CopyToBoxedArray => "copy_to_boxed_array",
            EncodingStrategy::CopyToList => "copy_to_list",
            EncodingStrategy::CustomType => "custom_type",
        }
    }

    /// Run one full iteration: build a fresh encoder for the input's length,
    /// convert the input, and encode it.
    pub fn encode(&self, input: &[f32], version: ProtocolVersion) -> VectorResult<EncodedBuffer> {
        let encoder = VectorEncoder::with_dimension(FloatCodec, input.len())?;

        match self {
            EncodingStrategy::CommonsToObject => {
                let boxed: Vec<Option<f32>> = input.iter().copied().map(Some).collect();
                let vector = Vector::from_slots(boxed)?;
                encoder.encode(&vector, version)
            }
            EncodingStrategy::CopyToBoxedArray => {
                let mut boxed: Box<[Option<f32>]> = vec![None; input.len()].into_boxed_slice();
                for (slot, &value) in boxed.iter_mut().zip(input) {
                    *slot = Some(value);
                }
                let vector = Vector::from_slots(boxed.iter().copied())?;
                encoder.encode(&vector, version)
            }
            EncodingStrategy::CopyToList => {
                let mut list = Vec::with_capacity(input.len());
                for &value in input {
                    list.push(value);
                }
                encoder.encode(&Vector::from(list), version)
            }
            EncodingStrategy::CustomType => encoder.encode_slice(input, version),
        }
    }
}

impl fmt::Display for EncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}
