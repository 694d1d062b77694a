// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Fixed-width element codecs.
//!
//! Each codec serializes one numeric element into `WIDTH` big-endian bytes.
//! The encoder is generic over the codec, so element dispatch is resolved
//! at compile time and never appears in the per-element loop.

use bytes::BufMut;

use crate::types::ProtocolVersion;

/// Strategy for writing one element of a fixed-width numeric type.
pub trait ElementCodec: Send + Sync {
    /// Element type this codec serializes.
    type Element: Copy + Send + Sync;

    /// Encoded size of a single element in bytes.
    const WIDTH: usize;

    /// Wire type name, used in error messages and logs.
    const NAME: &'static str;

    /// Write `value` to `buf` in network byte order.
    fn encode_element<B: BufMut>(&self, value: Self::Element, buf: &mut B);

    /// Whether `version` can carry vectors of this element type.
    fn supports(&self, version: ProtocolVersion) -> bool {
        version.supports_fixed_width_vectors()
    }
}

/// IEEE-754 single precision, 4 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatCodec;

impl ElementCodec for FloatCodec {
    type Element = f32;
    const WIDTH: usize = 4;
    const NAME: &'static str = "float";

    #[inline(always)]
    fn encode_element<B: BufMut>(&self, value: f32, buf: &mut B) {
        buf.put_f32(value);
    }
}

/// IEEE-754 double precision, 8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleCodec;

impl ElementCodec for DoubleCodec {
    type Element = f64;
    const WIDTH: usize = 8;
    const NAME: &'static str = "double";

    #[inline(always)]
    fn encode_element<B: BufMut>(&self, value: f64, buf: &mut B) {
        buf.put_f64(value);
    }
}

/// Two's complement 32-bit integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntCodec;

impl ElementCodec for IntCodec {
    type Element = i32;
    const WIDTH: usize = 4;
    const NAME: &'static str = "int";

    #[inline(always)]
    fn encode_element<B: BufMut>(&self, value: i32, buf: &mut B) {
        buf.put_i32(value);
    }
}

/// Two's complement 64-bit integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigIntCodec;

impl ElementCodec for BigIntCodec {
    type Element = i64;
    const WIDTH: usize = 8;
    const NAME: &'static str = "bigint";

    #[inline(always)]
    fn encode_element<B: BufMut>(&self, value: i64, buf: &mut B) {
        buf.put_i64(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_one<C: ElementCodec>(codec: C, value: C::Element) -> Vec<u8> {
        let mut buf = Vec::new();
        codec.encode_element(value, &mut buf);
        buf
    }

    #[test]
    fn test_float_is_big_endian_ieee754() {
        assert_eq!(encode_one(FloatCodec, 1.0), [0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(encode_one(FloatCodec, 2.0), [0x40, 0x00, 0x00, 0x00]);
        assert_eq!(encode_one(FloatCodec, -0.0), [0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_double_encoding() {
        assert_eq!(
            encode_one(DoubleCodec, 1.0),
            [0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_integer_encoding() {
        assert_eq!(encode_one(IntCodec, -1), [0xFF; 4]);
        assert_eq!(encode_one(IntCodec, 0x0102_0304), [1, 2, 3, 4]);
        assert_eq!(encode_one(BigIntCodec, 1), [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_width_matches_output() {
        assert_eq!(encode_one(FloatCodec, 0.5).len(), FloatCodec::WIDTH);
        assert_eq!(encode_one(DoubleCodec, 0.5).len(), DoubleCodec::WIDTH);
        assert_eq!(encode_one(IntCodec, 7).len(), IntCodec::WIDTH);
        assert_eq!(encode_one(BigIntCodec, 7).len(), BigIntCodec::WIDTH);
    }

    #[test]
    fn test_default_version_support() {
        assert!(!FloatCodec.supports(ProtocolVersion::V2));
        assert!(FloatCodec.supports(ProtocolVersion::V5));
    }
}
