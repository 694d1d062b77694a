// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Vector encoder.
//!
//! Wire layout:
//! ```text
//! ┌──────────────────────────┬───────────┬───────────┬─────┐
//! │ count: u32 BE (optional) │ element 0 │ element 1 │ ... │
//! └──────────────────────────┴───────────┴───────────┴─────┘
//! ```
//! The count is written only when the encoder has no declared dimension.
//! Elements are concatenated without separators or padding, each taking
//! exactly `ElementCodec::WIDTH` bytes.

use std::fmt;
use std::ops::Deref;

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::ElementCodec;
use crate::error::{VectorError, VectorResult};
use crate::types::{ProtocolVersion, VectorDimension};
use crate::vector::Vector;

/// Size of the element count written ahead of undeclared-length vectors.
pub const COUNT_PREFIX_WIDTH: usize = 4;

/// Immutable encoded output. Ownership passes to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedBuffer(Bytes);

impl EncodedBuffer {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the underlying reference-counted buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Lowercase hex rendering, handy for logs and test fixtures.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Deref for EncodedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for EncodedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for EncodedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedBuffer({} bytes: {})", self.len(), self.to_hex())
    }
}

/// Reusable encoder bound to one element codec and, optionally, one
/// declared vector length.
///
/// The encoder holds no mutable state, so a single instance can be shared
/// across threads once constructed.
#[derive(Debug, Clone)]
pub struct VectorEncoder<C: ElementCodec> {
    codec: C,
    dimension: Option<VectorDimension>,
}

impl<C: ElementCodec> VectorEncoder<C> {
    /// Create an encoder for vectors of any length. Every encoded buffer
    /// starts with the element count.
    pub fn new(codec: C) -> Self {
        tracing::debug!(element = C::NAME, "Created length-prefixed vector encoder");
        Self {
            codec,
            dimension: None,
        }
    }

    /// Create an encoder for vectors of exactly `length` elements. The
    /// length is known to both sides, so no count is written.
    pub fn with_dimension(codec: C, length: usize) -> VectorResult<Self> {
        let dimension = VectorDimension::new(length)?;
        tracing::debug!(
            element = C::NAME,
            dimension = length,
            "Created fixed-dimension vector encoder"
        );
        Ok(Self {
            codec,
            dimension: Some(dimension),
        })
    }

    /// Declared dimension, if any.
    pub fn dimension(&self) -> Option<VectorDimension> {
        self.dimension
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Whether encoded buffers carry a leading element count.
    pub fn is_length_prefixed(&self) -> bool {
        self.dimension.is_none()
    }

    /// Exact size of the buffer produced for `count` elements, or `None`
    /// when that size does not fit in `usize`.
    pub fn encoded_len(&self, count: usize) -> Option<usize> {
        let prefix = if self.is_length_prefixed() {
            COUNT_PREFIX_WIDTH
        } else {
            0
        };
        count.checked_mul(C::WIDTH)?.checked_add(prefix)
    }

    /// Encode a vector.
    pub fn encode(
        &self,
        vector: &Vector<C::Element>,
        version: ProtocolVersion,
    ) -> VectorResult<EncodedBuffer> {
        self.encode_slice(vector.as_slice(), version)
    }

    /// Encode directly from a borrowed primitive slice.
    pub fn encode_slice(
        &self,
        elements: &[C::Element],
        version: ProtocolVersion,
    ) -> VectorResult<EncodedBuffer> {
        let prefix = self.validate(elements.len(), version)?;

        let mut buf = BytesMut::with_capacity(self.encoded_len(elements.len()).unwrap_or(0));
        if let Some(count) = prefix {
            buf.put_u32(count);
        }
        for &element in elements {
            self.codec.encode_element(element, &mut buf);
        }

        Ok(EncodedBuffer(buf.freeze()))
    }

    /// Encode from a nullable source. Fails on the first empty slot before
    /// any bytes are produced.
    pub fn encode_slots(
        &self,
        slots: &[Option<C::Element>],
        version: ProtocolVersion,
    ) -> VectorResult<EncodedBuffer> {
        let prefix = self.validate(slots.len(), version)?;

        if let Some(index) = slots.iter().position(Option::is_none) {
            return Err(VectorError::NullElement { index });
        }

        let mut buf = BytesMut::with_capacity(self.encoded_len(slots.len()).unwrap_or(0));
        if let Some(count) = prefix {
            buf.put_u32(count);
        }
        for element in slots.iter().flatten() {
            self.codec.encode_element(*element, &mut buf);
        }

        Ok(EncodedBuffer(buf.freeze()))
    }

    /// Check version and length. Returns the count to write ahead of the
    /// elements, if this encoder writes one.
    fn validate(&self, count: usize, version: ProtocolVersion) -> VectorResult<Option<u32>> {
        if !self.codec.supports(version) {
            return Err(VectorError::UnsupportedVersion {
                version,
                element: C::NAME,
            });
        }

        match self.dimension {
            Some(dimension) if dimension.value() != count => Err(VectorError::LengthMismatch {
                expected: dimension.value(),
                actual: count,
            }),
            Some(_) => Ok(None),
            None => u32::try_from(count)
                .map(Some)
                .map_err(|_| VectorError::LengthMismatch {
                    expected: u32::MAX as usize,
                    actual: count,
                }),
        }
    }
}
