// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Vectorwire Core Library
//!
//! Fixed-width vector encoding for versioned binary wire protocols.
//! Provides the element codec strategies, the immutable vector type,
//! protocol version tags and the vector encoder itself.

pub mod codec;
pub mod encoder;
pub mod error;
pub mod types;
pub mod vector;

// Re-export commonly used types
pub use codec::{BigIntCodec, DoubleCodec, ElementCodec, FloatCodec, IntCodec};
pub use encoder::{EncodedBuffer, VectorEncoder, COUNT_PREFIX_WIDTH};
pub use error::{VectorError, VectorResult, VersionParseError};
pub use types::{ProtocolVersion, VectorDimension};
pub use vector::Vector;
