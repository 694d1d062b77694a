// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Error types for the benchmark suite.

use std::path::PathBuf;

use thiserror::Error;
use vectorwire_core::VectorError;

use crate::reporter::ReporterError;
use crate::strategy::EncodingStrategy;

/// Top-level error for a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Reporter(#[from] ReporterError),

    #[error("Strategy {strategy} failed to encode {input_length} elements: {source}")]
    Encode {
        strategy: EncodingStrategy,
        input_length: usize,
        #[source]
        source: VectorError,
    },

    #[error("Strategy {strategy} produced different bytes than {reference} for {input_length} elements")]
    StrategyMismatch {
        strategy: EncodingStrategy,
        reference: EncodingStrategy,
        input_length: usize,
    },
}

/// Configuration errors. Any invalid field stops the run before it starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parse error: {message}")]
    Parse { message: String },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown encoding strategy: '{name}'")]
    UnknownStrategy { name: String },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;
