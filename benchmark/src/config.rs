// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML benchmark configuration with strict validation.
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Any out-of-range field fails the load before a single sample is taken.

use std::path::Path;

use serde::Deserialize;
use vectorwire_core::ProtocolVersion;

use crate::error::ConfigError;
use crate::strategy::EncodingStrategy;

/// Largest vector the sweep will generate.
pub const MAX_INPUT_LENGTH: usize = 1 << 20;

/// Largest batch of operations timed as one sample.
const MAX_BATCH_SIZE: u64 = 1 << 16;

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBenchConfig {
    #[serde(default = "default_input_lengths")]
    input_lengths: Vec<usize>,
    #[serde(default = "default_warmup_iterations")]
    warmup_iterations: u64,
    #[serde(default = "default_measurement_iterations")]
    measurement_iterations: u64,
    #[serde(default = "default_batch_size")]
    batch_size: u64,
    #[serde(default = "default_seed")]
    seed: u64,
    #[serde(default = "default_protocol_version")]
    protocol_version: String,
    #[serde(default = "default_strategies")]
    strategies: Vec<String>,
    #[serde(default)]
    keep_raw_samples: bool,
}

fn default_input_lengths() -> Vec<usize> {
    vec![2, 512, 4096]
}

fn default_warmup_iterations() -> u64 {
    1_000
}

fn default_measurement_iterations() -> u64 {
    10_000
}

fn default_batch_size() -> u64 {
    16
}

fn default_seed() -> u64 {
    42
}

fn default_protocol_version() -> String {
    "v5".to_string()
}

fn default_strategies() -> Vec<String> {
    EncodingStrategy::ALL
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

impl Default for RawBenchConfig {
    fn default() -> Self {
        Self {
            input_lengths: default_input_lengths(),
            warmup_iterations: default_warmup_iterations(),
            measurement_iterations: default_measurement_iterations(),
            batch_size: default_batch_size(),
            seed: default_seed(),
            protocol_version: default_protocol_version(),
            strategies: default_strategies(),
            keep_raw_samples: false,
        }
    }
}

/// Validated benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Vector lengths to sweep, in order
    pub input_lengths: Vec<usize>,
    pub warmup_iterations: u64,
    pub measurement_iterations: u64,
    pub batch_size: u64,
    /// Seed for input generation
    pub seed: u64,
    pub protocol_version: ProtocolVersion,
    /// Strategies to run, deduplicated, in order
    pub strategies: Vec<EncodingStrategy>,
    pub keep_raw_samples: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input_lengths: default_input_lengths(),
            warmup_iterations: default_warmup_iterations(),
            measurement_iterations: default_measurement_iterations(),
            batch_size: default_batch_size(),
            seed: default_seed(),
            protocol_version: ProtocolVersion::V5,
            strategies: EncodingStrategy::ALL.to_vec(),
            keep_raw_samples: false,
        }
    }
}

impl From<&BenchConfig> for RawBenchConfig {
    fn from(config: &BenchConfig) -> Self {
        Self {
            input_lengths: config.input_lengths.clone(),
            warmup_iterations: config.warmup_iterations,
            measurement_iterations: config.measurement_iterations,
            batch_size: config.batch_size,
            seed: config.seed,
            protocol_version: config.protocol_version.to_string(),
            strategies: config
                .strategies
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            keep_raw_samples: config.keep_raw_samples,
        }
    }
}

/// Command-line replacements for individual config fields.
///
/// Empty lists and `None` leave the base value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub measurement_iterations: Option<u64>,
    pub input_lengths: Vec<usize>,
    pub strategies: Vec<EncodingStrategy>,
}

impl BenchConfig {
    /// Shrink iteration counts for a fast smoke run.
    pub fn quick(mut self) -> Self {
        self.warmup_iterations = self.warmup_iterations.min(10);
        self.measurement_iterations = self.measurement_iterations.min(100);
        self.batch_size = self.batch_size.min(4);
        self
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<BenchConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> Result<BenchConfig, ConfigError> {
        // serde_yaml reads an empty document as null rather than an empty map
        if content.trim().is_empty() {
            return Self::validate(RawBenchConfig::default());
        }

        let raw: RawBenchConfig = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: format!("YAML parse error: {}", e),
        })?;

        Self::validate(raw)
    }

    /// Apply overrides on top of `base` and validate the result with the
    /// same rules as a loaded file.
    pub fn apply_overrides(
        base: &BenchConfig,
        overrides: &ConfigOverrides,
    ) -> Result<BenchConfig, ConfigError> {
        let mut raw = RawBenchConfig::from(base);

        if let Some(iterations) = overrides.measurement_iterations {
            raw.measurement_iterations = iterations;
        }
        if !overrides.input_lengths.is_empty() {
            raw.input_lengths = overrides.input_lengths.clone();
        }
        if !overrides.strategies.is_empty() {
            raw.strategies = overrides
                .strategies
                .iter()
                .map(|s| s.name().to_string())
                .collect();
        }

        Self::validate(raw)
    }

    fn validate(raw: RawBenchConfig) -> Result<BenchConfig, ConfigError> {
        if raw.input_lengths.is_empty() {
            return Err(ConfigError::InvalidField {
                field: "input_lengths",
                value: "[]".to_string(),
                reason: "At least one input length is required".to_string(),
            });
        }
        if let Some(&bad) = raw
            .input_lengths
            .iter()
            .find(|&&len| len == 0 || len > MAX_INPUT_LENGTH)
        {
            return Err(ConfigError::InvalidField {
                field: "input_lengths",
                value: bad.to_string(),
                reason: format!("Must be between 1 and {}", MAX_INPUT_LENGTH),
            });
        }

        if raw.measurement_iterations == 0 {
            return Err(ConfigError::InvalidField {
                field: "measurement_iterations",
                value: "0".to_string(),
                reason: "At least one sample is required".to_string(),
            });
        }

        if raw.batch_size == 0 || raw.batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::InvalidField {
                field: "batch_size",
                value: raw.batch_size.to_string(),
                reason: format!("Must be between 1 and {}", MAX_BATCH_SIZE),
            });
        }

        let protocol_version = raw
            .protocol_version
            .parse::<ProtocolVersion>()
            .map_err(|e| ConfigError::InvalidField {
                field: "protocol_version",
                value: raw.protocol_version.clone(),
                reason: e.to_string(),
            })?;
        if !protocol_version.supports_fixed_width_vectors() {
            return Err(ConfigError::InvalidField {
                field: "protocol_version",
                value: raw.protocol_version,
                reason: "Version does not support fixed-width vectors".to_string(),
            });
        }

        let mut strategies = Vec::with_capacity(raw.strategies.len());
        for name in &raw.strategies {
            let strategy: EncodingStrategy = name.parse()?;
            if !strategies.contains(&strategy) {
                strategies.push(strategy);
            }
        }
        if strategies.is_empty() {
            return Err(ConfigError::InvalidField {
                field: "strategies",
                value: "[]".to_string(),
                reason: "At least one strategy is required".to_string(),
            });
        }

        Ok(BenchConfig {
            input_lengths: raw.input_lengths,
            warmup_iterations: raw.warmup_iterations,
            measurement_iterations: raw.measurement_iterations,
            batch_size: raw.batch_size,
            seed: raw.seed,
            protocol_version,
            strategies,
            keep_raw_samples: raw.keep_raw_samples,
        })
    }
}
