// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Parameter sweep over input lengths and strategies.

use std::hint::black_box;

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::harness::BenchmarkHarness;
use crate::input::random_floats;
use crate::metrics::{BenchmarkReport, BenchmarkResult};
use crate::strategy::EncodingStrategy;

/// Runs every configured strategy at every configured input length.
pub struct BenchmarkSuite {
    config: BenchConfig,
    harness: BenchmarkHarness,
}

impl BenchmarkSuite {
    pub fn new(config: BenchConfig) -> Self {
        let harness = BenchmarkHarness::new()
            .warmup(config.warmup_iterations)
            .iterations(config.measurement_iterations)
            .batch(config.batch_size)
            .keep_samples(config.keep_raw_samples);

        Self { config, harness }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Execute the sweep and collect a report.
    ///
    /// Before timing, each strategy's output is compared against the first
    /// strategy's for the same input; a mismatch aborts the run.
    pub fn run(&self) -> BenchResult<BenchmarkReport> {
        let mut report = BenchmarkReport::new(self.config.seed);
        let version = self.config.protocol_version;

        for &length in &self.config.input_lengths {
            let input = random_floats(length, self.config.seed);
            let mut reference = None;

            for &strategy in &self.config.strategies {
                let encoded = strategy
                    .encode(&input, version)
                    .map_err(|source| BenchError::Encode {
                        strategy,
                        input_length: length,
                        source,
                    })?;

                let (first, expected) =
                    reference.get_or_insert_with(|| (strategy, encoded.clone()));
                if *expected != encoded {
                    return Err(BenchError::StrategyMismatch {
                        strategy,
                        reference: *first,
                        input_length: length,
                    });
                }

                tracing::info!(
                    strategy = %strategy,
                    input_length = length,
                    samples = self.harness.measurement_iterations(),
                    "Running benchmark"
                );

                let samples = self
                    .harness
                    .run(|| strategy.encode(black_box(&input), version));

                report.add_result(
                    BenchmarkResult::from_samples(
                        strategy,
                        length,
                        version,
                        encoded.len(),
                        samples,
                        self.harness.batch_size(),
                        self.harness.should_keep_samples(),
                    )
                    .with_metadata("element_type", "float")
                    .with_metadata("warmup_iterations", self.config.warmup_iterations),
                );
            }
        }

        Ok(report)
    }

    /// Run a single strategy at a single length outside the configured sweep.
    pub fn run_one(&self, strategy: EncodingStrategy, length: usize) -> BenchResult<BenchmarkResult> {
        let single = BenchmarkSuite {
            config: BenchConfig {
                input_lengths: vec![length],
                strategies: vec![strategy],
                ..self.config.clone()
            },
            harness: self.harness.clone(),
        };

        let mut report = single.run()?;
        Ok(report.results.remove(0))
    }
}
