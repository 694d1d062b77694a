// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for timing encode operations.
//!
//! Encoding a short vector takes tens of nanoseconds, close to the cost of
//! reading the clock. Each sample therefore times a batch of operations and
//! records the per-operation average.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// A benchmark harness for measuring operation latency.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    /// Number of warmup operations before measurement
    warmup_iterations: u64,
    /// Number of recorded samples
    measurement_iterations: u64,
    /// Operations timed together per sample
    batch_size: u64,
    /// Whether to keep raw sample data
    keep_raw_samples: bool,
}

impl BenchmarkHarness {
    /// Create a new benchmark harness with default settings.
    pub fn new() -> Self {
        Self {
            warmup_iterations: 1_000,
            measurement_iterations: 10_000,
            batch_size: 1,
            keep_raw_samples: false,
        }
    }

    /// Set the number of warmup operations.
    pub fn warmup(mut self, iterations: u64) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Set the number of recorded samples.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.measurement_iterations = iterations;
        self
    }

    /// Set how many operations each sample covers. Zero is treated as one.
    pub fn batch(mut self, size: u64) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set whether to keep raw sample data.
    pub fn keep_samples(mut self, keep: bool) -> Self {
        self.keep_raw_samples = keep;
        self
    }

    /// Run a benchmark and collect latency samples.
    ///
    /// The closure performs a single operation; its return value is passed
    /// through `black_box` and dropped. Returns one sample per measurement
    /// iteration, each the mean nanoseconds per operation over its batch.
    pub fn run<F, T>(&self, mut operation: F) -> Vec<u64>
    where
        F: FnMut() -> T,
    {
        for _ in 0..self.warmup_iterations {
            black_box(operation());
        }

        let mut samples = Vec::with_capacity(self.measurement_iterations as usize);
        for _ in 0..self.measurement_iterations {
            let start = Instant::now();
            for _ in 0..self.batch_size {
                black_box(operation());
            }
            let elapsed = start.elapsed();
            samples.push(elapsed.as_nanos() as u64 / self.batch_size);
        }

        samples
    }

    /// Total operations executed by one `run`, warmup included.
    pub fn total_operations(&self) -> u64 {
        self.warmup_iterations + self.measurement_iterations * self.batch_size
    }

    pub fn measurement_iterations(&self) -> u64 {
        self.measurement_iterations
    }

    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Check if raw samples should be kept.
    pub fn should_keep_samples(&self) -> bool {
        self.keep_raw_samples
    }
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure the execution time of a closure.
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_harness_basic() {
        let harness = BenchmarkHarness::new().warmup(5).iterations(20);

        let samples = harness.run(|| {
            thread::sleep(Duration::from_micros(100));
        });

        assert_eq!(samples.len(), 20);
        for sample in &samples {
            assert!(*sample >= 100_000, "Sample {} < 100μs", sample);
        }
    }

    #[test]
    fn test_batch_counts_operations() {
        let harness = BenchmarkHarness::new().warmup(3).iterations(4).batch(5);
        let mut calls = 0u64;

        let samples = harness.run(|| calls += 1);

        assert_eq!(samples.len(), 4);
        assert_eq!(calls, 3 + 4 * 5);
        assert_eq!(harness.total_operations(), calls);
    }

    #[test]
    fn test_batch_samples_are_per_operation() {
        let harness = BenchmarkHarness::new().warmup(0).iterations(3).batch(4);

        let samples = harness.run(|| {
            thread::sleep(Duration::from_micros(200));
        });

        for sample in &samples {
            assert!(*sample >= 200_000, "Sample {} < 200μs", sample);
        }
    }

    #[test]
    fn test_operation_results_are_consumed() {
        let harness = BenchmarkHarness::new().warmup(2).iterations(3).batch(2);
        let mut produced = Vec::new();

        let samples = harness.run(|| {
            produced.push(produced.len());
            Err::<(), usize>(produced.len())
        });

        assert_eq!(samples.len(), 3);
        assert_eq!(produced.len(), 2 + 3 * 2);
    }

    #[test]
    fn test_zero_batch_is_one() {
        assert_eq!(BenchmarkHarness::new().batch(0).batch_size(), 1);
    }

    #[test]
    fn test_measure() {
        let (result, duration) = measure(|| {
            thread::sleep(Duration::from_millis(5));
            42
        });

        assert_eq!(result, 42);
        assert!(duration >= Duration::from_millis(5));
    }
}
