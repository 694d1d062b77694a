// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Standardized metrics types for benchmark results.
//!
//! This module defines the data structures used to capture and serialize
//! encode timings for each strategy and input length.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sysinfo::System;
use vectorwire_core::ProtocolVersion;

use crate::strategy::EncodingStrategy;

/// Raw samples above this count are downsampled before serialization.
const MAX_STORED_SAMPLES: usize = 10_000;

/// Latency metrics with percentile distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyMetrics {
    /// Minimum observed latency in nanoseconds
    pub min_ns: u64,
    /// Maximum observed latency in nanoseconds
    pub max_ns: u64,
    /// Arithmetic mean latency in nanoseconds
    pub mean_ns: f64,
    /// Median (p50) latency in nanoseconds
    pub median_ns: u64,
    /// 95th percentile latency in nanoseconds
    pub p95_ns: u64,
    /// 99th percentile latency in nanoseconds
    pub p99_ns: u64,
    /// Standard deviation in nanoseconds
    pub std_dev_ns: f64,
    /// Raw sample data (optional, may be downsampled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<u64>>,
}

impl LatencyMetrics {
    /// Calculate metrics from a vector of latency samples (in nanoseconds).
    pub fn from_samples(mut samples: Vec<u64>, keep_raw: bool) -> Self {
        if samples.is_empty() {
            return Self {
                min_ns: 0,
                max_ns: 0,
                mean_ns: 0.0,
                median_ns: 0,
                p95_ns: 0,
                p99_ns: 0,
                std_dev_ns: 0.0,
                samples: None,
            };
        }

        samples.sort_unstable();
        let len = samples.len();

        let min_ns = samples[0];
        let max_ns = samples[len - 1];
        let sum: u64 = samples.iter().sum();
        let mean_ns = sum as f64 / len as f64;
        let median_ns = samples[len / 2];
        let p95_ns = samples[percentile_index(len, 0.95)];
        let p99_ns = samples[percentile_index(len, 0.99)];

        let variance: f64 = samples
            .iter()
            .map(|&x| {
                let diff = x as f64 - mean_ns;
                diff * diff
            })
            .sum::<f64>()
            / len as f64;
        let std_dev_ns = variance.sqrt();

        let raw_samples = if keep_raw {
            if len > MAX_STORED_SAMPLES {
                Some(samples.iter().step_by(len / 1000).copied().collect())
            } else {
                Some(samples)
            }
        } else {
            None
        };

        Self {
            min_ns,
            max_ns,
            mean_ns,
            median_ns,
            p95_ns,
            p99_ns,
            std_dev_ns,
            samples: raw_samples,
        }
    }

    /// Format latency in human-readable form (auto-selects ns/μs/ms).
    pub fn format_latency(ns: u64) -> String {
        if ns < 1_000 {
            format!("{}ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2}μs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2}ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2}s", ns as f64 / 1_000_000_000.0)
        }
    }
}

fn percentile_index(len: usize, quantile: f64) -> usize {
    ((len as f64 * quantile) as usize).min(len - 1)
}

/// Encode throughput derived from mean per-operation latency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughputMetrics {
    /// Vectors encoded per second
    pub vectors_per_sec: f64,
    /// Elements encoded per second
    pub elements_per_sec: f64,
    /// Output bytes produced per second
    pub bytes_per_sec: f64,
}

impl ThroughputMetrics {
    /// Calculate throughput for vectors of `elements` elements encoding to
    /// `encoded_bytes` bytes, at `mean_ns` nanoseconds per vector.
    pub fn calculate(elements: usize, encoded_bytes: usize, mean_ns: f64) -> Self {
        if mean_ns <= 0.0 {
            return Self {
                vectors_per_sec: 0.0,
                elements_per_sec: 0.0,
                bytes_per_sec: 0.0,
            };
        }

        let vectors_per_sec = 1_000_000_000.0 / mean_ns;
        Self {
            vectors_per_sec,
            elements_per_sec: vectors_per_sec * elements as f64,
            bytes_per_sec: vectors_per_sec * encoded_bytes as f64,
        }
    }

    /// Format throughput in human-readable form.
    pub fn format_bytes_per_sec(bps: f64) -> String {
        if bps < 1_000.0 {
            format!("{:.2} B/s", bps)
        } else if bps < 1_000_000.0 {
            format!("{:.2} KB/s", bps / 1_000.0)
        } else if bps < 1_000_000_000.0 {
            format!("{:.2} MB/s", bps / 1_000_000.0)
        } else {
            format!("{:.2} GB/s", bps / 1_000_000_000.0)
        }
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
        }
    }
}

/// Timing of one strategy at one input length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the benchmark, `<strategy>_<length>`
    pub name: String,
    /// Input representation under test
    pub strategy: EncodingStrategy,
    /// Number of vector elements
    pub input_length: usize,
    /// Protocol version passed to the encoder
    pub protocol_version: ProtocolVersion,
    /// Size of each encoded buffer in bytes
    pub encoded_bytes: usize,
    /// Per-encode latency
    pub latency: LatencyMetrics,
    /// Throughput derived from mean latency
    pub throughput: ThroughputMetrics,
    /// Number of recorded samples
    pub iterations: u64,
    /// Operations timed per sample
    pub batch_size: u64,
    /// Additional metadata specific to this benchmark
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl BenchmarkResult {
    /// Build a result from raw per-operation samples.
    pub fn from_samples(
        strategy: EncodingStrategy,
        input_length: usize,
        protocol_version: ProtocolVersion,
        encoded_bytes: usize,
        samples: Vec<u64>,
        batch_size: u64,
        keep_raw_samples: bool,
    ) -> Self {
        let iterations = samples.len() as u64;
        let latency = LatencyMetrics::from_samples(samples, keep_raw_samples);
        let throughput = ThroughputMetrics::calculate(input_length, encoded_bytes, latency.mean_ns);

        Self {
            name: format!("{}_{}", strategy, input_length),
            strategy,
            input_length,
            protocol_version,
            encoded_bytes,
            latency,
            throughput,
            iterations,
            batch_size,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the result. Values that fail to serialize are stored as null.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Complete benchmark suite report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Suite identifier
    pub benchmark_suite: String,
    /// Framework version
    pub version: String,
    /// Timestamp when benchmarks were run
    pub timestamp: DateTime<Utc>,
    /// Seed used to generate inputs
    pub seed: u64,
    /// System information
    pub system_info: SystemInfo,
    /// Individual benchmark results
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Create a new, empty benchmark report.
    pub fn new(seed: u64) -> Self {
        Self {
            benchmark_suite: "vectorwire-benchmarks".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            seed,
            system_info: SystemInfo::collect(),
            results: Vec::new(),
        }
    }

    /// Add a result to the report.
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Results for one strategy, in the order they were recorded.
    pub fn results_for(&self, strategy: EncodingStrategy) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(move |r| r.strategy == strategy)
    }

    /// Fastest strategy by median latency at the given input length.
    pub fn fastest_at(&self, input_length: usize) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .filter(|r| r.input_length == input_length)
            .min_by_key(|r| r.latency.median_ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(strategy: EncodingStrategy, length: usize, samples: Vec<u64>) -> BenchmarkResult {
        BenchmarkResult::from_samples(
            strategy,
            length,
            ProtocolVersion::V5,
            length * 4,
            samples,
            1,
            false,
        )
    }

    #[test]
    fn test_latency_metrics_from_samples() {
        let samples = vec![100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];
        let metrics = LatencyMetrics::from_samples(samples, false);

        assert_eq!(metrics.min_ns, 100);
        assert_eq!(metrics.max_ns, 1000);
        assert_eq!(metrics.median_ns, 600);
        assert_eq!(metrics.p99_ns, 1000);
        assert!((metrics.mean_ns - 550.0).abs() < 0.01);
        assert!(metrics.samples.is_none());
    }

    #[test]
    fn test_single_sample_percentiles() {
        let metrics = LatencyMetrics::from_samples(vec![42], true);
        assert_eq!(metrics.p95_ns, 42);
        assert_eq!(metrics.p99_ns, 42);
        assert_eq!(metrics.samples, Some(vec![42]));
    }

    #[test]
    fn test_empty_samples() {
        let metrics = LatencyMetrics::from_samples(Vec::new(), true);
        assert_eq!(metrics.max_ns, 0);
        assert!(metrics.samples.is_none());
    }

    #[test]
    fn test_raw_samples_downsampled() {
        let samples: Vec<u64> = (0..20_000).collect();
        let metrics = LatencyMetrics::from_samples(samples, true);
        let stored = metrics.samples.unwrap();
        assert!(stored.len() <= 1_000);
    }

    #[test]
    fn test_latency_format() {
        assert_eq!(LatencyMetrics::format_latency(500), "500ns");
        assert_eq!(LatencyMetrics::format_latency(1500), "1.50μs");
        assert_eq!(LatencyMetrics::format_latency(1_500_000), "1.50ms");
        assert_eq!(LatencyMetrics::format_latency(1_500_000_000), "1.50s");
    }

    #[test]
    fn test_throughput_calculation() {
        // 1μs per 512-element vector of 2048 bytes
        let metrics = ThroughputMetrics::calculate(512, 2048, 1_000.0);
        assert!((metrics.vectors_per_sec - 1_000_000.0).abs() < 0.01);
        assert!((metrics.elements_per_sec - 512_000_000.0).abs() < 1.0);
        assert!((metrics.bytes_per_sec - 2_048_000_000.0).abs() < 1.0);

        let idle = ThroughputMetrics::calculate(512, 2048, 0.0);
        assert_eq!(idle.vectors_per_sec, 0.0);
    }

    #[test]
    fn test_system_info_collect() {
        let info = SystemInfo::collect();
        assert!(!info.os.is_empty());
        assert!(info.cpu_cores > 0);
    }

    #[test]
    fn test_benchmark_result_serialization() {
        let result = result(EncodingStrategy::CustomType, 512, vec![100, 200, 300])
            .with_metadata("element_type", "float");

        assert_eq!(result.name, "custom_type_512");
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("custom_type_512"));
        assert!(json.contains("\"protocol_version\": \"v5\""));
        assert!(json.contains("element_type"));
    }

    #[test]
    fn test_report_queries() {
        let mut report = BenchmarkReport::new(42);
        report.add_result(result(EncodingStrategy::CopyToList, 2, vec![90]));
        report.add_result(result(EncodingStrategy::CustomType, 2, vec![30]));
        report.add_result(result(EncodingStrategy::CustomType, 512, vec![400]));

        assert_eq!(report.results_for(EncodingStrategy::CustomType).count(), 2);
        let fastest = report.fastest_at(2).unwrap();
        assert_eq!(fastest.strategy, EncodingStrategy::CustomType);
        assert!(report.fastest_at(4096).is_none());
    }
}
