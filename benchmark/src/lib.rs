// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Vectorwire Benchmarking Framework
//!
//! Measures the cost of encoding a fixed-length float vector when the caller
//! starts from different input representations.
//!
//! # Strategies
//!
//! - **commons_to_object**: map the primitive slice to boxed nullable slots
//! - **copy_to_boxed_array**: index-copy into a boxed nullable array
//! - **copy_to_list**: push-copy into a growable list
//! - **custom_type**: encode straight from the primitive slice
//!
//! # Data Output
//!
//! Runs produce JSON reports with latency percentiles and throughput.

pub mod config;
pub mod error;
pub mod harness;
pub mod input;
pub mod metrics;
pub mod reporter;
pub mod strategy;
pub mod suite;

pub use config::{BenchConfig, ConfigLoader, ConfigOverrides};
pub use error::{BenchError, BenchResult, ConfigError};
pub use harness::BenchmarkHarness;
pub use metrics::{BenchmarkReport, BenchmarkResult, LatencyMetrics, SystemInfo, ThroughputMetrics};
pub use reporter::{JsonReporter, ReporterError};
pub use strategy::EncodingStrategy;
pub use suite::BenchmarkSuite;
