// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end tests: config file to saved report.

use tempfile::TempDir;
use vectorwire_benchmark::{
    BenchError, BenchmarkSuite, ConfigError, ConfigLoader, EncodingStrategy, JsonReporter,
};
use vectorwire_core::ProtocolVersion;

/// Config file through sweep to a report that loads back intact
#[test]
fn test_config_to_saved_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("bench.yaml");

    std::fs::write(
        &config_path,
        r#"
input_lengths: [2, 512]
warmup_iterations: 3
measurement_iterations: 10
batch_size: 2
seed: 1234
protocol_version: v5
strategies:
  - commons_to_object
  - custom_type
"#,
    )
    .expect("Failed to write config");

    let config = ConfigLoader::load_file(&config_path).expect("Failed to load config");
    let report = BenchmarkSuite::new(config).run().expect("Sweep failed");

    let reporter = JsonReporter::new(temp_dir.path().join("data")).expect("Failed to create reporter");
    let path = reporter.save(&report).expect("Failed to save report");

    let loaded = JsonReporter::load(&path).expect("Failed to load report");
    assert_eq!(loaded.seed, 1234);
    assert_eq!(loaded.results.len(), 4);

    let names: Vec<&str> = loaded.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "commons_to_object_2",
            "custom_type_2",
            "commons_to_object_512",
            "custom_type_512"
        ]
    );
    for result in &loaded.results {
        assert_eq!(result.protocol_version, ProtocolVersion::V5);
        assert!(result.latency.min_ns <= result.latency.max_ns);
        assert!(result.latency.median_ns <= result.latency.p99_ns);
    }
}

/// Every strategy encodes the benchmark input lengths to identical bytes
#[test]
fn test_strategies_agree_at_benchmark_lengths() {
    for length in [2, 512, 4096] {
        let input = vectorwire_benchmark::input::random_floats(length, 42);
        let reference = EncodingStrategy::CustomType
            .encode(&input, ProtocolVersion::V5)
            .expect("Encode failed");
        assert_eq!(reference.len(), length * 4);

        for strategy in EncodingStrategy::ALL {
            let out = strategy
                .encode(&input, ProtocolVersion::V5)
                .expect("Encode failed");
            assert_eq!(out, reference, "{} differs at length {}", strategy, length);
        }
    }
}

/// Invalid configuration never reaches the sweep
#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("bad.yaml");
    std::fs::write(&config_path, "protocol_version: v1\n").expect("Failed to write config");

    let err = ConfigLoader::load_file(&config_path).unwrap_err();
    let err: BenchError = err.into();
    assert!(matches!(
        err,
        BenchError::Config(ConfigError::InvalidField {
            field: "protocol_version",
            ..
        })
    ));
}

/// The shipped sample config matches the built-in defaults
#[test]
fn test_sample_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/vectorwire-bench.yaml");
    let config = ConfigLoader::load_file(path).expect("Failed to load sample config");
    assert_eq!(config, vectorwire_benchmark::BenchConfig::default());
}
