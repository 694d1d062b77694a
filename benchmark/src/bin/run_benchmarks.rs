// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI tool to run the vector encoding sweep and save a JSON report.

use std::path::PathBuf;

use clap::Parser;
use vectorwire_benchmark::harness::measure;
use vectorwire_benchmark::{
    BenchConfig, BenchmarkReport, BenchmarkSuite, ConfigLoader, ConfigOverrides, EncodingStrategy,
    JsonReporter, LatencyMetrics, ThroughputMetrics,
};

#[derive(Parser)]
#[command(name = "run_benchmarks")]
#[command(about = "Benchmark vector encoding across input representations")]
struct Args {
    /// YAML configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for benchmark data
    #[arg(short, long, default_value = "data")]
    output: PathBuf,

    /// Number of recorded samples per benchmark
    #[arg(short, long)]
    iterations: Option<u64>,

    /// Input lengths to sweep (repeatable; overrides the config)
    #[arg(short, long = "length")]
    lengths: Vec<usize>,

    /// Strategies to run (repeatable; overrides the config)
    #[arg(short, long = "strategy")]
    strategies: Vec<EncodingStrategy>,

    /// Also write one report file per strategy
    #[arg(long)]
    split: bool,

    /// Run in quick mode (fewer iterations)
    #[arg(long)]
    quick: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let config = resolve_config(&args)?;

    println!("Vectorwire Benchmark Suite");
    println!("==========================");
    println!("Output directory: {:?}", args.output);
    println!("Input lengths:    {:?}", config.input_lengths);
    println!("Samples:          {}", config.measurement_iterations);
    println!("Protocol:         {}", config.protocol_version);
    println!();

    let reporter = JsonReporter::new(&args.output)?;
    let suite = BenchmarkSuite::new(config);

    let (report, elapsed) = measure(|| suite.run());
    let report = report?;
    tracing::info!(
        results = report.results.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Benchmark sweep finished"
    );

    let path = reporter.save(&report)?;
    println!();
    println!("Benchmark report saved to: {:?}", path);
    if args.split {
        for path in reporter.save_by_strategy(&report)? {
            println!("  strategy report: {:?}", path);
        }
    }
    println!();

    print_summary(&report);

    Ok(())
}

fn resolve_config(args: &Args) -> anyhow::Result<BenchConfig> {
    let base = match &args.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => BenchConfig::default(),
    };

    let overrides = ConfigOverrides {
        measurement_iterations: args.iterations,
        input_lengths: args.lengths.clone(),
        strategies: args.strategies.clone(),
    };
    let mut config = ConfigLoader::apply_overrides(&base, &overrides)?;
    if args.quick {
        config = config.quick();
    }

    Ok(config)
}

fn print_summary(report: &BenchmarkReport) {
    println!("Summary");
    println!("-------");
    println!();
    println!(
        "{:<28} {:>10} {:>10} {:>10} {:>14}",
        "benchmark", "median", "p99", "mean", "output"
    );

    for result in &report.results {
        println!(
            "{:<28} {:>10} {:>10} {:>10} {:>14}",
            result.name,
            LatencyMetrics::format_latency(result.latency.median_ns),
            LatencyMetrics::format_latency(result.latency.p99_ns),
            LatencyMetrics::format_latency(result.latency.mean_ns as u64),
            ThroughputMetrics::format_bytes_per_sec(result.throughput.bytes_per_sec),
        );
    }

    println!();
    let mut lengths: Vec<usize> = report.results.iter().map(|r| r.input_length).collect();
    lengths.dedup();
    for length in lengths {
        if let Some(fastest) = report.fastest_at(length) {
            println!("Fastest at {:>5} elements: {}", length, fastest.strategy);
        }
    }
}
