//! Min-heap benchmark runner
//!
//! Builds heaps from generated inputs, times bulk construction and
//! `extract_min`, and appends the results to a CSV file.
//!
//! ```bash
//! cargo run --release --bin benchmark-runner -- --sizes 1000,10000 --kinds random,sorted --seed 42
//! RUST_LOG=debug cargo run --release --bin benchmark-runner
//! ```

use clap::Parser;
use env_logger::Env;
use log::info;
use rust_min_heap::benchmark::{self, BenchmarkConfig, InputKind};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Benchmark the array-backed min-heap", long_about = None)]
struct Args {
    /// Input sizes to benchmark, comma separated [default: 100,1000,10000,50000,100000]
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Input shapes (random, sorted, reverse-sorted), comma separated [default: all]
    #[arg(long, value_delimiter = ',', value_parser = parse_input_kind)]
    kinds: Vec<InputKind>,

    /// Seed for the input generator; omit to seed from OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// CSV file the results are appended to
    #[arg(long, value_name = "PATH", default_value = benchmark::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn parse_input_kind(s: &str) -> Result<InputKind, String> {
    s.parse()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = BenchmarkConfig {
        seed: args.seed,
        output: args.output,
        ..BenchmarkConfig::default()
    };
    if !args.sizes.is_empty() {
        config.sizes = args.sizes;
    }
    if !args.kinds.is_empty() {
        config.kinds = args.kinds;
    }

    info!("Starting MinHeap benchmarks...");
    let start = Instant::now();
    let records = benchmark::run_suite(&config)?;
    info!(
        "Benchmarks completed: {} runs in {:.2?}",
        records.len(),
        start.elapsed()
    );

    Ok(())
}
