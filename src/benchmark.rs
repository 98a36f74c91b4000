//! Benchmark harness: input generation, timed runs, CSV results
//!
//! Each run bulk-builds a [`MinHeap`] from `n` generated values, then extracts
//! `n / 2` minima. Both phases are timed; the extraction phase is also
//! measured with an [`OperationCounters`] observer. Results are appended to a
//! CSV file with one row per run:
//!
//! ```text
//! N,DataType,Operations,InitTime_ns,OperationTime_ns,Comparisons,Swaps,ArrayAccesses
//! ```
//!
//! The `benchmark-runner` binary is a thin CLI over [`run_suite`].

use crate::compare::NaturalOrder;
use crate::min_heap::MinHeap;
use crate::observer::{CounterSnapshot, OperationCounters};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Header line of the results file
pub const CSV_HEADER: &str =
    "N,DataType,Operations,InitTime_ns,OperationTime_ns,Comparisons,Swaps,ArrayAccesses";

/// Input sizes used when none are configured
pub const DEFAULT_SIZES: [usize; 5] = [100, 1_000, 10_000, 50_000, 100_000];

/// Results file used when none is configured
pub const DEFAULT_OUTPUT: &str = "docs/performance-data.csv";

/// Shape of the generated input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Uniformly random values
    Random,
    /// Random values sorted ascending (already a heap)
    Sorted,
    /// Random values sorted descending (worst case for bulk build)
    ReverseSorted,
}

impl InputKind {
    /// Every kind, in the order a suite runs them
    pub const ALL: [InputKind; 3] = [
        InputKind::Random,
        InputKind::Sorted,
        InputKind::ReverseSorted,
    ];
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Random => "Random",
            InputKind::Sorted => "Sorted",
            InputKind::ReverseSorted => "ReverseSorted",
        };
        f.write_str(name)
    }
}

impl FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(InputKind::Random),
            "sorted" => Ok(InputKind::Sorted),
            "reverse-sorted" | "reversesorted" | "reverse" => Ok(InputKind::ReverseSorted),
            _ => Err(format!(
                "unknown input kind '{s}' (expected random, sorted or reverse-sorted)"
            )),
        }
    }
}

/// Generates `n` values in `[0, 10n)` shaped according to `kind`
pub fn generate_input<R: Rng + ?Sized>(n: usize, kind: InputKind, rng: &mut R) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }

    let upper = (n as i64).saturating_mul(10);
    let mut data: Vec<i64> = (0..n).map(|_| rng.gen_range(0..upper)).collect();
    match kind {
        InputKind::Random => {}
        InputKind::Sorted => data.sort_unstable(),
        InputKind::ReverseSorted => data.sort_unstable_by(|a, b| b.cmp(a)),
    }
    data
}

/// Outcome of one benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRecord {
    /// Number of generated elements
    pub n: usize,
    /// Input shape
    pub kind: InputKind,
    /// Number of `extract_min` calls timed
    pub operations: usize,
    /// Wall time of the bulk build
    pub init_time: Duration,
    /// Wall time of the extraction phase
    pub operation_time: Duration,
    /// Work done by the bulk build
    pub build_counters: CounterSnapshot,
    /// Work done by the extraction phase
    pub counters: CounterSnapshot,
}

impl BenchmarkRecord {
    /// Formats the record as one CSV row (no trailing newline)
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.n,
            self.kind,
            self.operations,
            self.init_time.as_nanos(),
            self.operation_time.as_nanos(),
            self.counters.comparisons,
            self.counters.swaps,
            self.counters.storage_accesses
        )
    }
}

/// Runs one benchmark: build a heap of `n` values, then extract `n / 2` minima
pub fn run_benchmark<R: Rng + ?Sized>(n: usize, kind: InputKind, rng: &mut R) -> BenchmarkRecord {
    let data = generate_input(n, kind, rng);
    let counters = OperationCounters::new();

    let start = Instant::now();
    let mut heap = MinHeap::from_vec_with_observer(data, NaturalOrder, &counters);
    let init_time = start.elapsed();
    let build_counters = counters.snapshot();

    counters.reset();
    let operations = n / 2;
    let start = Instant::now();
    for _ in 0..operations {
        if heap.extract_min().is_err() {
            break;
        }
    }
    let operation_time = start.elapsed();

    BenchmarkRecord {
        n,
        kind,
        operations,
        init_time,
        operation_time,
        build_counters,
        counters: counters.snapshot(),
    }
}

/// Appends benchmark records to a CSV file
#[derive(Debug, Clone)]
pub struct CsvReport {
    path: PathBuf,
}

impl CsvReport {
    /// Targets the file at `path`; nothing is created until the first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The results file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row per record, writing the header first if the file is new
    ///
    /// Missing parent directories are created.
    pub fn append(&self, records: &[BenchmarkRecord]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        if is_new {
            writeln!(writer, "{CSV_HEADER}")?;
        }
        for record in records {
            writeln!(writer, "{}", record.csv_row())?;
        }
        writer.flush()
    }
}

/// What a suite runs and where its results go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Input sizes, run in order for every kind
    pub sizes: Vec<usize>,
    /// Input kinds, outer loop of the suite
    pub kinds: Vec<InputKind>,
    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// CSV results file
    pub output: PathBuf,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            kinds: InputKind::ALL.to_vec(),
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Runs every (kind, size) pair and appends each result to the CSV file
pub fn run_suite(config: &BenchmarkConfig) -> io::Result<Vec<BenchmarkRecord>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = CsvReport::new(&config.output);
    let mut records = Vec::with_capacity(config.kinds.len() * config.sizes.len());

    for &kind in &config.kinds {
        info!("Testing data type: {kind}");
        for &n in &config.sizes {
            let record = run_benchmark(n, kind, &mut rng);
            info!(
                "N={} ({}): Time={:.2} ms, {}",
                n,
                kind,
                record.operation_time.as_secs_f64() * 1_000.0,
                record.counters
            );
            debug!("N={} ({}): build {}", n, kind, record.build_counters);
            report.append(std::slice::from_ref(&record))?;
            records.push(record);
        }
    }

    info!("Results saved to {}", report.path().display());
    Ok(records)
}
