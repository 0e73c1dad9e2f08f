use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use matmul_bench::bench::{self, BenchConfig, DEFAULT_SEED, DEFAULT_SIZE};
use matmul_bench::diff::{DEFAULT_ACCEPTABLE_RANGE, DEFAULT_MAX_ERRORS};
use matmul_bench::Implementation;

/// Dense f32 matrix multiplication benchmark with result checking
#[derive(Parser, Debug)]
#[command(name = "matmul-bench")]
#[command(version)]
#[command(about = "Benchmark matrix multiplication backends against the CPU reference", long_about = None)]
struct Cli {
    /// Size of both square operands
    #[arg(default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Backend: r (CPU reference), p (CPU parallel), c/m (CUDA) or a numeric id
    #[arg(default_value = "r")]
    implementation: Implementation,

    /// Seed for the random operand fill
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Rows of A (overrides SIZE)
    #[arg(long)]
    rows: Option<usize>,

    /// Columns of A and rows of B (overrides SIZE)
    #[arg(long)]
    inner: Option<usize>,

    /// Columns of B (overrides SIZE)
    #[arg(long)]
    cols: Option<usize>,

    /// Worker threads for the parallel backend (defaults to the number of cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Maximum number of mismatches listed in the check report
    #[arg(long, default_value_t = DEFAULT_MAX_ERRORS)]
    max_errors: usize,

    /// Absolute difference tolerated between the result and the reference
    #[arg(long, default_value_t = DEFAULT_ACCEPTABLE_RANGE)]
    acceptable_range: f32,

    /// Skip the comparison against the reference backend
    #[arg(long)]
    no_check: bool,

    /// Print the operands and the result
    #[arg(long)]
    print_matrices: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            rows_a: self.rows.unwrap_or(self.size),
            inner: self.inner.unwrap_or(self.size),
            cols_b: self.cols.unwrap_or(self.size),
            implementation: self.implementation,
            seed: self.seed,
            check: !self.no_check,
            max_errors: self.max_errors,
            acceptable_range: self.acceptable_range,
            print_matrices: self.print_matrices,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build the worker thread pool")?;
    }

    let outcome = bench::run(&cli.config());
    print!("{}", outcome);

    Ok(())
}
