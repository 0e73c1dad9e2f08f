use std::fmt;
use std::time::{Duration, Instant};

use log::{error, info};

use crate::diff::{self, DiffReport, DEFAULT_ACCEPTABLE_RANGE, DEFAULT_MAX_ERRORS};
use crate::error::MultiplyError;
use crate::implementation::Implementation;
use crate::matrix::{seeded_rng, Matrix};
use crate::multiply::multiply_matrices;

pub const DEFAULT_SIZE: usize = 1024;
pub const DEFAULT_SEED: u64 = 2013;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub rows_a: usize,
    pub inner: usize,
    pub cols_b: usize,
    pub implementation: Implementation,
    pub seed: u64,
    pub check: bool,
    pub max_errors: usize,
    pub acceptable_range: f32,
    pub print_matrices: bool,
}

impl BenchConfig {
    pub fn square(size: usize, implementation: Implementation) -> Self {
        BenchConfig {
            rows_a: size,
            inner: size,
            cols_b: size,
            implementation,
            ..Default::default()
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            rows_a: DEFAULT_SIZE,
            inner: DEFAULT_SIZE,
            cols_b: DEFAULT_SIZE,
            implementation: Implementation::CpuReference,
            seed: DEFAULT_SEED,
            check: true,
            max_errors: DEFAULT_MAX_ERRORS,
            acceptable_range: DEFAULT_ACCEPTABLE_RANGE,
            print_matrices: false,
        }
    }
}

#[derive(Debug)]
pub struct BenchOutcome {
    pub implementation: Implementation,
    pub a: Matrix,
    pub b: Matrix,
    pub result: Matrix,
    pub elapsed: Duration,
    pub status: Result<(), MultiplyError>,
    /// `None` when checking was disabled or the selected backend failed.
    pub diff: Option<DiffReport>,
    pub print_matrices: bool,
}

/// Multiplies two seeded random matrices with the configured backend and,
/// when checking is on, diffs the result against the reference backend.
///
/// Backend failures are logged and recorded in the outcome; they never abort.
pub fn run(config: &BenchConfig) -> BenchOutcome {
    let mut rng = seeded_rng(config.seed);
    let a = Matrix::random(config.rows_a, config.inner, &mut rng);
    let b = Matrix::random(config.inner, config.cols_b, &mut rng);
    let mut result = Matrix::zeros(config.rows_a, config.cols_b);

    info!("Selected implementation is {}", config.implementation);

    let start = Instant::now();
    let status = multiply_matrices(config.implementation, a.view(), b.view(), &mut result.data);
    let elapsed = start.elapsed();

    if let Err(e) = &status {
        error!("multiply with {} failed: {}", config.implementation, e);
    }

    let diff = if config.check && status.is_ok() {
        let mut reference = Matrix::zeros(config.rows_a, config.cols_b);
        match multiply_matrices(Implementation::CpuReference, a.view(), b.view(), &mut reference.data) {
            Ok(()) => Some(diff::compare(
                reference.view(),
                result.view(),
                config.max_errors,
                config.acceptable_range,
            )),
            Err(e) => {
                error!("reference multiply failed: {}", e);
                None
            }
        }
    } else {
        None
    };

    BenchOutcome {
        implementation: config.implementation,
        a,
        b,
        result,
        elapsed,
        status,
        diff,
        print_matrices: config.print_matrices,
    }
}

impl fmt::Display for BenchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.print_matrices {
            writeln!(f, "Matrix a")?;
            write!(f, "{}", self.a)?;
        }
        writeln!(f, "Matrix a size=(\t{},\t{})", self.a.rows, self.a.cols)?;
        if self.print_matrices {
            writeln!(f, "Matrix b")?;
            write!(f, "{}", self.b)?;
        }
        writeln!(f, "Matrix b size=(\t{},\t{})", self.b.rows, self.b.cols)?;
        writeln!(f, "Matrix c size=(\t{},\t{})", self.result.rows, self.result.cols)?;
        writeln!(f, "Selected implementation is {}", self.implementation)?;
        if let Err(e) = &self.status {
            writeln!(f, "Error : multiply : {}", e)?;
        }
        if self.print_matrices && self.status.is_ok() {
            writeln!(f, "Matrix c")?;
            write!(f, "{}", self.result)?;
        }
        writeln!(f, "Time : {:>10.6} sec", self.elapsed.as_secs_f64())?;
        if let Some(diff) = &self.diff {
            writeln!(f, "Checking Result")?;
            write!(f, "{}", diff)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.rows_a, 1024);
        assert_eq!(config.seed, 2013);
        assert_eq!(config.max_errors, 100);
        assert_eq!(config.acceptable_range, 1.0e-5);
        assert_eq!(config.implementation, Implementation::CpuReference);
    }

    #[test]
    fn test_run_parallel_is_clean() {
        let config = BenchConfig::square(24, Implementation::CpuParallel);
        let outcome = run(&config);

        assert!(outcome.status.is_ok());
        let diff = outcome.diff.as_ref().unwrap();
        assert!(diff.is_clean());

        let text = outcome.to_string();
        assert!(text.contains("Selected implementation is CPU Parallel\n"));
        assert!(text.contains("Checking Result\n"));
        assert!(text.contains("Total Errors = 0\n"));
    }

    #[test]
    fn test_run_without_check() {
        let config = BenchConfig {
            check: false,
            ..BenchConfig::square(4, Implementation::CpuReference)
        };
        let outcome = run(&config);
        assert!(outcome.status.is_ok());
        assert!(outcome.diff.is_none());
    }

    #[test]
    fn test_run_is_reproducible() {
        let config = BenchConfig::square(6, Implementation::CpuReference);
        assert_eq!(run(&config).result, run(&config).result);
    }

    #[cfg(not(feature = "cuda"))]
    #[test]
    fn test_run_unavailable_backend_does_not_abort() {
        let config = BenchConfig::square(4, Implementation::Cuda);
        let outcome = run(&config);

        assert_eq!(outcome.status, Err(MultiplyError::Unavailable(Implementation::Cuda)));
        assert!(outcome.diff.is_none());
        assert!(outcome.to_string().contains("Error : multiply : CUDA implementation is not available in this build\n"));
    }
}
