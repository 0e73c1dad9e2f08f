use std::fmt;

use crate::matrix::MatrixRef;

/// Default cap on enumerated mismatches.
pub const DEFAULT_MAX_ERRORS: usize = 100;
/// Default absolute tolerance.
pub const DEFAULT_ACCEPTABLE_RANGE: f32 = 1.0e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub row: usize,
    pub col: usize,
    pub reference: f32,
    pub candidate: f32,
    pub diff: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    pub acceptable_range: f32,
    /// Every mismatch, including the ones past the cap.
    pub total: usize,
    /// At most `max_errors` entries, in row-major order.
    pub mismatches: Vec<Mismatch>,
    pub truncated: bool,
}

impl DiffReport {
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Compares `candidate` against `reference` element by element.
///
/// An element mismatches when `|reference - candidate| > acceptable_range`.
/// The first `max_errors` mismatches are recorded; later ones are only counted.
pub fn compare(reference: MatrixRef<'_>, candidate: MatrixRef<'_>, max_errors: usize, acceptable_range: f32) -> DiffReport {
    assert_eq!(reference.dims(), candidate.dims(), "Diff: shape mismatch");
    assert_eq!(reference.data.len(), candidate.data.len(), "Diff: length mismatch");

    let cols = reference.cols.max(1);
    let mut report = DiffReport {
        acceptable_range,
        total: 0,
        mismatches: Vec::new(),
        truncated: false,
    };

    for (index, (&r, &s)) in reference.data.iter().zip(candidate.data).enumerate() {
        let diff = (r - s).abs();
        if diff > acceptable_range {
            if report.mismatches.len() < max_errors {
                report.mismatches.push(Mismatch {
                    row: index / cols,
                    col: index % cols,
                    reference: r,
                    candidate: s,
                    diff,
                });
            } else {
                report.truncated = true;
            }
            report.total += 1;
        }
    }
    report
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Acceptable Range : {:e}", self.acceptable_range)?;
        for m in &self.mismatches {
            writeln!(
                f,
                "(\t{},\t{})\tReference={}\tSelect={}\tDiff={}",
                m.row, m.col, m.reference, m.candidate, m.diff
            )?;
        }
        if self.truncated {
            writeln!(f, "Over Max errors")?;
        }
        writeln!(f, "Total Errors = {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_clean() {
        let a = [1.0, 2.0];
        let report = compare(MatrixRef::new(&a, 1, 2), MatrixRef::new(&a, 1, 2), 10, 1e-5);
        assert_eq!(report.to_string(), "Acceptable Range : 1e-5\nTotal Errors = 0\n");
    }

    #[test]
    fn test_display_truncated() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 1.0, 1.0];
        let report = compare(MatrixRef::new(&a, 3, 1), MatrixRef::new(&b, 3, 1), 1, 0.5);
        let text = report.to_string();

        assert!(text.contains("(\t0,\t0)\tReference=0\tSelect=1\tDiff=1\n"));
        assert!(text.contains("Over Max errors\n"));
        assert!(text.ends_with("Total Errors = 3\n"));
        assert!(!text.contains("(\t1,\t0)"));
    }

    #[test]
    fn test_nan_is_not_counted() {
        let a = [1.0, 2.0];
        let b = [f32::NAN, 2.0];
        let report = compare(MatrixRef::new(&a, 1, 2), MatrixRef::new(&b, 1, 2), 10, 1e-5);
        assert!(report.is_clean());
    }
}
