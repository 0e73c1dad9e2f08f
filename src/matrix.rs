use std::fmt;

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Borrowed row-major view of a matrix buffer.
#[derive(Debug, Clone, Copy)]
pub struct MatrixRef<'a> {
    pub data: &'a [f32],
    pub rows: usize,
    pub cols: usize,
}

impl<'a> MatrixRef<'a> {
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Self {
        MatrixRef { data, rows, cols }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub data: Vec<f32>,
    pub rows: usize,
    pub cols: usize,
}

impl Matrix {

    pub fn new(data: Vec<f32>, rows: usize, cols: usize) -> Matrix {
        assert_eq!(data.len(), rows * cols,
            "Data length {} doesn't match shape {}x{}", data.len(), rows, cols);
        Matrix { data, rows, cols }
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::new(vec![0.0; rows * cols], rows, cols)
    }

    pub fn identity(size: usize) -> Matrix {
        let mut matrix = Matrix::zeros(size, size);
        for i in 0..size {
            matrix.data[i * size + i] = 1.0;
        }
        matrix
    }

    pub fn random(rows: usize, cols: usize, rng: &mut Pcg64) -> Matrix {
        let mut data = vec![0.0; rows * cols];
        fill_random(&mut data, rng);
        Matrix::new(data, rows, cols)
    }

    pub fn view(&self) -> MatrixRef<'_> {
        MatrixRef::new(&self.data, self.rows, self.cols)
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }
}

pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Fills `buffer` with values drawn uniformly from [0, 1).
pub fn fill_random(buffer: &mut [f32], rng: &mut Pcg64) {
    let uniform = Uniform::new(0.0f32, 1.0);
    for value in buffer.iter_mut() {
        *value = uniform.sample(rng);
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)).take(self.rows) {
            for value in row {
                write!(f, "{:>10}", format_significant(*value, 5))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Formats `value` with `digits` significant digits, trailing zeros trimmed.
pub(crate) fn format_significant(value: f32, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    if magnitude < -4 || magnitude >= digits as i32 {
        return format!("{:.*e}", digits.saturating_sub(1), value);
    }
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let identity = Matrix::identity(3);
        assert_eq!(identity.data, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    #[should_panic]
    fn test_new_length_mismatch() {
        Matrix::new(vec![1.0, 2.0, 3.0], 2, 2);
    }

    #[test]
    fn test_random_is_seeded_and_in_range() {
        let a = Matrix::random(8, 8, &mut seeded_rng(2013));
        let b = Matrix::random(8, 8, &mut seeded_rng(2013));
        let c = Matrix::random(8, 8, &mut seeded_rng(42));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.data.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_shared_rng_advances() {
        let mut rng = seeded_rng(7);
        let a = Matrix::random(4, 4, &mut rng);
        let b = Matrix::random(4, 4, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(19.0, 5), "19");
        assert_eq!(format_significant(0.123456, 5), "0.12346");
        assert_eq!(format_significant(254.31234, 5), "254.31");
        assert_eq!(format_significant(0.0, 5), "0");
    }

    #[test]
    fn test_display() {
        let matrix = Matrix::new(vec![1.0, 2.5, 3.0, 4.0], 2, 2);
        let text = matrix.to_string();
        assert_eq!(text, format!("{:>10}{:>10}\n{:>10}{:>10}\n", "1", "2.5", "3", "4"));
    }
}
