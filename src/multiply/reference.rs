use crate::matrix::MatrixRef;

/// Single-threaded triple loop with an `f32` accumulator.
///
/// Every other backend is checked against this kernel, so the i, j, k loop
/// order and the accumulator precision must not change.
pub fn multiply(a: MatrixRef<'_>, b: MatrixRef<'_>, c: &mut [f32]) {
    let r1 = a.rows;
    let c1 = a.cols;
    let c2 = b.cols;

    for i in 0..r1 {
        for j in 0..c2 {
            let mut sum = 0.0f32;
            for k in 0..c1 {
                sum += a.data[i * c1 + k] * b.data[k * c2 + j];
            }
            c[i * c2 + j] = sum;
        }
    }
}
