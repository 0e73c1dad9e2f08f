use log::trace;
use rayon::prelude::*;

use crate::matrix::MatrixRef;

/// Row-parallel version of the reference kernel on the rayon pool.
///
/// Each task owns one row of `c`, so no two workers write the same element.
/// The per-element accumulation is identical to the reference kernel.
pub fn multiply(a: MatrixRef<'_>, b: MatrixRef<'_>, c: &mut [f32]) {
    let c1 = a.cols;
    let c2 = b.cols;

    if c2 == 0 {
        return;
    }

    trace!("parallel multiply on {} threads", rayon::current_num_threads());

    c.par_chunks_mut(c2)
        .enumerate()
        .for_each(|(i, row)| {
            let a_row = &a.data[i * c1..(i + 1) * c1];
            for (j, out) in row.iter_mut().enumerate() {
                let mut sum = 0.0f32;
                for (k, &a_ik) in a_row.iter().enumerate() {
                    sum += a_ik * b.data[k * c2 + j];
                }
                *out = sum;
            }
        });
}
