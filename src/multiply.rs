pub mod reference;
pub mod parallel;
pub mod cuda_matmul;

use log::debug;

use crate::error::Result;
use crate::implementation::Implementation;
use crate::matrix::MatrixRef;

/// Computes `c = a * b` with the selected backend.
///
/// `a` is `rows_a x cols_a` and `b` is `cols_a x cols_b`, both row-major; `c`
/// must hold exactly `rows_a * cols_b` elements. Shape violations are caller
/// bugs and panic. Backend failures are returned and leave `c` untouched
/// unless the backend itself started writing.
pub fn multiply_matrices(implementation: Implementation, a: MatrixRef<'_>, b: MatrixRef<'_>, c: &mut [f32]) -> Result<()> {
    check_shapes(&a, &b, c);
    dispatch(implementation, a, b, c)
}

/// Same as [`multiply_matrices`] but takes a raw selector id. Ids outside the
/// supported set fail before any backend runs.
pub fn multiply_matrices_by_id(id: u32, a: MatrixRef<'_>, b: MatrixRef<'_>, c: &mut [f32]) -> Result<()> {
    check_shapes(&a, &b, c);
    let implementation = Implementation::try_from(id)?;
    dispatch(implementation, a, b, c)
}

fn dispatch(implementation: Implementation, a: MatrixRef<'_>, b: MatrixRef<'_>, c: &mut [f32]) -> Result<()> {
    debug!(
        "multiply {}x{} * {}x{} with {}",
        a.rows, a.cols, b.rows, b.cols, implementation
    );

    match implementation {
        Implementation::CpuReference => {
            reference::multiply(a, b, c);
            Ok(())
        }
        Implementation::CpuParallel => {
            parallel::multiply(a, b, c);
            Ok(())
        }
        Implementation::Cuda => cuda_matmul::multiply(a, b, c),
    }
}

fn check_shapes(a: &MatrixRef<'_>, b: &MatrixRef<'_>, c: &[f32]) {
    assert_eq!(a.cols, b.rows, "Matrix dimensions don't match: {}x{} * {}x{}", a.rows, a.cols, b.rows, b.cols);
    assert_eq!(a.data.len(), a.rows * a.cols, "Matrix A size mismatch");
    assert_eq!(b.data.len(), b.rows * b.cols, "Matrix B size mismatch");
    assert_eq!(c.len(), a.rows * b.cols, "Matrix C size mismatch");
}
