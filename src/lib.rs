pub mod bench;
pub mod diff;
pub mod error;
pub mod implementation;
pub mod matrix;
pub mod multiply;

pub use error::{MultiplyError, Result};
pub use implementation::{name_of_id, Implementation};
pub use matrix::{Matrix, MatrixRef};
pub use multiply::{multiply_matrices, multiply_matrices_by_id};
