//! Sparse matrix-vector multiplication over compressed row storage.
//!
//! Computes `r[j] = sum(values[k] * vector[col_index[k]])` for `k` in
//! `row_ptr[j]..row_ptr[j + 1]`, with every input validated up front:
//! a malformed matrix or an out-of-range column is an error, never a
//! wrong answer or a panic.
//!
//! ## Usage
//!
//! ```
//! use spmv::multiply;
//!
//! // [1 0 2]
//! // [0 3 0]
//! let values = [1, 2, 3];
//! let row_ptr = [0, 2, 3];
//! let col_index = [0, 2, 1];
//!
//! let y = multiply(2, &values, &row_ptr, &col_index, &[1, 2, 3]).unwrap();
//! assert_eq!(y, vec![7, 6]);
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use spmv::{CsrMatrix, SpmvConfig, multiply_parallel};
//!
//! let a = CsrMatrix::<f64>::identity(4096);
//! let x = vec![1.5; 4096];
//!
//! let y = multiply_parallel(&a.view(), &x, &SpmvConfig::with_threads(4)).unwrap();
//! assert_eq!(y, x);
//! ```
//!
//! ## What's inside
//!
//! - Validation pre-pass with a small error taxonomy ([`SpmvError`])
//! - Explicit integer overflow handling ([`OverflowPolicy`])
//! - Row-partitioned threading (scales down for small matrices)
//! - An unchecked baseline kernel for comparisons

pub mod config;
pub mod csr;
pub mod error;
pub mod kernel;
pub mod scalar;
pub mod threaded;

pub use config::{OverflowPolicy, SpmvConfig};
pub use csr::{CsrMatrix, CsrView};
pub use error::{MalformedReason, SpmvError};
pub use kernel::naive::spmv_naive;
pub use scalar::Scalar;

/// Sparse matrix-vector multiply: `r = A * vector`.
///
/// `A` has `row_count` rows and is given by its CRS arrays. Integer
/// overflow is an error ([`OverflowPolicy::Fail`]); use [`multiply_with`]
/// to wrap or saturate instead.
///
/// # Errors
///
/// Checked in this order, before any arithmetic:
/// - [`SpmvError::DimensionMismatch`] if `row_ptr.len() != row_count + 1`
/// - [`SpmvError::MalformedMatrix`] if `values`/`col_index` differ in length,
///   `row_ptr` doesn't start at 0, decreases, or doesn't end at `values.len()`
/// - [`SpmvError::IndexOutOfRange`] if a column index is `>= vector.len()`
///
/// then [`SpmvError::Overflow`] if an integer row sum doesn't fit in `T`.
pub fn multiply<T: Scalar>(
    row_count: usize,
    values: &[T],
    row_ptr: &[usize],
    col_index: &[usize],
    vector: &[T],
) -> Result<Vec<T>, SpmvError> {
    multiply_with(
        row_count,
        values,
        row_ptr,
        col_index,
        vector,
        OverflowPolicy::Fail,
    )
}

/// Same as [`multiply`] with an explicit [`OverflowPolicy`].
pub fn multiply_with<T: Scalar>(
    row_count: usize,
    values: &[T],
    row_ptr: &[usize],
    col_index: &[usize],
    vector: &[T],
    policy: OverflowPolicy,
) -> Result<Vec<T>, SpmvError> {
    CsrView::new(row_count, values, row_ptr, col_index)?.mul_vec_with(vector, policy)
}

/// [`multiply`] for square matrices whose row count is taken from `vector.len()`.
///
/// Kept for callers that never passed a row count. Prefer [`multiply`]: if
/// the vector is longer or shorter than the matrix is tall, this reports a
/// [`SpmvError::DimensionMismatch`] against the vector length, which is
/// rarely what the caller meant.
pub fn multiply_inferred_rows<T: Scalar>(
    values: &[T],
    row_ptr: &[usize],
    col_index: &[usize],
    vector: &[T],
) -> Result<Vec<T>, SpmvError> {
    multiply(vector.len(), values, row_ptr, col_index, vector)
}

/// Same as [`multiply`] on an already validated matrix, spread over threads.
///
/// Thread count adapts to matrix size - small matrices stay on the calling
/// thread because the spawn overhead isn't worth it. The result is
/// identical to the serial one.
///
/// # Errors
///
/// [`SpmvError::IndexOutOfRange`] if a column index is `>= vector.len()`,
/// [`SpmvError::Overflow`] (lowest row) under [`OverflowPolicy::Fail`].
pub fn multiply_parallel<T: Scalar>(
    matrix: &CsrView<'_, T>,
    vector: &[T],
    config: &SpmvConfig,
) -> Result<Vec<T>, SpmvError> {
    threaded::spmv_mt::spmv_mt(matrix, vector, config)
}
