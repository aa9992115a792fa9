//! Conversion of signed index arrays into `usize` offsets.
//!
//! CRS data produced by C-style code usually stores offsets and columns
//! as `int`. These helpers reject negatives with the same error taxonomy
//! the kernel uses, instead of letting them wrap into huge `usize`s.

use super::validate::reject;
use crate::error::{MalformedReason, SpmvError};

/// Convert a signed `row_ptr`.
///
/// # Errors
///
/// [`SpmvError::MalformedMatrix`] with [`MalformedReason::NegativeOffset`]
/// for the first negative entry.
pub fn row_ptr_from_signed<I>(row_ptr: &[I]) -> Result<Vec<usize>, SpmvError>
where
    I: Copy + Into<i64>,
{
    row_ptr
        .iter()
        .enumerate()
        .map(|(position, &v)| {
            let value: i64 = v.into();
            usize::try_from(value).map_err(|_| {
                reject(MalformedReason::NegativeOffset { position, value }.into())
            })
        })
        .collect()
}

/// Convert a signed `col_index` that will be multiplied with a vector of
/// length `vector_len`.
///
/// Only the sign is checked here; upper bounds are checked by the multiply.
///
/// # Errors
///
/// [`SpmvError::IndexOutOfRange`] for the first negative entry.
pub fn col_index_from_signed<I>(col_index: &[I], vector_len: usize) -> Result<Vec<usize>, SpmvError>
where
    I: Copy + Into<i64>,
{
    col_index
        .iter()
        .enumerate()
        .map(|(position, &v)| {
            let column: i64 = v.into();
            usize::try_from(column).map_err(|_| {
                reject(SpmvError::IndexOutOfRange {
                    position,
                    column,
                    len: vector_len,
                })
            })
        })
        .collect()
}
