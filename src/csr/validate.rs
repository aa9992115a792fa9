//! Validation pre-pass for CRS inputs.
//!
//! Every check here runs before any arithmetic. The order is fixed:
//! row_ptr length, then the CRS invariants, then column bounds, so the
//! same bad input always reports the same error.

use crate::error::{MalformedReason, SpmvError, column_for_report};
use tracing::debug;

/// Check `row_ptr` against `row_count` and the nonzero arrays.
///
/// Covers [`SpmvError::DimensionMismatch`] and every
/// [`SpmvError::MalformedMatrix`] case.
pub fn check_structure(
    row_count: usize,
    row_ptr: &[usize],
    values_len: usize,
    col_index_len: usize,
) -> Result<(), SpmvError> {
    let expected = row_count.checked_add(1).unwrap_or(usize::MAX);
    if row_ptr.len() != expected {
        return Err(reject(SpmvError::DimensionMismatch {
            expected,
            actual: row_ptr.len(),
        }));
    }

    if values_len != col_index_len {
        return Err(reject(
            MalformedReason::LengthMismatch {
                values: values_len,
                col_index: col_index_len,
            }
            .into(),
        ));
    }

    if row_ptr[0] != 0 {
        return Err(reject(
            MalformedReason::NonZeroStart { first: row_ptr[0] }.into(),
        ));
    }

    if let Some((row, w)) = row_ptr
        .windows(2)
        .enumerate()
        .find(|(_, w)| w[0] > w[1])
    {
        return Err(reject(
            MalformedReason::Decreasing {
                row,
                start: w[0],
                end: w[1],
            }
            .into(),
        ));
    }

    let last = row_ptr[row_count];
    if last != values_len {
        return Err(reject(
            MalformedReason::NnzMismatch {
                last,
                nnz: values_len,
            }
            .into(),
        ));
    }

    Ok(())
}

/// Check that every column index addresses an element of a vector of length `len`.
pub fn check_columns(col_index: &[usize], len: usize) -> Result<(), SpmvError> {
    match col_index.iter().position(|&c| c >= len) {
        Some(position) => Err(reject(SpmvError::IndexOutOfRange {
            position,
            column: column_for_report(col_index[position]),
            len,
        })),
        None => Ok(()),
    }
}

pub(crate) fn reject(err: SpmvError) -> SpmvError {
    debug!(error = %err, "rejected CRS input");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_reference_layout() {
        assert_eq!(check_structure(5, &[0, 2, 4, 7, 8, 10], 10, 10), Ok(()));
    }

    #[test]
    fn accepts_empty_matrix() {
        assert_eq!(check_structure(0, &[0], 0, 0), Ok(()));
    }

    #[test]
    fn row_ptr_length_is_checked_first() {
        // Also malformed, but the dimension error wins.
        let err = check_structure(3, &[1, 0], 5, 4).unwrap_err();
        assert_eq!(
            err,
            SpmvError::DimensionMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn empty_row_ptr_is_a_dimension_error() {
        let err = check_structure(0, &[], 0, 0).unwrap_err();
        assert_eq!(
            err,
            SpmvError::DimensionMismatch {
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn each_invariant_has_its_own_reason() {
        assert_eq!(
            check_structure(1, &[0, 2], 2, 3),
            Err(MalformedReason::LengthMismatch {
                values: 2,
                col_index: 3
            }
            .into())
        );
        assert_eq!(
            check_structure(1, &[1, 2], 2, 2),
            Err(MalformedReason::NonZeroStart { first: 1 }.into())
        );
        assert_eq!(
            check_structure(3, &[0, 3, 2, 4], 4, 4),
            Err(MalformedReason::Decreasing {
                row: 1,
                start: 3,
                end: 2
            }
            .into())
        );
        assert_eq!(
            check_structure(2, &[0, 1, 3], 4, 4),
            Err(MalformedReason::NnzMismatch { last: 3, nnz: 4 }.into())
        );
    }

    #[test]
    fn first_bad_column_is_reported() {
        assert_eq!(check_columns(&[0, 4, 2], 5), Ok(()));
        assert_eq!(
            check_columns(&[0, 5, 9], 5),
            Err(SpmvError::IndexOutOfRange {
                position: 1,
                column: 5,
                len: 5
            })
        );
        assert!(check_columns(&[0], 0).is_err());
    }
}
