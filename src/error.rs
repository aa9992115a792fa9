//! Error types for CRS validation and multiplication.

use thiserror::Error;

/// Everything that can go wrong before or during a sparse multiply.
///
/// Structural errors are raised by the validation pre-pass, so a caller
/// never sees a partially filled result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpmvError {
    #[error("row_ptr has {actual} entries, expected {expected} (row_count + 1)")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("col_index[{position}] = {column} is outside a vector of length {len}")]
    IndexOutOfRange {
        position: usize,
        column: i64,
        len: usize,
    },

    #[error("malformed CRS matrix: {0}")]
    MalformedMatrix(#[from] MalformedReason),

    #[error("arithmetic overflow while accumulating row {row}")]
    Overflow { row: usize },
}

/// Which CRS invariant a [`SpmvError::MalformedMatrix`] broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("{values} values but {col_index} column indices")]
    LengthMismatch { values: usize, col_index: usize },

    #[error("row_ptr must start at 0, found {first}")]
    NonZeroStart { first: usize },

    #[error("row_ptr decreases at row {row}: {start} > {end}")]
    Decreasing { row: usize, start: usize, end: usize },

    #[error("row_ptr ends at {last} but the matrix stores {nnz} nonzeros")]
    NnzMismatch { last: usize, nnz: usize },

    #[error("row_ptr[{position}] is negative ({value})")]
    NegativeOffset { position: usize, value: i64 },
}

/// Widen a `usize` column for error reporting.
pub(crate) fn column_for_report(column: usize) -> i64 {
    i64::try_from(column).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = SpmvError::IndexOutOfRange {
            position: 3,
            column: 12,
            len: 10,
        };
        assert_eq!(
            err.to_string(),
            "col_index[3] = 12 is outside a vector of length 10"
        );

        let err: SpmvError = MalformedReason::Decreasing {
            row: 1,
            start: 4,
            end: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "malformed CRS matrix: row_ptr decreases at row 1: 4 > 2"
        );
    }

    #[test]
    fn huge_columns_saturate_when_reported() {
        assert_eq!(column_for_report(7), 7);
        assert_eq!(column_for_report(usize::MAX), i64::MAX);
    }
}
