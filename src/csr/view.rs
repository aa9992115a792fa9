//! Borrowed, validated view over the three CRS arrays.

use super::validate::{check_columns, check_structure};
use crate::config::OverflowPolicy;
use crate::error::SpmvError;
use crate::kernel::rows::spmv_rows;
use crate::scalar::Scalar;

/// A CRS matrix borrowed from caller-owned slices.
///
/// The only way to build one is [`CsrView::new`], which runs the
/// structural checks, so `row_ptr` always has `nrows() + 1` non-decreasing
/// entries starting at 0 and ending at `nnz()`. Column bounds depend on
/// the vector and are checked per multiply.
#[derive(Debug, Clone, Copy)]
pub struct CsrView<'a, T> {
    row_count: usize,
    values: &'a [T],
    row_ptr: &'a [usize],
    col_index: &'a [usize],
}

impl<'a, T> CsrView<'a, T> {
    /// Validate and wrap the CRS arrays of a matrix with `row_count` rows.
    ///
    /// # Errors
    ///
    /// - [`SpmvError::DimensionMismatch`] if `row_ptr.len() != row_count + 1`
    /// - [`SpmvError::MalformedMatrix`] if the CRS invariants don't hold
    pub fn new(
        row_count: usize,
        values: &'a [T],
        row_ptr: &'a [usize],
        col_index: &'a [usize],
    ) -> Result<Self, SpmvError> {
        check_structure(row_count, row_ptr, values.len(), col_index.len())?;
        Ok(Self {
            row_count,
            values,
            row_ptr,
            col_index,
        })
    }

    /// Skip validation for arrays already checked by an owning matrix.
    pub(crate) fn from_trusted(
        values: &'a [T],
        row_ptr: &'a [usize],
        col_index: &'a [usize],
    ) -> Self {
        debug_assert!(
            check_structure(row_ptr.len() - 1, row_ptr, values.len(), col_index.len()).is_ok()
        );
        Self {
            row_count: row_ptr.len() - 1,
            values,
            row_ptr,
            col_index,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.row_count
    }

    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    #[inline]
    pub fn row_ptr(&self) -> &'a [usize] {
        self.row_ptr
    }

    #[inline]
    pub fn col_index(&self) -> &'a [usize] {
        self.col_index
    }

    /// Column indices and values of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    #[inline]
    pub fn row(&self, row: usize) -> (&'a [usize], &'a [T]) {
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        (&self.col_index[range.clone()], &self.values[range])
    }

    /// Smallest vector length this matrix can be multiplied with.
    pub fn min_vector_len(&self) -> usize {
        self.col_index.iter().max().map_or(0, |&c| c + 1)
    }

    /// Fail with [`SpmvError::IndexOutOfRange`] unless every column fits in `len`.
    pub fn check_vector_len(&self, len: usize) -> Result<(), SpmvError> {
        check_columns(self.col_index, len)
    }
}

impl<T: Scalar> CsrView<'_, T> {
    /// `y = A * x` with [`OverflowPolicy::Fail`].
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, SpmvError> {
        self.mul_vec_with(x, OverflowPolicy::Fail)
    }

    /// `y = A * x`, integer overflow handled per `policy`.
    ///
    /// # Errors
    ///
    /// - [`SpmvError::IndexOutOfRange`] if a column index is `>= x.len()`
    /// - [`SpmvError::Overflow`] under [`OverflowPolicy::Fail`]
    pub fn mul_vec_with(&self, x: &[T], policy: OverflowPolicy) -> Result<Vec<T>, SpmvError> {
        self.check_vector_len(x.len())?;

        let mut y = vec![T::zero(); self.row_count];
        spmv_rows(self, x, 0, &mut y, policy)?;
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    #[test]
    fn rows_slice_the_nonzero_arrays() {
        let values = [1, 2, 3, 4];
        let row_ptr = [0, 2, 2, 4];
        let col_index = [0, 3, 1, 2];
        let view = CsrView::new(3, &values, &row_ptr, &col_index).unwrap();

        assert_eq!(view.nrows(), 3);
        assert_eq!(view.nnz(), 4);
        assert_eq!(view.row(0), (&[0, 3][..], &[1, 2][..]));
        assert_eq!(view.row(1), (&[][..], &[][..]));
        assert_eq!(view.row(2), (&[1, 2][..], &[3, 4][..]));
        assert_eq!(view.min_vector_len(), 4);
    }

    #[test]
    fn construction_rejects_decreasing_row_ptr() {
        let err = CsrView::new(2, &[1.0, 2.0], &[0, 2, 1], &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            SpmvError::MalformedMatrix(MalformedReason::Decreasing {
                row: 1,
                start: 2,
                end: 1
            })
        );
    }

    #[test]
    fn short_vector_is_rejected_before_any_work() {
        let view = CsrView::new(1, &[1, 1], &[0, 2], &[0, 2]).unwrap();
        assert_eq!(
            view.mul_vec(&[1, 1]),
            Err(SpmvError::IndexOutOfRange {
                position: 1,
                column: 2,
                len: 2
            })
        );
        assert_eq!(view.mul_vec(&[1, 1, 1]), Ok(vec![2]));
    }

    #[test]
    fn longer_vector_is_fine() {
        let view = CsrView::new(2, &[2.0, 3.0], &[0, 1, 2], &[1, 0]).unwrap();
        assert_eq!(view.mul_vec(&[5.0, 7.0, 100.0]).unwrap(), vec![14.0, 15.0]);
    }
}
