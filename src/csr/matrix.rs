//! Owned CRS matrix.

use super::validate::{check_columns, check_structure};
use super::view::CsrView;
use crate::config::OverflowPolicy;
use crate::error::SpmvError;
use crate::scalar::Scalar;

/// A CRS matrix that owns its arrays and knows its column count.
///
/// Unlike [`CsrView`], every column index is checked against `ncols` at
/// construction, so multiplying by any vector of length `>= ncols` can
/// only fail on integer overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    ncols: usize,
    values: Vec<T>,
    row_ptr: Vec<usize>,
    col_index: Vec<usize>,
}

impl<T> CsrMatrix<T> {
    /// Build an `nrows × ncols` matrix from its CRS arrays.
    ///
    /// # Errors
    ///
    /// Same checks as [`CsrView::new`], plus [`SpmvError::IndexOutOfRange`]
    /// for a column index `>= ncols`.
    pub fn new(
        shape: (usize, usize),
        values: Vec<T>,
        row_ptr: Vec<usize>,
        col_index: Vec<usize>,
    ) -> Result<Self, SpmvError> {
        let (nrows, ncols) = shape;
        check_structure(nrows, &row_ptr, values.len(), col_index.len())?;
        check_columns(&col_index, ncols)?;

        Ok(Self {
            ncols,
            values,
            row_ptr,
            col_index,
        })
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.row_ptr.len() - 1
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    #[inline]
    pub fn col_index(&self) -> &[usize] {
        &self.col_index
    }

    pub fn view(&self) -> CsrView<'_, T> {
        CsrView::from_trusted(&self.values, &self.row_ptr, &self.col_index)
    }

    /// Column indices and values of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    pub fn row(&self, row: usize) -> (&[usize], &[T]) {
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        (&self.col_index[range.clone()], &self.values[range])
    }

    /// Give the arrays back as `(values, row_ptr, col_index)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<usize>, Vec<usize>) {
        (self.values, self.row_ptr, self.col_index)
    }
}

impl<T: Scalar> CsrMatrix<T> {
    /// The `n × n` identity.
    pub fn identity(n: usize) -> Self {
        Self {
            ncols: n,
            values: vec![T::one(); n],
            row_ptr: (0..=n).collect(),
            col_index: (0..n).collect(),
        }
    }

    /// Compress a dense row-major `rows × cols` matrix, dropping zeros.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_dense(data: &[T], rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "dense: expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );

        let mut values = Vec::new();
        let mut col_index = Vec::new();
        let mut row_ptr = Vec::with_capacity(rows + 1);
        row_ptr.push(0);

        for row in data.chunks(cols.max(1)).take(rows) {
            for (c, &v) in row.iter().enumerate() {
                if v != T::zero() {
                    values.push(v);
                    col_index.push(c);
                }
            }
            row_ptr.push(values.len());
        }
        // cols == 0 leaves no chunks to walk
        row_ptr.resize(rows + 1, values.len());

        Self {
            ncols: cols,
            values,
            row_ptr,
            col_index,
        }
    }

    /// Build from `(row, col, value)` triplets in any order.
    ///
    /// Entries end up sorted by column within each row, and duplicate
    /// coordinates are summed. Explicit zeros are kept.
    ///
    /// # Panics
    ///
    /// Panics if a triplet lies outside `rows × cols`.
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, T)]) -> Self {
        let mut sorted = triplets.to_vec();
        for &(r, c, _) in &sorted {
            assert!(
                r < rows && c < cols,
                "triplet ({}, {}) outside a {}x{} matrix",
                r,
                c,
                rows,
                cols
            );
        }
        sorted.sort_by_key(|&(r, c, _)| (r, c));

        let mut values: Vec<T> = Vec::with_capacity(sorted.len());
        let mut col_index: Vec<usize> = Vec::with_capacity(sorted.len());
        let mut row_counts = vec![0usize; rows];
        let mut last: Option<(usize, usize)> = None;

        for (r, c, v) in sorted {
            if last == Some((r, c)) {
                if let Some(prev) = values.last_mut() {
                    *prev = *prev + v;
                }
                continue;
            }
            values.push(v);
            col_index.push(c);
            row_counts[r] += 1;
            last = Some((r, c));
        }

        let mut row_ptr = Vec::with_capacity(rows + 1);
        row_ptr.push(0);
        for count in row_counts {
            row_ptr.push(row_ptr[row_ptr.len() - 1] + count);
        }

        Self {
            ncols: cols,
            values,
            row_ptr,
            col_index,
        }
    }

    /// Expand to a dense row-major `nrows × ncols` buffer.
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.nrows() * self.ncols];
        for row in 0..self.nrows() {
            let (cols, vals) = self.row(row);
            for (&c, &v) in cols.iter().zip(vals) {
                dense[row * self.ncols + c] = v;
            }
        }
        dense
    }

    /// `y = A * x` with [`OverflowPolicy::Fail`].
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, SpmvError> {
        self.view().mul_vec_with(x, OverflowPolicy::Fail)
    }

    pub fn mul_vec_with(&self, x: &[T], policy: OverflowPolicy) -> Result<Vec<T>, SpmvError> {
        self.view().mul_vec_with(x, policy)
    }
}
