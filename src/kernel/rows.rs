use crate::config::OverflowPolicy;
use crate::csr::CsrView;
use crate::error::SpmvError;
use crate::scalar::Scalar;

/// Computes `y[i] = row(first_row + i) · x` for every `i` in `0..y.len()`.
///
/// This is the worker behind both the serial and the threaded entry points:
/// the serial path hands it the whole output, the threaded path one
/// disjoint chunk per thread.
///
/// The caller must already have checked `x.len()` against the column
/// indices and must keep `first_row + y.len() <= view.nrows()`.
///
/// # Errors
///
/// [`SpmvError::Overflow`] for the first row (in order) whose accumulation
/// overflows under [`OverflowPolicy::Fail`]. Rows before it are already
/// written; callers discard the buffer on error.
pub(crate) fn spmv_rows<T: Scalar>(
    view: &CsrView<'_, T>,
    x: &[T],
    first_row: usize,
    y: &mut [T],
    policy: OverflowPolicy,
) -> Result<(), SpmvError> {
    debug_assert!(first_row + y.len() <= view.nrows());

    let row_ptr = view.row_ptr();
    let col_index = view.col_index();
    let values = view.values();

    for (i, out) in y.iter_mut().enumerate() {
        let row = first_row + i;
        let mut d = T::zero();
        for k in row_ptr[row]..row_ptr[row + 1] {
            d = d
                .mul_acc(values[k], x[col_index[k]], policy)
                .ok_or(SpmvError::Overflow { row })?;
        }
        *out = d;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_only_the_requested_rows() {
        let values = [1, 2, 3];
        let row_ptr = [0, 1, 2, 3];
        let col_index = [0, 1, 2];
        let view = CsrView::new(3, &values, &row_ptr, &col_index).unwrap();

        let mut y = [0; 2];
        spmv_rows(&view, &[10, 20, 30], 1, &mut y, OverflowPolicy::Fail).unwrap();
        assert_eq!(y, [40, 90]);
    }

    #[test]
    fn overflow_names_the_absolute_row() {
        let values = [1u8, 200, 2];
        let row_ptr = [0, 1, 2, 3];
        let col_index = [0, 0, 0];
        let view = CsrView::new(3, &values, &row_ptr, &col_index).unwrap();

        let mut y = [0u8; 2];
        assert_eq!(
            spmv_rows(&view, &[2], 1, &mut y, OverflowPolicy::Fail),
            Err(SpmvError::Overflow { row: 1 })
        );
        spmv_rows(&view, &[2], 1, &mut y, OverflowPolicy::Wrap).unwrap();
        assert_eq!(y, [144, 4]);
    }
}
