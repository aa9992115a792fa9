use std::ops::{Add, Mul};

/// Textbook CRS sparse matrix-vector multiply: `y[j] = sum(values[k] * x[col_index[k]])`.
///
/// One pass per row over that row's nonzeros, accumulated left to right
/// in storage order. Nothing is validated and arithmetic uses the plain
/// operators, so integer overflow wraps in release builds and panics in
/// debug builds.
///
/// Use this as a correctness baseline, not as an entry point.
///
/// # Arguments
///
/// * `row_ptr` - Row offsets (y.len() + 1 entries)
/// * `col_index` - Column of each nonzero
/// * `values` - Nonzero values, aligned with `col_index`
/// * `x` - Dense input vector
/// * `y` - Output, one entry per row, overwritten
///
/// # Panics
///
/// Panics on any out-of-bounds offset or column, like plain slice indexing.
pub fn spmv_naive<T>(row_ptr: &[usize], col_index: &[usize], values: &[T], x: &[T], y: &mut [T])
where
    T: Copy + Default + Add<Output = T> + Mul<Output = T>,
{
    for j in 0..y.len() {
        let mut d = T::default();
        for k in row_ptr[j]..row_ptr[j + 1] {
            d = d + values[k] * x[col_index[k]];
        }
        y[j] = d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_rather_than_accumulates() {
        let mut y = [99, 99];
        spmv_naive(&[0, 1, 1], &[1], &[3], &[5, 7], &mut y);
        assert_eq!(y, [21, 0]);
    }
}
