//! Compressed row storage: validation, borrowed and owned matrices.
//!
//! A CRS matrix with `m` rows is three arrays:
//! - `values`: the nonzeros, row by row
//! - `col_index`: the column of each nonzero
//! - `row_ptr`: `m + 1` offsets, row `i` owns `row_ptr[i]..row_ptr[i + 1]`

pub mod matrix;
pub mod signed;
pub mod validate;
pub mod view;

pub use matrix::CsrMatrix;
pub use signed::{col_index_from_signed, row_ptr_from_signed};
pub use view::CsrView;
