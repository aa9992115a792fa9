//! Multi-threaded SpMV.
//!
//! Output rows are independent, so the row range is split into disjoint
//! contiguous chunks and each scoped thread runs the serial row kernel on
//! its own chunk. Thread count adapts to matrix size: small matrices stay
//! on the calling thread.

pub mod spmv_mt;
