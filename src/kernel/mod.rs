//! Serial SpMV kernels.
//!
//! - `naive`: unchecked textbook loop, the correctness baseline
//! - `rows`: policy-aware kernel over a row range of a validated view,
//!   shared by the serial and threaded entry points

pub mod naive;
pub(crate) mod rows;
