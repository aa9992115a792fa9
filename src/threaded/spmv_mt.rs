//! Multi-threaded SpMV, split by rows.

use crate::config::SpmvConfig;
use crate::csr::CsrView;
use crate::error::SpmvError;
use crate::kernel::rows::spmv_rows;
use crate::scalar::Scalar;
use std::thread;
use tracing::trace;

/// Computes `A * x` with rows spread across scoped threads.
///
/// Rows are cut into contiguous ranges, one per thread, and each thread
/// writes only its own chunk of the result. Every row is accumulated
/// exactly as the serial kernel does it, so the output is bit-identical
/// to the single-threaded result. Thread count adapts to the amount of work:
/// - work < `single_thread_threshold`: 1 thread
/// - work < `two_thread_threshold`: 2 threads
/// - otherwise: up to `num_threads`
///
/// and never leaves a thread with fewer than `min_rows_per_thread` rows.
///
/// # Errors
///
/// - [`SpmvError::IndexOutOfRange`] if a column index is `>= x.len()`
/// - [`SpmvError::Overflow`] for the lowest overflowing row
pub fn spmv_mt<T: Scalar>(
    view: &CsrView<'_, T>,
    x: &[T],
    config: &SpmvConfig,
) -> Result<Vec<T>, SpmvError> {
    view.check_vector_len(x.len())?;

    let rows = view.nrows();
    let mut y = vec![T::zero(); rows];
    let effective_threads = choose_thread_count(view.nnz() + rows, rows, config);
    trace!(rows, nnz = view.nnz(), effective_threads, "spmv_mt");

    if effective_threads == 1 {
        spmv_rows(view, x, 0, &mut y, config.overflow)?;
        return Ok(y);
    }

    let rows_per_thread = rows.div_ceil(effective_threads);
    let policy = config.overflow;

    let results: Vec<Result<(), SpmvError>> = thread::scope(|s| {
        let handles: Vec<_> = y
            .chunks_mut(rows_per_thread)
            .enumerate()
            .map(|(tid, chunk)| {
                s.spawn(move || spmv_rows(view, x, tid * rows_per_thread, chunk, policy))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    // Chunks are in row order, so the first error is the lowest row.
    results.into_iter().collect::<Result<(), _>>()?;
    Ok(y)
}

pub(crate) fn choose_thread_count(work: usize, rows: usize, config: &SpmvConfig) -> usize {
    let optimal_threads = if work < config.single_thread_threshold {
        1
    } else if work < config.two_thread_threshold {
        2
    } else {
        config.num_threads
    };

    let threads_by_rows = (rows / config.min_rows_per_thread.max(1)).max(1);

    optimal_threads
        .min(threads_by_rows)
        .min(config.num_threads)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverflowPolicy;

    fn config(num_threads: usize) -> SpmvConfig {
        SpmvConfig {
            num_threads,
            single_thread_threshold: 100,
            two_thread_threshold: 1_000,
            min_rows_per_thread: 4,
            overflow: OverflowPolicy::Fail,
        }
    }

    #[test]
    fn thread_count_follows_work_size() {
        let cfg = config(8);
        assert_eq!(choose_thread_count(99, 1_000, &cfg), 1);
        assert_eq!(choose_thread_count(100, 1_000, &cfg), 2);
        assert_eq!(choose_thread_count(999, 1_000, &cfg), 2);
        assert_eq!(choose_thread_count(1_000, 1_000, &cfg), 8);
    }

    #[test]
    fn thread_count_respects_rows_and_cap() {
        assert_eq!(choose_thread_count(1_000_000, 10, &config(8)), 2);
        assert_eq!(choose_thread_count(1_000_000, 3, &config(8)), 1);
        assert_eq!(choose_thread_count(1_000_000, 1_000, &config(3)), 3);
        assert_eq!(choose_thread_count(1_000_000, 1_000, &config(0)), 1);
    }

    #[test]
    fn uneven_split_covers_every_row() {
        // 10 rows, 3 threads -> chunks of 4, 4, 2
        let n = 10;
        let values: Vec<i64> = (1..=n as i64).collect();
        let row_ptr: Vec<usize> = (0..=n).collect();
        let col_index: Vec<usize> = (0..n).collect();
        let view = CsrView::new(n, &values, &row_ptr, &col_index).unwrap();
        let x = vec![2i64; n];

        let cfg = SpmvConfig {
            num_threads: 3,
            single_thread_threshold: 0,
            two_thread_threshold: 0,
            min_rows_per_thread: 1,
            overflow: OverflowPolicy::Fail,
        };
        let y = spmv_mt(&view, &x, &cfg).unwrap();

        let expected: Vec<i64> = values.iter().map(|v| v * 2).collect();
        assert_eq!(y, expected);
    }

    #[test]
    fn lowest_overflowing_row_wins() {
        let n = 8;
        let mut values = vec![1u8; n];
        values[2] = 200;
        values[6] = 200;
        let row_ptr: Vec<usize> = (0..=n).collect();
        let col_index = vec![0usize; n];
        let view = CsrView::new(n, &values, &row_ptr, &col_index).unwrap();

        let cfg = SpmvConfig {
            num_threads: 4,
            single_thread_threshold: 0,
            two_thread_threshold: 0,
            min_rows_per_thread: 1,
            overflow: OverflowPolicy::Fail,
        };
        assert_eq!(
            spmv_mt(&view, &[2], &cfg),
            Err(SpmvError::Overflow { row: 2 })
        );
    }

    #[test]
    fn short_vector_is_an_error_on_every_thread_count() {
        let values = [1, 1, 1];
        let row_ptr = [0, 1, 2, 3];
        let col_index = [0, 5, 1];
        let view = CsrView::new(3, &values, &row_ptr, &col_index).unwrap();

        for num_threads in [1, 2, 3] {
            let cfg = SpmvConfig {
                num_threads,
                single_thread_threshold: 0,
                two_thread_threshold: 0,
                min_rows_per_thread: 1,
                overflow: OverflowPolicy::Fail,
            };
            assert_eq!(
                spmv_mt(&view, &[1], &cfg),
                Err(SpmvError::IndexOutOfRange {
                    position: 1,
                    column: 5,
                    len: 1
                })
            );
        }
    }

    #[test]
    fn result_always_covers_every_row() {
        let values = [1, 1, 1];
        let row_ptr = [0, 1, 2, 3];
        let col_index = [0, 1, 2];
        let view = CsrView::new(3, &values, &row_ptr, &col_index).unwrap();

        let y = spmv_mt(&view, &[1, 2, 3], &config(2)).unwrap();
        assert_eq!(y, vec![1, 2, 3]);
    }
}
