//! Tuning knobs for the multiply entry points.

/// What to do when an integer product or running sum doesn't fit in `T`.
///
/// Floating-point element types ignore this: they follow IEEE semantics
/// and let `inf`/`NaN` propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Abort with [`SpmvError::Overflow`](crate::SpmvError::Overflow).
    #[default]
    Fail,
    /// Two's-complement wraparound.
    Wrap,
    /// Clamp each product and each partial sum to `T::MIN..=T::MAX`.
    ///
    /// Clamping happens step by step in storage order, so a row whose exact
    /// sum fits in `T` can still come out different once an intermediate
    /// value has hit a bound: an `i8` row `100*2 + (-1)*100` gives 27, not 100.
    Saturate,
}

/// Settings for [`multiply_parallel`](crate::multiply_parallel).
///
/// Work is measured as `nnz + row_count`, roughly one multiply-add per
/// nonzero plus one store per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpmvConfig {
    /// Upper bound on worker threads.
    pub num_threads: usize,
    /// Below this much work everything runs on the calling thread.
    pub single_thread_threshold: usize,
    /// Below this much work at most two threads are used.
    pub two_thread_threshold: usize,
    /// Never hand a thread fewer rows than this.
    pub min_rows_per_thread: usize,
    pub overflow: OverflowPolicy,
}

impl SpmvConfig {
    /// Default settings capped at `num_threads` workers.
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads,
            ..Self::default()
        }
    }

    /// Replace the overflow policy, keeping everything else.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

impl Default for SpmvConfig {
    fn default() -> Self {
        Self {
            num_threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
            single_thread_threshold: 200_000,
            two_thread_threshold: 1_000_000,
            min_rows_per_thread: 64,
            overflow: OverflowPolicy::Fail,
        }
    }
}
