//! Benchmark runner for the SpMV implementations.

use spmv::{CsrMatrix, SpmvConfig, multiply, multiply_parallel, spmv_naive};
use std::time::Instant;
use tracing::{Level, info, warn};

/// Nonzeros per row in the generated test matrices.
const BAND: usize = 16;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    println!("=== Sparse Matrix-Vector Benchmark ===\n");

    let sizes = [10_000, 100_000, 1_000_000];
    let iterations = 5;
    let threads = std::thread::available_parallelism().map_or(1, |n| n.get());
    let mut all_results = Vec::new();

    info!(threads, band = BAND, "starting");

    for &n in &sizes {
        println!("Matrix: {}×{}, {} nonzeros/row", n, n, BAND);
        println!("{}", "-".repeat(50));

        let a = banded_matrix(n, BAND);
        let x: Vec<f64> = (0..n).map(|i| (i % 100) as f64).collect();
        let view = a.view();
        let config = SpmvConfig::with_threads(threads);

        let results: Vec<(&str, (f64, f64))> = vec![
            (
                "Naive",
                bench_fn(a.nnz(), iterations, || {
                    let mut y = vec![0.0; n];
                    spmv_naive(a.row_ptr(), a.col_index(), a.values(), &x, &mut y);
                    y
                }),
            ),
            (
                "Validated",
                bench_fn(a.nnz(), iterations, || {
                    multiply(n, a.values(), a.row_ptr(), a.col_index(), &x).unwrap_or_default()
                }),
            ),
            (
                "Validated MT",
                bench_fn(a.nnz(), iterations, || {
                    multiply_parallel(&view, &x, &config).unwrap_or_default()
                }),
            ),
        ];

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:16} {:8.3} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();

        all_results.push((n, results));
    }

    print_summary_table(&all_results);
}

/// `n × n` matrix with `band` nonzeros per row, wrapping around the
/// right edge so every row has the same length.
fn banded_matrix(n: usize, band: usize) -> CsrMatrix<f64> {
    let band = band.min(n);
    let mut values = Vec::with_capacity(n * band);
    let mut col_index = Vec::with_capacity(n * band);
    let mut row_ptr = Vec::with_capacity(n + 1);
    row_ptr.push(0);

    for row in 0..n {
        let mut cols: Vec<usize> = (0..band).map(|d| (row + d) % n).collect();
        cols.sort_unstable();
        for c in cols {
            values.push(((row + c) % 7) as f64 + 1.0);
            col_index.push(c);
        }
        row_ptr.push(values.len());
    }

    match CsrMatrix::new((n, n), values, row_ptr, col_index) {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, "generated matrix rejected, falling back to identity");
            CsrMatrix::identity(n)
        }
    }
}

/// Time `f` and report (average ms, GFLOPS) counting 2 flops per nonzero.
fn bench_fn<F>(nnz: usize, iterations: usize, f: F) -> (f64, f64)
where
    F: Fn() -> Vec<f64>,
{
    // Warmup
    std::hint::black_box(f());

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        std::hint::black_box(f());
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * nnz as f64 / avg / 1e9;
    (avg * 1000.0, gflops)
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(&str, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(90));
    println!("SUMMARY");
    println!("{}", "=".repeat(90));

    print!("\n{:<18}", "Method");
    for (n, _) in all_results {
        print!(" {:>14}", format!("n={}", n));
    }
    println!(" {:>12}", "Speedup");
    println!("{}", "-".repeat(90));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = all_results[0].1[method_idx].0;
        print!("{:<18}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            let baseline_time = results[0].1.0;
            print!(" {:>11.2} GF", gflops);
            speedups.push(baseline_time / time_ms);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>11.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to Naive. Higher is better.\n");
}
