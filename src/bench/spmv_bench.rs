use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use spmv::{CsrMatrix, SpmvConfig, multiply, multiply_parallel, spmv_naive};

fn tridiagonal(n: usize) -> CsrMatrix<f64> {
    let mut triplets = Vec::with_capacity(3 * n);
    for i in 0..n {
        if i > 0 {
            triplets.push((i, i - 1, -1.0));
        }
        triplets.push((i, i, 2.0));
        if i + 1 < n {
            triplets.push((i, i + 1, -1.0));
        }
    }
    CsrMatrix::from_triplets(n, n, &triplets)
}

fn bench_spmv(c: &mut Criterion) {
    let mut group = c.benchmark_group("spmv");

    for n in [1_000, 100_000, 1_000_000] {
        let a = tridiagonal(n);
        let x: Vec<f64> = (0..n).map(|i| (i % 10) as f64).collect();
        let view = a.view();
        let config = SpmvConfig::default();

        group.throughput(Throughput::Elements(a.nnz() as u64));

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, &n| {
            let mut y = vec![0.0; n];
            b.iter(|| spmv_naive(a.row_ptr(), a.col_index(), a.values(), black_box(&x), &mut y))
        });

        group.bench_with_input(BenchmarkId::new("validated", n), &n, |b, &n| {
            b.iter(|| multiply(n, a.values(), a.row_ptr(), a.col_index(), black_box(&x)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| multiply_parallel(&view, black_box(&x), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spmv);
criterion_main!(benches);
