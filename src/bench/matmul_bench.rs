//! Criterion comparison of the naive kernel against the GEMM backend.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gemmbench::gemm::{Gemm, MatrixMultiply, Transpose};
use gemmbench::matmul_naive;

fn bench_matmul(c: &mut Criterion) {
    let n = 256;
    let a: Vec<f64> = (0..n * n).map(|i| (i + 1) as f64).collect();
    let b: Vec<f64> = (0..n * n).map(|i| -(i as f64) - 3.0).collect();

    c.bench_function("naive_256", |bencher| {
        let mut out = vec![0.0; n * n];
        bencher.iter(|| {
            matmul_naive(&a, &b, &mut out, n, n, n);
            black_box(&out);
        })
    });

    c.bench_function("gemm_backend_256", |bencher| {
        let mut out = vec![0.0; n * n];
        bencher.iter(|| {
            MatrixMultiply.multiply(
                &a,
                Transpose::None,
                &b,
                Transpose::None,
                1.0,
                0.0,
                &mut out,
                n,
                n,
                n,
            );
            black_box(&out);
        })
    });
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
