//! Benchmark orchestration: allocate, initialize, time, persist.
//!
//! The driver runs two phases over the same matrices - the naive kernel and
//! the injected [`Gemm`] backend - timing 100 iterations of each and writing
//! one milliseconds sample per line to that phase's output file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{error, info};

use crate::buffer::MatrixBuf;
use crate::gemm::{Gemm, Transpose};
use crate::matrix::naive::matmul_naive;
use crate::stopwatch::StopWatch;

/// Rows of A and C.
pub const M: usize = 1;
/// Columns of A, rows of B.
pub const P: usize = 10_000;
/// Columns of B and C.
pub const N: usize = 10_000;
/// Timed runs per phase.
pub const ITERATIONS: usize = 100;

/// Timing output for the naive kernel phase.
pub const NAIVE_OUTPUT: &str = "normal.txt";
/// Timing output for the optimized backend phase.
pub const GEMM_OUTPUT: &str = "parallel.txt";

/// Dimensions, iteration count, and output paths for one benchmark run.
///
/// `Default` is the fixed production configuration; tests shrink the
/// dimensions and point the outputs at a temp directory.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub m: usize,
    pub p: usize,
    pub n: usize,
    pub iterations: usize,
    pub naive_output: PathBuf,
    pub gemm_output: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            m: M,
            p: P,
            n: N,
            iterations: ITERATIONS,
            naive_output: PathBuf::from(NAIVE_OUTPUT),
            gemm_output: PathBuf::from(GEMM_OUTPUT),
        }
    }
}

/// A[i] = i + 1, flattened row-major.
pub fn init_a(a: &mut [f64]) {
    for (i, v) in a.iter_mut().enumerate() {
        *v = (i + 1) as f64;
    }
}

/// B[i] = -i - 3, flattened row-major.
pub fn init_b(b: &mut [f64]) {
    for (i, v) in b.iter_mut().enumerate() {
        *v = -(i as f64) - 3.0;
    }
}

/// Run both benchmark phases to completion.
///
/// The only fatal error is buffer allocation failure; the binary maps it to
/// exit code 1. A phase whose output file can't be opened or written is
/// logged and skipped - the run continues and still succeeds.
pub fn run<G: Gemm>(config: &BenchConfig, gemm: &G) -> anyhow::Result<()> {
    let (m, p, n) = (config.m, config.p, config.n);

    info!("allocating matrices on 64-byte boundaries: A {m}x{p}, B {p}x{n}, C {m}x{n}");
    let mut a = MatrixBuf::try_new(m * p).context("allocating matrix A")?;
    let mut b = MatrixBuf::try_new(p * n).context("allocating matrix B")?;
    let mut c = MatrixBuf::try_new(m * n).context("allocating matrix C")?;

    init_a(&mut a);
    init_b(&mut b);
    info!("initialized data in matrices A and B");

    let mut stopwatch = StopWatch::new();

    let result = run_phase(
        "naive multiplication",
        &config.naive_output,
        config.iterations,
        &mut stopwatch,
        || matmul_naive(&a, &b, &mut c, m, n, p),
    );
    if let Err(err) = result {
        error!("naive multiplication timings not persisted: {err}");
    }

    let result = run_phase(
        "gemm backend",
        &config.gemm_output,
        config.iterations,
        &mut stopwatch,
        || {
            gemm.multiply(
                &a,
                Transpose::None,
                &b,
                Transpose::Ordinary,
                1.0,
                1.0,
                &mut c,
                m,
                n,
                p,
            )
        },
    );
    if let Err(err) = result {
        error!("gemm backend timings not persisted: {err}");
    }

    Ok(())
}

/// Time `iterations` runs of `step`, one milliseconds sample per line.
///
/// The stopwatch restarts at the top of every iteration so each sample is
/// that iteration's duration alone, not a running total. Samples are
/// written as they are produced; an I/O failure abandons the rest of the
/// phase's persistence.
fn run_phase(
    label: &str,
    path: &Path,
    iterations: usize,
    stopwatch: &mut StopWatch,
    mut step: impl FnMut(),
) -> io::Result<()> {
    info!("benchmarking {label}: {iterations} iterations -> {}", path.display());

    let mut out = BufWriter::new(File::create(path)?);
    stopwatch.reset();

    for _ in 0..iterations {
        stopwatch.restart();
        step();
        stopwatch.stop();
        writeln!(out, "{}", stopwatch.elapsed_millis())?;
    }
    out.flush()?;

    info!("{label} timings written to {}", path.display());
    Ok(())
}
