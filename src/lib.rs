//! Benchmark harness for dense matrix multiplication.
//!
//! Times a naive triple-loop kernel against an optimized GEMM backend over
//! the same row-major `f64` buffers, writing one elapsed-milliseconds sample
//! per iteration to a file per variant. The naive kernel is the interesting
//! measurement; the optimized side is whatever BLAS-class routine is plugged
//! in behind the [`Gemm`] trait.
//!
//! ## Usage
//!
//! ```no_run
//! use gemmbench::driver::{self, BenchConfig};
//! use gemmbench::gemm::MatrixMultiply;
//!
//! driver::run(&BenchConfig::default(), &MatrixMultiply).unwrap();
//! ```
//!
//! ## What's inside
//!
//! - [`StopWatch`]: start/stop/reset elapsed-time accumulator
//! - [`matmul_naive`]: the textbook i-j-k loop, deliberately unoptimized
//! - [`Gemm`]: the injected optimized-multiply capability
//! - [`driver`]: allocation, deterministic init, timed loops, output files

pub mod buffer;
pub mod driver;
pub mod gemm;
pub mod matrix;
pub mod stopwatch;

pub use buffer::{AllocError, MatrixBuf};
pub use gemm::{Gemm, MatrixMultiply, Transpose};
pub use matrix::naive::matmul_naive;
pub use stopwatch::StopWatch;
