//! Benchmark runner: naive kernel vs optimized GEMM backend.

use std::process::ExitCode;

use gemmbench::driver::{self, BenchConfig};
use gemmbench::gemm::MatrixMultiply;
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The only error `run` surfaces is buffer allocation failure.
    match driver::run(&BenchConfig::default(), &MatrixMultiply) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
