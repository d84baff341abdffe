use gemmbench::driver::{self, BenchConfig};
use gemmbench::gemm::MatrixMultiply;

fn small_config(dir: &std::path::Path) -> BenchConfig {
    BenchConfig {
        m: 4,
        p: 6,
        n: 6,
        iterations: 100,
        naive_output: dir.join("normal.txt"),
        gemm_output: dir.join("parallel.txt"),
    }
}

fn read_samples(path: &std::path::Path) -> Vec<u128> {
    let contents = std::fs::read_to_string(path).unwrap();
    contents
        .lines()
        .map(|line| {
            line.parse::<u128>()
                .unwrap_or_else(|_| panic!("line {:?} is not a non-negative integer", line))
        })
        .collect()
}

#[test]
fn test_writes_one_sample_per_iteration() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path());

    driver::run(&config, &MatrixMultiply).unwrap();

    let naive = read_samples(&config.naive_output);
    let gemm = read_samples(&config.gemm_output);
    assert_eq!(naive.len(), 100);
    assert_eq!(gemm.len(), 100);
}

#[test]
fn test_defaults_match_fixed_constants() {
    let config = BenchConfig::default();

    assert_eq!(config.m, driver::M);
    assert_eq!(config.p, driver::P);
    assert_eq!(config.n, driver::N);
    assert_eq!(config.iterations, driver::ITERATIONS);
    assert_eq!(config.naive_output.to_str(), Some(driver::NAIVE_OUTPUT));
    assert_eq!(config.gemm_output.to_str(), Some(driver::GEMM_OUTPUT));
}

#[test]
fn test_unwritable_phase_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_config(dir.path());
    // Parent directory doesn't exist, so the naive phase can't open its file.
    config.naive_output = dir.path().join("missing").join("normal.txt");

    driver::run(&config, &MatrixMultiply).unwrap();

    assert!(!config.naive_output.exists());
    // The other phase still persisted its samples.
    assert_eq!(read_samples(&config.gemm_output).len(), 100);
}
