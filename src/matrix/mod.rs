//! The naive multiplication kernel.
//!
//! This is the measured side of the benchmark: a plain triple loop whose
//! cost is exactly what the timing harness records.

pub mod naive;
