//! Elapsed-time accumulator used by the benchmark driver.

use std::time::{Duration, Instant};

/// Accumulating stopwatch over a monotonic clock.
///
/// Elapsed time only advances on [`stop`](StopWatch::stop): reading while an
/// interval is open returns the total of completed intervals only. All
/// operations are total over the two states (idle, running) - there are no
/// error conditions.
///
/// # Example
///
/// ```
/// use gemmbench::StopWatch;
///
/// let mut sw = StopWatch::new();
/// sw.start();
/// // ... work ...
/// sw.stop();
/// let _ms = sw.elapsed_millis();
/// ```
#[derive(Debug)]
pub struct StopWatch {
    start: Option<Instant>,
    elapsed: Duration,
}

impl StopWatch {
    /// A stopped stopwatch with zero accumulated time.
    pub fn new() -> Self {
        StopWatch {
            start: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Begin a new interval. Ignored if already running - restarting
    /// without stopping would silently drop the open interval's time.
    pub fn start(&mut self) {
        if self.start.is_none() {
            self.start = Some(Instant::now());
        }
    }

    /// Close the open interval and add it to the accumulated total.
    /// No-op when not running.
    pub fn stop(&mut self) {
        if let Some(start) = self.start.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Zero the accumulated time and discard any open interval.
    pub fn reset(&mut self) {
        self.start = None;
        self.elapsed = Duration::ZERO;
    }

    /// [`reset`](StopWatch::reset) followed by [`start`](StopWatch::start).
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Total of completed intervals. Does not include a currently-open one.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Accumulated time in whole microseconds (truncated).
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }

    /// Accumulated time in whole milliseconds (truncated).
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Accumulated time in whole seconds (truncated).
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Whether an interval is currently open.
    pub fn is_running(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for StopWatch {
    fn default() -> Self {
        Self::new()
    }
}
