use std::thread;
use std::time::Duration;

use gemmbench::StopWatch;

#[test]
fn test_new_is_idle_and_zero() {
    let sw = StopWatch::new();

    assert!(!sw.is_running());
    assert_eq!(sw.elapsed(), Duration::ZERO);
    assert_eq!(sw.elapsed_micros(), 0);
    assert_eq!(sw.elapsed_millis(), 0);
    assert_eq!(sw.elapsed_secs(), 0);
}

#[test]
fn test_reset_zeroes_accumulated_time() {
    let mut sw = StopWatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(5));
    sw.stop();
    assert!(sw.elapsed() > Duration::ZERO);

    sw.reset();

    assert_eq!(sw.elapsed(), Duration::ZERO);
    assert!(!sw.is_running());
}

#[test]
fn test_measures_known_delay() {
    let mut sw = StopWatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(50));
    sw.stop();

    // sleep guarantees at least the requested delay; allow generous
    // headroom for scheduling on the upper side.
    assert!(sw.elapsed() >= Duration::from_millis(50));
    assert!(sw.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_start_while_running_is_ignored() {
    let mut sw = StopWatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(20));

    // A second start must not reset the open interval.
    sw.start();
    thread::sleep(Duration::from_millis(20));
    sw.stop();

    assert!(sw.elapsed() >= Duration::from_millis(40));
}

#[test]
fn test_stop_without_start_is_noop() {
    let mut sw = StopWatch::new();
    sw.stop();

    assert_eq!(sw.elapsed(), Duration::ZERO);
    assert!(!sw.is_running());
}

#[test]
fn test_elapsed_excludes_open_interval() {
    let mut sw = StopWatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(10));

    // Still running: only completed intervals count.
    assert!(sw.is_running());
    assert_eq!(sw.elapsed(), Duration::ZERO);

    sw.stop();
    assert!(sw.elapsed() >= Duration::from_millis(10));
}

#[test]
fn test_accumulates_across_intervals() {
    let mut sw = StopWatch::new();

    sw.start();
    thread::sleep(Duration::from_millis(15));
    sw.stop();
    let first = sw.elapsed();

    sw.start();
    thread::sleep(Duration::from_millis(15));
    sw.stop();

    assert!(sw.elapsed() >= first + Duration::from_millis(15));
}

#[test]
fn test_restart_discards_previous_total() {
    let mut sw = StopWatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(30));
    sw.stop();

    sw.restart();

    assert!(sw.is_running());
    assert_eq!(sw.elapsed(), Duration::ZERO);

    sw.stop();
    assert!(sw.elapsed() < Duration::from_millis(30));
}

#[test]
fn test_reset_discards_open_interval() {
    let mut sw = StopWatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(5));

    sw.reset();
    assert!(!sw.is_running());

    // The discarded interval must not resurface on a later stop.
    sw.stop();
    assert_eq!(sw.elapsed(), Duration::ZERO);
}

#[test]
fn test_unit_conversions_truncate() {
    let mut sw = StopWatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(25));
    sw.stop();

    let elapsed = sw.elapsed();
    assert_eq!(sw.elapsed_micros(), elapsed.as_micros());
    assert_eq!(sw.elapsed_millis(), elapsed.as_millis());
    assert_eq!(sw.elapsed_secs(), 0);
}
