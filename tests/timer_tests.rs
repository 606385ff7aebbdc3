// Host-side tests for the deterministic tick timer.

use arc_core::{ManualTimer, TickTimer};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(50);

#[test]
fn double_start_registers_once() {
    let mut t = ManualTimer::new(INTERVAL);
    t.start();
    t.start();
    assert_eq!(t.registrations(), 1);
    assert_eq!(t.advance(Duration::from_millis(500)), 10);
}

#[test]
fn stop_before_first_tick_fires_nothing() {
    let mut t = ManualTimer::new(INTERVAL);
    t.start();
    t.advance(Duration::from_millis(30));
    t.stop();
    assert!(!t.is_running());
    assert_eq!(t.advance(Duration::from_millis(500)), 0);
}

#[test]
fn redundant_stop_is_harmless() {
    let mut t = ManualTimer::new(INTERVAL);
    t.stop();
    t.start();
    t.stop();
    t.stop();
    assert!(!t.is_running());
    assert_eq!(t.registrations(), 1);
}

#[test]
fn partial_intervals_carry_over() {
    let mut t = ManualTimer::new(INTERVAL);
    t.start();
    assert_eq!(t.advance(Duration::from_millis(30)), 0);
    assert_eq!(t.advance(Duration::from_millis(30)), 1);
    assert_eq!(t.advance(Duration::from_millis(40)), 1);
}

#[test]
fn restart_discards_stale_progress() {
    let mut t = ManualTimer::new(INTERVAL);
    t.start();
    t.advance(Duration::from_millis(40));
    t.stop();
    t.start();
    assert_eq!(t.registrations(), 2);
    assert_eq!(t.advance(Duration::from_millis(20)), 0);
}

#[test]
fn interval_is_clamped_to_one_millisecond() {
    assert_eq!(ManualTimer::new(INTERVAL).interval(), INTERVAL);
    assert_eq!(ManualTimer::new(Duration::ZERO).interval(), Duration::from_millis(1));
}

#[test]
fn huge_elapsed_time_saturates_instead_of_wrapping() {
    let mut t = ManualTimer::new(Duration::from_millis(1));
    t.start();
    assert_eq!(t.advance(Duration::MAX), u32::MAX);
    // pending time stays bounded; more time still yields ticks
    assert_eq!(t.advance(Duration::MAX), u32::MAX);
}
