// Host-side tests for the per-node animation state machine.

use arc_core::{AnimationState, Direction, StartOutcome, StepOutcome, STEP};

fn ticks_per_cycle(step: f32) -> usize {
    (1.0_f64 / step as f64).ceil() as usize
}

#[test]
fn forward_cycle_from_idle() {
    let mut s = AnimationState::new();
    assert_eq!(s.direction(), Direction::Idle);
    assert_eq!(s.start_updating(), StartOutcome::Started);
    assert_eq!(s.direction(), Direction::Forward);

    let n = ticks_per_cycle(STEP);
    let mut completions = 0;
    let mut prev = s.scale();
    for i in 1..=n {
        match s.update(STEP) {
            StepOutcome::Advanced => {
                assert!(i < n, "still advancing at tick {i}");
                assert!((s.scale() - prev - STEP).abs() < 1e-5);
                prev = s.scale();
            }
            StepOutcome::PhaseComplete => completions += 1,
            StepOutcome::Idle => panic!("went idle at tick {i}"),
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(s.scale(), 1.0);
    assert_eq!(s.prev_scale(), 1.0);
    assert_eq!(s.direction(), Direction::Idle);
}

#[test]
fn idle_state_never_advances() {
    let mut s = AnimationState::new();
    for _ in 0..5 {
        assert_eq!(s.update(STEP), StepOutcome::Idle);
    }
    assert_eq!(s, AnimationState::new());
}

#[test]
fn start_is_ignored_while_animating() {
    let mut s = AnimationState::new();
    s.start_updating();
    s.update(STEP);
    let before = s.clone();
    assert_eq!(s.start_updating(), StartOutcome::AlreadyAnimating);
    assert_eq!(s, before);
}

#[test]
fn second_cycle_runs_in_reverse() {
    let mut s = AnimationState::new();
    s.start_updating();
    while s.update(STEP) != StepOutcome::PhaseComplete {}
    assert_eq!(s.start_updating(), StartOutcome::Started);
    assert_eq!(s.direction(), Direction::Reverse);

    let mut ticks = 0;
    while s.update(STEP) != StepOutcome::PhaseComplete {
        ticks += 1;
        assert!(s.scale() < 1.0 && s.scale() > 0.0);
    }
    assert_eq!(ticks + 1, ticks_per_cycle(STEP));
    assert_eq!(s.scale(), 0.0);
    assert_eq!(s.prev_scale(), 0.0);
}

#[test]
fn non_divisor_step_snaps_to_boundary() {
    let mut s = AnimationState::new();
    s.start_updating();
    let mut ticks = 0;
    loop {
        ticks += 1;
        if s.update(0.3) == StepOutcome::PhaseComplete {
            break;
        }
        assert!(ticks < 10, "never completed");
    }
    assert_eq!(ticks, 4);
    assert_eq!(s.scale(), 1.0);
}

fn ticks_until_complete(step: f32) -> usize {
    let mut s = AnimationState::new();
    s.start_updating();
    let mut ticks = 1;
    while s.update(step) != StepOutcome::PhaseComplete {
        ticks += 1;
    }
    ticks
}

#[test]
fn cycle_length_is_ceil_of_inverse_step() {
    for step in [0.05, 0.25, 0.3, 0.49999, 0.0001, 0.00001, 1.0] {
        assert_eq!(
            ticks_until_complete(step),
            ticks_per_cycle(step),
            "wrong cycle length for step {step}"
        );
    }
}

#[test]
fn progress_never_reaches_boundary_before_snap() {
    let step = 0.49999;
    let mut s = AnimationState::new();
    s.start_updating();
    assert_eq!(s.update(step), StepOutcome::Advanced);
    assert_eq!(s.update(step), StepOutcome::Advanced);
    assert!(s.scale() < 1.0);
    assert_eq!(s.update(step), StepOutcome::PhaseComplete);
    assert_eq!(s.scale(), 1.0);
}
