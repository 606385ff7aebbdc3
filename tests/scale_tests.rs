// Host-side tests for the phase-splitting math in arc-core.

use arc_core::{divide_scale, max_scale, update_value, PHASES, STEP};

fn grid(from: f32, to: f32, samples: usize) -> impl Iterator<Item = f32> {
    (0..=samples).map(move |i| from + (to - from) * i as f32 / samples as f32)
}

#[test]
fn max_scale_offsets_by_phase_start() {
    assert_eq!(max_scale(0.3, 0, 2), 0.3);
    assert!((max_scale(0.8, 1, 2) - 0.3).abs() < 1e-6);
    assert_eq!(max_scale(0.2, 1, 2), 0.0);
}

#[test]
fn sub_scales_stay_in_unit_range() {
    for s in grid(0.0, 2.0, 400) {
        let a = divide_scale(s, 0, PHASES);
        let b = divide_scale(s, 1, PHASES);
        assert!((0.0..=1.0).contains(&a), "phase 0 out of range at {s}: {a}");
        assert!((0.0..=1.0).contains(&b), "phase 1 out of range at {s}: {b}");
    }
}

#[test]
fn second_phase_waits_for_the_first() {
    for s in grid(0.0, 0.499, 100) {
        assert_eq!(divide_scale(s, 1, PHASES), 0.0, "phase 1 started early at {s}");
    }
    for s in grid(0.5, 2.0, 100) {
        assert_eq!(divide_scale(s, 0, PHASES), 1.0, "phase 0 not saturated at {s}");
    }
}

#[test]
fn phases_map_halves_onto_full_range() {
    assert!((divide_scale(0.25, 0, 2) - 0.5).abs() < 1e-6);
    assert!((divide_scale(0.75, 1, 2) - 0.5).abs() < 1e-6);
    assert_eq!(divide_scale(1.0, 1, 2), 1.0);
}

#[test]
fn update_value_is_unclamped() {
    assert!((update_value(0.0, 1.0, STEP) - STEP).abs() < 1e-7);
    assert!((update_value(0.0, -1.0, STEP) + STEP).abs() < 1e-7);
    assert_eq!(update_value(0.4, 0.0, STEP), 0.4);
    assert!(update_value(1.0, 1.0, STEP) > 1.0);
}
