//! Scalar progress math shared by the animation state and the renderer.
//!
//! One monotonically increasing driver value is split into `n` strictly
//! sequential sub-phases: phase `i` starts once the driver passes `i / n` and
//! saturates at 1 when the driver reaches `(i + 1) / n`.

/// Progress added per tick at the default speed.
pub const STEP: f32 = 0.05;

/// Number of sub-phases a node's cycle is divided into (clear, then sweep).
pub const PHASES: u32 = 2;

/// Driver value left for phase `i` of `n` after its start offset of `i / n`.
#[inline]
pub fn max_scale(scale: f32, i: u32, n: u32) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Local progress of phase `i` of `n`, normalized back into \[0, 1\].
#[inline]
pub fn divide_scale(scale: f32, i: u32, n: u32) -> f32 {
    let n_f = n as f32;
    (1.0 / n_f).min(max_scale(scale, i, n)) * n_f
}

/// Advance `scale` one step in `direction` (-1, 0 or 1). Not clamped.
#[inline]
pub fn update_value(scale: f32, direction: f32, step: f32) -> f32 {
    scale + direction * step
}
