//! Per-node progress state machine.
//!
//! `Idle --start_updating--> Forward|Reverse --update*--> Idle`. The
//! direction of the next cycle is derived from where the previous one
//! settled, so cycles alternate forward and reverse.

use crate::scale::update_value;

/// Which way progress moves on the next tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Not animating; `update` changes nothing.
    #[default]
    Idle,
    /// Progress grows from 0 towards 1.
    Forward,
    /// Progress shrinks from 1 towards 0.
    Reverse,
}

impl Direction {
    /// -1, 0 or 1.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Idle => 0.0,
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    fn from_sign(sign: f32) -> Self {
        if sign > 0.0 {
            Direction::Forward
        } else if sign < 0.0 {
            Direction::Reverse
        } else {
            Direction::Idle
        }
    }
}

/// Result of [`AnimationState::start_updating`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyAnimating,
}

/// Result of one [`AnimationState::update`] tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not animating; nothing changed.
    Idle,
    Advanced,
    /// The cycle reached its boundary and the state went idle.
    PhaseComplete,
}

/// Progress of a single node.
///
/// `scale` is only mutated by `update`; `prev_scale` only changes when a
/// cycle completes. Progress within a cycle is recomputed from the number
/// of ticks taken, so rounding error never builds up across ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    scale: f32,
    direction: Direction,
    prev_scale: f32,
    ticks: u32,
}

impl AnimationState {
    /// Idle state at progress 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Value the progress last snapped to at a cycle boundary.
    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn is_animating(&self) -> bool {
        self.direction != Direction::Idle
    }

    /// Arm the next cycle. Ignored while a cycle is in flight.
    pub fn start_updating(&mut self) -> StartOutcome {
        if self.is_animating() {
            return StartOutcome::AlreadyAnimating;
        }
        self.direction = Direction::from_sign(1.0 - 2.0 * self.prev_scale);
        self.ticks = 0;
        StartOutcome::Started
    }

    /// Advance one tick by `step`. Once the distance travelled in this cycle
    /// reaches a full unit, progress snaps to `prev_scale + direction`.
    pub fn update(&mut self, step: f32) -> StepOutcome {
        if !self.is_animating() {
            return StepOutcome::Idle;
        }
        let sign = self.direction.sign();
        self.ticks = self.ticks.saturating_add(1);
        let travelled = self.ticks as f64 * step as f64;
        if travelled < 1.0 {
            self.scale = update_value(self.prev_scale, sign, travelled as f32);
            return StepOutcome::Advanced;
        }
        self.scale = self.prev_scale + sign;
        self.prev_scale = self.scale;
        self.direction = Direction::Idle;
        self.ticks = 0;
        StepOutcome::PhaseComplete
    }
}
