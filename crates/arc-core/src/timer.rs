//! Repeating tick source that drives every live node.
//!
//! The controller owns exactly one timer. Implementations must keep at most
//! one repeating registration alive and treat redundant `start`/`stop`
//! calls as no-ops.

use std::time::Duration;

/// Start/stop control over a repeating tick.
pub trait TickTimer {
    /// Begin ticking. No-op while already running.
    fn start(&mut self);
    /// Cancel ticking, including any tick not yet delivered. No-op when stopped.
    fn stop(&mut self);
    /// Whether a repeating registration is currently active.
    fn is_running(&self) -> bool;
}

/// Timer driven by an explicit clock instead of the host event loop.
///
/// `advance` reports how many ticks fell due; the caller delivers them.
#[derive(Clone, Debug)]
pub struct ManualTimer {
    interval: Duration,
    running: bool,
    pending: Duration,
    registrations: u32,
}

impl ManualTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            running: false,
            pending: Duration::ZERO,
            registrations: 0,
        }
    }

    /// Time between ticks, at least 1 ms.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of times a repeating registration was actually created.
    pub fn registrations(&self) -> u32 {
        self.registrations
    }

    /// Let `elapsed` pass and return how many ticks fell due. Leftover time
    /// carries into the next call. Always 0 while stopped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.pending = self.pending.saturating_add(elapsed);
        let due = u32::try_from(self.pending.as_nanos() / self.interval.as_nanos())
            .unwrap_or(u32::MAX);
        self.pending = self.pending.saturating_sub(self.interval.saturating_mul(due));
        due
    }
}

impl TickTimer for ManualTimer {
    fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = Duration::ZERO;
        self.registrations += 1;
        log::debug!("[timer] start interval={:?}", self.interval);
    }

    fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.pending = Duration::ZERO;
        log::debug!("[timer] stop");
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
