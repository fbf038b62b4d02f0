//! Countdown timer state machine.
//!
//! ```text
//! Idle ──marker hit──▶ Running ──elapsed == limit──▶ Completed
//!  ▲                    │  ▲                            │
//!  │                    └──┘ marker hit (re-arm)        │
//!  └───────────────── click without a hit ──────────────┘
//! ```
//!
//! A marker hit always re-arms, whatever the current phase. A click that
//! misses every marker only matters once the timer has completed.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use crate::consts::MS_PER_MINUTE;
use crate::geometry::timer_wedge_angle;

/// Coarse phase derived from [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Completed,
}

/// What a click did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A marker was hit; the timer restarted with this duration.
    Armed { minutes: u32 },
    /// The completed timer was cleared.
    Reset,
    /// Nothing changed.
    Ignored,
}

/// Timer fields read by the renderer.
///
/// Once started, `0 <= elapsed_ms <= limit_ms` holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerState {
    pub started: bool,
    pub elapsed_ms: f64,
    pub limit_ms: f64,
}

impl TimerState {
    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        if !self.started || self.limit_ms <= 0.0 {
            TimerPhase::Idle
        } else if self.elapsed_ms >= self.limit_ms {
            TimerPhase::Completed
        } else {
            TimerPhase::Running
        }
    }

    /// Start (or restart) counting toward `minutes`.
    pub fn arm(&mut self, minutes: u32) {
        self.started = true;
        self.elapsed_ms = 0.0;
        self.limit_ms = f64::from(minutes) * MS_PER_MINUTE;
        log::info!("timer armed for {minutes} min");
    }

    /// Return to idle with no limit.
    pub fn reset(&mut self) {
        *self = Self::default();
        log::info!("timer reset");
    }

    /// Advance a running timer by `delta_ms`, clamping at the limit.
    ///
    /// Returns `true` on the frame the timer completes.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if self.phase() != TimerPhase::Running || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return false;
        }
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.limit_ms);
        let done = self.phase() == TimerPhase::Completed;
        if done {
            log::info!("timer completed after {:.0} ms", self.limit_ms);
        }
        done
    }

    /// Apply a click that hit the marker selecting `hit_minutes`, or nothing.
    pub fn click(&mut self, hit_minutes: Option<u32>) -> ClickOutcome {
        if let Some(minutes) = hit_minutes {
            self.arm(minutes);
            return ClickOutcome::Armed { minutes };
        }
        if self.phase() == TimerPhase::Completed {
            self.reset();
            return ClickOutcome::Reset;
        }
        ClickOutcome::Ignored
    }

    /// Angular extent of the wedge, `None` while idle.
    #[must_use]
    pub fn wedge_angle(&self) -> Option<f64> {
        if !self.started {
            return None;
        }
        timer_wedge_angle(self.elapsed_ms, self.limit_ms)
    }
}
