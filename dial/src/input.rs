//! Single- vs double-click disambiguation.
//!
//! A click is not acted on immediately. It is parked in [`ClickGate`] and the
//! host schedules [`ClickGate::fire`] once the debounce window has passed. A
//! second click inside the window, or a double-click notification, drops the
//! parked click so that a double-click never also counts as a single click.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::vector::Vector2;

/// Result of pressing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickQueue {
    /// Parked; call [`ClickGate::fire`] with this token after the window.
    Queued(u64),
    /// Second click inside the window; nothing is parked.
    Suppressed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingClick {
    token: u64,
    at_ms: f64,
    /// Already in logical space, so a resize before firing cannot move it.
    point: Vector2,
}

/// Debounce state for pointer clicks.
///
/// Several clicks can be parked at once: a click pressed after the window has
/// passed is independent of the one before it, even if that one's timeout has
/// not been delivered yet.
#[derive(Debug, Clone)]
pub struct ClickGate {
    window_ms: f64,
    next_token: u64,
    /// Oldest first.
    pending: Vec<PendingClick>,
}

impl ClickGate {
    #[must_use]
    pub fn new(window_ms: u32) -> Self {
        Self { window_ms: f64::from(window_ms), next_token: 0, pending: Vec::new() }
    }

    /// Record a click at logical `point`, pressed at `now_ms`.
    ///
    /// Only the most recent parked click can pair with this one; if it was
    /// pressed inside the window both are dropped.
    pub fn press(&mut self, point: Vector2, now_ms: f64) -> ClickQueue {
        if let Some(prev) = self.pending.last()
            && now_ms - prev.at_ms < self.window_ms
        {
            self.pending.pop();
            log::debug!("second click within {} ms; dropping both", self.window_ms);
            return ClickQueue::Suppressed;
        }

        self.next_token = self.next_token.wrapping_add(1);
        let token = self.next_token;
        self.pending.push(PendingClick { token, at_ms: now_ms, point });
        ClickQueue::Queued(token)
    }

    /// Drop the most recent parked click. Returns whether one was dropped.
    pub fn double_click(&mut self) -> bool {
        self.pending.pop().is_some()
    }

    /// Release the parked click identified by `token`, if it is still parked.
    pub fn fire(&mut self, token: u64) -> Option<Vector2> {
        let index = self.pending.iter().position(|p| p.token == token)?;
        Some(self.pending.remove(index).point)
    }
}
