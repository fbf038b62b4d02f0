#![allow(clippy::float_cmp)]

use std::f64::consts::TAU;

use super::*;

fn running(minutes: u32) -> TimerState {
    let mut t = TimerState::default();
    t.arm(minutes);
    t
}

// --- Initial state ---

#[test]
fn default_is_idle_without_wedge() {
    let t = TimerState::default();
    assert_eq!(t.phase(), TimerPhase::Idle);
    assert_eq!(t.wedge_angle(), None);
    assert_eq!(t.limit_ms, 0.0);
}

// --- arm ---

#[test]
fn arm_sets_limit_and_clears_elapsed() {
    let t = running(5);
    assert!(t.started);
    assert_eq!(t.limit_ms, 300_000.0);
    assert_eq!(t.elapsed_ms, 0.0);
    assert_eq!(t.phase(), TimerPhase::Running);
    assert_eq!(t.wedge_angle(), Some(0.0));
}

// --- advance ---

#[test]
fn advance_accumulates_delta() {
    let mut t = running(1);
    t.advance(16.0);
    t.advance(17.0);
    assert_eq!(t.elapsed_ms, 33.0);
}

#[test]
fn advance_clamps_at_limit() {
    let mut t = running(1);
    assert!(t.advance(90_000.0));
    assert_eq!(t.elapsed_ms, 60_000.0);
    assert_eq!(t.phase(), TimerPhase::Completed);
    assert_eq!(t.wedge_angle(), Some(TAU));
}

#[test]
fn advance_reports_completion_once() {
    let mut t = running(1);
    assert!(!t.advance(59_999.0));
    assert!(t.advance(1.0));
    assert!(!t.advance(1.0));
    assert_eq!(t.elapsed_ms, 60_000.0);
}

#[test]
fn advance_ignores_idle_timer() {
    let mut t = TimerState::default();
    t.advance(1_000.0);
    assert_eq!(t, TimerState::default());
}

#[test]
fn advance_ignores_bad_deltas() {
    let mut t = running(1);
    t.advance(-50.0);
    t.advance(f64::NAN);
    t.advance(f64::INFINITY);
    assert_eq!(t.elapsed_ms, 0.0);
}

// --- click ---

#[test]
fn hit_while_idle_arms() {
    let mut t = TimerState::default();
    assert_eq!(t.click(Some(10)), ClickOutcome::Armed { minutes: 10 });
    assert_eq!(t.limit_ms, 600_000.0);
}

#[test]
fn hit_while_running_rearms() {
    let mut t = running(10);
    t.advance(5_000.0);
    assert_eq!(t.click(Some(2)), ClickOutcome::Armed { minutes: 2 });
    assert_eq!(t.limit_ms, 120_000.0);
    assert_eq!(t.elapsed_ms, 0.0);
}

#[test]
fn hit_while_completed_rearms() {
    let mut t = running(1);
    t.advance(60_000.0);
    assert_eq!(t.click(Some(3)), ClickOutcome::Armed { minutes: 3 });
    assert_eq!(t.phase(), TimerPhase::Running);
}

#[test]
fn miss_while_running_is_ignored() {
    let mut t = running(10);
    t.advance(1_000.0);
    let before = t;
    assert_eq!(t.click(None), ClickOutcome::Ignored);
    assert_eq!(t, before);
}

#[test]
fn miss_while_idle_is_ignored() {
    let mut t = TimerState::default();
    assert_eq!(t.click(None), ClickOutcome::Ignored);
    assert_eq!(t, TimerState::default());
}

#[test]
fn miss_while_completed_resets() {
    let mut t = running(1);
    t.advance(60_000.0);
    assert_eq!(t.click(None), ClickOutcome::Reset);
    assert_eq!(t.phase(), TimerPhase::Idle);
    assert_eq!(t.limit_ms, 0.0);
    assert_eq!(t.wedge_angle(), None);
}

// --- wedge guard ---

#[test]
fn started_with_zero_limit_draws_no_wedge() {
    let t = TimerState { started: true, elapsed_ms: 0.0, limit_ms: 0.0 };
    assert_eq!(t.phase(), TimerPhase::Idle);
    assert_eq!(t.wedge_angle(), None);
}
