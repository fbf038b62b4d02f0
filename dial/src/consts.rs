//! Shared numeric constants for the dial crate.

// ── Logical space ───────────────────────────────────────────────

/// Side length of the square logical drawing space.
pub const LOGICAL_SIZE: f64 = 1000.0;

/// Clock face radius as a fraction of half the logical side.
pub const FACE_RADIUS_RATIO: f64 = 0.9;

/// Gap between the face rim and the outer end of each tick.
pub const TICK_INSET: f64 = 14.0;

// ── Dial ────────────────────────────────────────────────────────

/// Number of ticks drawn around the dial.
pub const TICK_COUNT: u32 = 60;

/// Every Nth tick is a major tick.
pub const MAJOR_TICK_EVERY: u32 = 5;

/// Hub disc radius as a multiple of the hand's line width.
pub const HUB_RADIUS_RATIO: f64 = 1.5;

// ── Timer ───────────────────────────────────────────────────────

/// Duration selected by the marker at 12 o'clock.
pub const MAX_TIMER_MINUTES: u32 = 60;

pub const MS_PER_MINUTE: f64 = 60_000.0;

// ── Input ───────────────────────────────────────────────────────

/// Window in which a second click turns a pending click into a double-click.
pub const CLICK_DEBOUNCE_MS: u32 = 250;
