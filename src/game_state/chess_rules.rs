//! Canonical rule constants.
//!
//! Starting layout, clock budget and tick cadence, the trophy award for a
//! win, and the remaining-time thresholds the display uses for urgency.

/// Standard starting position as a FEN piece-placement field. The first
/// rank group is row 0 (Black's back rank).
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Per-side time budget in seconds (ten minutes).
pub const DEFAULT_TIME_BUDGET_SECS: u32 = 10 * 60;

/// Host tick cadence for the running clock.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Trophies credited to the authenticated user for a win.
pub const DEFAULT_TROPHY_AWARD: u32 = 15;

/// Remaining time at or below which the running clock shows a warning.
pub const CLOCK_WARNING_SECS: u32 = 180;

/// Remaining time at or below which the running clock is critical.
pub const CLOCK_CRITICAL_SECS: u32 = 60;
