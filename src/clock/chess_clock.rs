//! Per-side countdown clock.
//!
//! The host drives the clock with explicit wall-clock readings: `tick(now)`
//! charges the running side for every whole second elapsed since its last
//! sample and carries the sub-second remainder forward, so ticking every
//! 100 ms loses nothing and counts nothing twice. Only one side runs at a
//! time; the other side's counter is never touched.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::game_state::chess_rules::{CLOCK_CRITICAL_SECS, CLOCK_WARNING_SECS};
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockUrgency {
    Normal,
    Warning,
    Critical,
}

impl ClockUrgency {
    pub const fn for_remaining(remaining_secs: u32) -> Self {
        if remaining_secs <= CLOCK_CRITICAL_SECS {
            ClockUrgency::Critical
        } else if remaining_secs <= CLOCK_WARNING_SECS {
            ClockUrgency::Warning
        } else {
            ClockUrgency::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessClock {
    budget_secs: u32,
    remaining_secs: [u32; 2],
    running: Option<Color>,
    last_sample: Option<DateTime<Utc>>,
}

impl ChessClock {
    /// Both sides seeded with `budget_secs`, neither running.
    pub fn new(budget_secs: u32) -> Self {
        Self {
            budget_secs,
            remaining_secs: [budget_secs; 2],
            running: None,
            last_sample: None,
        }
    }

    #[inline]
    pub fn budget_secs(&self) -> u32 {
        self.budget_secs
    }

    #[inline]
    pub fn remaining_secs(&self, color: Color) -> u32 {
        self.remaining_secs[color.index()]
    }

    #[inline]
    pub fn running(&self) -> Option<Color> {
        self.running
    }

    /// Start `color`'s clock sampling from `now`. A flagged side never
    /// restarts, and an already running clock is left alone.
    pub fn start(&mut self, color: Color, now: DateTime<Utc>) {
        if self.running.is_some() || self.remaining_secs(color) == 0 {
            return;
        }
        self.running = Some(color);
        self.last_sample = Some(now);
    }

    /// Stop whichever side is running. Any unsettled fraction of a second
    /// is dropped.
    pub fn stop(&mut self) {
        self.running = None;
        self.last_sample = None;
    }

    /// Stop the outgoing side and start `incoming` from `now`.
    pub fn hand_over(&mut self, incoming: Color, now: DateTime<Utc>) {
        self.stop();
        self.start(incoming, now);
    }

    /// Charge elapsed whole seconds to the running side. Returns the side
    /// whose counter reached zero on this tick; that side is stopped.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Color> {
        let (Some(color), Some(last)) = (self.running, self.last_sample) else {
            return None;
        };

        let whole_secs = (now - last).num_milliseconds() / 1000;
        if whole_secs < 1 {
            return None;
        }

        let deduct = u32::try_from(whole_secs).unwrap_or(u32::MAX);
        let slot = &mut self.remaining_secs[color.index()];
        *slot = slot.saturating_sub(deduct);
        self.last_sample = Some(last + TimeDelta::seconds(whole_secs));

        if *slot == 0 {
            self.stop();
            return Some(color);
        }
        None
    }

    pub fn urgency(&self, color: Color) -> ClockUrgency {
        ClockUrgency::for_remaining(self.remaining_secs(color))
    }
}

/// `MM:SS` with zero padding, e.g. `09:05`.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
