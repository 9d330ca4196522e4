//! Timer engine implementation.
//!
//! The timer engine is a tick-counting state machine. It does not use
//! internal threads or read the wall clock: the caller invokes `tick()` once
//! per second and every tick removes exactly one second from the countdown,
//! however late it arrives.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> (complete) -> Idle
//! ```
//!
//! Completion is not a resting state. The tick that reaches zero yields
//! `Complete`, stops the engine and restores the full interval.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(30 * 60 * 1000);
//! engine.start();
//! // Once per second:
//! for event in engine.tick() { /* Tick, then maybe Complete */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::work_hours::WorkHoursWindow;
use crate::events::Event;

/// Length of one tick in milliseconds.
pub const TICK_MS: u64 = 1000;

/// Interval used when nothing is configured (30 minutes).
pub const DEFAULT_INTERVAL_MS: u64 = 30 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Core timer engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    interval_ms: u64,
    /// Remaining time in milliseconds for the current countdown.
    remaining_ms: u64,
    state: TimerState,
    /// Cached copy of the configured window for local queries.
    #[serde(default)]
    work_hours: WorkHoursWindow,
    #[serde(default)]
    completed_cycles: u64,
}

impl TimerEngine {
    /// Create an idle engine. Intervals shorter than one tick are raised to
    /// one tick.
    pub fn new(interval_ms: u64) -> Self {
        let interval_ms = clamp_interval(interval_ms);
        Self {
            interval_ms,
            remaining_ms: interval_ms,
            state: TimerState::Idle,
            work_hours: WorkHoursWindow::default(),
            completed_cycles: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// True once the current countdown has consumed at least one tick.
    pub fn has_progressed(&self) -> bool {
        self.remaining_ms < self.interval_ms
    }

    /// Number of countdowns that ran to completion.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    pub fn work_hours(&self) -> WorkHoursWindow {
        self.work_hours
    }

    pub fn is_within_work_hours_at(&self, hour: u8) -> bool {
        self.work_hours.contains(hour)
    }

    /// Build a state snapshot event.
    pub fn snapshot(&self, is_within_work_hours: bool, reminder_pending: bool) -> Event {
        Event::StateSnapshot {
            state: self.state,
            remaining_ms: self.remaining_ms,
            interval_ms: self.interval_ms,
            is_within_work_hours,
            reminder_pending,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle | TimerState::Paused => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    remaining_ms: self.remaining_ms,
                    interval_ms: self.interval_ms,
                    at: Utc::now(),
                })
            }
            TimerState::Running => None, // Already running.
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_ms: self.remaining_ms,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Same as [`start`](Self::start), including on a never-started engine.
    pub fn resume(&mut self) -> Option<Event> {
        self.start()
    }

    /// Refill the countdown. A running engine keeps running; a paused one
    /// becomes idle. Always yields a tick carrying the refilled value.
    pub fn reset(&mut self) -> Event {
        self.remaining_ms = self.interval_ms;
        if self.state == TimerState::Paused {
            self.state = TimerState::Idle;
        }
        Event::Tick {
            remaining_ms: self.remaining_ms,
        }
    }

    /// Change the interval. A stopped engine picks it up immediately; a
    /// running countdown is left alone until the next reset.
    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = clamp_interval(interval_ms);
        if !self.is_running() {
            self.remaining_ms = self.interval_ms;
            self.state = TimerState::Idle;
        }
    }

    pub fn set_work_hours(&mut self, window: WorkHoursWindow) {
        self.work_hours = window;
    }

    /// Advance by one tick. Returns nothing while stopped, otherwise a
    /// `Tick` followed by `Complete` when the countdown ran out.
    pub fn tick(&mut self) -> Vec<Event> {
        if !self.is_running() {
            return Vec::new();
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(TICK_MS);
        let mut events = vec![Event::Tick {
            remaining_ms: self.remaining_ms,
        }];

        if self.remaining_ms == 0 {
            self.state = TimerState::Idle;
            self.remaining_ms = self.interval_ms;
            self.completed_cycles += 1;
            events.push(Event::Complete { at: Utc::now() });
        }
        events
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

fn clamp_interval(interval_ms: u64) -> u64 {
    interval_ms.max(TICK_MS)
}
