//! Wall-clock sources.
//!
//! The countdown never reads the clock; only work-hours checks and reminder
//! timestamps do. Tests swap in a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Local hour of day, `0..=23`.
    fn current_hour(&self) -> u8 {
        self.now().hour() as u8
    }
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Settable clock. Clones share the same instant, so a test can keep one
/// handle and move another into the code under test.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Clock set to the given local wall time.
    pub fn at(naive: NaiveDateTime) -> Self {
        Self::new(to_local(naive))
    }

    /// Clock set to `hour:00` on a fixed date.
    pub fn at_hour(hour: u8) -> Self {
        Self::at(fixed_date_at(hour))
    }

    pub fn set(&self, now: DateTime<Local>) {
        self.now.set(now);
    }

    pub fn set_hour(&self, hour: u8) {
        self.now.set(to_local(fixed_date_at(hour)));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

fn fixed_date_at(hour: u8) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(u32::from(hour.min(23)), 0, 0))
        .unwrap_or_default()
}

fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}
