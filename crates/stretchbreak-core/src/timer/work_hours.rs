//! Work-hours policy.
//!
//! A window is a pair of whole hours. When `start_hour > end_hour` the window
//! spans midnight (e.g. 22 -> 6). The end hour is exclusive, and a window with
//! `start_hour == end_hour` is empty: it never contains any hour.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest valid hour of the day.
pub const MAX_HOUR: u8 = 23;

/// Returns whether `current_hour` falls inside `[start_hour, end_hour)`,
/// wrapping around midnight when `start_hour > end_hour`.
///
/// Performs no clamping; callers pass hours already normalised to `0..=23`.
pub fn is_within_work_hours(start_hour: u8, end_hour: u8, current_hour: u8) -> bool {
    if start_hour <= end_hour {
        current_hour >= start_hour && current_hour < end_hour
    } else {
        current_hour >= start_hour || current_hour < end_hour
    }
}

/// Configured work-hours window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHoursWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl WorkHoursWindow {
    /// Build a window, clamping both hours to `0..=23`.
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour: start_hour.min(MAX_HOUR),
            end_hour: end_hour.min(MAX_HOUR),
        }
    }

    pub fn contains(&self, hour: u8) -> bool {
        is_within_work_hours(self.start_hour, self.end_hour, hour)
    }

    /// True when the window crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.start_hour > self.end_hour
    }

    /// True when no hour is ever inside the window.
    pub fn is_empty(&self) -> bool {
        self.start_hour == self.end_hour
    }

    /// Number of whole hours covered by the window.
    pub fn len_hours(&self) -> u8 {
        if self.is_overnight() {
            24 - self.start_hour + self.end_hour
        } else {
            self.end_hour - self.start_hour
        }
    }
}

impl fmt::Display for WorkHoursWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start_hour, self.end_hour)
    }
}

impl Default for WorkHoursWindow {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_window_has_exclusive_end() {
        assert!(is_within_work_hours(9, 17, 9));
        assert!(is_within_work_hours(9, 17, 16));
        assert!(!is_within_work_hours(9, 17, 17));
        assert!(!is_within_work_hours(9, 17, 8));
    }

    #[test]
    fn overnight_window_wraps() {
        assert!(is_within_work_hours(22, 6, 23));
        assert!(is_within_work_hours(22, 6, 22));
        assert!(is_within_work_hours(22, 6, 0));
        assert!(is_within_work_hours(22, 6, 5));
        assert!(!is_within_work_hours(22, 6, 6));
        assert!(!is_within_work_hours(22, 6, 10));
    }

    #[test]
    fn equal_bounds_never_match() {
        for hour in 0..=MAX_HOUR {
            assert!(!is_within_work_hours(12, 12, hour));
        }
        assert!(WorkHoursWindow::new(0, 0).is_empty());
    }

    #[test]
    fn window_clamps_hours() {
        let window = WorkHoursWindow::new(30, 99);
        assert_eq!(window.start_hour, 23);
        assert_eq!(window.end_hour, 23);
    }

    #[test]
    fn window_length() {
        assert_eq!(WorkHoursWindow::new(9, 17).len_hours(), 8);
        assert_eq!(WorkHoursWindow::new(22, 6).len_hours(), 8);
        assert_eq!(WorkHoursWindow::new(5, 5).len_hours(), 0);
        let covered = (0..=MAX_HOUR)
            .filter(|h| WorkHoursWindow::new(22, 6).contains(*h))
            .count();
        assert_eq!(covered, 8);
    }

    #[test]
    fn default_is_nine_to_five() {
        let window = WorkHoursWindow::default();
        assert_eq!((window.start_hour, window.end_hour), (9, 17));
        assert!(!window.is_overnight());
    }

    #[test]
    fn displays_as_clock_range() {
        assert_eq!(WorkHoursWindow::new(9, 17).to_string(), "09:00-17:00");
        assert_eq!(WorkHoursWindow::new(22, 6).to_string(), "22:00-06:00");
    }
}
