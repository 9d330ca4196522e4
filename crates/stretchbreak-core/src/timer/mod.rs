mod engine;
mod work_hours;

pub use engine::{TimerEngine, TimerState, DEFAULT_INTERVAL_MS, TICK_MS};
pub use work_hours::{is_within_work_hours, WorkHoursWindow, MAX_HOUR};
