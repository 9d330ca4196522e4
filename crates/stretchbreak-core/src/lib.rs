//! # Stretchbreak Core Library
//!
//! This library provides the core logic for the Stretchbreak break reminder.
//! The CLI binary is a thin shell over the same library, so everything it
//! can do is available to other front ends too.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A tick-counting countdown state machine. The caller
//!   invokes `tick()` once per second while the engine is running; nothing
//!   in the engine reads the wall clock.
//! - **Work Hours**: A pure hour-window policy, overnight windows included.
//! - **Reminder**: Orchestrates the engine, work-hours supervision, exercise
//!   selection and prompt resolution (snooze, skip, dismiss).
//! - **Driver**: The tokio loop that owns the one-second ticker and the
//!   minute-cadence supervisor.
//! - **Storage**: TOML configuration with change notification.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`Reminder`]: Reminder orchestrator
//! - [`ExerciseCatalog`]: Exercise library and random selection
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod driver;
pub mod error;
pub mod events;
pub mod exercise;
pub mod reminder;
pub mod storage;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{Command, Driver};
pub use error::{CommandError, ConfigError, CoreError, ValidationError};
pub use events::{Event, EventBus, EventKind, Subscription};
pub use exercise::{Category, Difficulty, Exercise, ExerciseCatalog, ExerciseQuery};
pub use reminder::{Notifier, PauseReason, Reminder, ReminderSession, Resolution, Tray};
pub use storage::{Config, SettingsStore};
pub use timer::{is_within_work_hours, TimerEngine, TimerState, WorkHoursWindow};
