//! Single-threaded runtime loop.
//!
//! The [`Driver`] owns the only one-second ticker in the process. The ticker
//! exists only while the engine is running: it is created with its first
//! tick one full period away and dropped on the loop iteration that stopped
//! the engine, so a pause can never be followed by a stray tick. Re-arming
//! commands (reset, snooze, skip, dismiss) replace it to realign the phase.
//!
//! Everything else (commands, settings changes, the minute supervisor) is
//! multiplexed with `tokio::select!` on the same task.

use std::str::FromStr;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::error::{CommandError, Result};
use crate::reminder::Reminder;
use crate::storage::{Config, SettingsStore};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);
pub const SUPERVISION_PERIOD: Duration = Duration::from_secs(60);

/// Snooze length when neither the command nor the config names one.
pub const DEFAULT_SNOOZE_MINUTES: u32 = 5;

/// Control messages accepted by a running [`Driver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Reset,
    /// `None` uses the first configured snooze choice.
    Snooze(Option<u32>),
    Skip,
    Dismiss,
    Status,
    SetInterval(u32),
    SetWorkHours(u8, u8),
    ToggleEnabled,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a line such as `snooze 10` or `hours 9 17`.
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match name.as_str() {
            "start" => Command::Start,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "reset" => Command::Reset,
            "snooze" => Command::Snooze(words.next().map(|w| number("snooze", w)).transpose()?),
            "skip" => Command::Skip,
            "dismiss" | "close" => Command::Dismiss,
            "status" => Command::Status,
            "interval" => {
                let minutes = words.next().ok_or(CommandError::MissingArgument("interval"))?;
                Command::SetInterval(number("interval", minutes)?)
            }
            "hours" => {
                let start = words.next().ok_or(CommandError::MissingArgument("hours"))?;
                let end = words.next().ok_or(CommandError::MissingArgument("hours"))?;
                Command::SetWorkHours(number("hours", start)?, number("hours", end)?)
            }
            "toggle" | "enable" | "disable" => Command::ToggleEnabled,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };
        Ok(command)
    }
}

fn number<T: FromStr>(command: &'static str, value: &str) -> std::result::Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

pub struct Driver {
    reminder: Reminder,
    settings: SettingsStore,
    settings_rx: watch::Receiver<Config>,
    ticker: Option<Interval>,
}

impl Driver {
    pub fn new(reminder: Reminder, settings: SettingsStore) -> Self {
        let settings_rx = settings.watch();
        Self {
            reminder,
            settings,
            settings_rx,
            ticker: None,
        }
    }

    /// Run until `quit` arrives or every command sender is gone. Returns the
    /// reminder so callers can inspect its final state.
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) -> Reminder {
        info!("reminder loop started");
        let mut supervisor = time::interval(SUPERVISION_PERIOD);
        supervisor.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            self.sync_ticker();
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Quit) | None => break,
                    Some(command) => self.handle(command),
                },
                Ok(()) = self.settings_rx.changed() => self.apply_current_settings(),
                _ = next_tick(&mut self.ticker) => self.reminder.tick(),
                _ = supervisor.tick() => self.reminder.check_work_hours(),
            }
        }

        info!("reminder loop stopped");
        self.reminder
    }

    fn handle(&mut self, command: Command) {
        debug!(?command, "command received");
        match command {
            Command::Start => self.reminder.start(),
            Command::Pause => self.reminder.pause(),
            Command::Resume => self.reminder.resume(),
            Command::Reset => {
                self.reminder.reset();
                self.ticker = None;
            }
            Command::Snooze(minutes) => {
                let minutes = minutes
                    .or_else(|| self.reminder.settings().snooze_minutes.first().copied())
                    .unwrap_or(DEFAULT_SNOOZE_MINUTES);
                self.reminder.snooze(minutes);
                self.ticker = None;
            }
            Command::Skip => {
                self.reminder.skip();
                self.ticker = None;
            }
            Command::Dismiss => {
                self.reminder.dismiss();
                self.ticker = None;
            }
            Command::Status => self.reminder.publish_snapshot(),
            Command::SetInterval(minutes) => {
                let result = self.settings.set_interval_minutes(minutes);
                self.after_settings_change(result);
            }
            Command::SetWorkHours(start, end) => {
                let result = self.settings.set_work_hours(start, end);
                self.after_settings_change(result);
            }
            Command::ToggleEnabled => {
                let result = self.settings.toggle_enabled();
                self.after_settings_change(result);
            }
            Command::Quit => {}
        }
    }

    /// Apply a change made through a command right away, so later queued
    /// commands see it.
    fn after_settings_change(&mut self, result: Result<Config>) {
        match result {
            Ok(_) => self.apply_current_settings(),
            Err(e) => warn!("failed to save settings: {e}"),
        }
    }

    fn apply_current_settings(&mut self) {
        let settings = self.settings_rx.borrow_and_update().clone();
        self.reminder.apply_settings(&settings);
    }

    fn sync_ticker(&mut self) {
        match (self.reminder.is_running(), self.ticker.is_some()) {
            (true, false) => {
                let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.ticker = Some(interval);
            }
            (false, true) => self.ticker = None,
            _ => {}
        }
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
