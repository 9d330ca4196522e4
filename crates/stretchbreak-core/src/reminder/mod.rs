//! Reminder orchestration.
//!
//! [`Reminder`] owns the single [`TimerEngine`] of the process and turns its
//! completions into break prompts. It also runs the work-hours supervision
//! that pauses the countdown in the evening and re-arms it in the morning.
//!
//! ## Re-arming
//!
//! ```text
//! complete -> prompt pending -> snooze(n)  -> countdown of n minutes
//!                            -> skip       -> countdown of the configured interval
//!                            -> dismiss    -> countdown of the configured interval
//! ```
//!
//! All three reuse the same engine (reset + start), so there is never more
//! than one countdown.

mod collaborators;

pub use collaborators::{NoopNotifier, NoopTray, Notifier, Tray};

use chrono::{DateTime, Local, Utc};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::events::{Event, EventBus, EventKind, Subscription};
use crate::exercise::{Exercise, ExerciseCatalog, ExerciseQuery};
use crate::storage::Config;
use crate::timer::{TimerEngine, TimerState};

/// A pending break prompt. Lives until snoozed, skipped or dismissed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderSession {
    pub exercise: Exercise,
    pub fired_at: DateTime<Local>,
}

/// How a break prompt was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Snoozed { minutes: u32 },
    Skipped,
    Dismissed,
}

/// Who paused the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseReason {
    User,
    /// Work hours ended or reminders were disabled.
    WorkHours,
}

pub struct Reminder {
    engine: TimerEngine,
    bus: EventBus,
    clock: Box<dyn Clock>,
    catalog: ExerciseCatalog,
    rng: Mcg128Xsl64,
    notifier: Box<dyn Notifier>,
    tray: Box<dyn Tray>,
    settings: Config,
    session: Option<ReminderSession>,
    last_exercise: Option<Exercise>,
    paused_by: Option<PauseReason>,
    /// Result of the previous supervision pass.
    last_within: Option<bool>,
}

impl Reminder {
    pub fn new(settings: Config, clock: impl Clock + 'static) -> Self {
        let mut engine = TimerEngine::new(settings.interval_ms());
        engine.set_work_hours(settings.work_hours());
        Self {
            engine,
            bus: EventBus::new(),
            clock: Box::new(clock),
            catalog: ExerciseCatalog::builtin(),
            rng: Mcg128Xsl64::from_entropy(),
            notifier: Box::new(NoopNotifier),
            tray: Box::new(NoopTray),
            settings,
            session: None,
            last_exercise: None,
            paused_by: None,
            last_within: None,
        }
    }

    pub fn with_catalog(mut self, catalog: ExerciseCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_tray(mut self, tray: impl Tray + 'static) -> Self {
        self.tray = Box::new(tray);
        self
    }

    /// Make exercise selection reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mcg128Xsl64::seed_from_u64(seed);
        self
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> Subscription
    where
        F: FnMut(&Event) + 'static,
    {
        self.bus.subscribe(kind, handler)
    }

    pub fn subscribe_all<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&Event) + 'static,
    {
        self.bus.subscribe_all(handler)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.bus.unsubscribe(subscription)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.engine.state()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn remaining_ms(&self) -> u64 {
        self.engine.remaining_ms()
    }

    pub fn interval_ms(&self) -> u64 {
        self.engine.interval_ms()
    }

    pub fn is_within_work_hours(&self) -> bool {
        self.engine.is_within_work_hours_at(self.clock.current_hour())
    }

    pub fn session(&self) -> Option<&ReminderSession> {
        self.session.as_ref()
    }

    pub fn paused_by(&self) -> Option<PauseReason> {
        self.paused_by
    }

    pub fn settings(&self) -> &Config {
        &self.settings
    }

    pub fn snapshot(&self) -> Event {
        self.engine
            .snapshot(self.is_within_work_hours(), self.session.is_some())
    }

    /// Tray tooltip text for the current state.
    pub fn status_line(&self) -> String {
        if !self.settings.enabled {
            "Reminders disabled".to_string()
        } else if !self.is_within_work_hours() {
            "Outside work hours - timer paused".to_string()
        } else {
            let minutes = self.engine.remaining_ms().div_ceil(60_000);
            format!("Next break in {minutes} min")
        }
    }

    // ── User commands ────────────────────────────────────────────────

    pub fn start(&mut self) {
        if let Some(event) = self.engine.start() {
            info!(remaining_ms = self.engine.remaining_ms(), "timer started");
            self.publish(event);
        }
        self.paused_by = None;
        self.refresh_tray();
    }

    pub fn resume(&mut self) {
        self.start();
    }

    /// User pause. Taking over a work-hours pause makes it a user pause, so
    /// supervision will no longer resume it.
    pub fn pause(&mut self) {
        match self.engine.pause() {
            Some(event) => {
                info!(remaining_ms = self.engine.remaining_ms(), "timer paused by user");
                self.paused_by = Some(PauseReason::User);
                self.publish(event);
            }
            None if self.paused_by == Some(PauseReason::WorkHours) => {
                self.paused_by = Some(PauseReason::User);
            }
            None => {}
        }
    }

    pub fn reset(&mut self) {
        let event = self.engine.reset();
        if !self.engine.is_running() {
            self.paused_by = None;
        }
        self.publish(event);
        self.refresh_tray();
    }

    /// Push the prompt back by `minutes` (at least 1).
    pub fn snooze(&mut self, minutes: u32) {
        let minutes = minutes.max(1);
        info!(minutes, "reminder snoozed");
        self.engine.set_interval(u64::from(minutes) * 60_000);
        self.resolve(Resolution::Snoozed { minutes });
        self.rearm();
    }

    /// Drop the prompt and start a full configured interval.
    pub fn skip(&mut self) {
        info!("reminder skipped");
        self.engine.set_interval(self.settings.interval_ms());
        self.resolve(Resolution::Skipped);
        self.rearm();
    }

    /// Close the prompt. Re-arms like [`skip`](Self::skip).
    pub fn dismiss(&mut self) {
        info!("reminder dismissed");
        self.engine.set_interval(self.settings.interval_ms());
        self.resolve(Resolution::Dismissed);
        self.rearm();
    }

    /// Publish a state snapshot to subscribers.
    pub fn publish_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.publish(snapshot);
    }

    // ── Driven by the runtime ────────────────────────────────────────

    /// One second elapsed.
    pub fn tick(&mut self) {
        let events = self.engine.tick();
        if events.is_empty() {
            return;
        }
        for event in events {
            let completed = matches!(event, Event::Complete { .. });
            self.publish(event);
            if completed {
                self.on_complete();
            }
        }
        self.refresh_tray();
    }

    /// Periodic work-hours supervision.
    ///
    /// Leaving work hours pauses a countdown that has started consuming
    /// time. Entering work hours resumes a countdown this method paused, or
    /// arms an idle one, dismissing a prompt left over from the previous
    /// day. A user pause is left alone.
    pub fn check_work_hours(&mut self) {
        if !self.settings.enabled {
            return;
        }
        let within = self.is_within_work_hours();
        let previous = self.last_within.replace(within);
        let changed = previous != Some(within);

        if !within {
            if self.engine.is_running() && self.engine.has_progressed() {
                self.pause_for_policy();
                self.publish(Event::WorkHoursChanged { is_within: false });
            } else if changed {
                self.publish(Event::WorkHoursChanged { is_within: false });
            }
        } else if changed {
            match self.paused_by {
                Some(PauseReason::WorkHours) => {
                    info!("work hours resumed, continuing countdown");
                    self.start();
                }
                Some(PauseReason::User) => {
                    debug!("work hours resumed, leaving user pause in place");
                }
                None if self.engine.state() == TimerState::Idle => {
                    if self.session.is_some() {
                        info!("dismissing unanswered reminder");
                        self.resolve(Resolution::Dismissed);
                    }
                    info!("work hours resumed, arming timer");
                    self.rearm();
                }
                None => {}
            }
            self.publish(Event::WorkHoursChanged { is_within: true });
        }
        self.refresh_tray();
    }

    /// React to new settings.
    pub fn apply_settings(&mut self, settings: &Config) {
        let old = std::mem::replace(&mut self.settings, settings.clone());

        if old.interval_minutes != settings.interval_minutes {
            self.engine.set_interval(settings.interval_ms());
            if self.engine.state() == TimerState::Idle {
                // A paused engine is now idle; only a user pause survives that.
                if self.paused_by == Some(PauseReason::WorkHours) {
                    self.paused_by = None;
                }
                let refreshed = Event::Tick {
                    remaining_ms: self.engine.remaining_ms(),
                };
                self.publish(refreshed);
            }
        }

        let hours_changed = old.work_hours() != settings.work_hours();
        if hours_changed {
            self.engine.set_work_hours(settings.work_hours());
        }

        if old.enabled && !settings.enabled {
            info!("reminders disabled");
            self.pause_for_policy();
        }
        let enabled_now = !old.enabled && settings.enabled;
        if enabled_now {
            info!("reminders enabled");
            self.last_within = None;
        }

        if hours_changed || enabled_now {
            self.check_work_hours();
        }
        self.refresh_tray();
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn publish(&mut self, event: Event) {
        self.bus.publish(&event);
    }

    fn refresh_tray(&mut self) {
        let line = self.status_line();
        self.tray.set_tooltip(&line);
    }

    fn pause_for_policy(&mut self) {
        if let Some(event) = self.engine.pause() {
            info!(remaining_ms = self.engine.remaining_ms(), "timer paused outside work hours");
            self.paused_by = Some(PauseReason::WorkHours);
            self.publish(event);
        }
    }

    /// Refill and start the one engine.
    fn rearm(&mut self) {
        let tick = self.engine.reset();
        self.publish(tick);
        self.start();
    }

    fn resolve(&mut self, resolution: Resolution) {
        if self.session.take().is_some() {
            self.notifier.close();
            self.publish(Event::ReminderResolved {
                resolution,
                at: Utc::now(),
            });
        }
    }

    fn on_complete(&mut self) {
        let query = self
            .last_exercise
            .as_ref()
            .map(ExerciseQuery::after)
            .unwrap_or_default()
            .with_difficulty(self.settings.preferred_difficulty);
        let exercise = self.catalog.random_exercise(&mut self.rng, &query).clone();

        let session = ReminderSession {
            exercise: exercise.clone(),
            fired_at: self.clock.now(),
        };
        info!(exercise = %exercise.id, "break reminder due");
        self.notifier
            .show_reminder(&session, &self.settings.custom_message);
        self.publish(Event::ReminderDue {
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            category: exercise.category,
            message: self.settings.custom_message.clone(),
            fired_at: session.fired_at,
        });
        self.last_exercise = Some(exercise);
        self.session = Some(session);
    }
}

impl std::fmt::Debug for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reminder")
            .field("engine", &self.engine)
            .field("session", &self.session)
            .field("paused_by", &self.paused_by)
            .field("last_within", &self.last_within)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        shown: Rc<RefCell<Vec<String>>>,
        closed: Rc<RefCell<usize>>,
        tooltip: Rc<RefCell<String>>,
    }

    impl Notifier for Recorder {
        fn show_reminder(&mut self, session: &ReminderSession, _message: &str) {
            self.shown.borrow_mut().push(session.exercise.id.clone());
        }
        fn close(&mut self) {
            *self.closed.borrow_mut() += 1;
        }
    }

    impl Tray for Recorder {
        fn set_tooltip(&mut self, text: &str) {
            *self.tooltip.borrow_mut() = text.to_string();
        }
    }

    fn one_minute() -> Config {
        Config {
            interval_minutes: 1,
            ..Config::default()
        }
    }

    fn reminder_at(hour: u8, settings: Config) -> (Reminder, ManualClock, Recorder) {
        let clock = ManualClock::at_hour(hour);
        let recorder = Recorder::default();
        let reminder = Reminder::new(settings, clock.clone())
            .with_seed(42)
            .with_notifier(recorder.clone())
            .with_tray(recorder.clone());
        (reminder, clock, recorder)
    }

    fn record_events(reminder: &mut Reminder) -> Rc<RefCell<Vec<Event>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        reminder.subscribe_all(move |e| sink.borrow_mut().push(e.clone()));
        events
    }

    fn advance(reminder: &mut Reminder, seconds: u64) {
        for _ in 0..seconds {
            reminder.tick();
        }
    }

    #[test]
    fn completion_opens_session() {
        let (mut reminder, _clock, recorder) = reminder_at(10, one_minute());
        let events = record_events(&mut reminder);
        reminder.start();
        advance(&mut reminder, 60);

        let session = reminder.session().expect("session after completion");
        assert_eq!(recorder.shown.borrow().as_slice(), [session.exercise.id.clone()]);
        assert_eq!(reminder.state(), TimerState::Idle);
        assert_eq!(reminder.remaining_ms(), 60_000);

        let kinds: Vec<EventKind> = events.borrow().iter().map(Event::kind).collect();
        let complete = kinds.iter().position(|k| *k == EventKind::Complete).unwrap();
        assert_eq!(kinds[complete + 1], EventKind::ReminderDue);
        assert_eq!(kinds.iter().filter(|k| **k == EventKind::Tick).count(), 60);
    }

    #[test]
    fn double_snooze_keeps_one_countdown() {
        let (mut reminder, _clock, _rec) = reminder_at(10, one_minute());
        reminder.start();
        advance(&mut reminder, 60);

        reminder.snooze(5);
        reminder.snooze(5);
        assert!(reminder.is_running());
        assert_eq!(reminder.interval_ms(), 5 * 60_000);

        let events = record_events(&mut reminder);
        advance(&mut reminder, 1);
        assert_eq!(reminder.remaining_ms(), 5 * 60_000 - 1000);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn snooze_resolves_session_once() {
        let (mut reminder, _clock, recorder) = reminder_at(10, one_minute());
        let events = record_events(&mut reminder);
        reminder.start();
        advance(&mut reminder, 60);

        reminder.snooze(10);
        reminder.snooze(0);
        assert!(reminder.session().is_none());
        assert_eq!(*recorder.closed.borrow(), 1);
        assert_eq!(reminder.interval_ms(), 60_000);

        let resolved: Vec<Event> = events
            .borrow()
            .iter()
            .filter(|e| e.kind() == EventKind::ReminderResolved)
            .cloned()
            .collect();
        assert_eq!(resolved.len(), 1);
        assert!(matches!(
            resolved[0],
            Event::ReminderResolved {
                resolution: Resolution::Snoozed { minutes: 10 },
                ..
            }
        ));
    }

    #[test]
    fn skip_restores_configured_interval() {
        let (mut reminder, _clock, _rec) = reminder_at(10, one_minute());
        reminder.start();
        advance(&mut reminder, 60);
        reminder.snooze(2);
        advance(&mut reminder, 120);
        assert!(reminder.session().is_some());

        reminder.skip();
        assert_eq!(reminder.interval_ms(), 60_000);
        assert_eq!(reminder.remaining_ms(), 60_000);
        assert!(reminder.is_running());
        assert!(reminder.session().is_none());
    }

    #[test]
    fn dismiss_rearms() {
        let (mut reminder, _clock, _rec) = reminder_at(10, one_minute());
        reminder.start();
        advance(&mut reminder, 60);
        reminder.dismiss();
        assert!(reminder.session().is_none());
        assert!(reminder.is_running());
        assert_eq!(reminder.remaining_ms(), 60_000);
    }

    #[test]
    fn consecutive_reminders_differ() {
        let (mut reminder, _clock, recorder) = reminder_at(10, one_minute());
        reminder.start();
        for _ in 0..30 {
            advance(&mut reminder, 60);
            reminder.skip();
        }
        let shown = recorder.shown.borrow();
        assert_eq!(shown.len(), 30);
        let catalog = ExerciseCatalog::builtin();
        for pair in shown.windows(2) {
            assert_ne!(pair[0], pair[1]);
            let a = catalog.get(&pair[0]).unwrap().category;
            let b = catalog.get(&pair[1]).unwrap().category;
            assert_ne!(a, b);
        }
    }

    #[test]
    fn preferred_difficulty_is_honoured() {
        let settings = Config {
            preferred_difficulty: Some(crate::exercise::Difficulty::Medium),
            ..one_minute()
        };
        let (mut reminder, _clock, _rec) = reminder_at(10, settings);
        reminder.start();
        for _ in 0..5 {
            advance(&mut reminder, 60);
            let session = reminder.session().unwrap();
            assert_eq!(
                session.exercise.difficulty,
                crate::exercise::Difficulty::Medium
            );
            reminder.skip();
        }
    }

    #[test]
    fn reset_emits_refreshed_tick() {
        let (mut reminder, _clock, _rec) = reminder_at(10, one_minute());
        reminder.start();
        advance(&mut reminder, 10);
        reminder.pause();

        let events = record_events(&mut reminder);
        reminder.reset();
        assert_eq!(*events.borrow(), vec![Event::Tick { remaining_ms: 60_000 }]);
        assert_eq!(reminder.state(), TimerState::Idle);
        assert_eq!(reminder.paused_by(), None);
    }

    #[test]
    fn leaving_work_hours_pauses_progressed_countdown() {
        let (mut reminder, clock, _rec) = reminder_at(16, Config::default());
        reminder.start();
        advance(&mut reminder, 5);

        let events = record_events(&mut reminder);
        clock.set_hour(17);
        reminder.check_work_hours();

        assert_eq!(reminder.state(), TimerState::Paused);
        assert_eq!(reminder.paused_by(), Some(PauseReason::WorkHours));
        assert!(events
            .borrow()
            .contains(&Event::WorkHoursChanged { is_within: false }));

        let remaining = reminder.remaining_ms();
        advance(&mut reminder, 30);
        assert_eq!(reminder.remaining_ms(), remaining);

        clock.set_hour(9);
        reminder.check_work_hours();
        assert!(reminder.is_running());
        assert_eq!(reminder.remaining_ms(), remaining);
        assert!(events
            .borrow()
            .contains(&Event::WorkHoursChanged { is_within: true }));
    }

    #[test]
    fn fresh_running_countdown_is_not_paused() {
        let (mut reminder, clock, _rec) = reminder_at(20, Config::default());
        reminder.start();
        clock.set_hour(21);
        reminder.check_work_hours();
        assert!(reminder.is_running());
    }

    #[test]
    fn user_pause_survives_supervision() {
        let (mut reminder, clock, _rec) = reminder_at(16, Config::default());
        reminder.start();
        advance(&mut reminder, 5);
        reminder.pause();

        clock.set_hour(18);
        reminder.check_work_hours();
        clock.set_hour(9);
        reminder.check_work_hours();

        assert_eq!(reminder.state(), TimerState::Paused);
        assert_eq!(reminder.paused_by(), Some(PauseReason::User));
    }

    #[test]
    fn user_pause_takes_over_policy_pause() {
        let (mut reminder, clock, _rec) = reminder_at(16, Config::default());
        reminder.start();
        advance(&mut reminder, 5);
        clock.set_hour(18);
        reminder.check_work_hours();
        reminder.pause();

        clock.set_hour(10);
        reminder.check_work_hours();
        assert_eq!(reminder.state(), TimerState::Paused);
    }

    #[test]
    fn entering_work_hours_arms_idle_timer() {
        let (mut reminder, clock, _rec) = reminder_at(7, Config::default());
        reminder.check_work_hours();
        assert_eq!(reminder.state(), TimerState::Idle);

        clock.set_hour(9);
        reminder.check_work_hours();
        assert!(reminder.is_running());
        assert_eq!(reminder.remaining_ms(), reminder.interval_ms());
    }

    #[test]
    fn overnight_prompt_is_dismissed_next_morning() {
        let (mut reminder, clock, recorder) = reminder_at(16, one_minute());
        reminder.start();
        advance(&mut reminder, 60);
        assert!(reminder.session().is_some());

        let events = record_events(&mut reminder);
        clock.set_hour(20);
        reminder.check_work_hours();
        clock.set_hour(9);
        reminder.check_work_hours();

        assert!(reminder.is_running());
        assert!(reminder.session().is_none());
        assert_eq!(*recorder.closed.borrow(), 1);
        assert!(events.borrow().iter().any(|e| matches!(
            e,
            Event::ReminderResolved {
                resolution: Resolution::Dismissed,
                ..
            }
        )));

        // The new day keeps firing.
        advance(&mut reminder, 60);
        assert!(reminder.session().is_some());
        assert_eq!(recorder.shown.borrow().len(), 2);
    }

    #[test]
    fn pending_prompt_within_hours_is_not_dismissed() {
        let (mut reminder, _clock, _rec) = reminder_at(10, one_minute());
        reminder.check_work_hours();
        advance(&mut reminder, 60);
        reminder.check_work_hours();
        assert_eq!(reminder.state(), TimerState::Idle);
        assert!(reminder.session().is_some());
    }

    #[test]
    fn overnight_window_supervision() {
        let settings = Config {
            work_hours_start: 22,
            work_hours_end: 6,
            ..Config::default()
        };
        let (mut reminder, clock, _rec) = reminder_at(23, settings);
        reminder.check_work_hours();
        assert!(reminder.is_running());
        advance(&mut reminder, 3);

        clock.set_hour(6);
        reminder.check_work_hours();
        assert_eq!(reminder.paused_by(), Some(PauseReason::WorkHours));
    }

    #[test]
    fn empty_window_never_arms() {
        let settings = Config {
            work_hours_start: 12,
            work_hours_end: 12,
            ..Config::default()
        };
        let (mut reminder, _clock, _rec) = reminder_at(12, settings);
        reminder.check_work_hours();
        assert!(!reminder.is_within_work_hours());
        assert_eq!(reminder.state(), TimerState::Idle);
    }

    #[test]
    fn disabled_reminders_skip_supervision() {
        let settings = Config {
            enabled: false,
            ..Config::default()
        };
        let (mut reminder, _clock, _rec) = reminder_at(10, settings);
        reminder.check_work_hours();
        assert_eq!(reminder.state(), TimerState::Idle);
        assert_eq!(reminder.status_line(), "Reminders disabled");
    }

    #[test]
    fn disabling_pauses_and_enabling_resumes() {
        let (mut reminder, _clock, _rec) = reminder_at(10, Config::default());
        reminder.start();
        advance(&mut reminder, 3);

        let mut disabled = reminder.settings().clone();
        disabled.enabled = false;
        reminder.apply_settings(&disabled);
        assert_eq!(reminder.paused_by(), Some(PauseReason::WorkHours));

        let mut enabled = disabled.clone();
        enabled.enabled = true;
        reminder.apply_settings(&enabled);
        assert!(reminder.is_running());
    }

    #[test]
    fn interval_change_applies_to_idle_timer() {
        let (mut reminder, _clock, _rec) = reminder_at(10, Config::default());
        let events = record_events(&mut reminder);
        let mut settings = reminder.settings().clone();
        settings.set_interval_minutes(15);
        reminder.apply_settings(&settings);

        assert_eq!(reminder.interval_ms(), 15 * 60_000);
        assert_eq!(reminder.remaining_ms(), 15 * 60_000);
        assert_eq!(
            events.borrow().first(),
            Some(&Event::Tick { remaining_ms: 15 * 60_000 })
        );
    }

    #[test]
    fn interval_change_waits_for_running_countdown() {
        let (mut reminder, _clock, _rec) = reminder_at(10, Config::default());
        reminder.start();
        advance(&mut reminder, 2);
        let mut settings = reminder.settings().clone();
        settings.set_interval_minutes(10);
        reminder.apply_settings(&settings);

        assert_eq!(reminder.remaining_ms(), 30 * 60_000 - 2000);
        reminder.reset();
        assert_eq!(reminder.remaining_ms(), 10 * 60_000);
    }

    #[test]
    fn interval_change_keeps_user_pause() {
        let (mut reminder, clock, _rec) = reminder_at(16, Config::default());
        reminder.start();
        advance(&mut reminder, 5);
        reminder.pause();

        let mut settings = reminder.settings().clone();
        settings.set_interval_minutes(10);
        reminder.apply_settings(&settings);
        assert_eq!(reminder.state(), TimerState::Idle);
        assert_eq!(reminder.paused_by(), Some(PauseReason::User));

        clock.set_hour(20);
        reminder.check_work_hours();
        clock.set_hour(9);
        reminder.check_work_hours();
        assert_eq!(reminder.state(), TimerState::Idle);
        assert_eq!(reminder.paused_by(), Some(PauseReason::User));

        reminder.start();
        assert!(reminder.is_running());
        assert_eq!(reminder.remaining_ms(), 10 * 60_000);
        assert_eq!(reminder.paused_by(), None);
    }

    #[test]
    fn work_hours_change_rechecks() {
        let (mut reminder, _clock, _rec) = reminder_at(20, Config::default());
        reminder.check_work_hours();
        assert!(!reminder.is_within_work_hours());

        let mut settings = reminder.settings().clone();
        settings.set_work_hours(18, 23);
        reminder.apply_settings(&settings);
        assert!(reminder.is_within_work_hours());
        assert!(reminder.is_running());
    }

    #[test]
    fn status_line_tracks_state() {
        let (mut reminder, clock, recorder) = reminder_at(10, Config::default());
        reminder.start();
        advance(&mut reminder, 1);
        assert_eq!(reminder.status_line(), "Next break in 30 min");
        assert_eq!(*recorder.tooltip.borrow(), "Next break in 30 min");

        advance(&mut reminder, 60);
        assert_eq!(reminder.status_line(), "Next break in 29 min");

        clock.set_hour(19);
        reminder.check_work_hours();
        assert_eq!(*recorder.tooltip.borrow(), "Outside work hours - timer paused");
    }

    #[test]
    fn snapshot_reports_pending_prompt() {
        let (mut reminder, _clock, _rec) = reminder_at(10, one_minute());
        reminder.start();
        advance(&mut reminder, 60);
        match reminder.snapshot() {
            Event::StateSnapshot {
                reminder_pending,
                is_within_work_hours,
                ..
            } => {
                assert!(reminder_pending);
                assert!(is_within_work_hours);
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }
}
