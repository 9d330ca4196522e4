//! End-to-end reminder scenarios through the public API.
//!
//! A manual clock stands in for the wall clock; the countdown is advanced by
//! calling `tick()` directly, or by the driver under paused tokio time.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use stretchbreak_core::driver::Command;
use stretchbreak_core::{
    Config, Driver, Event, EventKind, ExerciseCatalog, ManualClock, PauseReason, Reminder,
    SettingsStore, TimerState,
};
use tokio::sync::mpsc;

// ============================================================================
// Test Helpers
// ============================================================================

fn record(reminder: &mut Reminder, kind: EventKind) -> Rc<RefCell<Vec<Event>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    reminder.subscribe(kind, move |e| sink.borrow_mut().push(e.clone()));
    events
}

fn advance(reminder: &mut Reminder, seconds: u64) {
    for _ in 0..seconds {
        reminder.tick();
    }
}

fn due_ids(events: &Rc<RefCell<Vec<Event>>>) -> Vec<String> {
    events
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::ReminderDue { exercise_id, .. } => Some(exercise_id.clone()),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn workday_cycle() {
    let clock = ManualClock::at_hour(8);
    let mut reminder = Reminder::new(Config::default(), clock.clone()).with_seed(7);
    let due = record(&mut reminder, EventKind::ReminderDue);
    let hours = record(&mut reminder, EventKind::WorkHoursChanged);

    // Before work: nothing armed.
    reminder.check_work_hours();
    assert_eq!(reminder.state(), TimerState::Idle);
    assert_eq!(reminder.status_line(), "Outside work hours - timer paused");

    // Morning: armed with the full interval.
    clock.set_hour(9);
    reminder.check_work_hours();
    assert!(reminder.is_running());
    assert_eq!(reminder.remaining_ms(), 30 * 60_000);

    advance(&mut reminder, 30 * 60);
    assert!(reminder.session().is_some());
    assert_eq!(due_ids(&due).len(), 1);

    // Snooze gives a short countdown, then another, different suggestion.
    reminder.snooze(5);
    assert_eq!(reminder.remaining_ms(), 5 * 60_000);
    advance(&mut reminder, 5 * 60);
    let ids = due_ids(&due);
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    // Skip restores the configured interval.
    reminder.skip();
    assert_eq!(reminder.interval_ms(), 30 * 60_000);
    advance(&mut reminder, 10);

    // Evening: countdown frozen until the next morning.
    clock.set_hour(17);
    reminder.check_work_hours();
    assert_eq!(reminder.paused_by(), Some(PauseReason::WorkHours));
    let frozen = reminder.remaining_ms();
    assert_eq!(frozen, 30 * 60_000 - 10_000);
    advance(&mut reminder, 600);
    assert_eq!(reminder.remaining_ms(), frozen);

    clock.set_hour(9);
    reminder.check_work_hours();
    assert!(reminder.is_running());
    assert_eq!(reminder.remaining_ms(), frozen);

    let transitions: Vec<bool> = hours
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::WorkHoursChanged { is_within } => Some(*is_within),
            _ => None,
        })
        .collect();
    assert_eq!(transitions, vec![false, true, false, true]);
}

#[test]
fn custom_catalog_alternates() {
    let catalog = ExerciseCatalog::from_toml_str(
        r#"
        [[exercise]]
        id = "roll"
        name = "Neck roll"
        description = "Slow circles."
        duration = "20 seconds"
        category = "neck"
        difficulty = "easy"
        instructions = ["Drop your chin", "Roll slowly"]

        [[exercise]]
        id = "shrug"
        name = "Shoulder shrug"
        description = "Lift and drop."
        duration = "10 reps"
        category = "shoulders"
        difficulty = "easy"
        instructions = ["Lift", "Drop"]
        "#,
    )
    .unwrap();

    let settings = Config {
        interval_minutes: 1,
        ..Config::default()
    };
    let mut reminder = Reminder::new(settings, ManualClock::at_hour(11))
        .with_catalog(catalog)
        .with_seed(1);
    let due = record(&mut reminder, EventKind::ReminderDue);

    reminder.start();
    for _ in 0..4 {
        advance(&mut reminder, 60);
        reminder.dismiss();
    }

    let ids = due_ids(&due);
    assert_eq!(ids.len(), 4);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(ids[0], ids[2]);
    assert_eq!(ids[1], ids[3]);
}

#[test]
fn unsubscribed_handler_stops_receiving() {
    let mut reminder = Reminder::new(Config::default(), ManualClock::at_hour(10));
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let subscription = reminder.subscribe(EventKind::Tick, move |_| *sink.borrow_mut() += 1);

    reminder.start();
    advance(&mut reminder, 3);
    assert!(reminder.unsubscribe(subscription));
    advance(&mut reminder, 3);
    assert_eq!(*count.borrow(), 3);
    assert!(!reminder.unsubscribe(subscription));
}

#[tokio::test(start_paused = true)]
async fn driver_persists_settings_and_fires() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let store = SettingsStore::open_at(&path).unwrap();

    let mut reminder = Reminder::new(store.settings(), ManualClock::at_hour(10)).with_seed(5);
    let due = record(&mut reminder, EventKind::ReminderDue);
    let driver = Driver::new(reminder, store);

    let (tx, rx) = mpsc::channel(8);
    let control = async move {
        tx.send(Command::SetInterval(2)).await.unwrap();
        tx.send(Command::Skip).await.unwrap();
        tokio::time::sleep(Duration::from_millis(120_500)).await;
        tx.send(Command::Quit).await.unwrap();
    };
    let (reminder, ()) = tokio::join!(driver.run(rx), control);

    assert!(reminder.session().is_some());
    assert_eq!(reminder.state(), TimerState::Idle);
    assert_eq!(due_ids(&due).len(), 1);

    let reopened = SettingsStore::open_at(&path).unwrap();
    assert_eq!(reopened.settings().interval_minutes, 2);
}
