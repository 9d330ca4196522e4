use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::exercise::Category;
use crate::reminder::Resolution;
use crate::timer::TimerState;

/// Every state change in the system produces an Event.
/// The orchestrator publishes them on an [`EventBus`]; UI layers subscribe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        remaining_ms: u64,
        interval_ms: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Emitted once per second while running, and by every reset.
    Tick {
        remaining_ms: u64,
    },
    /// Countdown reached zero. The engine has already stopped and re-armed
    /// its remaining time when this is observed.
    Complete {
        at: DateTime<Utc>,
    },
    WorkHoursChanged {
        is_within: bool,
    },
    /// A break prompt is now pending.
    ReminderDue {
        exercise_id: String,
        exercise_name: String,
        category: Category,
        message: String,
        fired_at: DateTime<Local>,
    },
    ReminderResolved {
        resolution: Resolution,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        remaining_ms: u64,
        interval_ms: u64,
        is_within_work_hours: bool,
        reminder_pending: bool,
        at: DateTime<Utc>,
    },
}

/// Discriminant of [`Event`], used to subscribe to one kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    TimerStarted,
    TimerPaused,
    Tick,
    Complete,
    WorkHoursChanged,
    ReminderDue,
    ReminderResolved,
    StateSnapshot,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::TimerStarted { .. } => EventKind::TimerStarted,
            Event::TimerPaused { .. } => EventKind::TimerPaused,
            Event::Tick { .. } => EventKind::Tick,
            Event::Complete { .. } => EventKind::Complete,
            Event::WorkHoursChanged { .. } => EventKind::WorkHoursChanged,
            Event::ReminderDue { .. } => EventKind::ReminderDue,
            Event::ReminderResolved { .. } => EventKind::ReminderResolved,
            Event::StateSnapshot { .. } => EventKind::StateSnapshot,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler = Box<dyn FnMut(&Event)>;

struct Subscriber {
    id: Subscription,
    kind: Option<EventKind>,
    handler: Handler,
}

/// Publish/subscribe emitter.
///
/// Handlers run synchronously, in registration order. A handler only
/// observes; it cannot reach back into whoever is publishing.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one kind of event.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> Subscription
    where
        F: FnMut(&Event) + 'static,
    {
        self.register(Some(kind), Box::new(handler))
    }

    /// Register a handler for every event.
    pub fn subscribe_all<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&Event) + 'static,
    {
        self.register(None, Box::new(handler))
    }

    /// Remove a handler. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != subscription);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, event: &Event) {
        let kind = event.kind();
        for sub in self.subscribers.iter_mut() {
            if sub.kind.map_or(true, |k| k == kind) {
                (sub.handler)(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    fn register(&mut self, kind: Option<EventKind>, handler: Handler) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber { id, kind, handler });
        id
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
