//! Seams to the OS-facing services the orchestrator drives.

use super::ReminderSession;

/// Desktop notification service. At most one reminder is shown at a time.
pub trait Notifier {
    /// Show the break prompt, replacing any prompt still on screen.
    fn show_reminder(&mut self, session: &ReminderSession, message: &str);

    /// Remove the prompt, if any.
    fn close(&mut self);
}

/// Tray icon surface.
pub trait Tray {
    fn set_tooltip(&mut self, text: &str);
}

#[derive(Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn show_reminder(&mut self, _session: &ReminderSession, _message: &str) {}
    fn close(&mut self) {}
}

#[derive(Debug, Default)]
pub struct NoopTray;

impl Tray for NoopTray {
    fn set_tooltip(&mut self, _text: &str) {}
}
