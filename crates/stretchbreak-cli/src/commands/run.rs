//! Foreground reminder loop.
//!
//! Events go to stdout as one JSON object per line. Commands are read from
//! stdin, one per line (`pause`, `snooze 10`, `hours 8 16`, ...). Logs and
//! the break prompt itself go to stderr.

use clap::Args;
use stretchbreak_core::driver::Command;
use stretchbreak_core::{
    Driver, ExerciseCatalog, Notifier, Reminder, ReminderSession, SettingsStore, SystemClock, Tray,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Args)]
pub struct RunArgs {
    /// Seed for exercise selection
    #[arg(long)]
    seed: Option<u64>,
}

/// Prints break prompts to stderr.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show_reminder(&mut self, session: &ReminderSession, message: &str) {
        let exercise = &session.exercise;
        eprintln!();
        eprintln!("== {message} ==");
        eprintln!("{} ({}): {}", exercise.name, exercise.duration, exercise.description);
        for (i, step) in exercise.instructions.iter().enumerate() {
            eprintln!("  {}. {step}", i + 1);
        }
        eprintln!("Type 'snooze [minutes]', 'skip' or 'dismiss'.");
    }

    fn close(&mut self) {
        debug!("reminder prompt closed");
    }
}

/// Logs tooltip changes.
#[derive(Default)]
struct TerminalTray {
    last: String,
}

impl Tray for TerminalTray {
    fn set_tooltip(&mut self, text: &str) {
        if self.last != text {
            info!(tooltip = text, "status");
            self.last = text.to_string();
        }
    }
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::open()?;
    let settings = store.settings();
    let catalog = match &settings.exercise_catalog {
        Some(path) => ExerciseCatalog::load(path)?,
        None => ExerciseCatalog::builtin(),
    };

    let mut reminder = Reminder::new(settings, SystemClock)
        .with_catalog(catalog)
        .with_notifier(TerminalNotifier)
        .with_tray(TerminalTray::default());
    if let Some(seed) = args.seed {
        reminder = reminder.with_seed(seed);
    }
    reminder.subscribe_all(|event| match serde_json::to_string(event) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!("failed to encode event: {e}"),
    });
    reminder.publish_snapshot();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(read_commands(tx.clone()));
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(Command::Quit).await;
            }
        });

        Driver::new(reminder, store).run(rx).await;
    });
    Ok(())
}

async fn read_commands(tx: mpsc::Sender<Command>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => continue,
            Ok(Some(line)) => match line.parse::<Command>() {
                Ok(command) => {
                    if tx.send(command).await.is_err() {
                        break;
                    }
                }
                Err(e) => warn!("{e}"),
            },
            Ok(None) => {
                // stdin closed; keep running until ctrl-c
                debug!("stdin closed");
                break;
            }
            Err(e) => {
                warn!("failed to read command: {e}");
                break;
            }
        }
    }
}
