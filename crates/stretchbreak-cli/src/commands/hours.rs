use chrono::{Local, Timelike};
use clap::Subcommand;
use stretchbreak_core::timer::MAX_HOUR;
use stretchbreak_core::{Config, WorkHoursWindow};

#[derive(Subcommand)]
pub enum HoursAction {
    /// Check whether an hour falls inside the work-hours window
    Check {
        /// Window start (defaults to the configured one)
        #[arg(long)]
        start: Option<u8>,
        /// Window end, exclusive (defaults to the configured one)
        #[arg(long)]
        end: Option<u8>,
        /// Hour to test (defaults to the current local hour)
        #[arg(long)]
        hour: Option<u8>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HoursAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HoursAction::Check {
            start,
            end,
            hour,
            json,
        } => {
            let window = match (start, end) {
                (Some(start), Some(end)) => WorkHoursWindow::new(start, end),
                _ => {
                    let configured = Config::load_or_default().work_hours();
                    WorkHoursWindow::new(
                        start.unwrap_or(configured.start_hour),
                        end.unwrap_or(configured.end_hour),
                    )
                }
            };
            let hour = match hour {
                Some(h) if h > MAX_HOUR => return Err(format!("hour out of range: {h}").into()),
                Some(h) => h,
                None => Local::now().hour() as u8,
            };
            let within = window.contains(hour);

            if json {
                let out = serde_json::json!({
                    "start_hour": window.start_hour,
                    "end_hour": window.end_hour,
                    "hour": hour,
                    "is_within": within,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if within {
                println!("{hour}:00 is within work hours ({window})");
            } else {
                println!("{hour}:00 is outside work hours ({window})");
            }
        }
    }
    Ok(())
}
