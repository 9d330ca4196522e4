use clap::Subcommand;
use stretchbreak_core::{Config, SettingsStore};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "interval_minutes", "work_hours_start")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value ("none" clears optional keys)
        value: String,
    },
    /// List all config values
    List,
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let store = SettingsStore::open()?;
            let updated = store.set(&key, &value)?;
            // Report the stored value, which may have been clamped.
            let stored = updated.get(&key).unwrap_or(value);
            println!("{key} = {stored}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Reset => {
            SettingsStore::open()?.reset_to_defaults()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
