mod config;
mod settings;

pub use config::Config;
pub use settings::SettingsStore;

use std::path::PathBuf;

/// Returns `~/.config/stretchbreak[-dev]/` based on STRETCHBREAK_ENV.
///
/// Set STRETCHBREAK_ENV=dev to use development data directory.
/// STRETCHBREAK_CONFIG_DIR, when set, is used as-is.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("STRETCHBREAK_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STRETCHBREAK_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("stretchbreak-dev")
            } else {
                base_dir.join("stretchbreak")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
