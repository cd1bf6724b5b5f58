mod config;
mod counter;
pub mod database;
mod preferences;

pub use config::{Config, SessionConfig, UiConfig};
pub use counter::{CompletionCounter, COMPLETIONS_KEY};
pub use database::Database;
pub use preferences::{MemoryPreferences, PreferenceStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the directory holding `config.toml` and `gentlestep.db`.
///
/// `GENTLESTEP_DATA_DIR` wins when set. Otherwise `~/.config/gentlestep[-dev]/`
/// based on `GENTLESTEP_ENV` (set it to `dev` for a development directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("GENTLESTEP_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("GENTLESTEP_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("gentlestep-dev")
            } else {
                base_dir.join("gentlestep")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
