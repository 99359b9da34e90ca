mod config;

pub use config::{CalendarConfig, Config, PolicyConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/leaveplan[-dev]/` based on LEAVEPLAN_ENV.
///
/// Set LEAVEPLAN_ENV=dev to use the development directory, or
/// LEAVEPLAN_CONFIG_DIR to use an explicit directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("LEAVEPLAN_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .ok_or_else(|| ConfigError::DirUnavailable("home directory not found".into()))?
                .join(".config");

            let env = std::env::var("LEAVEPLAN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("leaveplan-dev")
            } else {
                base_dir.join("leaveplan")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
