//! TOML-based application configuration.
//!
//! Stores planning defaults:
//! - Leave and remote budgets, carryover and strategy
//! - Holiday jurisdiction and custom company holidays
//!
//! Configuration is stored at `~/.config/leaveplan/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::data_dir;
use crate::calendar::CalendarDay;
use crate::engine::{PlanPolicy, Strategy};
use crate::error::{ConfigError, Result};
use crate::holiday::HolidayCatalog;

/// Budget and strategy defaults for `plan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_max_remote_per_week")]
    pub max_remote_per_week: u32,
    #[serde(default = "default_leave_credits")]
    pub leave_credits: u32,
    #[serde(default)]
    pub carryover_balance: u32,
    #[serde(default)]
    pub strategy: Strategy,
}

/// Holiday sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    /// Extra non-working days, kept sorted.
    #[serde(default)]
    pub custom_holidays: Vec<CalendarDay>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/leaveplan/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_max_remote_per_week() -> u32 {
    2
}
fn default_leave_credits() -> u32 {
    2
}
fn default_jurisdiction() -> String {
    "PH".into()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_remote_per_week: default_max_remote_per_week(),
            leave_credits: default_leave_credits(),
            carryover_balance: 0,
            strategy: Strategy::default(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            jurisdiction: default_jurisdiction(),
            custom_holidays: Vec::new(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a non-negative integer")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults when the file is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LoadFailed`] for unreadable or malformed files.
    pub fn load_from(path: &Path) -> Result<Self> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let mut cfg: Config =
                    toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
                cfg.policy().validate().map_err(|e| load_failed(e.to_string()))?;
                cfg.normalize();
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(load_failed(e.to_string()).into()),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key. The new value is coerced to the
    /// type of the current one. Only the in-memory config changes; call
    /// [`Config::save`] to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting policy is out of range. `self` is left untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let mut updated: Config =
            serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        updated.policy().validate().map_err(|e| invalid(e.to_string()))?;
        updated.normalize();

        *self = updated;
        Ok(())
    }

    /// Sort and dedup custom holidays, which hand-edited files may not keep.
    fn normalize(&mut self) {
        self.calendar.custom_holidays.sort();
        self.calendar.custom_holidays.dedup();
    }

    /// Add `day` as a custom holiday, or remove it if it already is one.
    /// Returns whether it is a custom holiday afterwards.
    pub fn toggle_custom_holiday(&mut self, day: CalendarDay) -> bool {
        let holidays = &mut self.calendar.custom_holidays;
        if holidays.contains(&day) {
            holidays.retain(|&d| d != day);
            false
        } else {
            let index = holidays.partition_point(|&d| d < day);
            holidays.insert(index, day);
            true
        }
    }

    pub fn policy(&self) -> PlanPolicy {
        PlanPolicy {
            max_remote_per_week: self.policy.max_remote_per_week,
            leave_credits: self.policy.leave_credits,
            carryover_balance: self.policy.carryover_balance,
            strategy: self.policy.strategy,
        }
    }

    /// Bundled catalog for the configured jurisdiction unioned with the
    /// custom holidays. Falls back to custom holidays only when no catalog
    /// is bundled for `year`.
    pub fn holidays_for(&self, year: i32) -> HolidayCatalog {
        let catalog = HolidayCatalog::for_jurisdiction(&self.calendar.jurisdiction, year)
            .unwrap_or_else(|| {
                warn!(
                    jurisdiction = %self.calendar.jurisdiction,
                    year,
                    "no bundled holiday catalog, using custom holidays only"
                );
                HolidayCatalog::default()
            });
        catalog.with_custom(&self.calendar.custom_holidays)
    }
}
