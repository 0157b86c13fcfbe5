// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast timing configuration, including loading and
//! saving user preferences to a `toasts.toml` file.
//!
//! Every field is optional; missing values fall back to the constants in
//! [`defaults`], and out-of-range values are clamped when converted into
//! [`Timings`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow toasts down
//! config.duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/toasts.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.duration_ms, Some(5000));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::diagnostics::BufferCapacity;
use crate::domain::timing::{ActivationDelay, DisplayDuration, RemovalGrace, TickInterval, Timings};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub activation_delay_ms: Option<u64>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    #[serde(default)]
    pub removal_grace_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_buffer_capacity: Option<usize>,
}

impl Config {
    /// Resolves the configured values into validated lifecycle timings.
    #[must_use]
    pub fn timings(&self) -> Timings {
        Timings {
            duration: DisplayDuration::new(self.duration_ms.unwrap_or(DEFAULT_DURATION_MS)),
            activation_delay: ActivationDelay::new(
                self.activation_delay_ms
                    .unwrap_or(DEFAULT_ACTIVATION_DELAY_MS),
            ),
            tick_interval: TickInterval::new(
                self.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            ),
            removal_grace: RemovalGrace::new(
                self.removal_grace_ms.unwrap_or(DEFAULT_REMOVAL_GRACE_MS),
            ),
        }
    }

    /// Resolves the diagnostics buffer capacity.
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.diagnostics_buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if it is not a valid
/// `toasts.toml`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_timings() {
        let config = Config {
            duration_ms: Some(4500),
            tick_interval_ms: Some(100),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toasts.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn load_from_path_rejects_mistyped_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "duration_ms = \"5000\"\n").expect("failed to write toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "removal_grace_ms = 600\n").expect("failed to write toml");

        let timings = load_from_path(&config_path)
            .expect("load should not error")
            .timings();

        assert_eq!(timings.removal_grace.as_duration(), Duration::from_millis(600));
        assert_eq!(
            timings.duration.as_duration(),
            Duration::from_millis(DEFAULT_DURATION_MS)
        );
    }

    #[test]
    fn default_config_resolves_to_default_timings() {
        assert_eq!(Config::default().timings(), Timings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            duration_ms: Some(1),
            tick_interval_ms: Some(1_000_000),
            ..Config::default()
        };
        let timings = config.timings();
        assert!(timings.duration.is_min());
        assert!(timings.tick_interval.is_max());
    }

    #[test]
    fn buffer_capacity_falls_back_to_default() {
        assert_eq!(Config::default().buffer_capacity(), BufferCapacity::default());
        let config = Config {
            diagnostics_buffer_capacity: Some(250),
            ..Config::default()
        };
        assert_eq!(config.buffer_capacity().value(), 250);
    }
}
