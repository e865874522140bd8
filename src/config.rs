// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Defaults can be overridden with `SETLOG_DATA_DIR` and
//! `SETLOG_SAVE_DELAY_MS`. Bad values are logged and ignored.

use crate::models::draft::FormFields;
use std::path::PathBuf;
use std::time::Duration;

const DATA_DIR_VAR: &str = "SETLOG_DATA_DIR";
const SAVE_DELAY_VAR: &str = "SETLOG_SAVE_DELAY_MS";

/// Values a fresh or reset form starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub brand: String,
    pub exercise_name: String,
    pub target_reps: String,
    /// Reps, weight and rest of the set seeded into an empty form.
    pub initial_set: (Option<f64>, Option<f64>, Option<f64>),
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            brand: "UNICA".to_string(),
            exercise_name: "Arm curl".to_string(),
            target_reps: "10".to_string(),
            initial_set: (Some(10.0), Some(15.0), Some(60.0)),
        }
    }
}

impl FormDefaults {
    /// Form fields with no image.
    pub fn form_fields(&self) -> FormFields {
        FormFields {
            brand: self.brand.clone(),
            exercise_name: self.exercise_name.clone(),
            target_reps: self.target_reps.clone(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the key files.
    pub data_dir: PathBuf,
    /// How long the simulated remote save takes.
    pub save_delay: Duration,
    pub defaults: FormDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("setlog-data"),
            save_delay: Duration::from_millis(1000),
            defaults: FormDefaults::default(),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the configuration from a variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            if dir.trim().is_empty() {
                log::warn!("{} is empty, using {}", DATA_DIR_VAR, config.data_dir.display());
            } else {
                config.data_dir = PathBuf::from(dir);
            }
        }

        if let Some(delay) = lookup(SAVE_DELAY_VAR) {
            match delay.trim().parse::<u64>() {
                Ok(ms) => config.save_delay = Duration::from_millis(ms),
                Err(e) => log::warn!(
                    "Ignoring {}={:?}: {}, using {} ms",
                    SAVE_DELAY_VAR,
                    delay,
                    e,
                    config.save_delay.as_millis()
                ),
            }
        }

        config
    }
}
