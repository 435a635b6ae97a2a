//! Preference management for session durations.
//!
//! Stores the study and break durations used to configure a session's
//! countdown when a period tab is selected. Preferences persist as JSON in
//! the platform application data directory and can be set through an
//! interactive wizard.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_STUDY_MINUTES: u32 = 25;
const DEFAULT_BREAK_MINUTES: u32 = 10;

/// Session duration preferences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Countdown duration for study periods, in minutes.
    pub study_minutes: u32,
    /// Countdown duration for break periods, in minutes.
    pub break_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            study_minutes: DEFAULT_STUDY_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl Config {
    /// Reads the stored configuration, falling back to defaults when no
    /// config file exists yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&config_path)?;
        let mut config: Config = serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        // A hand-edited zero duration is invalid; that field falls back to
        // its default so the countdown can never start already exhausted.
        if config.study_minutes == 0 {
            config.study_minutes = DEFAULT_STUDY_MINUTES;
        }
        if config.break_minutes == 0 {
            config.break_minutes = DEFAULT_BREAK_MINUTES;
        }
        Ok(config)
    }

    /// Writes the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Prompts for both durations with the current values as defaults.
    /// Zero durations are rejected at the prompt.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        msg_print!(Message::ConfigIntro, true);

        let study_minutes: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStudyMinutes.to_string())
            .default(current.study_minutes)
            .validate_with(|minutes: &u32| if *minutes > 0 { Ok(()) } else { Err(Message::InvalidDuration.to_string()) })
            .interact_text()?;

        let break_minutes: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBreakMinutes.to_string())
            .default(current.break_minutes)
            .validate_with(|minutes: &u32| if *minutes > 0 { Ok(()) } else { Err(Message::InvalidDuration.to_string()) })
            .interact_text()?;

        Ok(Config { study_minutes, break_minutes })
    }
}
