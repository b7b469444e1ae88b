//! Configuration management for the tdl application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory. Every module is optional: a missing configuration file, or a
//! file with no modules configured, leaves the application running on
//! defaults. The interactive setup wizard (`tdl init`) lets the user pick
//! the modules to configure and pre-fills prompts with current values.
//!
//! Modules:
//!
//! - **Storage**: overrides the directory holding the task store file
//! - **Display**: the marks shown in the status column of task tables

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier used for configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Task store location override.
///
/// When configured, the store file is kept in this directory instead of the
/// default application data directory. Useful for keeping tasks inside a
/// synced or backed-up folder.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the task store file. Created on first write.
    pub dir: PathBuf,
}

/// Marks used by the table renderer for the status column.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Mark shown for completed tasks.
    pub done_mark: String,
    /// Mark shown for tasks that are still active.
    pub pending_mark: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            done_mark: "✓".to_string(),
            pending_mark: " ".to_string(),
        }
    }
}

/// Root configuration object.
///
/// Unconfigured modules are omitted from the JSON output entirely, keeping
/// the file clean and hand-editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Task store location override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    /// Table rendering preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration from disk, falling back to defaults when no
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, overwriting any
    /// previous file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file.
    ///
    /// Returns `true` when a file was actually deleted, `false` when there
    /// was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select of available modules and prompts for each
    /// selected one, pre-filling current values as defaults. Returns the
    /// updated configuration for the caller to save.
    pub fn init() -> Result<Self> {
        // Existing values become the wizard defaults
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: "Display".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = config
                        .storage
                        .as_ref()
                        .map(|s| s.dir.display().to_string())
                        .unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    let dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStorageDir.to_string())
                        .default(default)
                        .interact_text()?;
                    config.storage = Some(StorageConfig { dir: PathBuf::from(dir) });
                }
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        done_mark: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDoneMark.to_string())
                            .default(default.done_mark)
                            .interact_text()?,
                        pending_mark: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPendingMark.to_string())
                            .default(default.pending_mark)
                            .allow_empty(true)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
