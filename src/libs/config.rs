//! Configuration management for the recap application.
//!
//! Settings are stored as JSON in the platform data directory and edited
//! through an interactive wizard. Each integration has its own optional
//! module so users only configure the services they use.
//!
//! - **Todoist Config**: API endpoint and tracked project IDs
//! - **Claude Config**: API endpoint and model selection
//!
//! Sensitive data like API tokens never lands in the configuration file;
//! tokens use the separate encrypted secret storage.

use super::data_storage::DataStorage;
use crate::api::claude::ClaudeConfig;
use crate::api::todoist::TodoistConfig;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive setup to display available modules and route
/// the selection to the right init function.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Main configuration container for the application.
///
/// Unconfigured modules are omitted from the JSON output, keeping the
/// configuration file clean and readable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Todoist API integration configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todoist: Option<TodoistConfig>,

    /// Claude API integration configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claude: Option<ClaudeConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it reads as the default configuration
    /// with every module disabled.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select of available modules and prompts for each
    /// selected one, using current values as defaults.
    pub fn init() -> Result<Config> {
        let mut config = Config::read().unwrap_or_default();
        let modules = [TodoistConfig::module(), ClaudeConfig::module()];
        let module_names: Vec<String> = modules.iter().map(|module| module.name.clone()).collect();

        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select modules to configure")
            .items(&module_names)
            .interact()?;

        for index in selection {
            match modules[index].key.as_str() {
                "todoist" => config.todoist = Some(TodoistConfig::init(&config.todoist)?),
                "claude" => config.claude = Some(ClaudeConfig::init(&config.claude)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
