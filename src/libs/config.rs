//! Configuration management for the replan application.
//!
//! Handles the optional application settings: where the task store file
//! lives and how the self-update mechanism reaches its git repository.
//! Supports both programmatic access and an interactive setup wizard.
//!
//! Configuration is stored as JSON in the platform-specific application
//! data directory. Every section is optional; a missing file or section
//! simply means defaults apply.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Self-update settings.
///
/// Describes where the updater looks for newer revisions. The repository
/// directory is optional; when absent the updater discovers it by walking
/// up from the executable location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UpdateConfig {
    /// Git remote to fetch and pull from.
    pub remote: String,

    /// Branch whose revision count is compared against local HEAD.
    pub branch: String,

    /// Explicit path to the application's git checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_dir: Option<PathBuf>,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        UpdateConfig {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            repo_dir: None,
        }
    }
}

/// Main configuration container for the application.
///
/// All sections are optional so that unconfigured installations run with
/// defaults, and `skip_serializing_if` keeps the stored file free of
/// unset sections.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Override for the task store file location.
    ///
    /// When unset, the store lives as `exercise.json` in the platform
    /// data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Self-update settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard.
    ///
    /// Presents the configurable modules, then walks through the selected
    /// ones with the current values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "update".to_string(),
                name: "Update".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "storage" => {
                    msg_print!(Message::ConfigModuleStorage);
                    let default = config
                        .data_file
                        .as_ref()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default();
                    let entered: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDataFile.to_string())
                        .default(default)
                        .allow_empty(true)
                        .interact_text()?;
                    config.data_file = if entered.trim().is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(entered.trim()))
                    };
                }
                "update" => {
                    msg_print!(Message::ConfigModuleUpdate);
                    let default = config.update.clone().unwrap_or_default();
                    let remote: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptUpdateRemote.to_string())
                        .default(default.remote)
                        .interact_text()?;
                    let branch: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptUpdateBranch.to_string())
                        .default(default.branch)
                        .interact_text()?;
                    let repo_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptUpdateRepoDir.to_string())
                        .default(
                            default
                                .repo_dir
                                .map(|path| path.display().to_string())
                                .unwrap_or_default(),
                        )
                        .allow_empty(true)
                        .interact_text()?;
                    config.update = Some(UpdateConfig {
                        remote,
                        branch,
                        repo_dir: if repo_dir.trim().is_empty() {
                            None
                        } else {
                            Some(PathBuf::from(repo_dir.trim()))
                        },
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
