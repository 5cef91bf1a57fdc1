//! Configuration handling for the TUI

use crate::validation::{FormVariant, SchemaSettings};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Form variant to show
    pub variant: Option<FormVariant>,
    /// Suffix every e-mail must end with (domain-restricted variants)
    pub required_email_suffix: Option<String>,
    /// Minimum password length
    pub min_password_len: Option<usize>,
    /// Minimum number of technology rows
    pub min_techs: Option<usize>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn variant(&self) -> FormVariant {
        self.variant.unwrap_or_default()
    }

    /// Schema limits with unset values filled from the defaults
    pub fn schema_settings(&self) -> SchemaSettings {
        let defaults = SchemaSettings::default();
        SchemaSettings {
            required_email_suffix: self
                .required_email_suffix
                .clone()
                .unwrap_or(defaults.required_email_suffix),
            min_password_len: self.min_password_len.unwrap_or(defaults.min_password_len),
            min_techs: self.min_techs.unwrap_or(defaults.min_techs),
        }
    }
}
