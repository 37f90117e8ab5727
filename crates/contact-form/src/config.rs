// File: src/config.rs
// Purpose: Configuration parsing from contact-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default config file name, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "contact-form.toml";

/// Contact form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rules: RuleConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Limits applied by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Maximum untrimmed message length (default: 500)
    #[serde(default = "default_message_max_length")]
    pub message_max_length: usize,

    /// Exact digit count of a phone number (default: 10)
    #[serde(default = "default_phone_digits")]
    pub phone_digits: usize,

    /// Report an empty personal email as "Personal Email is required."
    ///
    /// When false, emptiness is left to the input's own `required` attribute
    /// and the validator stays silent.
    #[serde(default = "default_true")]
    pub require_personal_email: bool,
}

/// Where the browser adapter finds the form, and how it shows errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// `name` attribute of the form element (default: "ContactUs")
    #[serde(default = "default_form_name")]
    pub form_name: String,

    /// `id` of the error region (default: "validation-messages")
    #[serde(default = "default_region_id")]
    pub region_id: String,

    /// CSS selector of the reset button
    #[serde(default = "default_reset_selector")]
    pub reset_selector: String,

    /// Delay before the region is cleared after a reset, letting the
    /// browser finish clearing the inputs first (default: 50)
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u32,

    /// Smooth-scroll the region into view when errors are shown
    #[serde(default = "default_true")]
    pub scroll_into_view: bool,
}

impl UiConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reset_delay_ms))
    }
}

// Default values
fn default_message_max_length() -> usize {
    500
}

fn default_phone_digits() -> usize {
    10
}

fn default_form_name() -> String {
    "ContactUs".to_string()
}

fn default_region_id() -> String {
    "validation-messages".to_string()
}

fn default_reset_selector() -> String {
    r#"button[type="reset"]"#.to_string()
}

fn default_reset_delay_ms() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            message_max_length: default_message_max_length(),
            phone_digits: default_phone_digits(),
            require_personal_email: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            form_name: default_form_name(),
            region_id: default_region_id(),
            reset_selector: default_reset_selector(),
            reset_delay_ms: default_reset_delay_ms(),
            scroll_into_view: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Like [`Config::load`], but falls back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {:#}, using defaults", e);
            Self::default()
        })
    }

    /// Parse configuration from TOML text; blank text yields defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content).context("Invalid contact form config")?;
        Ok(config)
    }
}
