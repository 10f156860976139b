//! Card appearance configuration.

use anyhow::{Context, Result};
use ghcard_core::CardOptions;
use ghcard_core::card::DEFAULT_TEMPLATE;
use serde::Deserialize;
use std::path::Path;

/// Configuration read from a YAML file passed with `--config`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CardConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Header settings.
    #[serde(default)]
    pub header: HeaderSettings,

    /// Layout settings.
    #[serde(default)]
    pub layout: LayoutSettings,
}

fn default_version() -> u32 {
    1
}

/// Header appearance.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HeaderSettings {
    /// Colour template of the card header.
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            template: default_template(),
        }
    }
}

/// Layout flags.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LayoutSettings {
    #[serde(default = "default_wide_screen_mode")]
    pub wide_screen_mode: bool,
}

const fn default_wide_screen_mode() -> bool {
    true
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            wide_screen_mode: default_wide_screen_mode(),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            header: HeaderSettings::default(),
            layout: LayoutSettings::default(),
        }
    }
}

impl CardConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// An empty file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Options handed to the card builder.
    #[must_use]
    pub fn card_options(&self) -> CardOptions {
        CardOptions {
            template: self.header.template.clone(),
            wide_screen_mode: self.layout.wide_screen_mode,
        }
    }
}
