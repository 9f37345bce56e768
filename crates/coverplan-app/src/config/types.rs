//! Configuration types for coverplan
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `CalculatorSettings`, `SinkSettings`, `UiSettings` - per-section settings

use coverplan_core::prelude::*;
use coverplan_core::{DEFAULT_MONTHLY_AMOUNT, DEFAULT_YEARS};
use serde::{Deserialize, Serialize};
use url::Url;

/// Global settings from `.coverplan/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub calculator: CalculatorSettings,

    #[serde(default)]
    pub sink: SinkSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.sink.kind == SinkKind::Webhook {
            self.sink.parsed_webhook_url()?;
        }
        Ok(())
    }
}

/// Initial calculator values
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalculatorSettings {
    /// Clamped and snapped to the monthly amount range on startup
    #[serde(default = "default_monthly_amount")]
    pub initial_monthly_amount: u64,

    /// Clamped to the years range on startup
    #[serde(default = "default_years")]
    pub initial_years: u32,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            initial_monthly_amount: default_monthly_amount(),
            initial_years: default_years(),
        }
    }
}

fn default_monthly_amount() -> u64 {
    DEFAULT_MONTHLY_AMOUNT
}

fn default_years() -> u32 {
    DEFAULT_YEARS
}

/// Which lead sink receives quote submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Fixed delay, always succeeds
    #[default]
    Simulated,
    /// HTTP POST to `webhook_url`
    Webhook,
}

/// Lead sink settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SinkSettings {
    #[serde(default)]
    pub kind: SinkKind,

    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,

    /// Required when `kind = "webhook"`
    #[serde(default)]
    pub webhook_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SinkSettings {
    fn default() -> Self {
        Self {
            kind: SinkKind::default(),
            simulated_delay_ms: default_simulated_delay_ms(),
            webhook_url: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SinkSettings {
    /// Parse `webhook_url`, accepting only `http` and `https`.
    pub fn parsed_webhook_url(&self) -> Result<Url> {
        let url = Url::parse(self.webhook_url.trim()).map_err(|e| {
            Error::config_invalid(format!(
                "sink.webhook_url {:?} is not a valid URL: {}",
                self.webhook_url, e
            ))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::config_invalid(format!(
                "sink.webhook_url must use http or https, got {}",
                other
            ))),
        }
    }
}

fn default_simulated_delay_ms() -> u64 {
    1500
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the "3-6 years" hint under the duration control
    #[serde(default = "default_true")]
    pub show_rule_of_thumb: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_rule_of_thumb: true,
        }
    }
}

fn default_true() -> bool {
    true
}
