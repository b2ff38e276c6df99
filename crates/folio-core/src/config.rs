// Rust guideline compliant 2026-10-13

//! Configuration management for Folio.

use crate::carousel::CarouselConfig;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Folio behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display name of the site.
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Base URL under which uploaded assets are served.
    #[serde(default = "default_asset_base_url")]
    pub asset_base_url: String,

    /// Viewport width at or below which the mobile layout is used.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,

    /// Rightward swipe distance that dismisses the mobile overlay (70-100).
    #[serde(default = "default_close_swipe_threshold")]
    pub close_swipe_threshold: f64,

    /// Scroll offset tolerance for "at the leftmost slide".
    #[serde(default = "default_edge_tolerance")]
    pub edge_tolerance: f64,

    /// Quiet period before the carousel snaps to a slide.
    #[serde(default = "default_snap_delay_ms")]
    pub snap_delay_ms: u64,

    /// Length of the overlay close transition.
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Notification service identifier for contact submissions.
    #[serde(default = "default_notify_service")]
    pub notify_service: String,

    /// Notification template identifier for contact submissions.
    #[serde(default = "default_notify_template")]
    pub notify_template: String,

    /// Administrator sign-in email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,

    /// SHA-256 hex digest of the administrator password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password_sha256: Option<String>,
}

fn default_site_name() -> String {
    "folio".to_string()
}

fn default_asset_base_url() -> String {
    "https://assets.localhost".to_string()
}

fn default_mobile_breakpoint() -> u32 {
    768
}

fn default_close_swipe_threshold() -> f64 {
    100.0
}

fn default_edge_tolerance() -> f64 {
    10.0
}

fn default_snap_delay_ms() -> u64 {
    150
}

fn default_close_delay_ms() -> u64 {
    300
}

fn default_notify_service() -> String {
    "contact".to_string()
}

fn default_notify_template() -> String {
    "project_inquiry".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            asset_base_url: default_asset_base_url(),
            mobile_breakpoint: default_mobile_breakpoint(),
            close_swipe_threshold: default_close_swipe_threshold(),
            edge_tolerance: default_edge_tolerance(),
            snap_delay_ms: default_snap_delay_ms(),
            close_delay_ms: default_close_delay_ms(),
            output_format: OutputFormat::default(),
            notify_service: default_notify_service(),
            notify_template: default_notify_template(),
            admin_email: None,
            admin_password_sha256: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.folio/config.toml`
    /// 3. Environment variables with `FOLIO_` prefix
    ///
    /// # Arguments
    ///
    /// * `site_dir` - Path to the `.folio` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(site_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = site_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FOLIO_ASSET_BASE_URL`
    /// - `FOLIO_MOBILE_BREAKPOINT`
    /// - `FOLIO_CLOSE_SWIPE_THRESHOLD`
    /// - `FOLIO_SNAP_DELAY_MS`
    /// - `FOLIO_CLOSE_DELAY_MS`
    /// - `FOLIO_OUTPUT_FORMAT` (json/table/plain)
    /// - `FOLIO_ADMIN_EMAIL`
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FOLIO_ASSET_BASE_URL") {
            self.asset_base_url = val;
        }

        if let Ok(val) = std::env::var("FOLIO_MOBILE_BREAKPOINT") {
            self.mobile_breakpoint = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "FOLIO_MOBILE_BREAKPOINT must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("FOLIO_CLOSE_SWIPE_THRESHOLD") {
            self.close_swipe_threshold = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "FOLIO_CLOSE_SWIPE_THRESHOLD must be a number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("FOLIO_SNAP_DELAY_MS") {
            self.snap_delay_ms = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("FOLIO_SNAP_DELAY_MS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FOLIO_CLOSE_DELAY_MS") {
            self.close_delay_ms = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("FOLIO_CLOSE_DELAY_MS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FOLIO_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "FOLIO_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("FOLIO_ADMIN_EMAIL") {
            self.admin_email = Some(val);
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - mobile_breakpoint is zero
    /// - close_swipe_threshold is outside 70..=100
    /// - either timer delay is zero
    fn validate(&self) -> Result<()> {
        if self.mobile_breakpoint == 0 {
            return Err(crate::Error::InvalidConfig(
                "mobile_breakpoint must be greater than 0".to_string(),
            ));
        }

        if !(70.0..=100.0).contains(&self.close_swipe_threshold) {
            return Err(crate::Error::InvalidConfig(format!(
                "close_swipe_threshold must be 70-100, got {}",
                self.close_swipe_threshold
            )));
        }

        if self.edge_tolerance < 0.0 {
            return Err(crate::Error::InvalidConfig(
                "edge_tolerance cannot be negative".to_string(),
            ));
        }

        if self.snap_delay_ms == 0 || self.close_delay_ms == 0 {
            return Err(crate::Error::InvalidConfig(
                "snap_delay_ms and close_delay_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the carousel tunables derived from this configuration.
    #[must_use]
    pub fn carousel(&self) -> CarouselConfig {
        CarouselConfig {
            close_threshold: self.close_swipe_threshold,
            edge_tolerance: self.edge_tolerance,
            snap_delay: Duration::from_millis(self.snap_delay_ms),
            close_delay: Duration::from_millis(self.close_delay_ms),
        }
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails.
    pub fn save(&self, site_dir: &Path) -> Result<()> {
        let config_path = site_dir.join("config.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
