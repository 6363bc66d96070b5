use crate::domains::analytics::Granularity;
use crate::errors::{DomainError, DomainResult};
use crate::types::PaginationParams;
use crate::validation::{Validate, ValidationBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

/// Enum for app theme options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    /// Light mode
    Light,
    /// Dark mode
    Dark,
    /// System default theme
    #[default]
    System,
}

impl AppTheme {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(AppTheme::Light),
            "dark" => Some(AppTheme::Dark),
            "system" => Some(AppTheme::System),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppTheme::Light => "light",
            AppTheme::Dark => "dark",
            AppTheme::System => "system",
        }
    }

    /// Light ↔ dark; the system theme toggles to dark
    pub fn toggled(&self) -> Self {
        match self {
            AppTheme::Dark => AppTheme::Light,
            AppTheme::Light | AppTheme::System => AppTheme::Dark,
        }
    }
}

impl From<String> for AppTheme {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or(AppTheme::System)
    }
}

/// Application settings, injected at startup instead of living in module state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: AppTheme,

    /// Seconds between notification polls
    pub notification_poll_interval_secs: u64,

    /// Rows per page in request and user tables
    pub page_size: u32,

    /// Page buttons shown under a table
    pub pagination_window: u32,

    /// Granularity the funding chart opens with
    pub default_granularity: Granularity,

    /// Fallback when RUST_LOG is not set
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: AppTheme::System,
            notification_poll_interval_secs: 30,
            page_size: 10,
            pagination_window: 5,
            default_granularity: Granularity::Monthly,
            log_level: "info".to_string(),
        }
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("notification_poll_interval_secs", Some(self.notification_poll_interval_secs))
            .range(5, 3600)
            .validate()?;

        ValidationBuilder::new("page_size", Some(self.page_size))
            .range(1, 100)
            .validate()?;

        ValidationBuilder::new("pagination_window", Some(self.pagination_window))
            .range(1, 20)
            .validate()?;

        ValidationBuilder::new("log_level", Some(self.log_level.clone()))
            .required()
            .one_of(LOG_LEVELS, Some("must be one of error, warn, info, debug, trace, off"))
            .validate()?;

        Ok(())
    }
}

impl AppSettings {
    /// Parse and validate settings; missing keys take their defaults
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let settings: AppSettings = serde_json::from_str(json)
            .map_err(|e| DomainError::Configuration(format!("invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> DomainResult<Self> {
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loading settings from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn pagination(&self, page: u32) -> PaginationParams {
        PaginationParams::new(page, self.page_size)
    }
}
