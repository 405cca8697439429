//! Application configuration management.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppResult;
use crate::types::{Currency, ProjectId};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analytics defaults.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Report output configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsConfig {
    /// Currency to report in. Records in other currencies are ignored.
    #[serde(default)]
    pub default_currency: Currency,
    /// Restrict every view to a single project.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Anchor date for the trend window. Today (UTC) when unset.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

/// Log filter used when neither `RUST_LOG` nor configuration provides one.
pub const DEFAULT_LOG_FILTER: &str = "finboard=info";

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `FINBOARD__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINBOARD").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
