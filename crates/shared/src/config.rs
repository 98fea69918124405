//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Payment schedule configuration.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Payment schedule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Day of month on which installments after the first fall due.
    #[serde(default = "default_due_day")]
    pub due_day: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            due_day: default_due_day(),
        }
    }
}

fn default_due_day() -> u32 {
    5
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "rentroll=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("RENTROLL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
