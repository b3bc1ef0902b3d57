mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

/// Backend origin plus `/api` prefix used when nothing overrides it
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "SC_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".showcase";
const CONFIG_FILE_NAME: &str = "config.toml";
const API_BASE_URL_ENV: &str = "SC_API_BASE_URL";
const LOG_LEVEL_ENV: &str = "SC_LOG_LEVEL";
