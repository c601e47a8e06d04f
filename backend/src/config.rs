/// Runtime configuration read from the environment
use thiserror::Error;

pub const DATABASE_PATH_VAR: &str = "CATALOG_DATABASE_PATH";
pub const SEARCH_DESCRIPTION_VAR: &str = "CATALOG_SEARCH_DESCRIPTION";
pub const LOG_LEVEL_VAR: &str = "CATALOG_LOG_LEVEL";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// SQLite file backing the category index; `:memory:` keeps it in memory
    pub database_path: String,
    /// Match search terms against descriptions as well as names
    pub search_description: bool,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            database_path: "catalog.db".to_string(),
            search_description: false,
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load from the process environment, reading a `.env` file first if present
    pub fn from_env() -> ConfigResult<Self> {
        // a missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let search_description = match lookup(SEARCH_DESCRIPTION_VAR) {
            Some(value) => parse_bool(SEARCH_DESCRIPTION_VAR, &value)?,
            None => defaults.search_description,
        };

        Ok(CatalogConfig {
            database_path: lookup(DATABASE_PATH_VAR)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.database_path),
            search_description,
            log_level: lookup(LOG_LEVEL_VAR)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_level),
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
