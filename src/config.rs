use crate::cli::Args;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub country_codes_path: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Like `from_env`, but `--countries` replaces `COUNTRY_CODES_PATH` entirely.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Self::load(args.countries.clone())
    }

    fn load(country_codes_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        dotenv().ok();

        let country_codes_path = match country_codes_path {
            Some(path) => path,
            None => {
                let path = env::var("COUNTRY_CODES_PATH")
                    .unwrap_or_else(|_| "./assets/country-codes.json".to_string());
                if path.trim().is_empty() {
                    return Err(ConfigError::EmptyValue("COUNTRY_CODES_PATH"));
                }
                PathBuf::from(path)
            }
        };

        Ok(Self {
            country_codes_path,
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or(Level::INFO),
        })
    }
}
