use thiserror::Error;

use crate::api::openrouter::OpenRouterClient;
use crate::api::rates::RateFeedClient;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingVar(&'static str),
    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Startup configuration, read once from the environment. Anything missing
/// or unparseable here aborts startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub openrouter_model: String,
    pub rates_base_url: String,
    pub default_aed_inr_rate: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            discord_token: require("DISCORD_TOKEN")?,
            database_url: optional("DATABASE_URL", "sqlite://paisa.db"),
            openrouter_api_key: require("OPENROUTER_API_KEY")?,
            openrouter_base_url: optional(
                "OPENROUTER_BASE_URL",
                OpenRouterClient::DEFAULT_BASE_URL,
            ),
            openrouter_model: optional("OPENROUTER_MODEL", "openai/gpt-3.5-turbo"),
            rates_base_url: optional("RATES_BASE_URL", RateFeedClient::DEFAULT_BASE_URL),
            default_aed_inr_rate: parse_f64("DEFAULT_AED_INR_RATE", 22.5)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn optional(name: &'static str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_f64(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidVar(name, raw)),
        Err(_) => Ok(default),
    }
}
