use crate::{Config, WeatherReport, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod weatherapi;

/// Failure modes of a weather lookup.
///
/// Callers handle all of them with the same policy (log a diagnostic, keep
/// the previous result cells), but the diagnostics differ per mode.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to reach weather provider: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected response shape: missing `{0}`")]
    Shape(&'static str),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &str) -> Result<WeatherReport, ProviderError>;
}

/// Construct the provider from config.
///
/// A missing API key is not fatal to the process: the widget logs the error
/// and runs with lookups disabled.
pub fn provider_from_config(config: &Config) -> anyhow::Result<WeatherApiProvider> {
    let api_key = config.require_api_key()?;
    Ok(WeatherApiProvider::new(api_key))
}
