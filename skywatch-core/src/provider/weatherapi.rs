use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{
    AirQuality, CurrentObservation, LocationMetadata, WeatherCondition, WeatherReport,
};

use super::{ProviderError, WeatherProvider};

const BASE_URL: &str = "https://api.weatherapi.com";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn fetch_current(&self, query: &str) -> Result<WeatherReport, ProviderError> {
        let url = format!("{}/v1/current.json", self.base_url);

        debug!(query, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query), ("aqi", "yes")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaEnvelope = serde_json::from_str(&body)?;

        // Both halves must be present; a response with only one of them
        // leaves the caller's result cells untouched.
        let current = parsed.current.ok_or(ProviderError::Shape("current"))?;
        let location = parsed.location.ok_or(ProviderError::Shape("location"))?;

        Ok(WeatherReport {
            current: CurrentObservation {
                temp_c: current.temp_c,
                temp_f: current.temp_f,
                is_day: current.is_day == 1,
                condition: WeatherCondition {
                    text: current.condition.text,
                    icon: current.condition.icon,
                },
                air_quality: current.air_quality.map(AirQuality::from),
                observed_at: current.last_updated_epoch.and_then(unix_to_utc),
            },
            location: LocationMetadata { name: location.name, country: location.country },
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaEnvelope {
    location: Option<WaLocation>,
    current: Option<WaCurrent>,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
    is_day: u8,
    condition: WaCondition,
    last_updated_epoch: Option<i64>,
    air_quality: Option<WaAirQuality>,
}

#[derive(Debug, Deserialize)]
struct WaAirQuality {
    pm2_5: f64,
    pm10: f64,
    #[serde(rename = "us-epa-index")]
    us_epa_index: u8,
}

impl From<WaAirQuality> for AirQuality {
    fn from(aq: WaAirQuality) -> Self {
        Self { pm2_5: aq.pm2_5, pm10: aq.pm10, us_epa_index: aq.us_epa_index }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &str) -> Result<WeatherReport, ProviderError> {
        self.fetch_current(query).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
