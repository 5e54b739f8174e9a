use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub text: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentObservation {
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: bool,
    pub condition: WeatherCondition,
    pub air_quality: Option<AirQuality>,
    pub observed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQuality {
    pub pm2_5: f64,
    pub pm10: f64,
    pub us_epa_index: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationMetadata {
    pub name: String,
    pub country: String,
}

/// A successful lookup always yields both halves together, so the display
/// never pairs a temperature from one place with the name of another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentObservation,
    pub location: LocationMetadata,
}
