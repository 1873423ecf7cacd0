//! Open-Meteo current temperature

use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;

use super::{endpoint, get_json};

#[derive(Debug, Deserialize)]
struct Forecast {
    current: Current,
}

#[derive(Debug, Deserialize)]
struct Current {
    temperature_2m: f64,
}

/// Client for the Open-Meteo forecast API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Current 2m temperature in degrees Celsius
    pub async fn current_temperature(&self, latitude: &str, longitude: &str) -> Result<f64> {
        let url = endpoint(&self.base_url, "/v1/forecast");
        let forecast: Forecast = get_json(
            &self.http,
            &url,
            &[
                ("latitude", latitude),
                ("longitude", longitude),
                ("current", "temperature_2m"),
                ("temperature_unit", "celsius"),
                ("wind_speed_unit", "kmh"),
                ("forecast_days", "1"),
            ],
        )
        .await?;
        Ok(forecast.current.temperature_2m)
    }
}
