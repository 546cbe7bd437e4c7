use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{CurrentWeather, WeatherQuery};

use super::{ProviderError, WeatherProvider};

/// OpenWeather current-weather endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Shown to clients when upstream rejects a request without saying why.
const DEFAULT_UPSTREAM_MESSAGE: &str = "City not found";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    /// Point the client at a different endpoint; tests use this to talk to a
    /// local stand-in for OpenWeather.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<OwCurrentResponse, ProviderError> {
        log::debug!("requesting current weather for '{city}'");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = upstream_message(&body);
            log::warn!("openweather returned {status} for '{city}': {message}");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentWeather, ProviderError> {
        let parsed = self.fetch_current(&query.city).await?;
        normalize(parsed)
    }
}

/// Pulls the human-readable message out of an upstream error body, falling
/// back to a fixed default when the body is empty or not the expected JSON.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| DEFAULT_UPSTREAM_MESSAGE.to_string())
}

/// Project the upstream payload onto the twelve promised fields.
///
/// The `weather` list is not trusted to be non-empty: a payload without at
/// least one condition entry is malformed, not a panic.
fn normalize(parsed: OwCurrentResponse) -> Result<CurrentWeather, ProviderError> {
    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Malformed("weather conditions list is empty".to_string()))?;

    Ok(CurrentWeather {
        city: parsed.name,
        country: parsed.sys.country,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        temp_min: parsed.main.temp_min,
        temp_max: parsed.main.temp_max,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        description: condition.description,
        icon: condition.icon,
        sunrise: parsed.sys.sunrise,
        sunset: parsed.sys.sunset,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}
