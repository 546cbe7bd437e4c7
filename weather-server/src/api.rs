//! The JSON API: `GET /weather?city=NAME`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use thiserror::Error;

use weather_core::config::API_KEY_ENV;
use weather_core::{
    Config, CurrentWeather, ErrorBody, OpenWeatherProvider, ProviderError, WeatherProvider,
    WeatherQuery,
};

/// Shared state for the weather API.
#[derive(Clone)]
pub struct ApiState {
    /// Absent when no API key was configured; requests then fail without
    /// ever contacting upstream.
    pub provider: Option<Arc<dyn WeatherProvider>>,
}

impl ApiState {
    /// Build state from configuration. A missing key is not fatal here: the
    /// server still starts, and every `/weather` request reports the problem.
    pub fn from_config(config: &Config) -> Self {
        let provider: Option<Arc<dyn WeatherProvider>> = match config.api_key() {
            Some(key) => Some(Arc::new(OpenWeatherProvider::new(key.to_string()))),
            None => {
                log::warn!("no api_key in config and {API_KEY_ENV} not set; /weather will fail");
                None
            }
        };
        Self { provider }
    }
}

/// Query parameters accepted by `GET /weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

/// Everything `/weather` can answer besides a report. The `Display` strings
/// are the wire messages clients see in the `error` field.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("City not provided")]
    CityMissing,

    #[error("API key not configured")]
    KeyMissing,

    /// Upstream rejected the request; its status and message pass through.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to fetch weather data")]
    Fetch,
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, message } => ApiError::Upstream { status, message },
            ProviderError::Transport(e) => {
                log::error!("weather request failed in transit: {e}");
                ApiError::Fetch
            }
            ProviderError::Malformed(detail) => {
                log::error!("weather response could not be decoded: {detail}");
                ApiError::Fetch
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::CityMissing => StatusCode::BAD_REQUEST,
            ApiError::KeyMissing | ApiError::Fetch => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        };
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// GET /weather?city=NAME - current weather for a city.
pub async fn current_weather(
    State(state): State<ApiState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<CurrentWeather>, ApiError> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .ok_or(ApiError::CityMissing)?;

    let provider = state.provider.as_ref().ok_or(ApiError::KeyMissing)?;

    let report = provider
        .current(&WeatherQuery {
            city: city.to_string(),
        })
        .await?;

    Ok(Json(report))
}
