use crate::model::{CurrentWeather, WeatherQuery};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Why a weather lookup failed.
///
/// The three variants carry the whole error taxonomy the API surface needs:
/// upstream rejections keep their status and message for passthrough, while
/// transport and payload problems stay distinct here even though both end up
/// as the same generic client-facing failure.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Upstream answered with a non-success status.
    #[error("upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The request never produced a readable response.
    #[error("request to upstream provider failed")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentWeather, ProviderError>;
}
