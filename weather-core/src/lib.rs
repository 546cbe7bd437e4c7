//! Core library for the weather proxy.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over weather providers
//! - Shared domain models (queries, reports, error bodies)
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;

pub use config::Config;
pub use model::{CurrentWeather, ErrorBody, WeatherQuery};
pub use provider::openweather::OpenWeatherProvider;
pub use provider::{ProviderError, WeatherProvider};
