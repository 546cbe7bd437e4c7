use serde::{Deserialize, Serialize};

/// A request for the current weather in a city.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
}

/// Current conditions, flattened to the fields this service promises its own
/// clients. Timestamps stay as raw UNIX seconds; all display formatting
/// (rounding, clock conversion) is the browser's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Error payload returned to API clients, always paired with a status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
