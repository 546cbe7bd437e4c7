#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use weather_core::OpenWeatherProvider;
use weather_server::api::ApiState;
use weather_server::app;

/// API key the fake upstream accepts.
pub const API_KEY: &str = "test-key-123";

/// Spawn a router on an ephemeral local port and return its address.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener has a local addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("test server failed");
    });
    addr
}

/// Spawn the weather app backed by the given state.
pub async fn spawn_weather_app(state: ApiState) -> SocketAddr {
    spawn(app::weather_app(state)).await
}

/// Counts requests that actually reach the fake upstream.
#[derive(Default)]
pub struct UpstreamHits(AtomicUsize);

impl UpstreamHits {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamQuery {
    q: Option<String>,
    appid: Option<String>,
    units: Option<String>,
}

/// Stand-in for the OpenWeather API.
///
/// Accepts `API_KEY` only; knows two cities ("London" and "São Paulo") and
/// answers everything else with the real service's 404 shape.
pub async fn spawn_upstream() -> (SocketAddr, Arc<UpstreamHits>) {
    let hits = Arc::new(UpstreamHits::default());
    let counter = hits.clone();

    let router = Router::new().route(
        "/data/2.5/weather",
        get(move |Query(query): Query<UpstreamQuery>| {
            let counter = counter.clone();
            async move {
                counter.0.fetch_add(1, Ordering::SeqCst);
                fake_owm_response(&query)
            }
        }),
    );

    let addr = spawn(router).await;
    (addr, hits)
}

fn fake_owm_response(query: &UpstreamQuery) -> Response {
    if query.units.as_deref() != Some("metric") {
        return owm_error(StatusCode::BAD_REQUEST, "units must be metric");
    }
    if query.appid.as_deref() != Some(API_KEY) {
        return owm_error(StatusCode::UNAUTHORIZED, "Invalid API key");
    }
    match query.q.as_deref() {
        Some("London") => Json(owm_payload("London", "GB")).into_response(),
        Some("São Paulo") => Json(owm_payload("São Paulo", "BR")).into_response(),
        _ => owm_error(StatusCode::NOT_FOUND, "city not found"),
    }
}

fn owm_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({"cod": status.as_u16().to_string(), "message": message})),
    )
        .into_response()
}

/// Structurally faithful OpenWeather current-weather payload.
pub fn owm_payload(name: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [
            {"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}
        ],
        "base": "stations",
        "main": {
            "temp": 17.35,
            "feels_like": 16.9,
            "temp_min": 15.2,
            "temp_max": 19.1,
            "pressure": 1012,
            "humidity": 72
        },
        "visibility": 10000,
        "wind": {"speed": 4.12, "deg": 240},
        "clouds": {"all": 40},
        "dt": 1726222800,
        "sys": {"type": 2, "id": 2075535, "country": country, "sunrise": 1726200000, "sunset": 1726245000},
        "timezone": 3600,
        "id": 2643743,
        "name": name,
        "cod": 200
    })
}

/// The twelve-field projection the API must produce for [`owm_payload`].
pub fn expected_report(name: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "city": name,
        "country": country,
        "temperature": 17.35,
        "feels_like": 16.9,
        "temp_min": 15.2,
        "temp_max": 19.1,
        "humidity": 72,
        "wind_speed": 4.12,
        "description": "scattered clouds",
        "icon": "03d",
        "sunrise": 1726200000,
        "sunset": 1726245000
    })
}

/// Provider pointed at the fake upstream.
pub fn provider_for(upstream: SocketAddr) -> OpenWeatherProvider {
    OpenWeatherProvider::with_endpoint(
        API_KEY.to_string(),
        format!("http://{upstream}/data/2.5/weather"),
    )
}

pub fn state_with(provider: OpenWeatherProvider) -> ApiState {
    ApiState {
        provider: Some(Arc::new(provider)),
    }
}

/// An address nothing listens on: bind an ephemeral port, then drop it.
pub async fn dead_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    listener.local_addr().expect("listener has a local addr")
}
