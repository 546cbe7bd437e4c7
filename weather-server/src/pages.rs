//! Handlers for the embedded HTML pages.
//!
//! Both deployments ship a single page baked into the binary, served for
//! every path their router does not claim.

use axum::response::Html;
use once_cell::sync::Lazy;

use crate::countdown;

/// The weather single-page UI, embedded at compile time.
pub const WEATHER_PAGE: &str = include_str!("../assets/index.html");

/// Countdown page, rendered once per process so every response is
/// byte-identical.
pub static COUNTDOWN_PAGE: Lazy<String> = Lazy::new(countdown::render_page);

pub async fn weather_page() -> Html<&'static str> {
    Html(WEATHER_PAGE)
}

pub async fn countdown_page() -> Html<&'static str> {
    Html(COUNTDOWN_PAGE.as_str())
}
