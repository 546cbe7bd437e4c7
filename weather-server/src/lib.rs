//! Server library for the weather proxy and the countdown page.
//!
//! Two independent deployments share this crate:
//! - `serve`: a JSON API over OpenWeather plus an embedded search UI
//! - `countdown`: a static page counting down to a fixed instant

pub mod api;
pub mod app;
pub mod cli;
pub mod countdown;
pub mod pages;
