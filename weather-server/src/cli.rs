use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use weather_core::Config;

use crate::api::ApiState;
use crate::app;
use crate::countdown;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather proxy and countdown server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the weather API and its single-page UI.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "WEATHER_ADDR", default_value = "0.0.0.0:8787")]
        addr: SocketAddr,

        /// Path to a TOML config file; defaults to ./weather.toml when present.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Serve the countdown page.
    Countdown {
        /// Address to listen on.
        #[arg(long, env = "COUNTDOWN_ADDR", default_value = "0.0.0.0:8788")]
        addr: SocketAddr,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { addr, config } => {
                let config = Config::load(config.as_deref())?;
                let state = ApiState::from_config(&config);
                app::serve(app::weather_app(state), addr).await
            }
            Command::Countdown { addr } => {
                match countdown::remaining_at(chrono::Utc::now().timestamp_millis()) {
                    Some(left) => log::info!(
                        "{} in {}d {}h {}m {}s",
                        countdown::TARGET_LABEL,
                        left.days,
                        left.hours,
                        left.minutes,
                        left.seconds
                    ),
                    None => log::info!("{} has already arrived", countdown::TARGET_LABEL),
                }
                app::serve(app::countdown_app(), addr).await
            }
        }
    }
}
