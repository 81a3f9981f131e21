// ABOUTME: Kitchen Helper server binary
// ABOUTME: Loads environment configuration, initializes logging, and serves the web app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

//! # Kitchen Helper Server Binary
//!
//! Starts the recipe search web app on `HTTP_HOST:HTTP_PORT` (default `127.0.0.1:5000`).

use anyhow::Result;
use clap::Parser;
use kitchen_helper::{config::environment::ServerConfig, logging, server};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "kitchen-helper")]
#[command(about = "Kitchen Helper - find recipes for the ingredients you have")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("{}", config.summary());
    if config.recipe_api.is_configured() {
        info!("Spoonacular API key configured");
    } else {
        warn!("SPOONACULAR_API_KEY not set; recipe search will report a configuration error");
    }
    info!(
        "Open http://{} in your browser",
        config.bind_address()
    );

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
