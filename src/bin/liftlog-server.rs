// ABOUTME: HTTP server binary serving the fitness analytics API and dashboard
// ABOUTME: Loads configuration, connects the store under retry, and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Liftlog Server Binary

use anyhow::Result;
use clap::Parser;
use liftlog_server::{
    config::ServerConfig, database::Database, logging, resources::ServerResources,
    server::run_server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "liftlog-server")]
#[command(about = "Liftlog - fitness log analytics API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override static dashboard directory
    #[arg(long)]
    dashboard_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if args.dashboard_dir.is_some() {
        config.dashboard_dir = args.dashboard_dir;
    }

    info!("Starting Liftlog analytics server");
    info!("{}", config.summary());

    let database = Database::new(&config.database).await?;
    info!("Database initialized: {}", database.backend_info());

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(database, config));
    if let Err(e) = run_server(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("Analytics:");
    info!("   Weight Trend:  GET {base}/api/weight?from=YYYY-MM-DD&to=YYYY-MM-DD");
    info!("   Sessions:      GET {base}/api/sessions?from=YYYY-MM-DD&to=YYYY-MM-DD");
    info!("   Progress:      GET {base}/api/progress");
    info!("   Summary Stats: GET {base}/api/stats");
    info!("   Workout Log:   GET {base}/api/log?from=YYYY-MM-DD&to=YYYY-MM-DD");
    info!("Monitoring:");
    info!("   Health:        GET {base}/health");
    info!("   Readiness:     GET {base}/ready");
    if config.dashboard_dir.is_some() {
        info!("Dashboard:         {base}/");
    }
    info!("=== End of Endpoint List ===");
}
