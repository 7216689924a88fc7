// ABOUTME: Loader binary importing workout_log.csv and weight_log.csv into the store
// ABOUTME: Replaces both tables and prints a per-file summary of loaded and skipped rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Liftlog CSV Loader Binary

use anyhow::Result;
use clap::Parser;
use liftlog_server::{
    config::{DatabaseUrl, LoaderConfig},
    constants::service_names,
    database::Database,
    ingest::load_directory,
    logging::LoggingConfig,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "liftlog-load")]
#[command(about = "Load workout and weight CSV exports into the database")]
pub struct Args {
    /// Directory containing workout_log.csv and weight_log.csv (overrides DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    LoggingConfig::from_env_for(service_names::LIFTLOG_LOAD).init()?;

    let mut config = LoaderConfig::from_env()?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&url)?;
    }
    config.validate()?;

    info!(
        data_dir = %config.data_dir.display(),
        database = %config.database.url,
        "Starting CSV load"
    );

    let database = Database::new(&config.database).await?;
    let report = load_directory(&database, &config.data_dir).await?;

    for file in [&report.workout_log, &report.weight_log] {
        println!(
            "{}: {} rows read, {} loaded, {} skipped",
            file.source, file.rows_read, file.rows_loaded, file.rows_skipped
        );
    }
    info!("Load complete");

    Ok(())
}
