//! Producto Service
//!
//! REST CRUD microservice for products, backed by MongoDB.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use producto_service::{
    api::start_server,
    core::{config::StorageType, create_app_state, logging::init_tracing, Config},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = Command::new("producto-service")
        .version(producto_service::VERSION)
        .about("REST CRUD microservice for the Producto resource.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("http-addr")
                .long("http-addr")
                .value_name("ADDR")
                .help("HTTP server bind address")
        )
        .arg(
            Arg::new("storage-type")
                .long("storage-type")
                .value_name("TYPE")
                .help("Storage backend type (mongo, memory)")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .get_matches();

    // A missing .env file is normal in production
    let dotenv = dotenvy::dotenv();

    // Load configuration
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = Config::load(config_path.as_deref())?;

    // Apply CLI overrides
    apply_cli_overrides(&mut config, &matches)?;
    config.validate()?;

    // Initialize logging
    init_tracing(&config.logging)?;

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => warn!("No .env file found, using process environment"),
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    info!("Starting {} v{}", producto_service::NAME, producto_service::VERSION);

    let http_addr = config.server.http_addr;
    let state = create_app_state(config)
        .await
        .context("Failed to initialize storage")?;

    start_server(http_addr, state).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> producto_service::Result<()> {
    if let Some(addr) = matches.get_one::<String>("http-addr") {
        config.server.http_addr = addr.parse().map_err(|e| {
            producto_service::Error::config(format!("Invalid HTTP address: {}", e))
        })?;
    }

    if let Some(storage_type) = matches.get_one::<String>("storage-type") {
        config.storage.storage_type = storage_type.parse::<StorageType>()?;
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    Ok(())
}
