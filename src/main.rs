//! # Rentdesk Main Entry Point
//!
//! Parses the command line, loads configuration, prepares the database
//! (pool, migrations, seed data) and starts the server.

use clap::Parser;
use migration::MigratorTrait;

use rentdesk::{config::ConfigLoader, db, logging, seeds, server::run_server};

/// Landlord/tenant maintenance issue tracker
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Host to bind, overriding the configured bind address
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configured bind address
    #[arg(long)]
    port: Option<u16>,

    /// Lower the log filter to debug
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_loader = ConfigLoader::new();
    let mut config = config_loader.load()?;

    if cli.host.is_some() || cli.port.is_some() {
        let addr = config.socket_addr()?;
        let host = cli.host.unwrap_or_else(|| addr.ip().to_string());
        let port = cli.port.unwrap_or_else(|| addr.port());
        config.bind_addr = format!("{}:{}", host, port);
        config.validate()?;
    }
    if cli.debug {
        config.log_level = "debug".to_string();
    }

    logging::init_subscriber(&config);

    tracing::info!("Loaded configuration for profile: {}", config.profile);
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!("Configuration: {}", redacted_json);
    }

    let pool = db::init_pool(&config).await?;
    migration::Migrator::up(&pool, None).await?;
    seeds::seed_demo_names(&pool).await?;

    run_server(config, pool).await
}
