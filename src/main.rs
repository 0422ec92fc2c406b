//! City digest service.
//!
//! Fans out to weather, news and fact-of-the-day services for a city and
//! serves the merged result, with spans exported to an OTLP collector.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use city_digest::config::{load_config, validation::validate_config, ConfigError, DigestConfig};
use city_digest::{HttpServer, Shutdown, Telemetry};

#[derive(Debug, Parser)]
#[command(name = "city-digest", version, about = "City digest aggregation service")]
struct Cli {
    /// Path to a TOML config file. Defaults apply when absent.
    #[arg(short, long, env = "CITY_DIGEST_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DigestConfig::default(),
    };

    if let Some(port) = cli.port {
        let mut addr: SocketAddr = config.listener.bind_address.parse()?;
        addr.set_port(port);
        config.listener.bind_address = addr.to_string();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    let telemetry = Telemetry::init(&config.tracing, &config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        otel.exporting = telemetry.is_exporting(),
        "city-digest starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.signal()).await?;

    tracing::info!("Shutdown complete");
    drop(telemetry);
    Ok(())
}
