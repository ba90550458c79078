//! Gateway configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::DEFAULT_PORT;

/// Largest scale rust_decimal can represent
const MAX_DECIMAL_PLACES: u32 = 28;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Price dataset settings
    pub data: DataSettings,

    /// HTTP server settings
    pub server: ServerSettings,
}

/// Price dataset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Path to the CSV price dataset
    pub file: PathBuf,

    /// Fractional digits in reported means
    pub decimal_places: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { file: PathBuf::from("data/prices.csv"), decimal_places: 2 }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: DEFAULT_PORT }
    }
}

/// Load configuration from defaults and environment variables
pub fn load_config() -> Result<GatewayConfig> {
    let mut config = GatewayConfig::default();

    load_from_env(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

/// Override configuration from environment variables
fn load_from_env(config: &mut GatewayConfig) -> Result<()> {
    if let Ok(file) = std::env::var("PRICE_DATA_FILE") {
        config.data.file = PathBuf::from(file);
    }

    if let Ok(places) = std::env::var("PRICE_DECIMAL_PLACES") {
        config.data.decimal_places =
            places.parse().context("PRICE_DECIMAL_PLACES must be a non-negative integer")?;
    }

    if let Ok(host) = std::env::var("PRICE_API_HOST") {
        config.server.host = host;
    }

    if let Ok(port) = std::env::var("PRICE_API_PORT") {
        config.server.port = port.parse().context("PRICE_API_PORT must be a valid port")?;
    }

    Ok(())
}

/// Validate configuration
fn validate_config(config: &GatewayConfig) -> Result<()> {
    if config.data.decimal_places > MAX_DECIMAL_PLACES {
        return Err(anyhow::anyhow!(
            "Invalid decimal places: {} (maximum {})",
            config.data.decimal_places,
            MAX_DECIMAL_PLACES
        ));
    }

    if config.server.port == 0 {
        return Err(anyhow::anyhow!("Invalid server port: {}", config.server.port));
    }

    config
        .server
        .host
        .parse::<IpAddr>()
        .with_context(|| format!("Invalid server host: {}", config.server.host))?;

    Ok(())
}
