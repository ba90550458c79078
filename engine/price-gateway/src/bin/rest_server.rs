//! REST API server for the regional price statistics service

use price_gateway::config;
use price_gateway::logging::initialize_logging;
use price_gateway::rest_api;
use price_registry::PriceRegistry;
use price_service::PriceService;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logging()?;

    let config = config::load_config()?;

    info!("Starting price API server...");

    // A load failure is fatal: never serve from a partially-loaded index
    let registry = PriceRegistry::load(&config.data.file)?;
    info!(
        "Loaded {} records across {} regions",
        registry.record_count(),
        registry.list_regions().len()
    );

    let service = Arc::new(PriceService::new(registry, config.data.decimal_places));

    let routes = rest_api::create_routes(service);

    let host: IpAddr = config.server.host.parse()?;
    info!("Listening on {}:{}", host, config.server.port);

    warp::serve(routes).run((host, config.server.port)).await;

    Ok(())
}
