//! PriceGateway - REST API for regional price statistics
//!
//! This crate is the HTTP boundary over the price service: route
//! composition, request-level validation of the region parameter,
//! process configuration, and logging setup. The core crates never
//! depend on anything in here.

pub mod config;
pub mod logging;
pub mod rest_api;

pub use config::GatewayConfig;

/// Version of the price API
pub const VERSION: &str = "0.1.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;
