//! REST API endpoints for the price gateway
//!
//! This module provides the three read endpoints over the price service:
//! mean price by region, the list of known regions, and a health probe
//! reporting the loaded record count.

use price_service::{PriceService, PriceServiceError};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;

/// Longest region code the boundary passes through to the core
const MAX_REGION_LEN: usize = 10;

/// Mean price response
#[derive(Debug, Serialize, Deserialize)]
pub struct MeanPriceResponse {
    pub region: String,
    pub mean_price: f64,
    pub record_count: usize,
}

/// Region list response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<String>,
}

/// Health probe response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub record_count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

fn json_reply<T: Serialize>(
    body: &T,
    status: StatusCode,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(body), status)
}

fn error_reply(
    error: String,
    hint: Option<String>,
    status: StatusCode,
) -> warp::reply::WithStatus<warp::reply::Json> {
    json_reply(&ErrorResponse { error, hint }, status)
}

/// Get the mean price for the region given as a query parameter
///
/// The boundary validates the parameter shape (present, non-empty,
/// alphabetic, at most ten characters) so the core only ever sees a
/// syntactically plausible region string.
pub async fn get_mean_price(
    params: HashMap<String, String>,
    service: Arc<PriceService>,
) -> Result<impl warp::Reply, Infallible> {
    let region = match params.get("region") {
        Some(region) => region.trim().to_string(),
        None => {
            return Ok(error_reply(
                "Missing required parameter: region".to_string(),
                Some("Provide region as a query parameter, e.g. ?region=NSW".to_string()),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    if region.is_empty() {
        return Ok(error_reply(
            "Region parameter cannot be empty".to_string(),
            Some("Provide a short alphabetic code like NSW or VIC".to_string()),
            StatusCode::BAD_REQUEST,
        ));
    }

    if !region.chars().all(|c| c.is_ascii_alphabetic()) || region.len() > MAX_REGION_LEN {
        return Ok(error_reply(
            format!("Invalid region format: '{region}'"),
            Some("Region should be a short alphabetic code like NSW or VIC".to_string()),
            StatusCode::BAD_REQUEST,
        ));
    }

    match service.get_mean_price(&region) {
        Ok(stats) => {
            let response = MeanPriceResponse {
                region: stats.region,
                mean_price: stats.mean.to_f64().unwrap_or(0.0),
                record_count: stats.count,
            };
            Ok(json_reply(&response, StatusCode::OK))
        }
        Err(err @ PriceServiceError::RegionNotFound { .. }) => {
            tracing::info!("Region not found: {}", region);
            Ok(error_reply(err.to_string(), None, StatusCode::NOT_FOUND))
        }
    }
}

/// List all known regions
pub async fn list_regions(service: Arc<PriceService>) -> Result<impl warp::Reply, Infallible> {
    let response = RegionsResponse { regions: service.list_regions() };
    Ok(json_reply(&response, StatusCode::OK))
}

/// Health probe reporting the loaded record count
pub async fn health_check(service: Arc<PriceService>) -> Result<impl warp::Reply, Infallible> {
    let response =
        HealthResponse { status: "healthy".to_string(), record_count: service.record_count() };
    Ok(json_reply(&response, StatusCode::OK))
}

/// Create the REST API routes
pub fn create_routes(
    service: Arc<PriceService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map(move || service.clone());

    // Mean price endpoint
    let mean_price = warp::path("api")
        .and(warp::path("v1"))
        .and(warp::path("prices"))
        .and(warp::path("mean"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(service_filter.clone())
        .and_then(get_mean_price);

    // Region list endpoint
    let regions = warp::path("api")
        .and(warp::path("v1"))
        .and(warp::path("regions"))
        .and(warp::path::end())
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(list_regions);

    // Health check endpoint
    let health = warp::path("api")
        .and(warp::path("v1"))
        .and(warp::path("health"))
        .and(warp::path::end())
        .and(warp::get())
        .and(service_filter)
        .and_then(health_check);

    mean_price.or(regions).or(health).with(
        warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET"]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use price_registry::PriceRegistry;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_CSV: &str = "region,price,timestamp\n\
                              NSW,100.00,2025-01-01 00:00:00\n\
                              NSW,200.00,2025-01-01 00:30:00\n\
                              VIC,150.00,2025-01-01 00:00:00\n\
                              VIC,-50.00,2025-01-01 00:30:00\n";

    fn test_service() -> (TempDir, Arc<PriceService>) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prices.csv");
        fs::write(&path, SAMPLE_CSV).unwrap();
        let registry = PriceRegistry::load(&path).unwrap();
        (dir, Arc::new(PriceService::new(registry, 2)))
    }

    async fn get(path: &str) -> (StatusCode, serde_json::Value) {
        let (_dir, service) = test_service();
        let routes = create_routes(service);
        let response = warp::test::request().method("GET").path(path).reply(&routes).await;
        let body = serde_json::from_slice(response.body()).unwrap();
        (response.status(), body)
    }

    #[tokio::test]
    async fn test_mean_price_valid_region() {
        let (status, body) = get("/api/v1/prices/mean?region=NSW").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["region"], "NSW");
        assert_eq!(body["mean_price"], 150.0);
        assert_eq!(body["record_count"], 2);
    }

    #[tokio::test]
    async fn test_mean_price_negative_values_included() {
        let (status, body) = get("/api/v1/prices/mean?region=VIC").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mean_price"], 50.0);
        assert_eq!(body["record_count"], 2);
    }

    #[tokio::test]
    async fn test_mean_price_case_insensitive() {
        let (_dir, service) = test_service();
        let routes = create_routes(service);

        let mut means = Vec::new();
        for path in [
            "/api/v1/prices/mean?region=nsw",
            "/api/v1/prices/mean?region=NSW",
            "/api/v1/prices/mean?region=Nsw",
        ] {
            let response = warp::test::request().method("GET").path(path).reply(&routes).await;
            assert_eq!(response.status(), StatusCode::OK);
            let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
            means.push(body["mean_price"].clone());
        }

        assert_eq!(means[0], means[1]);
        assert_eq!(means[1], means[2]);
    }

    #[tokio::test]
    async fn test_mean_price_missing_parameter() {
        let (status, body) = get("/api/v1/prices/mean").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Missing"));
        assert!(body["hint"].is_string());
    }

    #[tokio::test]
    async fn test_mean_price_empty_parameter() {
        let (status, body) = get("/api/v1/prices/mean?region=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_mean_price_whitespace_parameter() {
        let (status, _body) = get("/api/v1/prices/mean?region=%20%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mean_price_special_characters_rejected() {
        let (status, _body) = get("/api/v1/prices/mean?region=NSW!").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mean_price_numeric_region_rejected() {
        let (status, _body) = get("/api/v1/prices/mean?region=123").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mean_price_overlong_region_rejected() {
        let path = format!("/api/v1/prices/mean?region={}", "A".repeat(100));
        let (status, _body) = get(&path).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mean_price_unknown_region() {
        let (status, body) = get("/api/v1/prices/mean?region=UNKNOWN").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("not found"));
        assert!(error.contains("Available regions"));
        assert!(error.contains("NSW"));
    }

    #[tokio::test]
    async fn test_list_regions() {
        let (status, body) = get("/api/v1/regions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["regions"], serde_json::json!(["NSW", "VIC"]));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get("/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["record_count"], 4);
    }
}
