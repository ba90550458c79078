//! Error types for the price statistics service

use thiserror::Error;

/// Result type for price service operations
pub type Result<T> = std::result::Result<T, PriceServiceError>;

/// Errors that can occur in the price statistics service
///
/// An unknown region is the only error this service raises; it is a
/// recoverable, caller-visible condition, not a defect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceServiceError {
    #[error("Region '{region}' not found. Available regions: {available:?}")]
    RegionNotFound { region: String, available: Vec<String> },
}
