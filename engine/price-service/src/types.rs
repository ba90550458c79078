//! Core types for the price statistics service

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mean-price statistics for a single region
///
/// Values are immutable once computed; the cache hands out clones and the
/// originals are never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStatistics {
    /// Arithmetic mean of the region's prices, rounded half-up to the
    /// configured number of fractional digits
    pub mean: Decimal,

    /// Number of records contributing to the mean
    pub count: usize,

    /// Normalized region code the statistics belong to
    pub region: String,
}
