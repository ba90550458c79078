//! Core types for the price registry

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single validated price observation for a region
///
/// Records are created only during load and never mutated afterwards;
/// callers only ever see them through shared slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Normalized region code (trimmed, uppercased, e.g. "NSW")
    pub region: String,

    /// Recorded price; sign is unrestricted (negative prices are rebates)
    pub price: Decimal,

    /// Observation time, parsed from the fixed `YYYY-MM-DD HH:MM:SS` format
    pub timestamp: NaiveDateTime,
}

impl PriceRecord {
    /// Create a new price record
    pub fn new(region: String, price: Decimal, timestamp: NaiveDateTime) -> Self {
        Self { region, price, timestamp }
    }
}
