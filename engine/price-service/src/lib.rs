//! PriceService - cached per-region mean-price statistics
//!
//! This crate computes arithmetic mean prices over the records held by a
//! loaded [`price_registry::PriceRegistry`], using exact decimal arithmetic
//! throughout, and memoizes the results per region. It performs no I/O of
//! its own.

pub mod error;
pub mod service;
pub mod types;

pub use error::{PriceServiceError, Result};
pub use service::PriceService;
pub use types::PriceStatistics;

/// Default number of fractional digits in reported means
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;
