//! Mean-price computation and the per-region statistics cache

use crate::error::{PriceServiceError, Result};
use crate::types::PriceStatistics;
use parking_lot::Mutex;
use price_registry::{PriceRecord, PriceRegistry};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use tracing::debug;

/// Price Service - computes and caches mean-price statistics per region
///
/// Wraps a loaded registry and serves repeated queries. Statistics are pure
/// functions of the immutable registry, so two callers racing on the same
/// uncached region both compute the same value and the second store simply
/// overwrites the first; the mutex only guards the map structure itself.
pub struct PriceService {
    registry: PriceRegistry,

    /// Fractional digits in reported means
    decimal_places: u32,

    /// Lazily populated cache keyed by normalized region code
    stats_cache: Mutex<HashMap<String, PriceStatistics>>,
}

impl PriceService {
    /// Create a new price service over a loaded registry
    pub fn new(registry: PriceRegistry, decimal_places: u32) -> Self {
        Self { registry, decimal_places, stats_cache: Mutex::new(HashMap::new()) }
    }

    /// Mean price for a region, served from the cache when possible
    ///
    /// Unknown regions fail with [`PriceServiceError::RegionNotFound`],
    /// whose message enumerates every known region.
    pub fn get_mean_price(&self, region: &str) -> Result<PriceStatistics> {
        let normalized = region.trim().to_uppercase();

        if let Some(stats) = self.stats_cache.lock().get(&normalized) {
            debug!("Cache hit for region: {}", normalized);
            return Ok(stats.clone());
        }

        let records = self.registry.get_records_for_region(&normalized).ok_or_else(|| {
            PriceServiceError::RegionNotFound {
                region: region.to_string(),
                available: self.registry.list_regions(),
            }
        })?;

        let stats = self.calculate_statistics(records, normalized.clone());

        self.stats_cache.lock().insert(normalized.clone(), stats.clone());
        debug!("Cached statistics for region: {}", normalized);

        Ok(stats)
    }

    /// Exact decimal mean over the records, rounded half-up
    fn calculate_statistics(&self, records: &[PriceRecord], region: String) -> PriceStatistics {
        let total: Decimal = records.iter().map(|record| record.price).sum();
        let count = records.len();

        // The registry never stores an empty list for a region key, so
        // count >= 1 and the division cannot trap
        let mut mean = (total / Decimal::from(count))
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        mean.rescale(self.decimal_places);

        PriceStatistics { mean, count, region }
    }

    /// All known region codes, sorted
    pub fn list_regions(&self) -> Vec<String> {
        self.registry.list_regions()
    }

    /// Total record count across all regions
    pub fn record_count(&self) -> usize {
        self.registry.record_count()
    }

    /// Empty the statistics cache; subsequent queries recompute
    pub fn clear_cache(&self) {
        self.stats_cache.lock().clear();
        debug!("Statistics cache cleared");
    }
}
