//! Eager CSV ingestion and the region-keyed record index

use crate::error::{LoadError, Result};
use crate::types::PriceRecord;
use chrono::NaiveDateTime;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Columns the source header must contain (order and extra columns are free)
pub const REQUIRED_COLUMNS: [&str; 3] = ["region", "price", "timestamp"];

/// Fixed timestamp format for data rows
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Price Registry - Maps region codes to their recorded prices
///
/// The registry reads the whole source eagerly at construction and is
/// immutable afterwards, so it is safe to share across concurrent readers
/// without synchronization.
#[derive(Debug)]
pub struct PriceRegistry {
    /// Map from normalized region code to records in source-row order
    records_by_region: HashMap<String, Vec<PriceRecord>>,

    /// Total number of records across all regions
    record_count: usize,
}

/// Resolved positions of the required columns within the header
struct ColumnIndices {
    region: usize,
    price: usize,
    timestamp: usize,
}

impl PriceRegistry {
    /// Load and validate the price dataset from a CSV file
    ///
    /// Fails on a missing file, an empty file, a header without the
    /// required columns, a header with zero data rows, or the first data
    /// row that does not validate. No partial state survives a failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading price data from: {:?}", path);

        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        // flexible: short rows surface as a named missing field, not a
        // reader-level length error
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

        let headers = reader.headers()?.clone();
        if headers.iter().all(|field| field.trim().is_empty()) {
            return Err(LoadError::Empty);
        }

        let columns = resolve_columns(&headers).map_err(LoadError::MissingColumns)?;

        let mut records_by_region: HashMap<String, Vec<PriceRecord>> = HashMap::new();
        let mut record_count = 0usize;

        for (row, result) in reader.records().enumerate() {
            // Header is line 1, so the first data row is line 2
            let line = row + 2;
            let record = result?;
            let parsed = parse_row(&record, &columns, line)?;

            records_by_region.entry(parsed.region.clone()).or_default().push(parsed);
            record_count += 1;
        }

        if record_count == 0 {
            return Err(LoadError::NoDataRows);
        }

        info!("Loaded {} records for {} regions", record_count, records_by_region.len());

        Ok(Self { records_by_region, record_count })
    }

    /// Get the records for a region, case-insensitively
    ///
    /// Returns `None` for unknown regions. The returned slice preserves
    /// source-row order.
    pub fn get_records_for_region(&self, region: &str) -> Option<&[PriceRecord]> {
        let normalized = region.trim().to_uppercase();
        self.records_by_region.get(&normalized).map(Vec::as_slice)
    }

    /// All known region codes, lexicographically sorted
    pub fn list_regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.records_by_region.keys().cloned().collect();
        regions.sort();
        regions
    }

    /// Total number of records across all regions
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

/// Locate the required columns in the header, trimming header whitespace
fn resolve_columns(headers: &StringRecord) -> std::result::Result<ColumnIndices, Vec<String>> {
    let position = |name: &str| headers.iter().position(|field| field.trim() == name);
    let [region_name, price_name, timestamp_name] = REQUIRED_COLUMNS;

    match (position(region_name), position(price_name), position(timestamp_name)) {
        (Some(region), Some(price), Some(timestamp)) => {
            Ok(ColumnIndices { region, price, timestamp })
        }
        (region, price, timestamp) => {
            let mut missing = Vec::new();
            if region.is_none() {
                missing.push(region_name.to_string());
            }
            if price.is_none() {
                missing.push(price_name.to_string());
            }
            if timestamp.is_none() {
                missing.push(timestamp_name.to_string());
            }
            Err(missing)
        }
    }
}

/// Validate one data row, in field order region, price, timestamp
fn parse_row(record: &StringRecord, columns: &ColumnIndices, line: usize) -> Result<PriceRecord> {
    let region_raw = field(record, columns.region, "region", line)?;
    let region = region_raw.trim().to_uppercase();
    if region.is_empty() {
        return Err(LoadError::EmptyRegion { line });
    }

    let price_raw = field(record, columns.price, "price", line)?;
    let price = Decimal::from_str(price_raw.trim())
        .map_err(|_| LoadError::InvalidPrice { line, value: price_raw.to_string() })?;

    let timestamp_raw = field(record, columns.timestamp, "timestamp", line)?;
    let timestamp = NaiveDateTime::parse_from_str(timestamp_raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| LoadError::InvalidTimestamp { line, value: timestamp_raw.to_string() })?;

    Ok(PriceRecord::new(region, price, timestamp))
}

fn field<'a>(record: &'a StringRecord, index: usize, name: &str, line: usize) -> Result<&'a str> {
    record
        .get(index)
        .ok_or_else(|| LoadError::MissingField { line, field: name.to_string() })
}
