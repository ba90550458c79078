//! PriceRegistry - validated in-memory index of regional price records
//!
//! This crate loads a delimited price dataset once at startup, validates
//! every row, and serves read-only queries over the indexed records. A
//! single bad row fails the entire load so that downstream consumers never
//! observe statistics derived from partially-corrupt input.

pub mod error;
pub mod registry;
pub mod types;

pub use error::{LoadError, Result};
pub use registry::{PriceRegistry, REQUIRED_COLUMNS, TIMESTAMP_FORMAT};
pub use types::PriceRecord;
