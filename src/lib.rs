#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Aggregation engine: distinct values, date ranges, and dashboards.
pub mod aggregate;
/// Command-line calling layer used by the `salesdash` binary.
pub mod cli;
/// Locale-style string ordering.
pub mod collation;
/// Store and logging configuration.
pub mod config;
/// Centralized constants used across the engine and calling layer.
pub mod constants;
/// Transaction record and aggregation result types.
pub mod data;
/// Strict query-date parsing.
pub mod dates;
/// Response envelopes and parameter validation.
pub mod envelope;
/// Fixed-decimal rounding.
pub mod rounding;
/// Immutable record store.
pub mod store;
/// Shared type aliases.
pub mod types;

mod errors;

pub use aggregate::{
    SalesEngine, dashboard, distinct_values, filter_records, list_regions, region_date_range,
    sum_sales_by_field, sum_sales_by_product,
};
pub use config::{LogFormat, StoreConfig};
pub use data::{
    DashboardQuery, DashboardReport, DateRange, GroupField, NamedBucket, SalesTotals,
    TransactionRecord,
};
pub use envelope::{DashboardParams, Envelope, ErrorBody};
pub use errors::EngineError;
pub use store::RecordStore;
pub use types::{BucketName, CustomerId, ErrorMessage, ParamValue, ProductId, RegionId};
