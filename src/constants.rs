/// Constants shared by the aggregation engine.
pub mod aggregate {
    /// Decimal places kept by the incrementally rounded grouping strategy.
    pub const BUCKET_DECIMAL_PLACES: u32 = 2;
}

/// Constants used for query date parsing.
pub mod dates {
    /// `chrono` format for query and dataset dates.
    pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";
    /// Exact character length of a `YYYY-MM-DD` date.
    pub const QUERY_DATE_LEN: usize = 10;
}

/// Constants used by configuration resolution.
pub mod config {
    /// Environment variable naming the dataset file.
    pub const ENV_DATASET_PATH: &str = "SALESDASH_DATASET";
    /// Environment variable selecting the log layout (`pretty` or `json`).
    pub const ENV_LOG_FORMAT: &str = "SALESDASH_LOG_FORMAT";
    /// Dataset locations tried when neither an argument nor the environment names one.
    pub const DEFAULT_DATASET_CANDIDATES: &[&str] = &["data/sales.json", "../data/sales.json"];
    /// Log level used when `RUST_LOG` is unset.
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

/// Status codes and messages used by response envelopes.
pub mod envelope {
    /// Successful response.
    pub const STATUS_OK: u16 = 200;
    /// Rejected request parameters.
    pub const STATUS_BAD_REQUEST: u16 = 400;
    /// Query matched nothing that could be reported.
    pub const STATUS_NOT_FOUND: u16 = 404;
    /// Dataset or runtime failure.
    pub const STATUS_INTERNAL: u16 = 500;
    /// Message for missing dashboard parameters.
    pub const MSG_INVALID_PARAMETERS: &str = "Invalid parameters.";
    /// Message for malformed query dates.
    pub const MSG_INVALID_DATE_FORMAT: &str = "Invalid date format. Please use YYYY-MM-DD format.";
}
