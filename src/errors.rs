use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::envelope::{STATUS_BAD_REQUEST, STATUS_INTERNAL, STATUS_NOT_FOUND};
use crate::types::{ErrorMessage, RegionId};

/// Error type for dataset loading, configuration, and query failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The region has no records, so it has no date range.
    #[error("no records for region '{region}'")]
    RegionNotFound {
        /// Region that was queried.
        region: RegionId,
    },
    /// A caller parameter is missing or malformed.
    #[error("invalid parameter '{field}': {reason}")]
    InvalidInput {
        /// Parameter name as the caller spells it.
        field: &'static str,
        /// User-facing message.
        reason: ErrorMessage,
    },
    /// The dataset file parsed as JSON but rows do not match the schema.
    #[error("dataset '{}' is malformed: {details}", .path.display())]
    Dataset {
        /// Dataset file.
        path: PathBuf,
        /// Deserializer message.
        details: String,
    },
    /// Reading the dataset failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// JSON encoding or decoding failed outside of dataset loading.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Dataset location or logging options could not be resolved.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    /// Envelope status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => STATUS_BAD_REQUEST,
            Self::RegionNotFound { .. } => STATUS_NOT_FOUND,
            Self::Dataset { .. } | Self::Io(_) | Self::Json(_) | Self::Configuration(_) => {
                STATUS_INTERNAL
            }
        }
    }

    /// Message exposed to callers in an error envelope.
    ///
    /// Validation errors carry their user-facing message verbatim.
    pub fn public_message(&self) -> ErrorMessage {
        match self {
            Self::InvalidInput { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}
