//! Calling-layer helpers: parameter validation and the `{status, data}` response shape.
//!
//! The engine assumes valid input; this module is where raw request
//! parameters become a [`DashboardQuery`] or a 400-class rejection.

use serde::{Deserialize, Serialize};

use crate::constants::envelope::{MSG_INVALID_DATE_FORMAT, MSG_INVALID_PARAMETERS, STATUS_OK};
use crate::data::DashboardQuery;
use crate::dates::parse_query_date;
use crate::errors::EngineError;
use crate::types::{ErrorMessage, ParamValue};

/// Raw dashboard parameters as received from a caller; any may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    /// Raw `customerId`.
    pub customer_id: Option<ParamValue>,
    /// Raw `state`.
    pub state: Option<ParamValue>,
    /// Raw `startDate`, expected as `YYYY-MM-DD`.
    pub start_date: Option<ParamValue>,
    /// Raw `endDate`, expected as `YYYY-MM-DD`.
    pub end_date: Option<ParamValue>,
}

impl DashboardParams {
    /// Validate presence of every parameter and the strict date format.
    ///
    /// Presence is checked before format, so a request missing any parameter
    /// is reported as invalid parameters even if a date is also malformed.
    pub fn validate(&self) -> Result<DashboardQuery, EngineError> {
        let (Some(customer_id), Some(state), Some(start_raw), Some(end_raw)) = (
            self.customer_id.as_deref(),
            self.state.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        ) else {
            return Err(EngineError::InvalidInput {
                field: self.first_missing(),
                reason: MSG_INVALID_PARAMETERS.to_string(),
            });
        };
        let start_date = parse_query_date(start_raw).ok_or_else(|| invalid_date("startDate"))?;
        let end_date = parse_query_date(end_raw).ok_or_else(|| invalid_date("endDate"))?;
        Ok(DashboardQuery::new(customer_id, state, start_date, end_date))
    }

    fn first_missing(&self) -> &'static str {
        [
            ("customerId", &self.customer_id),
            ("state", &self.state),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ]
        .into_iter()
        .find(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .unwrap_or("customerId")
    }
}

fn invalid_date(field: &'static str) -> EngineError {
    EngineError::InvalidInput {
        field,
        reason: MSG_INVALID_DATE_FORMAT.to_string(),
    }
}

/// Payload of an error envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub message: ErrorMessage,
}

/// Response wrapper: `{ "status": <code>, "data": <payload> }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// HTTP-style status code.
    pub status: u16,
    /// Success payload or [`ErrorBody`].
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK,
            data,
        }
    }
}

impl Envelope<ErrorBody> {
    /// Wrap an engine error with its status code and public message.
    pub fn from_error(err: &EngineError) -> Self {
        Self {
            status: err.status_code(),
            data: ErrorBody {
                message: err.public_message(),
            },
        }
    }
}

/// Serialize either outcome of an engine call into an envelope JSON value.
pub fn envelope_json<T: Serialize>(
    result: Result<T, EngineError>,
) -> Result<serde_json::Value, EngineError> {
    let value = match result {
        Ok(data) => serde_json::to_value(Envelope::ok(data))?,
        Err(err) => serde_json::to_value(Envelope::from_error(&err))?,
    };
    Ok(value)
}
