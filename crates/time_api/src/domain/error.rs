use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::{models::ErrorResponse, utils::ERROR_DETAIL_PREFIX};

// Error codes
const ERROR_INVALID_TIME_FORMAT: &str = "invalid_time_format";
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_CONVERSION_FAILURE: &str = "conversion_failure";
const ERROR_INVALID_REQUEST: &str = "invalid_request";

/// Errors raised while validating or converting a request.
///
/// Callers only ever see a 400 with a `detail` message; the variant is kept
/// for logging.
#[derive(Debug, thiserror::Error)]
pub enum TimeApiError {
    #[error("time must be in format 'YYYY-MM-DD HH:MM' (24hr)")]
    InvalidTimeFormat { time: String },
    #[error("{timezone} is not a recognized timezone.")]
    InvalidTimezone { timezone: String },
    #[error("{message}")]
    ConversionFailure { message: String },
    #[error("{message}")]
    InvalidRequest { message: String },
}

impl TimeApiError {
    /// Stable machine-readable code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            TimeApiError::InvalidTimeFormat { .. } => ERROR_INVALID_TIME_FORMAT,
            TimeApiError::InvalidTimezone { .. } => ERROR_INVALID_TIMEZONE,
            TimeApiError::ConversionFailure { .. } => ERROR_CONVERSION_FAILURE,
            TimeApiError::InvalidRequest { .. } => ERROR_INVALID_REQUEST,
        }
    }

    /// Message placed in the `detail` field of the response body.
    pub fn detail(&self) -> String {
        format!("{}: {}", ERROR_DETAIL_PREFIX, self)
    }
}

impl From<JsonRejection> for TimeApiError {
    fn from(rejection: JsonRejection) -> Self {
        TimeApiError::InvalidRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for TimeApiError {
    fn into_response(self) -> Response {
        match &self {
            TimeApiError::InvalidTimeFormat { time } => {
                tracing::warn!(kind = self.kind(), time = %time, "Rejected request: {}", self)
            }
            _ => tracing::warn!(kind = self.kind(), "Rejected request: {}", self),
        }

        let body = ErrorResponse {
            detail: self.detail(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub type TimeApiResult<T> = Result<T, TimeApiError>;
