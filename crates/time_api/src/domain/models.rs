use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for converting time from one timezone to another
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionRequest {
    /// Time in the source timezone, format: YYYY-MM-DD HH:MM (24hr)
    #[schema(example = "2023-07-15 12:00")]
    pub time: String,
    /// Source IANA timezone name (e.g. 'UTC', 'America/New_York')
    #[schema(example = "UTC")]
    pub source_timezone: String,
    /// Target IANA timezone name (e.g. 'Asia/Kolkata')
    #[schema(example = "Asia/Kolkata")]
    pub target_timezone: String,
}

/// Converted time alongside the original
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    /// Input time in the source timezone
    pub original_time: String,
    /// Converted time in the target timezone, format: YYYY-MM-DD HH:MM
    pub converted_time: String,
    pub source_timezone: String,
    pub target_timezone: String,
}

/// Every timezone identifier the service accepts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimezoneList {
    pub timezones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "Healthy")]
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            message: "Healthy".to_string(),
        }
    }
}

/// Body of every 400 response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
