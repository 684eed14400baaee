use std::{str::FromStr, sync::Arc};

use chrono::{DateTime, Datelike, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::{TZ_VARIANTS, Tz};

use crate::domain::{
    error::{TimeApiError, TimeApiResult},
    models::{ConversionRequest, ConversionResponse, TimezoneList},
    utils::{self, TIMESTAMP_FORMAT},
};

/// Timezone conversion service
///
/// Holds the identifier list of the bundled tz database, computed once and
/// shared read-only between clones.
#[derive(Clone)]
pub struct TimeConverter {
    timezones: Arc<[&'static str]>,
}

impl TimeConverter {
    pub fn new() -> Self {
        let timezones: Arc<[&'static str]> = TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
        tracing::debug!("Loaded {} timezone identifiers", timezones.len());

        Self { timezones }
    }

    /// Identifiers in the order the tz database provides them
    pub(crate) fn timezones(&self) -> &[&'static str] {
        &self.timezones
    }

    pub fn list_timezones(&self) -> TimezoneList {
        TimezoneList {
            timezones: self.timezones.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub(crate) fn parse_timezone(&self, timezone_name: &str) -> TimeApiResult<Tz> {
        Tz::from_str(timezone_name).map_err(|_| TimeApiError::InvalidTimezone {
            timezone: timezone_name.to_string(),
        })
    }

    /// Parse a `YYYY-MM-DD HH:MM` timestamp with a year from 0001 to 9999
    pub(crate) fn parse_timestamp(&self, time_str: &str) -> TimeApiResult<NaiveDateTime> {
        let invalid = || TimeApiError::InvalidTimeFormat {
            time: time_str.to_string(),
        };

        if !utils::has_timestamp_shape(time_str) {
            return Err(invalid());
        }

        let parsed =
            NaiveDateTime::parse_from_str(time_str, TIMESTAMP_FORMAT).map_err(|_| invalid())?;
        if parsed.year() < 1 {
            return Err(invalid());
        }

        Ok(parsed)
    }

    /// Convert a wall-clock time from the source zone to the target zone
    ///
    /// Fields are validated in request order: time, source, target.
    pub fn convert_time(&self, request: &ConversionRequest) -> TimeApiResult<ConversionResponse> {
        let local_time = self.parse_timestamp(&request.time)?;
        let source_timezone = self.parse_timezone(&request.source_timezone)?;
        let target_timezone = self.parse_timezone(&request.target_timezone)?;

        let source_time = self.localize(&source_timezone, &local_time)?;
        let target_time = source_time.with_timezone(&target_timezone);
        let converted_time = utils::wall_time(&target_time)
            .filter(|time| (1..=9999).contains(&time.year()))
            .ok_or_else(|| TimeApiError::ConversionFailure {
                message: format!(
                    "{} in {} is out of range",
                    utils::format_timestamp(&local_time),
                    target_timezone.name()
                ),
            })?;

        let response = ConversionResponse {
            original_time: utils::format_timestamp(&local_time),
            converted_time: utils::format_timestamp(&converted_time),
            source_timezone: request.source_timezone.clone(),
            target_timezone: request.target_timezone.clone(),
        };

        tracing::debug!(
            source = %request.source_timezone,
            target = %request.target_timezone,
            "Converted {} to {}",
            response.original_time,
            response.converted_time
        );

        Ok(response)
    }

    /// Attach a timezone to a naive local time
    ///
    /// Ambiguous readings resolve to standard time, falling back to the later
    /// instant. Readings inside a DST gap are interpreted with the standard
    /// offset in force around the gap.
    fn localize(&self, timezone: &Tz, local_time: &NaiveDateTime) -> TimeApiResult<DateTime<Tz>> {
        match timezone.from_local_datetime(local_time) {
            LocalResult::Single(time) => Ok(time),
            LocalResult::Ambiguous(earliest, latest) => {
                if utils::is_standard(earliest.offset()) && !utils::is_standard(latest.offset()) {
                    Ok(earliest)
                } else {
                    Ok(latest)
                }
            }
            LocalResult::None => {
                let instant = utils::standard_offset_around(timezone, local_time)
                    .and_then(|offset| utils::utc_instant(local_time, &offset))
                    .ok_or_else(|| TimeApiError::ConversionFailure {
                        message: format!(
                            "{} does not exist in {}",
                            utils::format_timestamp(local_time),
                            timezone.name()
                        ),
                    })?;

                Ok(timezone.from_utc_datetime(&instant))
            }
        }
    }
}

impl Default for TimeConverter {
    fn default() -> Self {
        Self::new()
    }
}
