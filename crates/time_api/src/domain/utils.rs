use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::{OffsetComponents, Tz, TzOffset};
use regex::Regex;

// Constants for format strings and error messages
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const ERROR_DETAIL_PREFIX: &str = "Invalid input or time zone error";

// chrono accepts short or signed years and optional separators; the input
// must have a four-digit year and whitespace between date and time.
static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}\s+[0-9]{1,2}:[0-9]{1,2}$")
        .expect("timestamp pattern is valid")
});

/// Whether a string has the `YYYY-MM-DD HH:MM` shape before range checks
pub fn has_timestamp_shape(input: &str) -> bool {
    TIMESTAMP_SHAPE.is_match(input)
}

/// Render a wall-clock time in the service's fixed output format
pub fn format_timestamp(local: &NaiveDateTime) -> String {
    local.format(TIMESTAMP_FORMAT).to_string()
}

/// Wall-clock reading of an instant, `None` outside chrono's range
pub fn wall_time(time: &DateTime<Tz>) -> Option<NaiveDateTime> {
    time.naive_utc().checked_add_offset(time.offset().fix())
}

/// Whether an offset is standard time (no DST component)
pub fn is_standard(offset: &TzOffset) -> bool {
    offset.dst_offset().num_seconds() == 0
}

/// Find the standard-time offset in force around a local time
///
/// Samples the zone a day either side of `local` and prefers whichever
/// sample carries no DST component. Falls back to the earlier sample when
/// both are daylight time.
///
/// # Returns
///
/// `None` only when `local` is too close to the representable range to sample
pub fn standard_offset_around(timezone: &Tz, local: &NaiveDateTime) -> Option<TzOffset> {
    let samples: Vec<TzOffset> = [
        local.checked_sub_signed(TimeDelta::days(1)),
        local.checked_add_signed(TimeDelta::days(1)),
    ]
    .into_iter()
    .flatten()
    .map(|instant| timezone.offset_from_utc_datetime(&instant))
    .collect();

    samples
        .iter()
        .find(|offset| is_standard(offset))
        .or_else(|| samples.first())
        .cloned()
}

/// UTC instant for a local reading under a fixed offset
pub fn utc_instant(local: &NaiveDateTime, offset: &TzOffset) -> Option<NaiveDateTime> {
    let seconds = i64::from(offset.fix().local_minus_utc());
    local.checked_sub_signed(TimeDelta::seconds(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_timestamp_shape() {
        assert!(has_timestamp_shape("2023-07-15 12:00"));
        assert!(has_timestamp_shape("2023-7-5 9:05"));
        assert!(has_timestamp_shape("2023-07-15  12:00"));

        assert!(!has_timestamp_shape("23-07-15 12:00"));
        assert!(!has_timestamp_shape("+2023-07-15 12:00"));
        assert!(!has_timestamp_shape("2023-07-1512:00"));
        assert!(!has_timestamp_shape(" 2023-07-15 12:00"));
        assert!(!has_timestamp_shape("2023-07-15 12:00 "));
        assert!(!has_timestamp_shape("+262142-12-31 23:59"));
    }

    #[test]
    fn test_wall_time() {
        let instant = chrono_tz::Asia::Kolkata.from_utc_datetime(&local(2023, 7, 15, 12, 0));
        assert_eq!(wall_time(&instant).unwrap(), local(2023, 7, 15, 17, 30));
    }

    #[test]
    fn test_format_timestamp_drops_seconds() {
        let time = NaiveDate::from_ymd_opt(2023, 7, 5)
            .unwrap()
            .and_hms_opt(9, 5, 59)
            .unwrap();
        assert_eq!(format_timestamp(&time), "2023-07-05 09:05");
    }

    #[test]
    fn test_standard_offset_in_spring_gap() {
        let offset =
            standard_offset_around(&chrono_tz::America::New_York, &local(2023, 3, 12, 2, 30))
                .unwrap();

        assert!(is_standard(&offset));
        assert_eq!(offset.fix().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_standard_offset_in_southern_summer() {
        // Sydney observes DST in January, standard time resumes in April
        let offset =
            standard_offset_around(&chrono_tz::Australia::Sydney, &local(2023, 4, 2, 2, 30))
                .unwrap();

        assert_eq!(offset.fix().local_minus_utc(), 10 * 3600);
    }

    #[test]
    fn test_utc_instant() {
        let offset = chrono_tz::Asia::Kolkata.offset_from_utc_datetime(&local(2023, 7, 15, 0, 0));
        assert_eq!(
            utc_instant(&local(2023, 7, 15, 17, 30), &offset).unwrap(),
            local(2023, 7, 15, 12, 0)
        );
    }
}
