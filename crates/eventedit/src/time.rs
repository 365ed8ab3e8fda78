//! Calendar timestamp formatting.
//!
//! The event editor expects start and end times as compact local
//! timestamps of the form `YYYYMMDDTHHMMSS`, without any offset suffix.
//! The wall-clock values come from whatever zone the caller supplies.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Formats an instant as a `YYYYMMDDTHHMMSS` timestamp in the given zone.
///
/// Sub-second precision is dropped, not rounded.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use eventedit::time::format_timestamp;
///
/// let instant = Utc.with_ymd_and_hms(2021, 2, 5, 7, 4, 40).unwrap();
/// assert_eq!(format_timestamp(&Utc, &instant), "20210205T070440");
/// ```
pub fn format_timestamp<Tz: TimeZone>(zone: &Tz, instant: &DateTime<Utc>) -> String {
    let local = instant.with_timezone(zone);
    format!(
        "{}{:02}{:02}T{:02}{:02}{:02}",
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        local.second(),
    )
}
