use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Parses a date filter from a query string.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp. Timestamps are converted
/// to UTC before their calendar date is taken, so `2030-01-15T22:30:00-05:00` yields
/// 2030-01-16.
///
/// # Arguments
/// - `value` - The raw query value
///
/// # Returns
/// - `Some(NaiveDate)` - Successfully parsed UTC calendar date
/// - `None` - The value matches neither format
pub fn parse_date_filter(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
    })
}

/// Half-open UTC range `[day, day + 1)` covering one calendar day.
pub fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}
