//! Shared utility functions for the solar dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

    /// Time of day the "today" series is padded out to: 23:55:00 UTC.
    pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 55, 0) {
        Some(time) => time,
        None => panic!("invalid end-of-day time"),
    };

    /// The end-of-day instant (23:55:00 UTC) for a given date.
    pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
        date.and_time(END_OF_DAY).and_utc()
    }

    /// The end-of-day instant for a given date, as epoch milliseconds.
    pub fn end_of_day_ms(date: NaiveDate) -> i64 {
        end_of_day(date).timestamp_millis()
    }

    /// The UTC calendar date an instant falls on.
    pub fn utc_date(instant: &DateTime<Utc>) -> NaiveDate {
        instant.date_naive()
    }

    /// Parse an ISO-8601 / RFC 3339 timestamp into a UTC instant.
    pub fn parse_utc(s: &str) -> anyhow::Result<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
    }

    /// Format a UTC instant as "YYYY-MM-DDTHH:MM:SSZ"
    pub fn format_utc(instant: &DateTime<Utc>) -> String {
        instant.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

}
