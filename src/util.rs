use crate::error::{Result, SimError};
use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc,
    Weekday,
};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parse a calendar day relative to `today`.
///
/// Accepts `YYYY-MM-DD`, RFC3339, a bare year (January 1st), or a duration
/// counted back from `today` such as `90d` or `2years`.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // YYYY-MM-DD
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }

    // YYYY
    if input.len() == 4 && input.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = input
            .parse()
            .map_err(|_| SimError::InvalidDate(input.to_string()))?;
        return NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| SimError::InvalidDate(format!("Year out of range: {input}")));
    }

    // Relative duration (e.g., "90d", "2years")
    if let Ok(duration) = humantime::parse_duration(input) {
        let days = chrono::Days::new(duration.as_secs() / 86_400);
        return today
            .checked_sub_days(days)
            .ok_or_else(|| SimError::InvalidDate(format!("Duration overflow for '{input}'")));
    }

    Err(SimError::InvalidDate(format!(
        "'{input}' is not YYYY-MM-DD, RFC3339, a year, or a duration like 90d"
    )))
}

pub fn year_start(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| SimError::InvalidDate(format!("Year out of range: {year}")))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Attach the local UTC offset to a wall-clock time.
///
/// Times inside a DST gap keep the offset in effect before the gap.
pub fn localize(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    if let Some(dt) = Local.from_local_datetime(&naive).earliest() {
        return dt.fixed_offset();
    }
    let offset = Local.offset_from_utc_datetime(&naive);
    let utc = naive - TimeDelta::seconds(offset.local_minus_utc() as i64);
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Calendar day of a commit in its own recorded offset.
pub fn commit_day(seconds: i64, offset_seconds: i32) -> Option<NaiveDate> {
    let utc = DateTime::<Utc>::from_timestamp(seconds, 0)?;
    let offset = FixedOffset::east_opt(offset_seconds)?;
    Some(utc.with_timezone(&offset).date_naive())
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
