// Wall-clock time helpers
// Slot times travel as zero-padded "HH:mm" strings; lexicographic order is chronological order

use chrono::NaiveDate;

/// Convert a 24-hour "HH:mm" string to 12-hour display form.
///
/// Unparseable input is returned unchanged rather than erroring; the
/// caller is rendering, not validating.
///
/// # Examples
/// ```
/// use thesis_consult::utils::time::to_12_hour;
///
/// assert_eq!(to_12_hour("14:05"), "2:05 PM");
/// assert_eq!(to_12_hour("00:00"), "12:00 AM");
/// assert_eq!(to_12_hour("not-a-time"), "not-a-time");
/// ```
pub fn to_12_hour(military: &str) -> String {
    let parsed = military.split_once(':').and_then(|(h, m)| {
        let hours = h.parse::<u32>().ok()?;
        let minutes = m.parse::<u32>().ok()?;
        Some((hours, minutes))
    });

    match parsed {
        Some((hours, minutes)) => {
            let period = if hours >= 12 { "PM" } else { "AM" };
            let display_hour = match hours % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02} {}", display_hour, minutes, period)
        }
        None => military.to_string(),
    }
}

/// Minutes since midnight for an "HH:mm" string, or `None` if it does not parse.
pub fn minutes_of_day(time: &str) -> Option<i64> {
    let (h, m) = time.split_once(':')?;
    let hours = h.parse::<i64>().ok()?;
    let minutes = m.parse::<i64>().ok()?;
    Some(hours * 60 + minutes)
}

/// Signed duration in minutes between two "HH:mm" strings.
pub fn duration_minutes(start: &str, end: &str) -> Option<i64> {
    Some(minutes_of_day(end)? - minutes_of_day(start)?)
}

/// The calendar-day portion of a date string.
///
/// Accepts bare `YYYY-MM-DD` values as well as datetime forms like
/// `2025-06-10T09:00:00+08:00`; everything after the first `T` or space
/// is dropped so comparisons see plain days.
pub fn date_portion(raw: &str) -> &str {
    raw.split(['T', ' ']).next().unwrap_or(raw)
}

/// Parse the day out of a date or datetime string.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_portion(raw), "%Y-%m-%d").ok()
}
