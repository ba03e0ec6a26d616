use chrono::NaiveDate;

use crate::models::schedule::ScheduleEntry;
use crate::utils::time::parse_day;

/// Find the first existing entry whose slot overlaps the candidate.
///
/// Intervals are half-open `[start, end)`: a candidate that starts
/// exactly when an existing slot ends (or vice versa) does not conflict.
/// Entries on other days are skipped; the candidate date may be a bare
/// day or a datetime string, only its day portion is compared.
///
/// An incomplete candidate returns `None` outright. Nothing can be said
/// about overlap until all three fields have input, and the form runs
/// this on every keystroke.
pub fn find_conflict<'a>(
    candidate_date: &str,
    candidate_start: &str,
    candidate_end: &str,
    existing: &'a [ScheduleEntry],
) -> Option<&'a ScheduleEntry> {
    if candidate_date.is_empty() || candidate_start.is_empty() || candidate_end.is_empty() {
        return None;
    }

    let candidate_day = parse_day(candidate_date)?;

    existing.iter().find(|entry| {
        same_day(entry, candidate_day)
            && candidate_start < entry.end_time.as_str()
            && candidate_end > entry.start_time.as_str()
    })
}

fn same_day(entry: &ScheduleEntry, day: NaiveDate) -> bool {
    entry.available_date == day
}
