// Display formatters for table cells and profile fields

use crate::models::schedule::ScheduleEntry;
use crate::utils::time::to_12_hour;

/// Format a student ID as xx-xxxx-xxx.
///
/// Non-numeric characters are stripped first; anything shorter than 8
/// digits is returned cleaned but undashed so partial input stays
/// editable.
pub fn format_student_id(student_id: &str) -> String {
    let cleaned: String = student_id.chars().filter(|c| c.is_ascii_digit()).collect();

    if cleaned.len() < 8 {
        return cleaned;
    }

    let digits = &cleaned[..cleaned.len().min(9)];
    format!("{}-{}-{}", &digits[..2], &digits[2..6], &digits[6..])
}

/// The "9:00 AM - 10:30 AM" cell text for a schedule row.
pub fn format_schedule_range(entry: &ScheduleEntry) -> String {
    format!(
        "{} - {}",
        to_12_hour(&entry.start_time),
        to_12_hour(&entry.end_time)
    )
}
