use chrono::NaiveDate;

use super::conflict::find_conflict;
use crate::models::schedule::{CandidateSchedule, ScheduleEntry, ScheduleValidationError};
use crate::utils::time::{duration_minutes, parse_day};

/// Slots shorter than this are rejected outright.
pub const MIN_SLOT_MINUTES: i64 = 30;

/// Decide whether a candidate schedule may be submitted.
///
/// Rules run in a fixed order and the first failure wins: missing
/// fields, then past date, then inverted range, then minimum duration,
/// then conflict against the adviser's existing entries. The live
/// per-keystroke warning and the submit gate both call this one
/// function, so they can never disagree.
///
/// `today` is the user's local calendar day; a candidate dated today is
/// still valid.
pub fn validate_candidate(
    candidate: &CandidateSchedule,
    existing: &[ScheduleEntry],
    today: NaiveDate,
) -> Result<(), ScheduleValidationError> {
    if !candidate.is_complete() {
        return Err(ScheduleValidationError::MissingField);
    }

    // A malformed date cannot come out of the date input; treat it like
    // the original did and leave final say to the backend.
    if let Some(day) = parse_day(&candidate.available_date) {
        if day < today {
            return Err(ScheduleValidationError::PastDate);
        }
    }

    if candidate.start_time >= candidate.end_time {
        return Err(ScheduleValidationError::InvalidRange);
    }

    if let Some(minutes) = duration_minutes(&candidate.start_time, &candidate.end_time) {
        if minutes < MIN_SLOT_MINUTES {
            return Err(ScheduleValidationError::TooShort);
        }
    }

    if let Some(entry) = find_conflict(
        &candidate.available_date,
        &candidate.start_time,
        &candidate.end_time,
        existing,
    ) {
        return Err(ScheduleValidationError::Conflict(entry.clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn existing_slot() -> ScheduleEntry {
        ScheduleEntry::new(7, day("2025-06-10"), "09:00", "10:00")
    }

    #[test]
    fn test_complete_valid_candidate_passes() {
        let candidate = CandidateSchedule::new("2025-06-10", "10:00", "10:30");
        let result = validate_candidate(&candidate, &[existing_slot()], day("2025-06-01"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_missing_field_wins_over_past_date() {
        // Candidate is both incomplete and in the past; order is fixed.
        let candidate = CandidateSchedule::new("2020-01-01", "", "10:00");
        let result = validate_candidate(&candidate, &[], day("2025-06-01"));
        assert_eq!(result, Err(ScheduleValidationError::MissingField));
    }

    #[test]
    fn test_past_date_rejected_regardless_of_conflict() {
        let candidate = CandidateSchedule::new("2025-05-31", "09:30", "10:30");
        let result = validate_candidate(&candidate, &[existing_slot()], day("2025-06-01"));
        assert_eq!(result, Err(ScheduleValidationError::PastDate));
    }

    #[test]
    fn test_today_is_not_a_past_date() {
        let candidate = CandidateSchedule::new("2025-06-01", "09:00", "10:00");
        let result = validate_candidate(&candidate, &[], day("2025-06-01"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_inverted_range_beats_duration_rule() {
        let candidate = CandidateSchedule::new("2025-06-10", "10:00", "09:00");
        let result = validate_candidate(&candidate, &[], day("2025-06-01"));
        assert_eq!(result, Err(ScheduleValidationError::InvalidRange));
    }

    #[test]
    fn test_equal_start_and_end_is_invalid_range() {
        let candidate = CandidateSchedule::new("2025-06-10", "09:00", "09:00");
        let result = validate_candidate(&candidate, &[], day("2025-06-01"));
        assert_eq!(result, Err(ScheduleValidationError::InvalidRange));
    }

    #[test]
    fn test_short_slot_rejected() {
        let candidate = CandidateSchedule::new("2025-06-10", "09:00", "09:15");
        let result = validate_candidate(&candidate, &[], day("2025-06-01"));
        assert_eq!(result, Err(ScheduleValidationError::TooShort));
    }

    #[test]
    fn test_exactly_thirty_minutes_passes() {
        let candidate = CandidateSchedule::new("2025-06-10", "09:00", "09:30");
        let result = validate_candidate(&candidate, &[], day("2025-06-01"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_conflict_carries_the_existing_entry() {
        let slot = existing_slot();
        let candidate = CandidateSchedule::new("2025-06-10", "09:30", "10:30");
        let result = validate_candidate(&candidate, &[slot.clone()], day("2025-06-01"));
        assert_eq!(result, Err(ScheduleValidationError::Conflict(slot)));
    }

    #[test]
    fn test_adjacent_slot_passes_the_conflict_rule() {
        let candidate = CandidateSchedule::new("2025-06-10", "10:00", "10:30");
        let result = validate_candidate(&candidate, &[existing_slot()], day("2025-06-01"));
        assert_eq!(result, Ok(()));
    }
}
