// Schedule service
// Conflict checking, form validation and the create-schedule flow

pub mod conflict;
pub mod validation;

pub use conflict::find_conflict;
pub use validation::{validate_candidate, MIN_SLOT_MINUTES};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::schedule::{CandidateSchedule, ScheduleEntry, ScheduleValidationError};
use crate::services::api::{ApiError, ScheduleApi};
use crate::services::clock::Clock;

/// Why a delete action on a schedule row is refused client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleActionError {
    NotOwner,
    SlotBooked,
}

impl std::fmt::Display for ScheduleActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner => write!(f, "Unauthorized to delete this schedule"),
            Self::SlotBooked => write!(f, "Cannot delete a booked schedule"),
        }
    }
}

impl std::error::Error for ScheduleActionError {}

/// A submission fails either on this side or on the server's; the UI
/// renders the two very differently, so they stay distinct types.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ScheduleValidationError),
    #[error("the server rejected the schedule: {0}")]
    Backend(#[from] ApiError),
}

/// The create-schedule screen's decision core: one clock, one API
/// collaborator, and a single rule set shared by the live field check
/// and the submit gate.
pub struct SchedulePlanner<C: Clock, A: ScheduleApi> {
    clock: C,
    api: A,
}

impl<C: Clock, A: ScheduleApi> SchedulePlanner<C, A> {
    pub fn new(clock: C, api: A) -> Self {
        Self { clock, api }
    }

    /// Re-run on every field change; powers the inline warning.
    pub fn live_check(
        &self,
        candidate: &CandidateSchedule,
        existing: &[ScheduleEntry],
    ) -> Result<(), ScheduleValidationError> {
        validate_candidate(candidate, existing, self.clock.today())
    }

    /// The authoritative gate: identical rules, then hand off to the
    /// backend, which may still reject a stale candidate.
    pub fn submit(
        &self,
        candidate: &CandidateSchedule,
        existing: &[ScheduleEntry],
    ) -> Result<ScheduleEntry, SubmitError> {
        if let Err(err) = self.live_check(candidate, existing) {
            log::warn!("schedule submission blocked: {}", err);
            return Err(err.into());
        }
        Ok(self.api.create(candidate)?)
    }

    /// Fresh snapshot of the adviser's entries for the next validation run.
    pub fn refresh(&self) -> Result<Vec<ScheduleEntry>, ApiError> {
        self.api.list_mine()
    }
}

/// Entries a student can still book: unbooked and dated after today.
pub fn available_entries<'a>(
    entries: &'a [ScheduleEntry],
    today: NaiveDate,
) -> Vec<&'a ScheduleEntry> {
    entries
        .iter()
        .filter(|entry| !entry.is_booked && entry.available_date > today)
        .collect()
}

/// Table order: ascending by day, then by start time.
pub fn sort_for_display(entries: &mut [ScheduleEntry]) {
    entries.sort_by(|a, b| {
        (a.available_date, a.start_time.as_str()).cmp(&(b.available_date, b.start_time.as_str()))
    });
}

/// An adviser may delete only their own, still-unbooked entries.
pub fn check_delete(entry: &ScheduleEntry, adviser_id: i64) -> Result<(), ScheduleActionError> {
    if entry.adviser_id != adviser_id {
        return Err(ScheduleActionError::NotOwner);
    }
    if entry.is_booked {
        return Err(ScheduleActionError::SlotBooked);
    }
    Ok(())
}
