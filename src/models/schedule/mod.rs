// Schedule module
// Adviser availability slots and the not-yet-persisted form candidate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time::to_12_hour;

/// An adviser's availability slot, as persisted by the backend.
///
/// Wall-clock times stay zero-padded "HH:mm" strings, the form the API
/// sends and the form the overlap rules compare; for zero-padded values
/// lexicographic order is chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: Option<i64>,
    pub adviser_id: i64,
    pub available_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub is_booked: bool,
}

impl ScheduleEntry {
    /// Create an unpersisted entry; the backend assigns the id.
    pub fn new(
        adviser_id: i64,
        available_date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            adviser_id,
            available_date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_booked: false,
        }
    }
}

/// Raw create-schedule form state. Nothing here is validated until the
/// form rules run; empty strings are simply fields the user has not
/// filled in yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSchedule {
    pub available_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl CandidateSchedule {
    pub fn new(
        available_date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            available_date: available_date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// True once every field has input. The conflict check refuses to
    /// run on a partial candidate.
    pub fn is_complete(&self) -> bool {
        !self.available_date.is_empty() && !self.start_time.is_empty() && !self.end_time.is_empty()
    }
}

/// Why a candidate schedule cannot be submitted, first failing rule only.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleValidationError {
    MissingField,
    PastDate,
    InvalidRange,
    TooShort,
    /// Carries the first conflicting entry so callers can render its
    /// date and times in the message.
    Conflict(ScheduleEntry),
}

impl std::fmt::Display for ScheduleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "All fields are required"),
            Self::PastDate => write!(f, "Cannot create schedule for past dates"),
            Self::InvalidRange => write!(f, "End time must be after start time"),
            Self::TooShort => write!(f, "Schedule must be at least 30 minutes long"),
            Self::Conflict(entry) => write!(
                f,
                "This time conflicts with an existing schedule on {} from {} to {}. \
                 You won't be able to add this schedule.",
                entry.available_date,
                to_12_hour(&entry.start_time),
                to_12_hour(&entry.end_time)
            ),
        }
    }
}

impl std::error::Error for ScheduleValidationError {}
