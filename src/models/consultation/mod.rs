// Consultation module
// A booked meeting between a student team and their adviser

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a consultation request.
///
/// Booking creates a Pending request against an adviser's slot; the
/// adviser approves or rejects it, the student may cancel it, and an
/// approved consultation becomes Completed once the adviser writes up
/// their notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Completed,
}

impl ConsultationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Whether this status still occupies the adviser's slot.
    pub fn holds_slot(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved | Self::Completed)
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consultation as returned by the backend, denormalized with the
/// participant names the lists render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: Option<i64>,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub team_code: String,
    pub adviser_id: i64,
    #[serde(default)]
    pub adviser_name: Option<String>,
    pub topic: String,
    #[serde(default)]
    pub description: Option<String>,
    pub scheduled_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: ConsultationStatus,
    #[serde(default)]
    pub adviser_notes: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl Consultation {
    pub fn is_pending(&self) -> bool {
        self.status == ConsultationStatus::Pending
    }

    /// A consultation stays cancellable until it has been completed.
    pub fn is_cancellable(&self) -> bool {
        self.status != ConsultationStatus::Completed
    }
}
