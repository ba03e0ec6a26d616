// Consultation service
// List filtering, booking eligibility and status-transition guards

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::consultation::{Consultation, ConsultationStatus};
use crate::models::schedule::ScheduleEntry;
use crate::models::user::User;
use crate::services::api::{ApiError, BookConsultationRequest, ConsultationApi};

/// Why a consultation action is refused before it reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultationActionError {
    NotAdviser,
    NotStudent,
    NotPending,
    AlreadyCompleted,
}

impl std::fmt::Display for ConsultationActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAdviser => write!(f, "Only the assigned adviser can manage this consultation"),
            Self::NotStudent => {
                write!(f, "Only the requesting student can cancel this consultation")
            }
            Self::NotPending => write!(f, "Only pending consultations can be approved or rejected"),
            Self::AlreadyCompleted => write!(f, "Cannot cancel completed consultation"),
        }
    }
}

impl std::error::Error for ConsultationActionError {}

/// Why the book-consultation form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    MissingSlot,
    MissingTopic,
    MissingTeamCode,
    SlotTaken,
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSlot => write!(f, "Please select a consultation time"),
            Self::MissingTopic => write!(f, "Please enter a consultation topic"),
            Self::MissingTeamCode => {
                write!(f, "Student must have a team code to book consultations")
            }
            Self::SlotTaken => write!(f, "This time slot is already booked"),
        }
    }
}

impl std::error::Error for BookingError {}

/// A booking fails either on this side or on the server's.
#[derive(Debug, Error)]
pub enum BookError {
    #[error(transparent)]
    Ineligible(#[from] BookingError),
    #[error("the server rejected the booking: {0}")]
    Backend(#[from] ApiError),
}

/// Pre-checks the booking form runs before calling the backend, which
/// re-checks all of them authoritatively.
pub fn check_booking(
    slot: &ScheduleEntry,
    student: &User,
    topic: &str,
) -> Result<(), BookingError> {
    if topic.trim().is_empty() {
        return Err(BookingError::MissingTopic);
    }
    if !student.has_team_code() {
        return Err(BookingError::MissingTeamCode);
    }
    if slot.is_booked {
        return Err(BookingError::SlotTaken);
    }
    Ok(())
}

/// The booking form's submit path: pre-checks, then hand off to the
/// backend, which re-validates everything and may still report the slot
/// as taken if someone else got there first.
pub fn book_consultation<A: ConsultationApi>(
    api: &A,
    slot: Option<&ScheduleEntry>,
    student: &User,
    topic: &str,
    description: Option<&str>,
) -> Result<Consultation, BookError> {
    let slot = slot.ok_or(BookingError::MissingSlot)?;
    check_booking(slot, student, topic)?;

    let request = BookConsultationRequest {
        schedule_id: slot.id.ok_or(BookingError::MissingSlot)?,
        topic: topic.to_string(),
        description: description.map(str::to_string),
    };
    Ok(api.book(&request)?)
}

/// Consultations scheduled strictly after today, soonest first.
pub fn upcoming<'a>(list: &'a [Consultation], today: NaiveDate) -> Vec<&'a Consultation> {
    let mut out: Vec<&Consultation> = list
        .iter()
        .filter(|c| c.scheduled_date > today)
        .collect();
    out.sort_by_key(|c| c.scheduled_date);
    out
}

/// Consultations scheduled strictly before today, most recent first.
pub fn past<'a>(list: &'a [Consultation], today: NaiveDate) -> Vec<&'a Consultation> {
    let mut out: Vec<&Consultation> = list
        .iter()
        .filter(|c| c.scheduled_date < today)
        .collect();
    out.sort_by_key(|c| std::cmp::Reverse(c.scheduled_date));
    out
}

/// An adviser's open requests, most recent first.
pub fn pending_for_adviser<'a>(list: &'a [Consultation]) -> Vec<&'a Consultation> {
    let mut out: Vec<&Consultation> = list.iter().filter(|c| c.is_pending()).collect();
    out.sort_by_key(|c| std::cmp::Reverse(c.scheduled_date));
    out
}

/// Gate for the approve button.
pub fn check_approve(
    consultation: &Consultation,
    adviser_id: i64,
) -> Result<(), ConsultationActionError> {
    if consultation.adviser_id != adviser_id {
        return Err(ConsultationActionError::NotAdviser);
    }
    if !consultation.is_pending() {
        return Err(ConsultationActionError::NotPending);
    }
    Ok(())
}

/// Gate for the reject button; same conditions as approval.
pub fn check_reject(
    consultation: &Consultation,
    adviser_id: i64,
) -> Result<(), ConsultationActionError> {
    check_approve(consultation, adviser_id)
}

/// Gate for the student's cancel button.
pub fn check_cancel(
    consultation: &Consultation,
    student_id: i64,
) -> Result<(), ConsultationActionError> {
    if consultation.student_id != student_id {
        return Err(ConsultationActionError::NotStudent);
    }
    if !consultation.is_cancellable() {
        return Err(ConsultationActionError::AlreadyCompleted);
    }
    Ok(())
}

/// Writing up notes closes out an approved consultation; any other
/// status just keeps its notes.
pub fn status_after_notes(status: ConsultationStatus) -> ConsultationStatus {
    match status {
        ConsultationStatus::Approved => ConsultationStatus::Completed,
        other => other,
    }
}
