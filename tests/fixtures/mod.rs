// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use thesis_consult::models::consultation::{Consultation, ConsultationStatus};
use thesis_consult::models::schedule::{CandidateSchedule, ScheduleEntry};
use thesis_consult::models::user::User;

/// Parse a fixed `YYYY-MM-DD` test date.
pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// An unbooked slot owned by the default test adviser (id 7).
pub fn slot(date: &str, start: &str, end: &str) -> ScheduleEntry {
    let mut entry = ScheduleEntry::new(7, day(date), start, end);
    entry.id = Some(1);
    entry
}

pub fn booked_slot(date: &str, start: &str, end: &str) -> ScheduleEntry {
    let mut entry = slot(date, start, end);
    entry.is_booked = true;
    entry
}

pub fn candidate(date: &str, start: &str, end: &str) -> CandidateSchedule {
    CandidateSchedule::new(date, start, end)
}

/// Sample users for testing
pub mod users {
    use super::*;

    pub fn adviser() -> User {
        serde_json::from_str(
            r#"{"id":7,"email":"reyes@cit.edu","name":"Dr. Reyes","role":"FACULTY_ADVISER","department":"CS"}"#,
        )
        .unwrap()
    }

    pub fn student_rep() -> User {
        serde_json::from_str(
            r#"{"id":3,"email":"rep@cit.edu","name":"Sam Cruz","role":"STUDENT_REP","teamCode":"T-12","studentId":"221234567"}"#,
        )
        .unwrap()
    }

    pub fn admin() -> User {
        serde_json::from_str(
            r#"{"id":1,"email":"admin@cit.edu","name":"Registrar","role":"ADMIN"}"#,
        )
        .unwrap()
    }
}

/// A consultation booked against the default adviser.
pub fn consultation(id: i64, date: &str, status: ConsultationStatus) -> Consultation {
    Consultation {
        id: Some(id),
        student_id: 3,
        student_name: Some("Sam Cruz".to_string()),
        team_code: "T-12".to_string(),
        adviser_id: 7,
        adviser_name: Some("Dr. Reyes".to_string()),
        topic: "Chapter 2 review".to_string(),
        description: Some("Methodology feedback".to_string()),
        scheduled_date: day(date),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        status,
        adviser_notes: None,
        rejection_reason: None,
    }
}
