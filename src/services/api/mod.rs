// Persistence API collaborators
// The remote REST backend owns all durable state; this module only talks to it

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::consultation::Consultation;
use crate::models::schedule::{CandidateSchedule, ScheduleEntry};

#[cfg(test)]
use mockall::automock;

/// Connection settings for the backend, supplied by the embedding app.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

/// What can go wrong talking to the backend. A `Status` error carries
/// the server's own message so the UI can show it as the generic
/// backend-failure fallback, distinct from client-side validation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with HTTP status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Schedule endpoints, scoped to the signed-in adviser where the
/// backend requires it.
#[cfg_attr(test, automock)]
pub trait ScheduleApi {
    /// The signed-in adviser's own entries, booked or not.
    fn list_mine(&self) -> Result<Vec<ScheduleEntry>, ApiError>;
    /// Unbooked future entries across advisers, for the booking page.
    fn list_available(&self) -> Result<Vec<ScheduleEntry>, ApiError>;
    /// Persist a validated candidate; the backend assigns the id and may
    /// still reject a stale submission.
    fn create(&self, candidate: &CandidateSchedule) -> Result<ScheduleEntry, ApiError>;
    fn delete(&self, schedule_id: i64) -> Result<(), ApiError>;
}

/// Consultation endpoints for both the student and adviser screens.
#[cfg_attr(test, automock)]
pub trait ConsultationApi {
    fn list_mine(&self) -> Result<Vec<Consultation>, ApiError>;
    fn book(&self, request: &BookConsultationRequest) -> Result<Consultation, ApiError>;
    fn cancel(&self, consultation_id: i64) -> Result<(), ApiError>;
    fn approve(&self, consultation_id: i64) -> Result<Consultation, ApiError>;
    fn reject(&self, consultation_id: i64, reason: &str) -> Result<Consultation, ApiError>;
    fn add_notes(&self, consultation_id: i64, notes: &str) -> Result<Consultation, ApiError>;
}

/// Body of the book-consultation call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookConsultationRequest {
    pub schedule_id: i64,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RejectBody<'a> {
    rejection_reason: &'a str,
}

#[derive(Serialize)]
struct NotesBody<'a> {
    notes: &'a str,
}

/// Blocking HTTP implementation of both API traits.
///
/// Request/response only: no retry, no timeout override beyond the
/// transport default, no cancellation. A re-submission is simply a new
/// independent request.
pub struct HttpApi {
    client: Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send, check the status, decode the JSON body.
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_raw(request)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send and check the status for endpoints whose success body is empty.
    fn send_expecting_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send_raw(request).map(|_| ())
    }

    fn send_raw(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = self.authorized(request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            log::warn!("backend request failed with HTTP status {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        Ok(body)
    }
}

impl ScheduleApi for HttpApi {
    fn list_mine(&self) -> Result<Vec<ScheduleEntry>, ApiError> {
        self.send(self.client.get(self.url("/api/schedules/my-schedules")))
    }

    fn list_available(&self) -> Result<Vec<ScheduleEntry>, ApiError> {
        self.send(self.client.get(self.url("/api/schedules/available")))
    }

    fn create(&self, candidate: &CandidateSchedule) -> Result<ScheduleEntry, ApiError> {
        self.send(self.client.post(self.url("/api/schedules")).json(candidate))
    }

    fn delete(&self, schedule_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/schedules/{}", schedule_id);
        self.send_expecting_empty(self.client.delete(self.url(&path)))
    }
}

impl ConsultationApi for HttpApi {
    fn list_mine(&self) -> Result<Vec<Consultation>, ApiError> {
        self.send(self.client.get(self.url("/api/consultations/my-consultations")))
    }

    fn book(&self, request: &BookConsultationRequest) -> Result<Consultation, ApiError> {
        self.send(
            self.client
                .post(self.url("/api/consultations/book"))
                .json(request),
        )
    }

    fn cancel(&self, consultation_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/consultations/{}", consultation_id);
        self.send_expecting_empty(self.client.delete(self.url(&path)))
    }

    fn approve(&self, consultation_id: i64) -> Result<Consultation, ApiError> {
        let path = format!("/api/consultations/{}/approve", consultation_id);
        self.send(self.client.post(self.url(&path)))
    }

    fn reject(&self, consultation_id: i64, reason: &str) -> Result<Consultation, ApiError> {
        let path = format!("/api/consultations/{}/reject", consultation_id);
        self.send(
            self.client
                .post(self.url(&path))
                .json(&RejectBody { rejection_reason: reason }),
        )
    }

    fn add_notes(&self, consultation_id: i64, notes: &str) -> Result<Consultation, ApiError> {
        let path = format!("/api/consultations/{}/notes", consultation_id);
        self.send(self.client.post(self.url(&path)).json(&NotesBody { notes }))
    }
}

/// Pull the server's "message" field out of an error body, falling back
/// to the raw text.
fn server_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
