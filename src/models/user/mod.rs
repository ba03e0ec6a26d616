// User module
// The signed-in account as cached by the client

use serde::{Deserialize, Serialize};

/// Account roles, gating which routes and dashboards a user may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    StudentRep,
    FacultyAdviser,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudentRep => "STUDENT_REP",
            Self::FacultyAdviser => "FACULTY_ADVISER",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The profile the backend returns at sign-in, trimmed to what the
/// client actually reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub team_code: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub is_profile_complete: bool,
}

impl User {
    /// Whether this student carries the team code booking requires.
    pub fn has_team_code(&self) -> bool {
        self.team_code
            .as_deref()
            .is_some_and(|code| !code.trim().is_empty())
    }
}
