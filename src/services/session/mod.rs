// Session service
// One authoritative session resolution per navigation, no ambient reads

use crate::models::user::{Role, User};

/// The browser-storage collaborator, made explicit so resolution is the
/// only code that touches it.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn cached_user(&self) -> Option<String>;
    fn save(&mut self, token: &str, user_json: &str);
    fn clear(&mut self);
}

/// Plain in-memory store, for tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Option<String>,
    user_json: Option<String>,
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn cached_user(&self) -> Option<String> {
        self.user_json.clone()
    }

    fn save(&mut self, token: &str, user_json: &str) {
        self.token = Some(token.to_string());
        self.user_json = Some(user_json.to_string());
    }

    fn clear(&mut self) {
        self.token = None;
        self.user_json = None;
    }
}

/// The single `{authenticated, role}` truth routing consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSession {
    pub user: Option<User>,
}

impl ResolvedSession {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// What the router does with a gated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Granted,
    RedirectToLogin,
    Unauthorized,
}

/// Resolve the session once, from the store, at navigation time.
///
/// A token whose cached user no longer parses is a broken session: the
/// store is cleared and the user lands at login instead of half
/// signed-in. A missing token or missing cached user is just anonymous.
pub fn resolve_session<S: SessionStore>(store: &mut S) -> ResolvedSession {
    if store.token().is_none() {
        return ResolvedSession::anonymous();
    }
    let user_json = match store.cached_user() {
        Some(json) => json,
        None => return ResolvedSession::anonymous(),
    };

    // Token presence alone is not identity; the cached profile must parse.
    match serde_json::from_str::<User>(&user_json) {
        Ok(user) => ResolvedSession { user: Some(user) },
        Err(err) => {
            log::warn!("failed to parse cached user, clearing session: {}", err);
            store.clear();
            ResolvedSession::anonymous()
        }
    }
}

/// Store the freshly signed-in user. Serialization of a `User` cannot
/// fail, so this never partially writes.
pub fn establish<S: SessionStore>(store: &mut S, token: &str, user: &User) {
    let user_json = serde_json::to_string(user).expect("User serializes to JSON");
    store.save(token, &user_json);
}

pub fn sign_out<S: SessionStore>(store: &mut S) {
    store.clear();
}

/// Gate a route against the resolved session. An empty role list means
/// any signed-in user may pass.
pub fn check_route(session: &ResolvedSession, allowed_roles: &[Role]) -> RouteDecision {
    let role = match session.role() {
        Some(role) => role,
        None => return RouteDecision::RedirectToLogin,
    };

    if allowed_roles.is_empty() || allowed_roles.contains(&role) {
        RouteDecision::Granted
    } else {
        RouteDecision::Unauthorized
    }
}
