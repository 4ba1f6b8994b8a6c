//! Auth-session state for the admin operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component switches between the Login and Dashboard views from
//! this state. Every authorized request reads its bearer token from here.
//!
//! DESIGN
//! ======
//! The token lives in one explicit object with `restore`/`begin`/`logout`
//! lifecycle methods. Persistence goes through [`TokenStore`] so the state
//! machine runs the same against `sessionStorage` and an in-memory store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api;
use crate::net::error::ApiError;

/// Credentials accepted when no API base is configured. Local preview only.
pub const DEMO_EMAIL: &str = "admin@yousha.local";
pub const DEMO_PASSWORD: &str = "yousha-demo";
pub const DEMO_TOKEN: &str = "local-demo-token";

const DEMO_REJECTED: &str = "Invalid local demo credentials.";
const LOGIN_FAILED: &str = "Login failed";

/// Persistence for the bearer token across page reloads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// The two mutually exclusive top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminView {
    #[default]
    Login,
    Dashboard,
}

/// Current session: an optional bearer token plus whether startup restore
/// has run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    /// `false` until [`SessionState::restore`] runs in the browser.
    pub restored: bool,
}

impl SessionState {
    /// Load a previously persisted token, if any.
    pub fn restore(&mut self, store: &impl TokenStore) -> Option<&str> {
        self.token = store.load().filter(|t| !t.is_empty());
        self.restored = true;
        self.token.as_deref()
    }

    /// Enter the logged-in state with a freshly issued token.
    pub fn begin(&mut self, token: String, store: &impl TokenStore) {
        store.save(&token);
        self.token = Some(token);
        self.restored = true;
    }

    /// Drop the token and its persisted copy.
    pub fn logout(&mut self, store: &impl TokenStore) {
        store.clear();
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn view(&self) -> AdminView {
        if self.token.is_some() { AdminView::Dashboard } else { AdminView::Login }
    }
}

/// Check credentials against the built-in demo pair.
///
/// # Errors
///
/// Returns [`ApiError::Auth`] unless both values match exactly.
pub fn demo_login(email: &str, password: &str) -> Result<String, ApiError> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(DEMO_TOKEN.to_owned())
    } else {
        Err(ApiError::Auth(DEMO_REJECTED.to_owned()))
    }
}

/// Obtain a token: demo credentials when `api_base` is `None`, otherwise the
/// login endpoint.
///
/// # Errors
///
/// Returns [`ApiError::Auth`] for rejected credentials, or whatever the
/// login request failed with.
pub async fn authenticate(api_base: Option<&str>, email: &str, password: &str) -> Result<String, ApiError> {
    match api_base {
        None => demo_login(email, password),
        Some(base) => api::login(base, email, password).await,
    }
}

/// Text shown under the login form for a failed attempt.
pub fn login_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Auth(message) | ApiError::Network(message) | ApiError::Status { message, .. } => message.clone(),
        ApiError::Parse(_) | ApiError::Unavailable => LOGIN_FAILED.to_owned(),
    }
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
