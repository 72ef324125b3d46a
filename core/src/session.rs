//! Authenticated identity for a Rocket.Chat session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Header carrying the session's auth token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// A user id + auth token pair obtained from `login` or restored from a
/// previous run.
///
/// Immutable: the client swaps the whole value, so the two fields are always
/// set together. Serializes as `{"userId": .., "authToken": ..}`, the same
/// shape the login response uses.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user_id: String,
    auth_token: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            auth_token: auth_token.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// The two auth headers, or `None` when either field is empty.
    pub fn auth_headers(&self) -> Option<[(String, String); 2]> {
        if self.user_id.is_empty() || self.auth_token.is_empty() {
            return None;
        }
        Some([
            (USER_ID_HEADER.to_string(), self.user_id.clone()),
            (AUTH_TOKEN_HEADER.to_string(), self.auth_token.clone()),
        ])
    }
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_session_yields_both_headers() {
        let headers = Session::new("U1", "T1").auth_headers().unwrap();
        assert_eq!(headers[0], ("X-User-Id".to_string(), "U1".to_string()));
        assert_eq!(headers[1], ("X-Auth-Token".to_string(), "T1".to_string()));
    }

    #[test]
    fn empty_field_yields_no_headers() {
        assert!(Session::new("", "T1").auth_headers().is_none());
        assert!(Session::new("U1", "").auth_headers().is_none());
    }

    #[test]
    fn serializes_with_login_field_names() {
        let json = serde_json::to_value(Session::new("U1", "T1")).unwrap();
        assert_eq!(json, serde_json::json!({"userId": "U1", "authToken": "T1"}));
        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back.user_id(), "U1");
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", Session::new("U1", "secret-token"));
        assert!(rendered.contains("U1"));
        assert!(!rendered.contains("secret-token"));
    }
}
