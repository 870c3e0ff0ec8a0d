//! User and session models

use serde::{Deserialize, Serialize};

/// Backend user identifier
pub type UserId = i64;

/// The locally persisted record of the signed-in user.
///
/// Nothing ties this to a server-side session: its presence alone marks the
/// user as signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: UserId,
    pub username: String,
}

impl Session {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user_id: UserId,
    pub username: String,
}

impl LoginResponse {
    /// The session record to persist after a successful login
    pub fn session(&self) -> Session {
        Session::new(self.user_id, self.username.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_serializes_to_id_and_username_only() {
        let session = Session::new(7, "a");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "username": "a" }));
    }

    #[test]
    fn login_response_without_message() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"user_id": 7, "username": "a"}"#).unwrap();
        assert_eq!(resp.message, None);
        assert_eq!(resp.session(), Session::new(7, "a"));
    }
}
