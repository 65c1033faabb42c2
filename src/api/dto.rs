//! Request and response bodies exchanged with the backend

use serde::{Deserialize, Serialize};

/// `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: String,
}

/// Reply to login and register. Success carries `token`, failure `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Failure body, `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_is_camel_case() {
        let body = RegisterRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            full_name: "Ada".into(),
            user_type: "student".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fullName"], "Ada");
        assert_eq!(json["userType"], "student");
    }

    #[test]
    fn test_auth_response_tolerates_missing_fields() {
        let resp: AuthResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, AuthResponse::default());

        let resp: AuthResponse = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(resp.error.as_deref(), Some("Invalid credentials"));
    }
}
