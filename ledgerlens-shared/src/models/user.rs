/// User account and session token types
///
/// A [`User`] is the profile record returned by login, registration, and the
/// current-user lookup. Passwords never appear on this type; the mock keeps
/// them alongside the profile in its own storage and the live backend never
/// returns them at all.
///
/// # Example
///
/// ```
/// use ledgerlens_shared::models::user::TokenResponse;
///
/// let token = TokenResponse::bearer("mock_token_1700000000000_a1b2c3d4e");
/// assert_eq!(token.token_type, "bearer");
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account as the API returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, derived from the creation timestamp
    pub id: i64,

    /// Email address, unique across all users
    ///
    /// Stored and compared case-sensitively
    pub email: String,

    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Whether the account is active
    pub is_active: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Bearer token returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque token presented on authenticated requests
    pub access_token: String,

    /// Token scheme, always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    /// Wraps an access token in the bearer scheme
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_type() {
        let token = TokenResponse::bearer("abc123");
        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_user_serialization_field_names() {
        let user = User {
            id: 1,
            email: "demo@example.com".to_string(),
            full_name: Some("Demo User".to_string()),
            is_active: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "demo@example.com");
        assert_eq!(json["full_name"], "Demo User");
        assert_eq!(json["is_active"], true);
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn test_user_missing_full_name_round_trips() {
        let json = r#"{"id":42,"email":"a@b.nz","is_active":true,"created_at":"2024-01-15T09:30:00.000Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.full_name.is_none());

        let back = serde_json::to_value(&user).unwrap();
        assert!(back.get("full_name").is_none());
    }
}
