/// Session token issuing and the current-user binding
///
/// Tokens are opaque strings: time-based entropy plus a random suffix,
/// unique within a runtime session. Nothing ever verifies them again;
/// identity lives in the stored current-user binding, which each login
/// overwrites wholesale.
///
/// # Storage
///
/// Two entries in the key-value store:
/// - `token`: the bare token string of the most recent login
/// - `mock_user`: the bound user's profile as JSON
use std::sync::Arc;

use ledgerlens_shared::models::user::User;
use rand::Rng;

use super::store::KeyValueStore;

const TOKEN_KEY: &str = "token";
const CURRENT_USER_KEY: &str = "mock_user";

const TOKEN_SUFFIX_LEN: usize = 9;
const TOKEN_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Issues bearer tokens and tracks who is logged in
pub struct SessionIssuer {
    store: Arc<dyn KeyValueStore>,
}

impl SessionIssuer {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Produces a fresh opaque token
    ///
    /// Format: `mock_token_{millis}_{suffix}` with a 9-character random
    /// base-36 suffix. Not cryptographic; uniqueness within one session is
    /// all the simulation needs.
    pub fn issue(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..TOKEN_SUFFIX_LEN)
            .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
            .collect();
        format!("mock_token_{}_{}", millis, suffix)
    }

    /// Records a user as the current session
    ///
    /// Replaces any previous binding entirely.
    pub fn bind(&self, token: &str, user: &User) {
        self.store.write(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.store.write(CURRENT_USER_KEY, &json),
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize current user, session left unbound")
            }
        }
    }

    /// The user bound by the most recent login, if any
    ///
    /// Unreadable stored state reads as unbound.
    pub fn bound_user(&self) -> Option<User> {
        let raw = self.store.read(CURRENT_USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored current user is unreadable, treating as unbound");
                None
            }
        }
    }

    /// Drops the token and the current-user binding
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(CURRENT_USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::store::MemoryStore;
    use chrono::Utc;

    fn issuer() -> SessionIssuer {
        SessionIssuer::new(Arc::new(MemoryStore::new()))
    }

    fn demo_user() -> User {
        User {
            id: 1,
            email: "demo@example.com".to_string(),
            full_name: Some("Demo User".to_string()),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_format() {
        let token = issuer().issue();
        let parts: Vec<&str> = token.splitn(3, '_').collect();

        assert_eq!(parts[0], "mock");
        assert!(token.starts_with("mock_token_"));

        let tail = token.strip_prefix("mock_token_").unwrap();
        let (millis, suffix) = tail.split_once('_').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), TOKEN_SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let issuer = issuer();
        let first = issuer.issue();
        let second = issuer.issue();
        assert_ne!(first, second);
    }

    #[test]
    fn test_bind_and_lookup() {
        let issuer = issuer();
        assert!(issuer.bound_user().is_none());

        let user = demo_user();
        let token = issuer.issue();
        issuer.bind(&token, &user);

        let bound = issuer.bound_user().unwrap();
        assert_eq!(bound.email, user.email);
        assert_eq!(bound.id, user.id);
    }

    #[test]
    fn test_rebind_overwrites_wholesale() {
        let issuer = issuer();
        issuer.bind(&issuer.issue(), &demo_user());

        let other = User {
            id: 99,
            email: "second@example.com".to_string(),
            full_name: None,
            is_active: true,
            created_at: Utc::now(),
        };
        issuer.bind(&issuer.issue(), &other);

        assert_eq!(issuer.bound_user().unwrap().id, 99);
    }

    #[test]
    fn test_clear_unbinds() {
        let issuer = issuer();
        issuer.bind(&issuer.issue(), &demo_user());
        issuer.clear();
        assert!(issuer.bound_user().is_none());
    }

    #[test]
    fn test_unreadable_binding_is_unbound() {
        let store = Arc::new(MemoryStore::new());
        store.write("mock_user", "{not json");

        let issuer = SessionIssuer::new(store);
        assert!(issuer.bound_user().is_none());
    }
}
