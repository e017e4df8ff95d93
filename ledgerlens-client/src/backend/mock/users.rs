/// User directory backed by the key-value store
///
/// Holds every account under the `mock_users` key as a JSON array of
/// `{email, password, user}` records. Passwords are stored in plaintext
/// next to the profile; this is a simulation, not a credential store, and
/// the comparison below is the only authentication that ever happens.
///
/// The directory is append-only: accounts are never updated or deleted.
/// On first access an empty directory seeds itself with one demo account
/// so the product is usable without registering.
use std::sync::{Arc, Mutex};

use chrono::Utc;
use ledgerlens_shared::models::user::User;
use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::error::{ApiError, ApiResult};

const USERS_KEY: &str = "mock_users";

/// Email of the pre-seeded demo account
pub const DEMO_EMAIL: &str = "demo@example.com";

/// Password of the pre-seeded demo account
pub const DEMO_PASSWORD: &str = "demo123";

const DEMO_USER_ID: i64 = 1;

/// One stored account: credentials plus profile
///
/// The email appears both at the top level (for lookups) and inside the
/// profile, matching the stored layout the product has always used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub email: String,
    pub password: String,
    pub user: User,
}

fn seed_record() -> StoredUser {
    StoredUser {
        email: DEMO_EMAIL.to_string(),
        password: DEMO_PASSWORD.to_string(),
        user: User {
            id: DEMO_USER_ID,
            email: DEMO_EMAIL.to_string(),
            full_name: Some("Demo User".to_string()),
            is_active: true,
            created_at: Utc::now(),
        },
    }
}

/// Account collection with uniqueness enforcement and demo seeding
pub struct UserDirectory {
    store: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write sequences on the users collection.
    // Held only across synchronous blocks, never across an await.
    lock: Mutex<()>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Loads the collection, seeding the demo account if it is empty
    ///
    /// Absent or corrupt stored text reads as empty and triggers the seed,
    /// so the result always holds at least one record.
    fn load(&self) -> Vec<StoredUser> {
        let users: Vec<StoredUser> = match self.store.read(USERS_KEY) {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored users are unreadable, starting from an empty directory");
                Vec::new()
            }),
        };

        if !users.is_empty() {
            return users;
        }

        tracing::info!(email = DEMO_EMAIL, "seeding demo account");
        let seeded = vec![seed_record()];
        self.persist(&seeded);
        seeded
    }

    fn persist(&self, users: &[StoredUser]) {
        match serde_json::to_string(users) {
            Ok(json) => self.store.write(USERS_KEY, &json),
            Err(err) => tracing::warn!(error = %err, "could not serialize users, dropping write"),
        }
    }

    /// Looks up an account by exact email and password
    ///
    /// Case-sensitive on both fields, and the only credential check the
    /// mock performs.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when no account matches.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> ApiResult<User> {
        let _guard = self.lock.lock().unwrap();
        self.load()
            .iter()
            .find(|stored| stored.email == email && stored.password == password)
            .map(|stored| stored.user.clone())
            .ok_or(ApiError::InvalidCredentials)
    }

    /// Looks up a profile by exact email
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let _guard = self.lock.lock().unwrap();
        Self::profile_for(&self.load(), email)
    }

    // Shared with `register`, which already holds the collection lock and
    // so cannot go through `find_by_email`.
    fn profile_for(users: &[StoredUser], email: &str) -> Option<User> {
        users
            .iter()
            .find(|stored| stored.email == email)
            .map(|stored| stored.user.clone())
    }

    /// Appends a new account
    ///
    /// # Errors
    ///
    /// `EmailAlreadyRegistered` when the email is taken.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> ApiResult<User> {
        let _guard = self.lock.lock().unwrap();
        let mut users = self.load();

        if Self::profile_for(&users, email).is_some() {
            return Err(ApiError::EmailAlreadyRegistered);
        }

        // Timestamp-derived IDs; the floor keeps same-microsecond
        // registrations distinct.
        let floor = users.iter().map(|stored| stored.user.id).max().unwrap_or(0) + 1;
        let user = User {
            id: Utc::now().timestamp_micros().max(floor),
            email: email.to_string(),
            full_name: full_name.map(Into::into),
            is_active: true,
            created_at: Utc::now(),
        };
        users.push(StoredUser {
            email: email.to_string(),
            password: password.to_string(),
            user: user.clone(),
        });
        self.persist(&users);

        tracing::debug!(email = %email, user_id = user.id, "account registered");
        Ok(user)
    }

    /// First profile in the directory, the seeded demo account on a fresh
    /// store
    ///
    /// Used as the current-user fallback when no session is bound.
    pub fn first_user(&self) -> User {
        let _guard = self.lock.lock().unwrap();
        self.load()
            .first()
            .map(|stored| stored.user.clone())
            .unwrap_or_else(|| seed_record().user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::store::MemoryStore;

    fn directory() -> UserDirectory {
        UserDirectory::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_seeds_demo_account_on_first_access() {
        let directory = directory();
        let user = directory
            .find_by_credentials(DEMO_EMAIL, DEMO_PASSWORD)
            .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.full_name.as_deref(), Some("Demo User"));
        assert!(user.is_active);
    }

    #[test]
    fn test_credentials_are_case_sensitive() {
        let directory = directory();
        assert!(matches!(
            directory.find_by_credentials("Demo@Example.com", DEMO_PASSWORD),
            Err(ApiError::InvalidCredentials)
        ));
        assert!(matches!(
            directory.find_by_credentials(DEMO_EMAIL, "DEMO123"),
            Err(ApiError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_rejects_taken_email() {
        let directory = directory();
        assert!(matches!(
            directory.register(DEMO_EMAIL, "whatever", None),
            Err(ApiError::EmailAlreadyRegistered)
        ));
    }

    #[test]
    fn test_find_by_email() {
        let directory = directory();
        let seeded = directory.find_by_email(DEMO_EMAIL).unwrap();
        assert_eq!(seeded.id, 1);

        assert!(directory.find_by_email("nobody@example.com").is_none());

        let registered = directory
            .register("rangi@ledgerlens.nz", "pw", None)
            .unwrap();
        let found = directory.find_by_email("rangi@ledgerlens.nz").unwrap();
        assert_eq!(found.id, registered.id);
    }

    #[test]
    fn test_register_then_login() {
        let directory = directory();
        let registered = directory
            .register("kiri@ledgerlens.nz", "s3cret", Some("Kiri Waititi"))
            .unwrap();
        assert!(registered.id > 1);
        assert_eq!(registered.full_name.as_deref(), Some("Kiri Waititi"));

        let found = directory
            .find_by_credentials("kiri@ledgerlens.nz", "s3cret")
            .unwrap();
        assert_eq!(found.id, registered.id);
    }

    #[test]
    fn test_registered_ids_are_distinct() {
        let directory = directory();
        let first = directory.register("a@example.com", "pw", None).unwrap();
        let second = directory.register("b@example.com", "pw", None).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_corrupt_storage_reads_as_fresh_directory() {
        let store = Arc::new(MemoryStore::new());
        store.write(USERS_KEY, "{{{ definitely not json");

        let directory = UserDirectory::new(store);
        // Fail-open: the corrupt blob is discarded and the seed re-applied
        assert!(directory
            .find_by_credentials(DEMO_EMAIL, DEMO_PASSWORD)
            .is_ok());
    }

    #[test]
    fn test_stored_shape_is_stable() {
        let store = Arc::new(MemoryStore::new());
        let directory = UserDirectory::new(store.clone());
        directory.first_user();

        let raw = store.read(USERS_KEY).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[0]["email"], DEMO_EMAIL);
        assert_eq!(parsed[0]["password"], DEMO_PASSWORD);
        assert_eq!(parsed[0]["user"]["email"], DEMO_EMAIL);
    }
}
