/// Company directory backed by the key-value store
///
/// Holds every registered company under the `mock_companies` key as a JSON
/// array, in insertion order. Listing is unscoped: every caller sees every
/// company, where the live backend would filter to the authenticated
/// owner.
use std::sync::{Arc, Mutex};

use chrono::Utc;
use ledgerlens_shared::models::company::{Company, NewCompany};

use super::store::KeyValueStore;
use crate::error::{ApiError, ApiResult};

const COMPANIES_KEY: &str = "mock_companies";

/// Owner assigned when no session is bound at creation time
pub const DEFAULT_OWNER_ID: i64 = 1;

/// Company collection with create/list/get/delete
pub struct CompanyDirectory {
    store: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write sequences on the companies collection
    lock: Mutex<()>,
}

impl CompanyDirectory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Loads the collection; absent or corrupt text reads as empty
    fn load(&self) -> Vec<Company> {
        match self.store.read(COMPANIES_KEY) {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored companies are unreadable, starting from an empty directory");
                Vec::new()
            }),
        }
    }

    fn persist(&self, companies: &[Company]) {
        match serde_json::to_string(companies) {
            Ok(json) => self.store.write(COMPANIES_KEY, &json),
            Err(err) => tracing::warn!(error = %err, "could not serialize companies, dropping write"),
        }
    }

    /// Every company, in insertion order
    pub fn list_all(&self) -> Vec<Company> {
        let _guard = self.lock.lock().unwrap();
        self.load()
    }

    /// One company by ID
    ///
    /// # Errors
    ///
    /// `CompanyNotFound` when no company has that ID.
    pub fn get_by_id(&self, id: i64) -> ApiResult<Company> {
        let _guard = self.lock.lock().unwrap();
        self.load()
            .into_iter()
            .find(|company| company.id == id)
            .ok_or(ApiError::CompanyNotFound(id))
    }

    /// Appends a new company owned by `owner_id`
    pub fn create(&self, company: &NewCompany, owner_id: i64) -> Company {
        let _guard = self.lock.lock().unwrap();
        let mut companies = self.load();

        // Timestamp-derived IDs; the floor keeps same-microsecond
        // creations distinct.
        let floor = companies.iter().map(|company| company.id).max().unwrap_or(0) + 1;
        let created = Company {
            id: Utc::now().timestamp_micros().max(floor),
            name: company.name.clone(),
            region: company.region.clone(),
            industry: company.industry.clone(),
            owner_id,
            created_at: Utc::now(),
            updated_at: None,
        };
        companies.push(created.clone());
        self.persist(&companies);

        tracing::debug!(company_id = created.id, name = %created.name, "company registered");
        created
    }

    /// Removes a company if it exists
    ///
    /// Deleting an unknown ID changes nothing and raises nothing.
    pub fn delete(&self, id: i64) {
        let _guard = self.lock.lock().unwrap();
        let mut companies = self.load();
        let before = companies.len();

        companies.retain(|company| company.id != id);
        if companies.len() == before {
            tracing::debug!(company_id = id, "delete for unknown company, nothing to do");
        }
        self.persist(&companies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::store::MemoryStore;

    fn directory() -> CompanyDirectory {
        CompanyDirectory::new(Arc::new(MemoryStore::new()))
    }

    fn new_company(name: &str) -> NewCompany {
        NewCompany {
            name: name.to_string(),
            region: "Tauranga".to_string(),
            industry: "Retail".to_string(),
        }
    }

    #[test]
    fn test_create_then_list() {
        let directory = directory();
        assert!(directory.list_all().is_empty());

        let created = directory.create(&new_company("Pohutukawa Surf"), 1);
        assert_eq!(created.owner_id, 1);
        assert_eq!(created.region, "Tauranga");
        assert!(created.updated_at.is_none());

        let listed = directory.list_all();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let directory = directory();
        let first = directory.create(&new_company("First"), 1);
        let second = directory.create(&new_company("Second"), 1);
        let third = directory.create(&new_company("Third"), 2);

        let names: Vec<String> = directory
            .list_all()
            .into_iter()
            .map(|company| company.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
    }

    #[test]
    fn test_get_by_id() {
        let directory = directory();
        let created = directory.create(&new_company("Fern & Thistle"), 3);

        let fetched = directory.get_by_id(created.id).unwrap();
        assert_eq!(fetched, created);

        assert!(matches!(
            directory.get_by_id(123456),
            Err(ApiError::CompanyNotFound(123456))
        ));
    }

    #[test]
    fn test_delete_removes_and_is_idempotent() {
        let directory = directory();
        let keep = directory.create(&new_company("Keeper"), 1);
        let gone = directory.create(&new_company("Goner"), 1);

        directory.delete(gone.id);
        let listed = directory.list_all();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);

        // Unknown ID: silent no-op, list unchanged
        directory.delete(gone.id);
        directory.delete(987654321);
        assert_eq!(directory.list_all().len(), 1);
    }

    #[test]
    fn test_corrupt_storage_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.write(COMPANIES_KEY, "[{ broken");

        let directory = CompanyDirectory::new(store);
        assert!(directory.list_all().is_empty());
    }
}
