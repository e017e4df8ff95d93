/// Local backend simulation
///
/// This module simulates the entire LedgerLens backend inside the client
/// process: a key-value store stands in for the database, directories
/// enforce the backend's invariants, and a latency policy makes the whole
/// thing feel like a network. The UI-facing behavior is indistinguishable
/// from the live backend for every operation the contract covers.
///
/// # Components
///
/// - `store`: raw text persistence under fixed collection keys
/// - `session`: opaque token issuing and the current-user binding
/// - `users`: account records, uniqueness, demo seeding
/// - `companies`: company records with create/list/get/delete
/// - `analysis`: synthetic financial payload generation
/// - `latency`: injectable operation delays
///
/// # Construction
///
/// The backend is an explicit object; nothing here reads ambient global
/// state. Two instances with separate stores are fully isolated, which is
/// what lets tests run in parallel.
///
/// # Example
///
/// ```
/// use ledgerlens_client::backend::{BackendClient, MockBackend};
/// use ledgerlens_client::backend::mock::{LatencyPolicy, MemoryStore};
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let backend = MockBackend::new(Arc::new(MemoryStore::new()), LatencyPolicy::none());
///
/// // The demo account exists before anyone registers
/// let token = backend.login("demo@example.com", "demo123").await?;
/// assert!(token.access_token.starts_with("mock_token_"));
/// # Ok(())
/// # }
/// ```
pub mod analysis;
pub mod companies;
pub mod latency;
pub mod session;
pub mod store;
pub mod users;

// Re-export main types
pub use companies::{CompanyDirectory, DEFAULT_OWNER_ID};
pub use latency::{ApiOperation, LatencyPolicy};
pub use session::SessionIssuer;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use users::{UserDirectory, DEMO_EMAIL, DEMO_PASSWORD};

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::backend::client_trait::BackendClient;
use crate::error::{ApiError, ApiResult};
use ledgerlens_shared::models::analysis::{AnalysisRequest, AnalysisResponse};
use ledgerlens_shared::models::company::{Company, NewCompany};
use ledgerlens_shared::models::upload::{FileKind, UploadFile, UploadReceipt};
use ledgerlens_shared::models::user::{TokenResponse, User};

/// Simulated backend over a local key-value store
pub struct MockBackend {
    session: SessionIssuer,
    users: UserDirectory,
    companies: CompanyDirectory,
    latency: LatencyPolicy,
}

impl MockBackend {
    /// Creates a backend over the given store and latency policy
    pub fn new(store: Arc<dyn KeyValueStore>, latency: LatencyPolicy) -> Self {
        Self {
            session: SessionIssuer::new(store.clone()),
            users: UserDirectory::new(store.clone()),
            companies: CompanyDirectory::new(store),
            latency,
        }
    }

    /// Owner for new companies: the bound session's user, or the default
    fn resolve_owner_id(&self) -> i64 {
        self.session
            .bound_user()
            .map(|user| user.id)
            .unwrap_or(DEFAULT_OWNER_ID)
    }
}

#[async_trait]
impl BackendClient for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        self.latency.simulate(ApiOperation::Login).await;

        let user = self.users.find_by_credentials(email, password)?;
        let token = self.session.issue();
        self.session.bind(&token, &user);

        tracing::info!(email = %email, user_id = user.id, "mock login succeeded");
        Ok(TokenResponse::bearer(token))
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> ApiResult<User> {
        self.latency.simulate(ApiOperation::Register).await;

        let user = self.users.register(email, password, full_name)?;
        tracing::info!(email = %email, user_id = user.id, "mock registration succeeded");

        // Registration logs the new account straight in, binding the session
        // to it (and paying the login delay on top).
        self.login(email, password).await?;

        Ok(user)
    }

    async fn current_user(&self, _token: &str) -> ApiResult<User> {
        self.latency.simulate(ApiOperation::CurrentUser).await;

        // Tokens are opaque and unverified here; identity comes from the
        // stored binding, with the seeded account as the fallback.
        let user = match self.session.bound_user() {
            Some(user) => user,
            None => self.users.first_user(),
        };
        Ok(user)
    }

    async fn logout(&self) -> ApiResult<()> {
        self.session.clear();
        tracing::info!("mock session cleared");
        Ok(())
    }

    async fn list_companies(&self) -> ApiResult<Vec<Company>> {
        self.latency.simulate(ApiOperation::ListCompanies).await;
        Ok(self.companies.list_all())
    }

    async fn get_company(&self, id: i64) -> ApiResult<Company> {
        self.latency.simulate(ApiOperation::GetCompany).await;
        self.companies.get_by_id(id)
    }

    async fn create_company(&self, company: &NewCompany) -> ApiResult<Company> {
        company
            .validate()
            .map_err(ApiError::from_validation_errors)?;

        self.latency.simulate(ApiOperation::CreateCompany).await;

        let created = self.companies.create(company, self.resolve_owner_id());
        tracing::info!(
            company_id = created.id,
            name = %created.name,
            owner_id = created.owner_id,
            "mock company created"
        );
        Ok(created)
    }

    async fn delete_company(&self, id: i64) -> ApiResult<()> {
        self.latency.simulate(ApiOperation::DeleteCompany).await;
        self.companies.delete(id);
        Ok(())
    }

    async fn get_analysis(&self, request: &AnalysisRequest) -> ApiResult<AnalysisResponse> {
        self.latency.simulate(ApiOperation::Analysis).await;

        if request.company_id.is_some() || request.region.is_some() || request.industry.is_some() {
            tracing::debug!("analysis filters are ignored by the simulated backend");
        }
        Ok(analysis::generate())
    }

    async fn upload_file(&self, file: &UploadFile, company_id: i64) -> ApiResult<UploadReceipt> {
        if file.file_name.is_empty() {
            return Err(ApiError::Validation("File name is required".to_string()));
        }

        let receipt = match file.kind() {
            FileKind::Pdf => {
                self.latency.simulate(ApiOperation::UploadPdf).await;
                UploadReceipt {
                    message: format!("Successfully uploaded {}", file.file_name),
                    statements_created: 0,
                    company_id,
                    file_type: Some(FileKind::Pdf),
                    ocr_processing: Some(true),
                    note: Some(
                        "PDF file will be processed using AWS Textract/OCR to extract \
                         financial data. This may take a few minutes."
                            .to_string(),
                    ),
                }
            }
            FileKind::Spreadsheet => {
                self.latency.simulate(ApiOperation::UploadSpreadsheet).await;
                UploadReceipt {
                    message: format!("Successfully uploaded {}", file.file_name),
                    statements_created: 1,
                    company_id,
                    file_type: None,
                    ocr_processing: None,
                    note: None,
                }
            }
        };

        tracing::info!(
            file_name = %file.file_name,
            company_id,
            statements_created = receipt.statements_created,
            "mock upload accepted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> MockBackend {
        MockBackend::new(Arc::new(MemoryStore::new()), LatencyPolicy::none())
    }

    #[tokio::test]
    async fn test_register_binds_session_to_new_user() {
        let backend = backend();
        let registered = backend
            .register("aroha@example.com", "pw123", Some("Aroha Ngata"))
            .await
            .unwrap();

        let current = backend.current_user("any-token").await.unwrap();
        assert_eq!(current.id, registered.id);
        assert_eq!(current.email, "aroha@example.com");
    }

    #[tokio::test]
    async fn test_current_user_falls_back_to_demo_account() {
        let backend = backend();
        let user = backend.current_user("unused").await.unwrap();
        assert_eq!(user.email, DEMO_EMAIL);
    }

    #[tokio::test]
    async fn test_company_owner_defaults_without_session() {
        let backend = backend();
        let company = NewCompany {
            name: "Harakeke Weaving".to_string(),
            region: "Napier".to_string(),
            industry: "Retail".to_string(),
        };

        let created = backend.create_company(&company).await.unwrap();
        assert_eq!(created.owner_id, DEFAULT_OWNER_ID);
    }

    #[tokio::test]
    async fn test_company_owner_follows_session() {
        let backend = backend();
        let registered = backend
            .register("owner@example.com", "pw", None)
            .await
            .unwrap();

        let company = NewCompany {
            name: "Tui Electronics".to_string(),
            region: "Hamilton".to_string(),
            industry: "IT".to_string(),
        };
        let created = backend.create_company(&company).await.unwrap();
        assert_eq!(created.owner_id, registered.id);
    }

    #[tokio::test]
    async fn test_create_company_rejects_empty_fields() {
        let backend = backend();
        let company = NewCompany {
            name: String::new(),
            region: "Auckland".to_string(),
            industry: "Retail".to_string(),
        };

        let err = backend.create_company(&company).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file_name() {
        let backend = backend();
        let file = UploadFile::new("", &b"data"[..]);

        let err = backend.upload_file(&file, 1).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_logout_unbinds_session() {
        let backend = backend();
        backend
            .register("resa@example.com", "pw", None)
            .await
            .unwrap();
        backend.logout().await.unwrap();

        // Back to the fallback account
        let user = backend.current_user("unused").await.unwrap();
        assert_eq!(user.email, DEMO_EMAIL);
    }

    #[tokio::test]
    async fn test_two_backends_are_isolated() {
        let first = backend();
        let second = backend();

        first
            .register("only-here@example.com", "pw", None)
            .await
            .unwrap();

        let err = second.login("only-here@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }
}
