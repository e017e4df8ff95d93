/// Core BackendClient trait
///
/// This module defines the contract both backend implementations satisfy.
/// The UI layer holds exactly one `Arc<dyn BackendClient>`, selected at
/// startup, and cannot tell the implementations apart: same methods, same
/// wire types, same error taxonomy.
///
/// # Backend Contract
///
/// All backends must:
/// 1. Return the shared wire types from `ledgerlens_shared::models`
/// 2. Raise failures through [`ApiError`](crate::error::ApiError)
/// 3. Treat every operation as independent (no cross-call transactions)
/// 4. Keep the session binding 1:1, overwritten wholesale on each login
///
/// # Example
///
/// ```no_run
/// use ledgerlens_client::backend::{self, BackendClient};
/// use ledgerlens_client::config::ClientConfig;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = ClientConfig::from_env()?;
/// let client = backend::from_config(&config)?;
///
/// let token = client.login("demo@example.com", "demo123").await?;
/// println!("logged in as bearer {}", token.access_token);
/// # Ok(())
/// # }
/// ```
use async_trait::async_trait;

use crate::error::ApiResult;
use ledgerlens_shared::models::analysis::{AnalysisRequest, AnalysisResponse};
use ledgerlens_shared::models::company::{Company, NewCompany};
use ledgerlens_shared::models::upload::{UploadFile, UploadReceipt};
use ledgerlens_shared::models::user::{TokenResponse, User};

/// Core backend trait
///
/// One instance per process; all methods take `&self` and are safe to call
/// from concurrent tasks.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Returns the backend name
    ///
    /// Used for logging and diagnostics.
    fn name(&self) -> &str;

    /// Authenticates a user and starts a session
    ///
    /// On success the backend remembers the session internally; subsequent
    /// owner-resolving operations use it.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when no user matches the email and password
    /// (exact, case-sensitive comparison on both).
    async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse>;

    /// Creates a new user account
    ///
    /// # Errors
    ///
    /// `EmailAlreadyRegistered` when the email is already taken
    /// (case-sensitive comparison).
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> ApiResult<User>;

    /// Fetches the profile behind a bearer token
    async fn current_user(&self, token: &str) -> ApiResult<User>;

    /// Ends the current session
    ///
    /// Purely client-side: the remembered session is discarded. Tokens are
    /// opaque and carry no server-side state to revoke.
    async fn logout(&self) -> ApiResult<()>;

    /// Lists every registered company in insertion order
    async fn list_companies(&self) -> ApiResult<Vec<Company>>;

    /// Fetches one company by ID
    ///
    /// # Errors
    ///
    /// `CompanyNotFound` when no company has that ID.
    async fn get_company(&self, id: i64) -> ApiResult<Company>;

    /// Registers a new company owned by the current session's user
    ///
    /// # Errors
    ///
    /// `Validation` when name, region, or industry is empty.
    async fn create_company(&self, company: &NewCompany) -> ApiResult<Company>;

    /// Deletes a company by ID
    ///
    /// Deleting an ID that does not exist is a silent no-op.
    async fn delete_company(&self, id: i64) -> ApiResult<()>;

    /// Runs a financial analysis over the requested window
    async fn get_analysis(&self, request: &AnalysisRequest) -> ApiResult<AnalysisResponse>;

    /// Uploads an accounting export for a company
    ///
    /// PDF files take the asynchronous OCR pipeline and create no
    /// statements immediately; spreadsheet files are parsed synchronously.
    ///
    /// # Errors
    ///
    /// `Validation` when the file name is empty.
    async fn upload_file(&self, file: &UploadFile, company_id: i64) -> ApiResult<UploadReceipt>;
}
