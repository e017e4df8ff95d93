/// Live backend over HTTP
///
/// Talks to a real LedgerLens API server with a long-lived, connection-
/// pooled `reqwest::Client`. The bearer token from the most recent login
/// is remembered in-process and attached to authenticated requests;
/// `logout` forgets it.
///
/// # Endpoints
///
/// - `POST /api/v1/auth/login`, `POST /api/v1/auth/register`
/// - `GET  /api/v1/auth/me`
/// - `GET/POST /api/v1/companies`, `GET/DELETE /api/v1/companies/{id}`
/// - `POST /api/v1/analysis/financial-analysis`
/// - `POST /api/v1/upload/pdf-ocr`, `POST /api/v1/upload/csv-excel`
///   (multipart, `company_id` as a query parameter)
///
/// # Error mapping
///
/// Server failures arrive as `{"detail": ...}` envelopes. Statuses that
/// correspond to tagged contract errors are mapped onto them (401 on login
/// to `InvalidCredentials`, 404 on company lookups to `CompanyNotFound`,
/// and so on) so callers handle the live and mock paths identically.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, StatusCode};
use serde_json::json;
use tokio::sync::RwLock;
use validator::Validate;

use crate::backend::client_trait::BackendClient;
use crate::error::{ApiError, ApiResult, ErrorBody};
use ledgerlens_shared::models::analysis::{AnalysisRequest, AnalysisResponse};
use ledgerlens_shared::models::company::{Company, NewCompany};
use ledgerlens_shared::models::upload::{FileKind, UploadFile, UploadReceipt};
use ledgerlens_shared::models::user::{TokenResponse, User};

/// Live backend implementation (connection-pooled)
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    bearer: RwLock<Option<String>>,
}

impl HttpBackend {
    /// Creates a backend for the given base URL
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            bearer: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the remembered bearer token, if a login happened
    async fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer.read().await.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Reads the error envelope, falling back to a generic message
    async fn error_message(response: reqwest::Response) -> String {
        match response.json::<ErrorBody>().await {
            Ok(body) => body.message(),
            Err(_) => "Unknown error".to_string(),
        }
    }

    /// Maps a non-success response onto the error taxonomy
    async fn error_from(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let message = Self::error_message(response).await;

        match status {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(message),
            _ => ApiError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl BackendClient for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        tracing::debug!(email = %email, "calling POST /api/v1/auth/login");
        let response = self
            .client
            .post(self.url("/api/v1/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::InvalidCredentials);
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let token: TokenResponse = response.json().await?;
        *self.bearer.write().await = Some(token.access_token.clone());

        tracing::info!(email = %email, "login succeeded");
        Ok(token)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> ApiResult<User> {
        tracing::debug!(email = %email, "calling POST /api/v1/auth/register");
        let response = self
            .client
            .post(self.url("/api/v1/auth/register"))
            .json(&json!({
                "email": email,
                "password": password,
                "full_name": full_name,
            }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(ApiError::EmailAlreadyRegistered);
        }
        if status == StatusCode::BAD_REQUEST {
            let message = Self::error_message(response).await;
            if message.to_lowercase().contains("already registered") {
                return Err(ApiError::EmailAlreadyRegistered);
            }
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(response.json().await?)
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        let response = self
            .client
            .get(self.url("/api/v1/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn logout(&self) -> ApiResult<()> {
        *self.bearer.write().await = None;
        tracing::info!("bearer token forgotten");
        Ok(())
    }

    async fn list_companies(&self) -> ApiResult<Vec<Company>> {
        let request = self.client.get(self.url("/api/v1/companies"));
        let response = self.authorized(request).await.send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get_company(&self, id: i64) -> ApiResult<Company> {
        let request = self.client.get(self.url(&format!("/api/v1/companies/{}", id)));
        let response = self.authorized(request).await.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::CompanyNotFound(id));
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create_company(&self, company: &NewCompany) -> ApiResult<Company> {
        company
            .validate()
            .map_err(ApiError::from_validation_errors)?;

        let request = self.client.post(self.url("/api/v1/companies")).json(company);
        let response = self.authorized(request).await.send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_company(&self, id: i64) -> ApiResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("/api/v1/companies/{}", id)));
        let response = self.authorized(request).await.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::CompanyNotFound(id));
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    async fn get_analysis(&self, request: &AnalysisRequest) -> ApiResult<AnalysisResponse> {
        tracing::debug!("calling POST /api/v1/analysis/financial-analysis");
        let builder = self
            .client
            .post(self.url("/api/v1/analysis/financial-analysis"))
            .json(request);
        let response = self.authorized(builder).await.send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn upload_file(&self, file: &UploadFile, company_id: i64) -> ApiResult<UploadReceipt> {
        if file.file_name.is_empty() {
            return Err(ApiError::Validation("File name is required".to_string()));
        }

        let path = match file.kind() {
            FileKind::Pdf => "/api/v1/upload/pdf-ocr",
            FileKind::Spreadsheet => "/api/v1/upload/csv-excel",
        };
        tracing::debug!(file_name = %file.file_name, path, "uploading file");

        let part = multipart::Part::bytes(file.bytes.to_vec()).file_name(file.file_name.clone());
        let form = multipart::Form::new().part("file", part);

        let request = self
            .client
            .post(self.url(path))
            .query(&[("company_id", company_id)])
            .multipart(form);
        let response = self.authorized(request).await.send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }
}
