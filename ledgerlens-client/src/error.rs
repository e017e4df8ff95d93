/// Error handling for the LedgerLens client
///
/// This module provides the error type both backends raise. The variants
/// are the failure modes of the backend contract itself; transport and
/// unmapped server errors only ever come out of the live path.
///
/// Display strings for the tagged variants are the exact messages the
/// product shows users, so callers can render `err.to_string()` directly.
///
/// # Example
///
/// ```
/// use ledgerlens_client::error::ApiError;
///
/// let err = ApiError::InvalidCredentials;
/// assert_eq!(err.to_string(), "Invalid email or password");
/// ```
use serde::Deserialize;

/// Client result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified client error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Login rejected: no user matches the email and password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration rejected: the email is already taken
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// No company exists with the requested ID
    #[error("Company not found")]
    CompanyNotFound(i64),

    /// A required field was missing or empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request never produced a response (connection, DNS, timeout)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status not covered above
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// Flattens `validator` field errors into one `Validation` variant
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, field_errors)| field_errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        messages.sort();

        if messages.is_empty() {
            ApiError::Validation("Invalid request".to_string())
        } else {
            ApiError::Validation(messages.join("; "))
        }
    }
}

/// Error envelope the live backend wraps failures in
///
/// The `detail` field is usually a plain message but carries a list of
/// field errors on validation failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Flattens the envelope into one displayable message
    pub fn message(&self) -> String {
        match &self.detail {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "Unknown error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            ApiError::EmailAlreadyRegistered.to_string(),
            "Email already registered"
        );
        assert_eq!(
            ApiError::CompanyNotFound(42).to_string(),
            "Company not found"
        );
        assert_eq!(
            ApiError::Validation("Company name is required".to_string()).to_string(),
            "Validation failed: Company name is required"
        );
    }

    #[test]
    fn test_from_validation_errors_collects_messages() {
        use ledgerlens_shared::models::company::NewCompany;
        use validator::Validate;

        let company = NewCompany {
            name: String::new(),
            region: String::new(),
            industry: "Retail".to_string(),
        };
        let err = ApiError::from_validation_errors(company.validate().unwrap_err());

        match err {
            ApiError::Validation(message) => {
                assert!(message.contains("Company name is required"));
                assert!(message.contains("Region is required"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_error_body_flattens_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Email already registered"}"#).unwrap();
        assert_eq!(body.message(), "Email already registered");

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","email"],"msg":"invalid"}]}"#).unwrap();
        assert!(body.message().contains("invalid"));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.message(), "Unknown error");
    }
}
