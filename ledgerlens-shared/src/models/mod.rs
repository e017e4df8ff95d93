/// Wire types for the LedgerLens API
///
/// This module contains every request and response shape the backend
/// contract exposes. Field names are the wire contract; both the HTTP
/// backend and the local mock backend produce and consume these types,
/// which is what makes the two swappable behind one interface.
///
/// # Models
///
/// - `user`: User accounts and session tokens
/// - `company`: Registered companies and the region/industry catalogs
/// - `analysis`: Financial analysis requests and the generated payload
/// - `upload`: Accounting-export upload inputs and receipts
///
/// # Example
///
/// ```
/// use ledgerlens_shared::models::company::NewCompany;
/// use validator::Validate;
///
/// let company = NewCompany {
///     name: "Kea Coffee Ltd".to_string(),
///     region: "Wellington".to_string(),
///     industry: "Hospitality".to_string(),
/// };
/// assert!(company.validate().is_ok());
/// ```
pub mod analysis;
pub mod company;
pub mod upload;
pub mod user;
