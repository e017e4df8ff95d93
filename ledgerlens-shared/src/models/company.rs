/// Company registry types
///
/// Companies are the unit every analysis and upload hangs off. A company
/// belongs to the user who registered it via `owner_id`, though the mock
/// backend does not enforce the reference.
///
/// # Example
///
/// ```
/// use ledgerlens_shared::models::company::{NewCompany, REGIONS};
/// use validator::Validate;
///
/// let company = NewCompany {
///     name: "Totara Timber".to_string(),
///     region: REGIONS[0].to_string(),
///     industry: "Manufacturing".to_string(),
/// };
/// assert!(company.validate().is_ok());
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Regions offered by the company registration form
///
/// Creation does not restrict values to this list; it exists for UI pickers.
pub const REGIONS: &[&str] = &[
    "Auckland",
    "Wellington",
    "Christchurch",
    "Hamilton",
    "Tauranga",
    "Dunedin",
    "Palmerston North",
    "Napier",
    "Other",
];

/// Industries offered by the company registration form
pub const INDUSTRIES: &[&str] = &[
    "Retail",
    "Hospitality",
    "IT",
    "Manufacturing",
    "Construction",
    "Healthcare",
    "Education",
    "Finance",
    "Real Estate",
    "Agriculture",
    "Transport",
    "Other",
];

/// Registered company as the API returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company ID, derived from the creation timestamp
    pub id: i64,

    /// Trading name
    pub name: String,

    /// Region the company operates in
    pub region: String,

    /// Industry sector
    pub industry: String,

    /// ID of the user who registered the company
    ///
    /// References `User::id` but is not enforced
    pub owner_id: i64,

    /// When the company was registered
    pub created_at: DateTime<Utc>,

    /// When the company was last updated, if ever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for registering a new company
///
/// All three fields are required and must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCompany {
    /// Trading name
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,

    /// Region the company operates in
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,

    /// Industry sector
    #[validate(length(min = 1, message = "Industry is required"))]
    pub industry: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_company_valid() {
        let company = NewCompany {
            name: "Kowhai Books".to_string(),
            region: "Dunedin".to_string(),
            industry: "Retail".to_string(),
        };
        assert!(company.validate().is_ok());
    }

    #[test]
    fn test_new_company_rejects_empty_fields() {
        let company = NewCompany {
            name: String::new(),
            region: "Auckland".to_string(),
            industry: "Retail".to_string(),
        };
        assert!(company.validate().is_err());

        let company = NewCompany {
            name: "Harbour Freight".to_string(),
            region: String::new(),
            industry: String::new(),
        };
        let err = company.validate().unwrap_err();
        assert!(err.field_errors().contains_key("region"));
        assert!(err.field_errors().contains_key("industry"));
    }

    #[test]
    fn test_catalogs_end_with_other() {
        assert_eq!(REGIONS.last(), Some(&"Other"));
        assert_eq!(INDUSTRIES.last(), Some(&"Other"));
    }

    #[test]
    fn test_company_omits_absent_updated_at() {
        let company = Company {
            id: 1,
            name: "Moa Brewing".to_string(),
            region: "Nelson".to_string(),
            industry: "Hospitality".to_string(),
            owner_id: 1,
            created_at: Utc::now(),
            updated_at: None,
        };
        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["owner_id"], 1);
    }
}
