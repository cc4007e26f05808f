use super::lenient;
use serde::{Deserialize, Serialize};

/// Outbound tenant payload in the API naming convention.
///
/// Every key is always present; absent values are `""`, `null` or `false`
/// depending on the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiTenantPayload {
    #[serde(deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub family_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id_number: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub emergency_contact_name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub emergency_contact_phone: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_family_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_relationship: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_phone: String,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub guarantor_email: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub guarantor_address: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id_attachment: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub phone_verified: bool,
}

/// Tenant record as returned by the API, including server-owned metadata.
///
/// A `guarantor_name` key sent by the server is dropped on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiTenantRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub tenant_id: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub name: Option<String>,
    #[serde(flatten)]
    pub payload: ApiTenantPayload,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::audit"
    )]
    pub audit: Option<ApiAudit>,
}

impl ApiTenantRecord {
    pub fn new(tenant_id: impl Into<String>, payload: ApiTenantPayload) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            name: None,
            payload,
            audit: None,
        }
    }

    pub fn with_audit(mut self, audit: ApiAudit) -> Self {
        self.audit = Some(audit);
        self
    }
}

impl From<ApiTenantPayload> for ApiTenantRecord {
    fn from(payload: ApiTenantPayload) -> Self {
        Self::new(String::new(), payload)
    }
}

/// Creation and modification stamps owned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiAudit {
    #[serde(deserialize_with = "lenient::string")]
    pub created_by: String,
    #[serde(deserialize_with = "lenient::string")]
    pub created_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub modified_by: String,
    #[serde(deserialize_with = "lenient::string")]
    pub modified_date: String,
}
