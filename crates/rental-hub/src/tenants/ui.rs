use super::lenient;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Tenant record in the shape consumed by forms and views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiTenantRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub tenant_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub phone_verified: bool,
    pub date_of_birth: DateOfBirth,
    #[serde(deserialize_with = "lenient::string")]
    pub id_number: String,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id_attachment: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub emergency_contact_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub emergency_contact_phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_last_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_relationship: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub guarantor_address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub notes: String,
    #[serde(deserialize_with = "lenient::string")]
    pub created_by: String,
    #[serde(deserialize_with = "lenient::string")]
    pub created_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub modified_by: String,
    #[serde(deserialize_with = "lenient::string")]
    pub modified_date: String,
}

/// Date of birth as captured by a form.
///
/// Date pickers hand over structured values while text inputs and hydrated API
/// records carry strings. Text is never parsed: it is assumed to already be
/// ISO-8601 and only its date segment is kept when sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOfBirth {
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl Default for DateOfBirth {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl DateOfBirth {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(raw) if raw.is_empty())
    }

    /// Calendar date in `YYYY-MM-DD` form, or `None` when nothing was entered.
    pub fn api_date(&self) -> Option<String> {
        match self {
            Self::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            Self::Timestamp(timestamp) => {
                Some(timestamp.date_naive().format("%Y-%m-%d").to_string())
            }
            Self::Text(raw) if raw.is_empty() => None,
            Self::Text(raw) => {
                let date = raw.split_once('T').map_or(raw.as_str(), |(date, _)| date);
                Some(date.to_string())
            }
        }
    }
}

impl From<NaiveDate> for DateOfBirth {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for DateOfBirth {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&str> for DateOfBirth {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateOfBirth {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Serialize for DateOfBirth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            Self::Timestamp(timestamp) => {
                serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Text(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for DateOfBirth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Strings stay text so offsets in timestamps are never reinterpreted.
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(lenient::scalar_text(value)
            .map(Self::Text)
            .unwrap_or_default())
    }
}
