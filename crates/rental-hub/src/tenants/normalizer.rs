use super::ui::{DateOfBirth, UiTenantRecord};
use super::wire::{ApiTenantPayload, ApiTenantRecord};
use serde_json::Value;
use tracing::{debug, warn};

/// Converts a form record into the outbound API payload.
pub fn to_api(record: &UiTenantRecord) -> ApiTenantPayload {
    ApiTenantPayload {
        first_name: record.first_name.clone(),
        family_name: record.last_name.clone(),
        email: record.email.clone(),
        phone: clean_phone(&record.phone),
        date_of_birth: api_date_of_birth(&record.date_of_birth),
        id_number: present(&record.id_number),
        emergency_contact_name: present(&record.emergency_contact_name),
        emergency_contact_phone: present(&record.emergency_contact_phone)
            .map(|phone| clean_phone(&phone)),
        guarantor_first_name: record.guarantor_first_name.clone(),
        guarantor_family_name: record.guarantor_last_name.clone(),
        guarantor_relationship: record.guarantor_relationship.clone(),
        guarantor_phone: clean_phone(&record.guarantor_phone),
        guarantor_email: present(&record.guarantor_email),
        guarantor_address: present(&record.guarantor_address),
        notes: present(&record.notes),
        id_attachment: record.id_attachment.as_deref().and_then(present),
        phone_verified: record.phone_verified,
    }
}

/// Like [`to_api`] for arbitrary JSON; anything that is not a readable record
/// is treated as a record with every field absent.
pub fn to_api_value(value: &Value) -> ApiTenantPayload {
    to_api(&read_or_default::<UiTenantRecord>(value))
}

/// Converts an API record into the shape consumed by forms and views.
pub fn from_api(record: &ApiTenantRecord) -> UiTenantRecord {
    let payload = &record.payload;
    let audit = record.audit.clone().unwrap_or_default();

    let name = match record.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => display_name(&payload.first_name, &payload.family_name),
    };

    UiTenantRecord {
        tenant_id: record.tenant_id.clone(),
        first_name: payload.first_name.clone(),
        last_name: payload.family_name.clone(),
        name,
        email: payload.email.clone(),
        phone: payload.phone.clone(),
        phone_verified: payload.phone_verified,
        date_of_birth: DateOfBirth::Text(payload.date_of_birth.clone().unwrap_or_default()),
        id_number: payload.id_number.clone().unwrap_or_default(),
        id_attachment: payload.id_attachment.clone(),
        emergency_contact_name: payload.emergency_contact_name.clone().unwrap_or_default(),
        emergency_contact_phone: payload.emergency_contact_phone.clone().unwrap_or_default(),
        guarantor_first_name: payload.guarantor_first_name.clone(),
        guarantor_last_name: payload.guarantor_family_name.clone(),
        guarantor_name: display_name(
            &payload.guarantor_first_name,
            &payload.guarantor_family_name,
        ),
        guarantor_relationship: payload.guarantor_relationship.clone(),
        guarantor_phone: payload.guarantor_phone.clone(),
        guarantor_email: payload.guarantor_email.clone().unwrap_or_default(),
        guarantor_address: payload.guarantor_address.clone().unwrap_or_default(),
        notes: payload.notes.clone().unwrap_or_default(),
        created_by: audit.created_by,
        created_date: audit.created_date,
        modified_by: audit.modified_by,
        modified_date: audit.modified_date,
    }
}

/// Like [`from_api`] for arbitrary JSON.
pub fn from_api_value(value: &Value) -> UiTenantRecord {
    from_api(&read_or_default::<ApiTenantRecord>(value))
}

/// Hydrates every element of a JSON array, keeping order and length.
///
/// Anything other than an array yields an empty list.
pub fn from_api_list(value: &Value) -> Vec<UiTenantRecord> {
    match value {
        Value::Array(records) => records.iter().map(from_api_value).collect(),
        other => {
            if !other.is_null() {
                warn!(kind = json_kind(other), "expected a list of tenant records");
            }
            Vec::new()
        }
    }
}

/// Removes every whitespace character; other punctuation is kept.
pub fn clean_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Joins first and last name with a single space, trimming the result so a
/// missing part leaves no dangling space.
pub fn display_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_string()
}

fn api_date_of_birth(date_of_birth: &DateOfBirth) -> Option<String> {
    let date = date_of_birth.api_date();
    if let (DateOfBirth::Text(raw), Some(date)) = (date_of_birth, date.as_deref()) {
        // Text is passed through unparsed; surface odd values without changing them.
        if !looks_like_calendar_date(date) {
            debug!(raw = %raw, "date of birth text is not YYYY-MM-DD");
        }
    }
    date
}

fn looks_like_calendar_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| index == 4 || index == 7 || byte.is_ascii_digit())
}

fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn read_or_default<T>(value: &Value) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match value {
        Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
            warn!(error = %err, "unreadable tenant record, using empty defaults");
            T::default()
        }),
        _ => T::default(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tenants::wire::ApiAudit;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn phones_lose_whitespace_but_keep_punctuation() {
        assert_eq!(clean_phone("+63 (917) 123\t4567"), "+63(917)1234567");
    }

    #[test]
    fn emergency_phone_is_null_when_absent_and_cleaned_when_present() {
        let empty = to_api(&UiTenantRecord::default());
        assert_eq!(empty.emergency_contact_phone, None);
        assert_eq!(empty.phone, "");
        assert_eq!(empty.guarantor_phone, "");

        let record = UiTenantRecord {
            emergency_contact_phone: "0918 555 0000".to_string(),
            guarantor_phone: " 02 8123 4567 ".to_string(),
            ..UiTenantRecord::default()
        };
        let payload = to_api(&record);
        assert_eq!(payload.emergency_contact_phone.as_deref(), Some("09185550000"));
        assert_eq!(payload.guarantor_phone, "0281234567");
    }

    #[test]
    fn structured_dates_become_calendar_dates() {
        let record = UiTenantRecord {
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 14)
                .expect("valid date")
                .into(),
            ..UiTenantRecord::default()
        };
        assert_eq!(to_api(&record).date_of_birth.as_deref(), Some("1990-05-14"));
    }

    #[test]
    fn malformed_text_dates_pass_through_unvalidated() {
        let record = UiTenantRecord {
            date_of_birth: "14/05/1990".into(),
            ..UiTenantRecord::default()
        };
        assert_eq!(to_api(&record).date_of_birth.as_deref(), Some("14/05/1990"));
    }

    #[test]
    fn source_name_wins_over_synthesized_name() {
        let record = ApiTenantRecord {
            name: Some("Ana Maria Cruz".to_string()),
            payload: ApiTenantPayload {
                first_name: "Ana".to_string(),
                family_name: "Cruz".to_string(),
                ..ApiTenantPayload::default()
            },
            ..ApiTenantRecord::default()
        };
        assert_eq!(from_api(&record).name, "Ana Maria Cruz");
    }

    #[test]
    fn audit_fields_are_copied_from_nested_record() {
        let record = ApiTenantRecord::default().with_audit(ApiAudit {
            created_by: "admin".to_string(),
            created_date: "2025-01-02T03:04:05Z".to_string(),
            modified_by: "leasing".to_string(),
            modified_date: "2025-02-03T04:05:06Z".to_string(),
        });
        let ui = from_api(&record);
        assert_eq!(ui.created_by, "admin");
        assert_eq!(ui.modified_date, "2025-02-03T04:05:06Z");
    }

    #[test]
    fn missing_record_normalizes_like_an_empty_one() {
        assert_eq!(to_api_value(&Value::Null), to_api(&UiTenantRecord::default()));
        assert_eq!(from_api_value(&json!(7)), from_api(&ApiTenantRecord::default()));
    }

    #[test]
    fn list_keeps_non_object_elements_as_empty_records() {
        let records = from_api_list(&json!([{ "first_name": "Ana" }, null, "junk"]));
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Ana");
        assert_eq!(records[1], from_api(&ApiTenantRecord::default()));
        assert_eq!(records[2].name, "");
    }

    #[test]
    fn calendar_date_shape_check() {
        assert!(looks_like_calendar_date("1990-05-14"));
        assert!(!looks_like_calendar_date("1990-5-14"));
        assert!(!looks_like_calendar_date("14/05/1990"));
    }
}
