use super::lenient::parse_flag;
use super::normalizer::display_name;
use super::ui::{DateOfBirth, UiTenantRecord};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read tenant roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tenant roster data: {0}")]
    Csv(#[from] csv::Error),
}

pub fn import_roster_path<P: AsRef<Path>>(path: P) -> Result<Vec<UiTenantRecord>, RosterError> {
    let file = std::fs::File::open(path)?;
    import_roster(file)
}

/// Reads a spreadsheet export of tenants into form records.
pub fn import_roster<R: Read>(reader: R) -> Result<Vec<UiTenantRecord>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<RosterRow>() {
        records.push(row?.into_record());
    }

    debug!(count = records.len(), "imported tenant roster");
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name", default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(
        rename = "Phone Verified",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    phone_verified: Option<String>,
    #[serde(
        rename = "Date of Birth",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    date_of_birth: Option<String>,
    #[serde(rename = "ID Number", default, deserialize_with = "empty_string_as_none")]
    id_number: Option<String>,
    #[serde(
        rename = "Emergency Contact Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    emergency_contact_name: Option<String>,
    #[serde(
        rename = "Emergency Contact Phone",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    emergency_contact_phone: Option<String>,
    #[serde(
        rename = "Guarantor First Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    guarantor_first_name: Option<String>,
    #[serde(
        rename = "Guarantor Last Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    guarantor_last_name: Option<String>,
    #[serde(
        rename = "Guarantor Relationship",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    guarantor_relationship: Option<String>,
    #[serde(
        rename = "Guarantor Phone",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    guarantor_phone: Option<String>,
    #[serde(
        rename = "Guarantor Email",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    guarantor_email: Option<String>,
    #[serde(
        rename = "Guarantor Address",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    guarantor_address: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
}

impl RosterRow {
    fn into_record(self) -> UiTenantRecord {
        let first_name = tidy_name(&self.first_name);
        let last_name = self.last_name.as_deref().map(tidy_name).unwrap_or_default();
        let guarantor_first_name = self
            .guarantor_first_name
            .as_deref()
            .map(tidy_name)
            .unwrap_or_default();
        let guarantor_last_name = self
            .guarantor_last_name
            .as_deref()
            .map(tidy_name)
            .unwrap_or_default();

        UiTenantRecord {
            name: display_name(&first_name, &last_name),
            guarantor_name: display_name(&guarantor_first_name, &guarantor_last_name),
            first_name,
            last_name,
            guarantor_first_name,
            guarantor_last_name,
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            phone_verified: self.phone_verified.as_deref().is_some_and(parse_flag),
            date_of_birth: self
                .date_of_birth
                .map(DateOfBirth::Text)
                .unwrap_or_default(),
            id_number: self.id_number.unwrap_or_default(),
            emergency_contact_name: self.emergency_contact_name.unwrap_or_default(),
            emergency_contact_phone: self.emergency_contact_phone.unwrap_or_default(),
            guarantor_relationship: self.guarantor_relationship.unwrap_or_default(),
            guarantor_phone: self.guarantor_phone.unwrap_or_default(),
            guarantor_email: self.guarantor_email.unwrap_or_default(),
            guarantor_address: self.guarantor_address.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            ..UiTenantRecord::default()
        }
    }
}

/// Strips spreadsheet artifacts (BOM, zero-width spaces) and collapses runs of
/// whitespace inside a name cell.
fn tidy_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roster_rows_become_form_records() {
        let csv = "First Name,Last Name,Phone,Date of Birth,Phone Verified,Guarantor First Name,Guarantor Last Name\n\
Ana ,  Cruz,0917 123 4567,1990-05-14,yes,Jo,Reyes\n";

        let records = import_roster(Cursor::new(csv)).expect("roster imports");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.name, "Ana Cruz");
        assert_eq!(record.phone, "0917 123 4567");
        assert!(record.phone_verified);
        assert_eq!(record.date_of_birth, DateOfBirth::from("1990-05-14"));
        assert_eq!(record.guarantor_name, "Jo Reyes");
        assert_eq!(record.tenant_id, "");
    }

    #[test]
    fn empty_cells_are_absent() {
        let csv = "First Name,Last Name,Notes,ID Number\nAna,,  ,\n";
        let records = import_roster(Cursor::new(csv)).expect("roster imports");
        let record = &records[0];
        assert_eq!(record.name, "Ana");
        assert_eq!(record.notes, "");
        assert_eq!(record.id_number, "");
    }

    #[test]
    fn names_are_tidied() {
        assert_eq!(tidy_name("\u{feff}Maria   Clara"), "Maria Clara");
    }

    #[test]
    fn missing_first_name_column_is_rejected() {
        let csv = "Last Name\nCruz\n";
        let error = import_roster(Cursor::new(csv)).expect_err("first name is required");
        assert!(matches!(error, RosterError::Csv(_)));
    }

    #[test]
    fn import_from_path_propagates_io_errors() {
        let error = import_roster_path("./does-not-exist.csv").expect_err("expected io error");
        match error {
            RosterError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
