//! Tenant records in their UI and API shapes, and the mapping between them.

pub mod directory;
pub(crate) mod lenient;
pub mod normalizer;
pub mod roster;
pub mod ui;
pub mod wire;

pub use normalizer::{
    clean_phone, display_name, from_api, from_api_list, from_api_value, to_api, to_api_value,
};
pub use roster::{import_roster, import_roster_path, RosterError};
pub use ui::{DateOfBirth, UiTenantRecord};
pub use wire::{ApiAudit, ApiTenantPayload, ApiTenantRecord};
