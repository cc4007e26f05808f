use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::tenants::directory::repository::{RepositoryError, TenantRepository};
use crate::tenants::directory::{directory_router, TenantDirectoryService};
use crate::tenants::ui::UiTenantRecord;
use crate::tenants::wire::ApiTenantRecord;

pub(super) const ACTOR: &str = "leasing-desk";

pub(super) fn form() -> UiTenantRecord {
    UiTenantRecord {
        first_name: "Ana".to_string(),
        last_name: "Cruz".to_string(),
        email: "ana.cruz@example.com".to_string(),
        phone: "0917 123 4567".to_string(),
        date_of_birth: "1990-05-14T00:00:00.000Z".into(),
        emergency_contact_name: "Luis Cruz".to_string(),
        emergency_contact_phone: "0918 765 4321".to_string(),
        guarantor_first_name: "Jo".to_string(),
        guarantor_last_name: "Reyes".to_string(),
        guarantor_relationship: "Employer".to_string(),
        guarantor_phone: "02 8123 4567".to_string(),
        ..UiTenantRecord::default()
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<String, ApiTenantRecord>>,
}

impl TenantRepository for MemoryRepository {
    fn insert(&self, record: ApiTenantRecord) -> Result<ApiTenantRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.tenant_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.tenant_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApiTenantRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(&record.tenant_id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, tenant_id: &str) -> Result<Option<ApiTenantRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(tenant_id).cloned())
    }

    fn list(&self) -> Result<Vec<ApiTenantRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl TenantRepository for UnavailableRepository {
    fn insert(&self, _record: ApiTenantRecord) -> Result<ApiTenantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _record: ApiTenantRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _tenant_id: &str) -> Result<Option<ApiTenantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ApiTenantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<TenantDirectoryService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(TenantDirectoryService::new(repository.clone(), ACTOR));
    (service, repository)
}

pub(super) fn router_with_service(
    service: Arc<TenantDirectoryService<MemoryRepository>>,
) -> axum::Router {
    directory_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
