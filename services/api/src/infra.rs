use metrics_exporter_prometheus::PrometheusHandle;
use rental_hub::tenants::directory::{RepositoryError, TenantRepository};
use rental_hub::tenants::ApiTenantRecord;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local tenant store used until a remote backend is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTenantRepository {
    records: Arc<Mutex<HashMap<String, ApiTenantRecord>>>,
}

impl TenantRepository for InMemoryTenantRepository {
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
        if guard.contains_key(&record.tenant_id) {
            guard.insert(record.tenant_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
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
