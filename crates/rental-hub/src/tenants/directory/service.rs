use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::info;

use super::repository::{RepositoryError, TenantRepository};
use crate::tenants::normalizer::{from_api, to_api};
use crate::tenants::ui::UiTenantRecord;
use crate::tenants::wire::{ApiAudit, ApiTenantPayload, ApiTenantRecord};

/// Service normalizing form submissions and stamping audit metadata before
/// they reach the repository.
pub struct TenantDirectoryService<R> {
    repository: Arc<R>,
    audit_actor: String,
}

static TENANT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_tenant_id() -> String {
    let id = TENANT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("tnt-{id:06}")
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl<R> TenantDirectoryService<R>
where
    R: TenantRepository + 'static,
{
    pub fn new(repository: Arc<R>, audit_actor: impl Into<String>) -> Self {
        Self {
            repository,
            audit_actor: audit_actor.into(),
        }
    }

    /// Register a new tenant, returning the stored record in its UI shape.
    pub fn register(&self, form: UiTenantRecord) -> Result<UiTenantRecord, DirectoryError> {
        let payload = validated_payload(&form)?;
        let now = timestamp();
        let audit = ApiAudit {
            created_by: self.audit_actor.clone(),
            created_date: now.clone(),
            modified_by: self.audit_actor.clone(),
            modified_date: now,
        };

        let record = ApiTenantRecord::new(next_tenant_id(), payload).with_audit(audit);
        let stored = self.repository.insert(record)?;
        info!(tenant_id = %stored.tenant_id, "tenant registered");
        Ok(from_api(&stored))
    }

    /// Replace a tenant's details while keeping its creation stamps.
    pub fn update(
        &self,
        tenant_id: &str,
        form: UiTenantRecord,
    ) -> Result<UiTenantRecord, DirectoryError> {
        let payload = validated_payload(&form)?;
        let existing = self
            .repository
            .fetch(tenant_id)?
            .ok_or(RepositoryError::NotFound)?;

        let mut audit = existing.audit.unwrap_or_default();
        audit.modified_by = self.audit_actor.clone();
        audit.modified_date = timestamp();

        let record = ApiTenantRecord::new(existing.tenant_id, payload).with_audit(audit);
        self.repository.update(record.clone())?;
        info!(tenant_id = %record.tenant_id, "tenant updated");
        Ok(from_api(&record))
    }

    pub fn get(&self, tenant_id: &str) -> Result<UiTenantRecord, DirectoryError> {
        let record = self
            .repository
            .fetch(tenant_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(from_api(&record))
    }

    /// All tenants ordered by id, which follows registration order.
    pub fn list(&self) -> Result<Vec<UiTenantRecord>, DirectoryError> {
        let mut records = self.repository.list()?;
        records.sort_by(|left, right| left.tenant_id.cmp(&right.tenant_id));
        Ok(records.iter().map(from_api).collect())
    }
}

fn validated_payload(form: &UiTenantRecord) -> Result<ApiTenantPayload, DirectoryError> {
    let payload = to_api(form);
    if payload.first_name.trim().is_empty() {
        return Err(DirectoryError::Invalid("first name is required"));
    }
    if payload.family_name.trim().is_empty() {
        return Err(DirectoryError::Invalid("last name is required"));
    }
    Ok(payload)
}

/// Error raised by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("invalid tenant record: {0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
