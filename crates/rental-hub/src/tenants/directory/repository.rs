use crate::tenants::wire::ApiTenantRecord;

/// Storage abstraction so the directory service can be exercised in isolation.
///
/// Records are kept in their API shape, the same shape a remote backend would
/// hold them in.
pub trait TenantRepository: Send + Sync {
    fn insert(&self, record: ApiTenantRecord) -> Result<ApiTenantRecord, RepositoryError>;
    fn update(&self, record: ApiTenantRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, tenant_id: &str) -> Result<Option<ApiTenantRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<ApiTenantRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
