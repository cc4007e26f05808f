//! Tenant directory: registration and lookup of tenant records behind a
//! pluggable repository.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{RepositoryError, TenantRepository};
pub use router::directory_router;
pub use service::{DirectoryError, TenantDirectoryService};
