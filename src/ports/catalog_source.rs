//! CatalogSource port for obtaining the active question catalog

use async_trait::async_trait;

use crate::domain::{foundation::DomainError, quiz::Catalog};

/// Provides the catalog the application classifies against.
///
/// Errors in the stored definition surface as `ErrorCode::CatalogInvalid`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog
    async fn load(&self) -> Result<Catalog, DomainError>;
}
