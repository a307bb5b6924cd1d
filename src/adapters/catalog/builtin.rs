//! Catalog source serving the catalog compiled into the binary

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::quiz::{builtin_catalog, Catalog};
use crate::ports::CatalogSource;

/// Always yields the built-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

#[async_trait]
impl CatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<Catalog, DomainError> {
        Ok(builtin_catalog().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::BUILTIN_CATALOG_VERSION;

    #[tokio::test]
    async fn loads_builtin_catalog() {
        let catalog = BuiltinCatalogSource.load().await.unwrap();
        assert_eq!(catalog.version().as_u32(), BUILTIN_CATALOG_VERSION);
        assert_eq!(&catalog, builtin_catalog());
    }
}
