//! Catalog source reading a YAML or JSON definition from disk

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::quiz::{Catalog, CatalogDefinition};
use crate::ports::CatalogSource;

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Yaml,
        }
    }

    /// Parses and validates a catalog definition.
    pub fn parse(self, content: &str) -> Result<Catalog, DomainError> {
        let definition: CatalogDefinition = match self {
            CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
                DomainError::new(ErrorCode::CatalogInvalid, format!("Invalid catalog YAML: {}", e))
            })?,
            CatalogFormat::Json => serde_json::from_str(content).map_err(|e| {
                DomainError::new(ErrorCode::CatalogInvalid, format!("Invalid catalog JSON: {}", e))
            })?,
        };

        Ok(Catalog::from_definition(definition)?)
    }
}

/// Loads the catalog from a file each time `load` is called
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Catalog, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to read catalog {}: {}", self.path.display(), e),
            )
        })?;

        let catalog = CatalogFormat::from_path(&self.path)
            .parse(&content)
            .map_err(|e| e.with_detail("path", self.path.display().to_string()))?;

        info!(
            path = %self.path.display(),
            version = %catalog.version(),
            questions = catalog.questions().len(),
            "Loaded question catalog"
        );
        Ok(catalog)
    }
}
