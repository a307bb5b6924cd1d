//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the question catalog comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Catalog definition file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ["yaml", "yml", "json"].contains(&ext.to_ascii_lowercase().as_str()) => {
                Ok(())
            }
            _ => Err(ValidationError::InvalidCatalogPath),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_by_default() {
        let config = CatalogConfig::default();
        assert!(config.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_accepts_known_extensions() {
        for name in ["catalog.yaml", "catalog.yml", "catalog.JSON"] {
            let config = CatalogConfig {
                path: Some(PathBuf::from(name)),
            };
            assert!(config.validate().is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("catalog.toml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCatalogPath)
        ));
    }
}
