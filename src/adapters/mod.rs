//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `profile` - Profile repositories (in-memory, JSON files on disk)
//! - `catalog` - Catalog sources (built-in, YAML/JSON file)

pub mod catalog;
pub mod profile;

pub use catalog::{BuiltinCatalogSource, CatalogFormat, FileCatalogSource};
pub use profile::{FsProfileRepository, InMemoryProfileRepository};
