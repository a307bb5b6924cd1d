//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileRepository` - Persistence for user profiles
//! - `CatalogSource` - Where the active question catalog comes from

mod catalog_source;
mod profile_repository;

pub use catalog_source::CatalogSource;
pub use profile_repository::ProfileRepository;
