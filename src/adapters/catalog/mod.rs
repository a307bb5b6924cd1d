//! Catalog adapters - built-in and file-backed catalog sources.

mod builtin;
mod file;

pub use builtin::BuiltinCatalogSource;
pub use file::{CatalogFormat, FileCatalogSource};
