//! Profile adapters - in-memory and filesystem profile repositories.

mod filesystem;
mod in_memory;

pub use filesystem::FsProfileRepository;
pub use in_memory::InMemoryProfileRepository;
