//! Storage backends implementing [`KeyValueStorage`](tourguide_protocols::KeyValueStorage).
//!
//! - [`FileStorage`] - one JSON file per key, replaced atomically
//! - [`MemoryStorage`] - process-local map, for tests and ephemeral sessions

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
