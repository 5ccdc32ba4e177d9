//! History store adapters.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryHistoryStore;
pub use json_file::JsonFileHistoryStore;
