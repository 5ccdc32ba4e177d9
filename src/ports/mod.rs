//! Ports - interfaces between the domain and the outside world.

mod history_store;
mod text_generator;

pub use history_store::{HistoryStore, HistoryStoreError};
pub use text_generator::{GenerationError, GeneratorInfo, TextGenerator};
