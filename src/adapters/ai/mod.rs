//! Generative model adapters.

mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiGenerator};
pub use mock::{MockFailure, MockGenerator, MockOutcome};
