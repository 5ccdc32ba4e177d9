//! Mock generator for testing.
//!
//! Returns queued canned outcomes without touching the network, records
//! every prompt it sees, and can simulate latency.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockGenerator::new().with_response("Hola");
//! let text = generator.generate(Prompt::text("Translate...")).await?;
//! assert_eq!(text, "Hola");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::Prompt;
use crate::ports::{GenerationError, GeneratorInfo, TextGenerator};

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return this text.
    Success(String),
    /// Fail with this error kind.
    Error(MockFailure),
}

/// Error kinds the mock can inject.
#[derive(Debug, Clone)]
pub enum MockFailure {
    AuthenticationFailed,
    RateLimited,
    Unavailable(String),
    Network(String),
    EmptyResponse,
}

impl From<MockFailure> for GenerationError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::AuthenticationFailed => GenerationError::AuthenticationFailed,
            MockFailure::RateLimited => GenerationError::RateLimited,
            MockFailure::Unavailable(m) => GenerationError::Unavailable(m),
            MockFailure::Network(m) => GenerationError::Network(m),
            MockFailure::EmptyResponse => GenerationError::EmptyResponse,
        }
    }
}

/// Mock text generator for tests.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    /// Outcomes consumed in order; a default response follows exhaustion.
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Prompts seen, for verification.
    calls: Arc<Mutex<Vec<Prompt>>>,
    /// Simulated latency per call.
    delay: Duration,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Creates a new mock with no queued outcomes.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::ZERO,
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(content.into()));
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Error(failure));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All prompts seen so far.
    pub fn calls(&self) -> Vec<Prompt> {
        self.calls.lock().unwrap().clone()
    }

    fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Success("Mock response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: Prompt) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(prompt);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome() {
            MockOutcome::Success(content) => Ok(content),
            MockOutcome::Error(failure) => Err(failure.into()),
        }
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo::new("mock", "mock-model-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_response() {
        let generator = MockGenerator::new().with_response("Hello from mock!");

        let text = generator.generate(Prompt::text("hi")).await.unwrap();

        assert_eq!(text, "Hello from mock!");
    }

    #[tokio::test]
    async fn returns_responses_in_order() {
        let generator = MockGenerator::new()
            .with_response("First")
            .with_response("Second");

        assert_eq!(generator.generate(Prompt::text("a")).await.unwrap(), "First");
        assert_eq!(generator.generate(Prompt::text("b")).await.unwrap(), "Second");
    }

    #[tokio::test]
    async fn returns_default_after_exhausted() {
        let generator = MockGenerator::new().with_response("Only one");

        generator.generate(Prompt::text("a")).await.unwrap();
        let text = generator.generate(Prompt::text("b")).await.unwrap();

        assert_eq!(text, "Mock response");
    }

    #[tokio::test]
    async fn returns_configured_failure() {
        let generator = MockGenerator::new().with_failure(MockFailure::RateLimited);

        let result = generator.generate(Prompt::text("a")).await;

        assert!(matches!(result, Err(GenerationError::RateLimited)));
    }

    #[tokio::test]
    async fn tracks_calls() {
        let generator = MockGenerator::new();
        assert_eq!(generator.call_count(), 0);

        generator.generate(Prompt::text("one")).await.unwrap();
        generator.generate(Prompt::text("two")).await.unwrap();

        assert_eq!(generator.call_count(), 2);
        assert_eq!(generator.calls()[0].text, "one");
        assert_eq!(generator.calls()[1].text, "two");
    }

    #[tokio::test]
    async fn respects_delay() {
        let generator = MockGenerator::new()
            .with_response("Delayed")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        generator.generate(Prompt::text("a")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn mock_failure_converts_to_generation_error() {
        let err: GenerationError = MockFailure::AuthenticationFailed.into();
        assert!(matches!(err, GenerationError::AuthenticationFailed));

        let err: GenerationError = MockFailure::Unavailable("down".to_string()).into();
        assert!(matches!(err, GenerationError::Unavailable(_)));
    }
}
