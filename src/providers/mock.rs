/*!
 * Mock oracle implementations for testing.
 *
 * This module provides a mock oracle that simulates different behaviors:
 * - `MockOracle::with_entries(..)` - Answers from a fixed word list
 * - `MockOracle::failing()` - Always fails with an error
 * - `MockOracle::empty()` - Always answers with an empty string
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::Oracle;

/// Behavior mode for the mock oracle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Answers from the configured entries, echoing unknown words
    Working,
    /// Always fails with an error
    Failing,
    /// Returns empty response
    Empty,
}

/// Mock oracle for testing table updates
#[derive(Debug, Clone)]
pub struct MockOracle {
    behavior: MockBehavior,
    entries: HashMap<String, String>,
    request_count: Arc<AtomicUsize>,
}

impl MockOracle {
    /// Create a new mock oracle with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            entries: HashMap::new(),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working oracle answering from `entries`
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut oracle = Self::new(MockBehavior::Working);
        oracle.entries = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        oracle
    }

    /// Create a failing oracle that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create an oracle that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of requests served so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn translate(
        &self,
        word: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(self
                .entries
                .get(word)
                .cloned()
                .unwrap_or_else(|| word.to_string())),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Simulated oracle failure".to_string(),
            )),
            MockBehavior::Empty => Ok(String::new()),
        }
    }
}
