/*!
 * Translation oracles used to propose entries for new words.
 *
 * - `trans_cli`: Shells out to a command-line translator
 * - `mock`: Deterministic oracle for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Black-box word translator
///
/// Implementations return the raw candidate text; sanitizing it into a
/// table key is the caller's job.
#[async_trait]
pub trait Oracle: Send + Sync + Debug {
    /// Translate a single word
    ///
    /// # Arguments
    /// * `word` - Lowercase word to translate
    /// * `source_language` - Identifier of the word's language
    /// * `target_language` - Identifier of the requested language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The raw candidate or an error
    async fn translate(
        &self,
        word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;
}

pub mod mock;
pub mod trans_cli;

pub use mock::{MockBehavior, MockOracle};
pub use trans_cli::TransCliOracle;
