/*!
 * # glossed - identifier-preserving dictionary translation
 *
 * A Rust library for translating the words of arbitrary text, source code
 * included, through a hand-curated word table.
 *
 * ## Features
 *
 * - Lossless segmentation into word and non-word runs
 * - Camel-case aware lookup: `HelloWorld` is translated as `Hello` + `World`
 * - Capitalization of every unit is preserved (`HELLO`, `Hello`, `hello`)
 * - Untranslated units are reported instead of silently dropped
 * - Forward/reverse table symmetry check
 * - Table growth through an external translation oracle
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: Tokenizer, boundary splitter, case policy and assembler
 * - `dictionary`: Translation tables, consistency check and updater
 * - `providers`: Translation oracles used by the updater
 * - `app_controller`: Main application controller
 * - `language_utils`: Language identifier utilities
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dictionary;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use dictionary::{check_consistency, TablePair, TranslationTable};
pub use errors::{AppError, ConsistencyError, ProviderError, TableError, UpdateError};
pub use translation::{process, TranslationOutcome};
