/*!
 * Dictionary-based text translation.
 *
 * This module contains the translation pipeline, split into several
 * submodules:
 *
 * - `tokenizer`: Segmentation into word and filler runs
 * - `splitter`: Camel-case boundary splitting of words into units
 * - `case`: Case-preserving lookup of single units
 * - `assembler`: Whole-document translation and missing-unit reporting
 */

// Re-export main types for easier usage
pub use self::assembler::{process, translate_word, TranslationOutcome};
pub use self::case::{translate_unit, CasePattern};
pub use self::splitter::split_word;
pub use self::tokenizer::{parse, ParsedText, Segment};

// Submodules
pub mod assembler;
pub mod case;
pub mod splitter;
pub mod tokenizer;
