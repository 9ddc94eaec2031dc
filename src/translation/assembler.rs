/*!
 * Whole-document translation.
 *
 * Each distinct word of the document is split into units, every unit is
 * translated with its casing preserved, and the joined result replaces all
 * occurrences of that exact word. Units without a table entry pass through
 * unchanged and are reported in lowercase.
 */

use log::debug;
use std::collections::{BTreeSet, HashSet};

use crate::dictionary::TranslationTable;
use crate::translation::case::translate_unit;
use crate::translation::splitter::split_word;
use crate::translation::tokenizer::{parse, ParsedText};

/// Result of translating one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// Translated document
    pub text: String,

    /// Lowercase units with no table entry
    pub missing: BTreeSet<String>,
}

impl TranslationOutcome {
    /// Missing units in lexicographic order
    pub fn missing_sorted(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Translate a single word unit by unit
///
/// Returns the replacement word; untranslated units are kept verbatim and
/// their lowercase form is added to `missing`.
pub fn translate_word(
    table: &TranslationTable,
    word: &str,
    missing: &mut BTreeSet<String>,
) -> String {
    let mut replacement = String::with_capacity(word.len());

    for unit in split_word(word) {
        match translate_unit(table, &unit) {
            Some(translated) => replacement.push_str(&translated),
            None => {
                missing.insert(unit.to_lowercase());
                replacement.push_str(&unit);
            }
        }
    }

    replacement
}

/// Translate every word of an already parsed document in place
pub fn translate_parsed(parsed: &mut ParsedText, table: &TranslationTable) -> BTreeSet<String> {
    let mut missing = BTreeSet::new();

    let distinct: HashSet<String> = parsed.words().map(str::to_string).collect();
    debug!("Translating {} distinct words", distinct.len());

    for word in distinct {
        let replacement = translate_word(table, &word, &mut missing);
        let occurrences = parsed.replace_word(&word, &replacement);
        debug!("{} -> {} ({} occurrences)", word, replacement, occurrences);
    }

    missing
}

/// Translate a whole document
pub fn process(content: &str, table: &TranslationTable) -> TranslationOutcome {
    let mut parsed = parse(content);
    let missing = translate_parsed(&mut parsed, table);

    TranslationOutcome {
        text: parsed.collect(),
        missing,
    }
}
