/*!
 * Case-preserving unit translation.
 *
 * Tables store lowercase forms only. The capitalization of the source unit
 * is re-applied to the stored translation using three classes: all caps,
 * capitalized, and everything else (returned as stored).
 */

use crate::dictionary::TranslationTable;

/// Capitalization class of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// At least one cased letter, none of them lowercase: `HELLO`
    AllCaps,
    /// First character uppercase: `Hello`, also `HeLLo`
    Capitalized,
    /// Anything else, including non-cased scripts
    Lower,
}

impl CasePattern {
    /// Classify a unit
    pub fn of(unit: &str) -> Self {
        let has_upper = unit.chars().any(char::is_uppercase);
        let has_lower = unit.chars().any(char::is_lowercase);

        if has_upper && !has_lower {
            Self::AllCaps
        } else if unit.chars().next().is_some_and(char::is_uppercase) {
            Self::Capitalized
        } else {
            Self::Lower
        }
    }

    /// Apply this pattern to a lowercase translation
    pub fn apply(self, translation: &str) -> String {
        match self {
            Self::AllCaps => translation.to_uppercase(),
            Self::Capitalized => capitalize_first(translation),
            Self::Lower => translation.to_string(),
        }
    }
}

/// Upper-case the first character only; the rest is kept as is
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Translate one unit, or `None` when its lowercase form has no entry
pub fn translate_unit(table: &TranslationTable, unit: &str) -> Option<String> {
    let translation = table.get(&unit.to_lowercase())?;
    Some(CasePattern::of(unit).apply(translation))
}
