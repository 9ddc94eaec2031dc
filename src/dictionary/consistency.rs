use crate::dictionary::TranslationTable;
use crate::errors::ConsistencyError;

/// Check that `forward[reverse[t]] == t` for every key `t` of `reverse`
///
/// Stops at the first violation. Forward entries without a reverse
/// counterpart are allowed.
pub fn check_consistency(
    forward: &TranslationTable,
    reverse: &TranslationTable,
) -> Result<(), ConsistencyError> {
    // sorted so the reported violation does not depend on hash order
    let mut entries: Vec<(&str, &str)> = reverse.iter().collect();
    entries.sort_unstable();

    for (target, source) in entries {
        match forward.get(source) {
            Some(found) if found == target => {}
            Some(found) => {
                return Err(ConsistencyError::Mismatch {
                    target_word: target.to_string(),
                    source_word: source.to_string(),
                    found: found.to_string(),
                });
            }
            None => {
                return Err(ConsistencyError::MissingEntry {
                    target_word: target.to_string(),
                    source_word: source.to_string(),
                });
            }
        }
    }

    Ok(())
}
