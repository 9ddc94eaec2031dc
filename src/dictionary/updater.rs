/*!
 * Growing a table pair with oracle-proposed entries.
 *
 * Candidate words are trimmed, lowercased and deduplicated. Words already
 * known to the forward table or unusable as table keys are skipped, and
 * every remaining word is sent to the oracle. The answer is reduced to its alphabetic characters, made unique
 * among target-side keys, and written to both table files so the pair stays
 * symmetric.
 */

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::dictionary::{TablePair, TranslationTable};
use crate::errors::{AppError, UpdateError};
use crate::providers::Oracle;

static ALPHABETIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Alphabetic}+").expect("alphabetic run pattern is valid"));

/// One entry added to a table pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub source: String,
    pub target: String,
}

/// Outcome of an update run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Entries written to both tables, in processing order
    pub added: Vec<NewEntry>,
    /// Words that are not valid keys or could not be given a unique target
    pub skipped: Vec<String>,
}

/// Trimmed, lowercased, deduplicated, non-empty lines of `input`
pub fn candidate_words(input: &str) -> BTreeSet<String> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whether `word` survives a round trip through the `source = target` format
pub fn is_storable(word: &str) -> bool {
    !word.contains('=') && !word.chars().any(char::is_whitespace)
}

/// Candidates that the forward table does not translate yet
pub fn novel_words(candidates: BTreeSet<String>, forward: &TranslationTable) -> BTreeSet<String> {
    candidates
        .into_iter()
        .filter(|word| !forward.contains_key(word))
        .collect()
}

/// Keep only alphabetic runs, fused together, in lowercase
///
/// Multi-word answers become a single token: `"Hot dog"` gives `"hotdog"`.
pub fn sanitize_candidate(raw: &str) -> String {
    ALPHABETIC_RUN
        .find_iter(raw)
        .map(|m| m.as_str())
        .collect::<String>()
        .to_lowercase()
}

/// Repeat the last character of `candidate` until `is_taken` rejects it no more
pub fn disambiguate(
    word: &str,
    candidate: String,
    is_taken: impl Fn(&str) -> bool,
) -> Result<String, UpdateError> {
    let mut candidate = candidate;
    while is_taken(&candidate) {
        let Some(last) = candidate.chars().last() else {
            return Err(UpdateError::EmptyCandidate {
                word: word.to_string(),
            });
        };
        candidate.push(last);
    }
    Ok(candidate)
}

/// Adds oracle translations to a table pair
pub struct TableUpdater<'a, O: Oracle + ?Sized> {
    pair: &'a mut TablePair,
    oracle: &'a O,
    source_language: &'a str,
    target_language: &'a str,
}

impl<'a, O: Oracle + ?Sized> TableUpdater<'a, O> {
    pub fn new(
        pair: &'a mut TablePair,
        oracle: &'a O,
        source_language: &'a str,
        target_language: &'a str,
    ) -> Self {
        Self {
            pair,
            oracle,
            source_language,
            target_language,
        }
    }

    /// Query the oracle for one word and turn the answer into a unique target key
    async fn propose(&self, word: &str) -> Result<String, UpdateError> {
        let raw = match self
            .oracle
            .translate(word, self.source_language, self.target_language)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Oracle gave no answer for '{}': {}", word, e);
                String::new()
            }
        };

        let candidate = sanitize_candidate(&raw);
        if candidate.is_empty() {
            warn!("Empty translation accepted for '{}'", word);
        }

        disambiguate(word, candidate, |c| self.pair.reverse.contains_key(c))
    }

    /// Translate every novel word of `input` and record it in both tables
    pub async fn run(&mut self, input: &str) -> Result<UpdateReport, AppError> {
        let words = novel_words(candidate_words(input), &self.pair.forward);
        info!(
            "Updating {} -> {} with {} new words",
            self.source_language,
            self.target_language,
            words.len()
        );

        let mut report = UpdateReport::default();
        for word in words {
            if !is_storable(&word) {
                warn!("Skipping '{}': not a valid table key", word);
                report.skipped.push(word);
                continue;
            }

            let target = match self.propose(&word).await {
                Ok(target) => target,
                Err(e) => {
                    warn!("Skipping '{}': {}", word, e);
                    report.skipped.push(word);
                    continue;
                }
            };

            self.pair.add_entry(&word, &target)?;
            report.added.push(NewEntry {
                source: word,
                target,
            });
        }

        Ok(report)
    }
}
