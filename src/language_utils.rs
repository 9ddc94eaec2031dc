use anyhow::{anyhow, Result};
use isolang::Language;
use log::{debug, warn};

/// Language utilities for table identifiers
///
/// Table files are keyed by free-form language identifiers. These helpers
/// make sure an identifier is safe to embed in a file name and, when it
/// happens to be an ISO 639 code, resolve its display name for logging.
/// Language code type
#[derive(Debug, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part1);
    }

    if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part3);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();
    let lang = match validate_language_code(&normalized_code)? {
        LanguageCodeType::Part1 => Language::from_639_1(&normalized_code),
        LanguageCodeType::Part3 => Language::from_639_3(&normalized_code),
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}

/// Check that an identifier can name a table file
///
/// Non-ISO identifiers are accepted with a warning; empty identifiers and
/// ones that would escape the table directory are rejected.
pub fn check_identifier(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(anyhow!("Language identifier must not be empty"));
    }

    if code.contains('/') || code.contains('\\') || code.contains("..") {
        return Err(anyhow!("Language identifier is not a valid file name component: {}", code));
    }

    match get_language_name(code) {
        Ok(name) => debug!("Language '{}' resolved to {}", code, name),
        Err(_) => warn!("'{}' is not an ISO 639 language code, using it verbatim", code),
    }

    Ok(())
}
