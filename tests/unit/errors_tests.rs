/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;

use glossed::errors::{AppError, ConsistencyError, ProviderError, TableError, UpdateError};

#[test]
fn test_tableError_malformedLine_shouldDisplayLocation() {
    let error = TableError::MalformedLine {
        path: PathBuf::from("db/hu_to_en.txt"),
        line_number: 7,
        line: "broken".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("line 7"));
    assert!(display.contains("hu_to_en.txt"));
    assert!(display.contains("broken"));
}

#[test]
fn test_consistencyError_mismatch_shouldDisplayBothEntries() {
    let error = ConsistencyError::Mismatch {
        target_word: "dog".to_string(),
        source_word: "kutya".to_string(),
        found: "hound".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("dog = kutya"));
    assert!(display.contains("kutya = hound"));
}

#[test]
fn test_providerError_timeout_shouldDisplaySeconds() {
    let display = format!("{}", ProviderError::Timeout(30));
    assert!(display.contains("30 seconds"));
}

#[test]
fn test_appError_fromConsistencyError_shouldWrapCorrectly() {
    let error: AppError = ConsistencyError::MissingEntry {
        target_word: "dog".to_string(),
        source_word: "cat".to_string(),
    }
    .into();
    assert!(format!("{}", error).contains("Consistency error"));
}

#[test]
fn test_appError_fromUpdateError_shouldWrapCorrectly() {
    let error: AppError = UpdateError::EmptyCandidate { word: "kutya".to_string() }.into();
    assert!(format!("{}", error).contains("kutya"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}
