/*!
 * Tests for table loading and the symmetry check
 */

use anyhow::Result;
use std::path::Path;

use glossed::dictionary::{append_entry, TablePair};
use glossed::{check_consistency, ConsistencyError, TableError, TranslationTable};

use crate::common;

#[test]
fn test_parse_spacedEntries_shouldTrimFields() {
    let table = TranslationTable::parse("  kutya=dog \n macska   =   cat", Path::new("mem")).unwrap();
    assert_eq!(table.get("kutya"), Some("dog"));
    assert_eq!(table.get("macska"), Some("cat"));
}

#[test]
fn test_parse_blankLines_shouldBeIgnored() {
    let table = TranslationTable::parse("\n\n   \nkutya = dog\n\n", Path::new("mem")).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_parse_lineWithoutEquals_shouldBeMalformed() {
    let result = TranslationTable::parse("kutya dog", Path::new("mem"));
    assert!(matches!(result, Err(TableError::MalformedLine { line_number: 1, .. })));
}

#[test]
fn test_load_missingFile_shouldYieldEmptyTable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let table = TranslationTable::load(temp_dir.path().join("nope_to_nada.txt"))?;
    assert!(table.is_empty());
    Ok(())
}

#[test]
fn test_load_existingFile_shouldParseEntries() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "hu_to_en.txt", "kutya = dog\n")?;
    let table = TranslationTable::load(&path)?;
    assert_eq!(table.get("kutya"), Some("dog"));
    Ok(())
}

#[test]
fn test_load_malformedFile_shouldNameThePath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bad.txt", "a = b\nbroken\n")?;
    let err = TranslationTable::load(&path).unwrap_err();
    assert!(err.to_string().contains("bad.txt"));
    assert!(err.to_string().contains("line 2"));
    Ok(())
}

#[test]
fn test_appendEntry_shouldRoundTripThroughLoad() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("db").join("hu_to_en.txt");
    append_entry(&path, "kutya", "dog")?;
    append_entry(&path, "macska", "cat")?;
    let table = TranslationTable::load(&path)?;
    assert_eq!(table.get("kutya"), Some("dog"));
    assert_eq!(table.get("macska"), Some("cat"));
    Ok(())
}

#[test]
fn test_checkConsistency_symmetricTables_shouldPass() {
    let forward: TranslationTable = [("kutya", "dog")].into_iter().collect();
    let reverse: TranslationTable = [("dog", "kutya")].into_iter().collect();
    assert!(check_consistency(&forward, &reverse).is_ok());
}

#[test]
fn test_checkConsistency_unknownSource_shouldFail() {
    let forward: TranslationTable = [("kutya", "dog")].into_iter().collect();
    let reverse: TranslationTable = [("dog", "cat")].into_iter().collect();
    assert_eq!(
        check_consistency(&forward, &reverse),
        Err(ConsistencyError::MissingEntry {
            target_word: "dog".to_string(),
            source_word: "cat".to_string(),
        })
    );
}

#[test]
fn test_checkConsistency_divergentForward_shouldFail() {
    let forward: TranslationTable = [("kutya", "hound")].into_iter().collect();
    let reverse: TranslationTable = [("dog", "kutya")].into_iter().collect();
    assert!(matches!(
        check_consistency(&forward, &reverse),
        Err(ConsistencyError::Mismatch { .. })
    ));
}

#[test]
fn test_checkConsistency_extraForwardEntries_shouldPass() {
    let forward: TranslationTable = [("kutya", "dog"), ("macska", "cat")].into_iter().collect();
    let reverse: TranslationTable = [("dog", "kutya")].into_iter().collect();
    assert!(check_consistency(&forward, &reverse).is_ok());
}

#[test]
fn test_tablePair_addEntry_shouldWriteBothDirections() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let forward_path = temp_dir.path().join("hu_to_en.txt");
    let reverse_path = temp_dir.path().join("en_to_hu.txt");

    let mut pair = TablePair::load(forward_path.clone(), reverse_path.clone())?;
    pair.add_entry("kutya", "dog")?;
    assert!(pair.check_consistency().is_ok());

    let reloaded = TablePair::load(forward_path, reverse_path)?;
    assert_eq!(reloaded.forward.get("kutya"), Some("dog"));
    assert_eq!(reloaded.reverse.get("dog"), Some("kutya"));
    Ok(())
}
