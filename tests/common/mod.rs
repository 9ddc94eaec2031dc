/*!
 * Common test utilities for the glossed test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use glossed::app_config::Config;
use glossed::TranslationTable;

/// Routes library logs through the test harness; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes a symmetric hu/en table pair into `dir`
pub fn create_table_pair(dir: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let forward: String = entries.iter().map(|(s, t)| format!("{} = {}\n", s, t)).collect();
    let reverse: String = entries.iter().map(|(s, t)| format!("{} = {}\n", t, s)).collect();
    create_test_file(dir, "en_to_hu.txt", &forward)?;
    create_test_file(dir, "hu_to_en.txt", &reverse)?;
    Ok(())
}

/// Config pointing at a table directory
pub fn config_for(dir: &Path) -> Config {
    Config {
        db_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

/// The table used throughout the examples: hello -> szia, world -> vilag
pub fn greeting_table() -> TranslationTable {
    [("hello", "szia"), ("world", "vilag")].into_iter().collect()
}
