use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Read a file to a string, returning `None` when it does not exist
    pub fn read_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Ok(None);
        }

        fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read file: {:?}", path))
    }

    /// Append a single line to a file, creating it and its directory as needed
    pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open file for appending: {:?}", path))?;

        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to append to file: {:?}", path))?;

        Ok(())
    }
}
