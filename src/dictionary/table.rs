/*!
 * Translation tables and their on-disk format.
 *
 * A table file holds one `source = target` entry per line. Surrounding
 * whitespace is ignored, blank lines are skipped, and a line that does not
 * split into exactly two fields on `=` is fatal. A missing file is an
 * empty table.
 */

use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::TableError;
use crate::file_utils::FileManager;

/// Lowercase unit to lowercase unit mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the previous translation if any
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.entries.insert(source.into(), target.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse table text; `origin` is only used for error reporting
    pub fn parse(text: &str, origin: &Path) -> Result<Self, TableError> {
        let mut table = Self::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('=').collect();
            let [source, target] = fields.as_slice() else {
                return Err(TableError::MalformedLine {
                    path: origin.to_path_buf(),
                    line_number: index + 1,
                    line: line.to_string(),
                });
            };

            // later lines win over earlier duplicates
            table.insert(source.trim(), target.trim());
        }

        Ok(table)
    }

    /// Load a table file; a file that does not exist yields an empty table
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let content = FileManager::read_if_exists(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        })?;

        match content {
            Some(text) => {
                let table = Self::parse(&text, path)?;
                debug!("Loaded {} entries from {:?}", table.len(), path);
                Ok(table)
            }
            None => {
                debug!("Table {:?} does not exist, starting empty", path);
                Ok(Self::new())
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (source, target) in iter {
            table.insert(source, target);
        }
        table
    }
}

/// Append a `source = target` line to a table file
pub fn append_entry<P: AsRef<Path>>(path: P, source: &str, target: &str) -> Result<(), TableError> {
    let path = path.as_ref();
    FileManager::append_line(path, &format!("{} = {}", source, target)).map_err(|e| {
        TableError::Io {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        }
    })
}

/// Forward and reverse tables of one language pair
#[derive(Debug, Clone, Default)]
pub struct TablePair {
    /// source -> target
    pub forward: TranslationTable,
    /// target -> source
    pub reverse: TranslationTable,
    /// Where `forward` is stored
    pub forward_path: PathBuf,
    /// Where `reverse` is stored
    pub reverse_path: PathBuf,
}

impl TablePair {
    /// Load both directions from their files
    pub fn load(forward_path: PathBuf, reverse_path: PathBuf) -> Result<Self, TableError> {
        let forward = TranslationTable::load(&forward_path)?;
        let reverse = TranslationTable::load(&reverse_path)?;

        Ok(Self {
            forward,
            reverse,
            forward_path,
            reverse_path,
        })
    }

    /// Verify that every reverse entry points back through the forward table
    pub fn check_consistency(&self) -> Result<(), crate::errors::ConsistencyError> {
        super::check_consistency(&self.forward, &self.reverse)
    }

    /// Record a new entry in both directions, on disk and in memory
    pub fn add_entry(&mut self, source: &str, target: &str) -> Result<(), TableError> {
        append_entry(&self.forward_path, source, target)?;
        append_entry(&self.reverse_path, target, source)?;
        self.forward.insert(source, target);
        self.reverse.insert(target, source);
        Ok(())
    }
}
