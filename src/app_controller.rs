use anyhow::{Context, Result};
use log::{error, info};

use crate::app_config::Config;
use crate::dictionary::{TablePair, TableUpdater, UpdateReport};
use crate::language_utils;
use crate::providers::Oracle;
use crate::translation::{self, TranslationOutcome};

// @module: Application controller for table-driven translation

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the forward (`source` to `target`) and reverse tables
    pub fn load_tables(&self, source_language: &str, target_language: &str) -> Result<TablePair> {
        language_utils::check_identifier(source_language)?;
        language_utils::check_identifier(target_language)?;

        let forward_path = self.config.table_path(source_language, target_language);
        let reverse_path = self.config.table_path(target_language, source_language);

        TablePair::load(forward_path, reverse_path)
            .with_context(|| format!("Failed to load tables for {} -> {}", source_language, target_language))
    }

    /// Translate `content` from `source_language` into `target_language`
    ///
    /// Fails when the tables can not be loaded or are not symmetric; missing
    /// units are part of the outcome, not an error.
    pub fn translate(
        &self,
        source_language: &str,
        target_language: &str,
        content: &str,
    ) -> Result<TranslationOutcome> {
        let pair = self.load_tables(source_language, target_language)?;

        if let Err(e) = pair.check_consistency() {
            error!("Tables {:?} and {:?} disagree", pair.forward_path, pair.reverse_path);
            return Err(e).context("Translation tables are inconsistent");
        }

        let outcome = translation::process(content, &pair.forward);
        info!(
            "Translated {} bytes, {} units missing",
            content.len(),
            outcome.missing.len()
        );

        Ok(outcome)
    }

    /// Add oracle translations for the words listed in `input`
    pub async fn update<O: Oracle + ?Sized>(
        &self,
        source_language: &str,
        target_language: &str,
        input: &str,
        oracle: &O,
    ) -> Result<UpdateReport> {
        let mut pair = self.load_tables(source_language, target_language)?;

        let mut updater = TableUpdater::new(&mut pair, oracle, source_language, target_language);
        let report = updater.run(input).await?;

        info!(
            "Added {} entries, skipped {}",
            report.added.len(),
            report.skipped.len()
        );

        Ok(report)
    }
}
