use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and resolving table locations.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the `<a>_to_<b>.txt` table files
    #[serde(default = "default_db_dir")]
    pub db_dir: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// External translation oracle used by table updates
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// Settings for the command-line translation oracle
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OracleConfig {
    /// Executable to invoke
    #[serde(default = "default_oracle_command")]
    pub command: String,

    /// Arguments placed before the language flags and the word
    #[serde(default = "default_oracle_args")]
    pub args: Vec<String>,

    /// Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            command: default_oracle_command(),
            args: default_oracle_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    // stderr doubles as the missing-unit report, keep it quiet by default
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_db_dir() -> PathBuf {
    PathBuf::from("db")
}

fn default_oracle_command() -> String {
    "trans".to_string()
}

fn default_oracle_args() -> Vec<String> {
    vec!["-brief".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.db_dir.as_os_str().is_empty() {
            return Err(anyhow!("Table directory (db_dir) must not be empty"));
        }

        if self.oracle.command.trim().is_empty() {
            return Err(anyhow!("Oracle command must not be empty"));
        }

        if self.oracle.timeout_secs == 0 {
            return Err(anyhow!("Oracle timeout must be at least one second"));
        }

        Ok(())
    }

    /// Path of the table translating `from` into `to`
    pub fn table_path(&self, from: &str, to: &str) -> PathBuf {
        self.db_dir.join(format!("{}_to_{}.txt", from, to))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            db_dir: default_db_dir(),
            log_level: LogLevel::default(),
            oracle: OracleConfig::default(),
        }
    }
}
