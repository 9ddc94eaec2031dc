// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::PathBuf;

use glossed::app_config::{self, Config};
use glossed::providers::TransCliOracle;
use glossed::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Args, Debug)]
struct LanguagePair {
    /// Language of the input (e.g., 'hu')
    #[arg(value_name = "SOURCE_LANG")]
    source_language: String,

    /// Language to translate into (e.g., 'en')
    #[arg(value_name = "TARGET_LANG")]
    target_language: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate stdin to stdout; untranslated units are listed on stderr
    Translate(LanguagePair),

    /// Read new words from stdin and add oracle translations to both tables
    Update(LanguagePair),

    /// Generate shell completions for glossed
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// glossed - identifier-preserving dictionary translation
#[derive(Parser, Debug)]
#[command(name = "glossed")]
#[command(version)]
#[command(about = "Translate the words of a text through a word table, keeping identifiers intact")]
#[command(long_about = "glossed translates every word of its input through a hand-curated table,
splitting camelCase identifiers into units and keeping each unit's capitalization.

EXAMPLES:
    glossed translate hu en < input.rs > output.rs   # Translate a file
    glossed translate hu en < input.rs 2> missing.txt # Collect untranslated units
    glossed update hu en < missing.txt                # Add oracle translations
    glossed completions bash > glossed.bash           # Generate bash completions

TABLES:
    Tables live in <db_dir>/<from>_to_<to>.txt, one 'source = target' entry per line.
    Both directions of a pair must agree before a translation runs.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "glossed.json")]
    config_path: PathBuf,

    /// Directory holding the table files
    #[arg(short, long, global = true)]
    db_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Everything is let through here, the effective level is set from config below
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Warn);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "glossed", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());
    debug!("Using tables from {:?}", config.db_dir);

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Translate(pair) => run_translate(&controller, &pair),
        Commands::Update(pair) => run_update(&controller, &pair).await,
        Commands::Completions { .. } => Ok(()),
    }
}

fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load(&cli.config_path)?;

    if let Some(db_dir) = &cli.db_dir {
        config.db_dir = db_dir.clone();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read standard input as UTF-8")?;
    Ok(content)
}

fn run_translate(controller: &Controller, pair: &LanguagePair) -> Result<()> {
    let content = read_stdin()?;
    let outcome = controller.translate(&pair.source_language, &pair.target_language, &content)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(outcome.text.as_bytes())?;
    stdout.flush()?;

    let mut stderr = std::io::stderr().lock();
    for unit in outcome.missing_sorted() {
        writeln!(stderr, "{}", unit)?;
    }

    Ok(())
}

async fn run_update(controller: &Controller, pair: &LanguagePair) -> Result<()> {
    let input = read_stdin()?;
    let oracle = TransCliOracle::new(&controller.config().oracle);

    let report = controller
        .update(&pair.source_language, &pair.target_language, &input, &oracle)
        .await?;

    let mut stdout = std::io::stdout().lock();
    for entry in &report.added {
        writeln!(stdout, "{} -> {}", entry.source, entry.target)?;
    }

    Ok(())
}
