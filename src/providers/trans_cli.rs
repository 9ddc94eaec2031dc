/*!
 * Command-line translator oracle.
 *
 * Runs `<command> <args...> -source <src> -target <tgt> <word>` (the
 * translate-shell calling convention) and returns its trimmed stdout.
 */

use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::process::Command;

use crate::app_config::OracleConfig;
use crate::errors::ProviderError;
use crate::providers::Oracle;

/// Oracle backed by an external translator process
#[derive(Debug, Clone)]
pub struct TransCliOracle {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl TransCliOracle {
    pub fn new(config: &OracleConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Full argument list for one request
    pub fn build_args(&self, word: &str, source_language: &str, target_language: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend([
            "-source".to_string(),
            source_language.to_string(),
            "-target".to_string(),
            target_language.to_string(),
            word.to_string(),
        ]);
        args
    }
}

#[async_trait]
impl Oracle for TransCliOracle {
    async fn translate(
        &self,
        word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let args = self.build_args(word, source_language, target_language);
        debug!("Running {} {}", self.command, args.join(" "));

        let future = Command::new(&self.command)
            .args(&args)
            .kill_on_drop(true)
            .output();

        let output = tokio::select! {
            result = future => {
                result.map_err(|e| ProviderError::RequestFailed(format!("{}: {}", self.command, e)))?
            },
            _ = tokio::time::sleep(self.timeout) => {
                return Err(ProviderError::Timeout(self.timeout.as_secs()));
            }
        };

        if !output.status.success() {
            return Err(ProviderError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
