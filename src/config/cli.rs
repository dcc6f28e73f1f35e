use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoggerKind {
    /// Echo catalog events to the console.
    Console,
    /// Append catalog events to a log file.
    File,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "music-catalog")]
#[command(about = "An in-memory music catalog with an interactive console")]
pub struct CliConfig {
    /// Where catalog events are recorded.
    #[arg(long, value_enum, default_value = "console")]
    pub logger: LoggerKind,

    /// Log file path, used when --logger file is selected.
    #[arg(long, default_value = "music_catalog.log")]
    pub log_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.logger == LoggerKind::File {
            validate_path("log_file", &self.log_file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logger_requires_a_sane_path() {
        let config = CliConfig {
            logger: LoggerKind::File,
            log_file: String::new(),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn console_logger_ignores_log_file() {
        let config = CliConfig {
            logger: LoggerKind::Console,
            log_file: String::new(),
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }
}
