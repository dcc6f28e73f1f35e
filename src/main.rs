use clap::Parser;
use music_catalog::app::console::ConsoleUi;
use music_catalog::config::cli::LoggerKind;
use music_catalog::utils::{logger, validation::Validate};
use music_catalog::{CliConfig, ConsoleLogger, FileLogger, Logger, MusicService};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting music-catalog console");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sink: Box<dyn Logger> = match config.logger {
        LoggerKind::Console => {
            tracing::info!("Console logging enabled");
            Box::new(ConsoleLogger::new())
        }
        LoggerKind::File => {
            tracing::info!("File logging enabled ({})", config.log_file);
            Box::new(FileLogger::new(&config.log_file))
        }
    };

    let service = MusicService::new(sink);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut ui = ConsoleUi::new(stdin.lock(), stdout.lock(), service);
    ui.run()?;

    Ok(())
}
