use clap::Parser;
use shoplist::domain::ports::ConfigProvider;
use shoplist::utils::{logger, validation::Validate};
use shoplist::{CliConfig, LocalStorage, Shell};
use std::io::BufReader;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shoplist");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.data_dir().to_string());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(storage, BufReader::new(stdin.lock()), stdout.lock());

    if let Some(file) = config.startup_file() {
        match shell.load_list(file) {
            Ok(()) => tracing::info!("loaded startup list from {}", file),
            Err(e) => {
                // start with an empty list rather than refusing to run
                tracing::warn!("could not load {}: {}", file, e);
                eprintln!("Warning: could not load {file}: {e}");
            }
        }
    }

    shell.run()?;
    Ok(())
}
