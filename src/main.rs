use clap::Parser;
use riftkit::utils::{error::RiftError, logger};
use riftkit::{CliConfig, ConsoleReporter, RiftEngine};

fn main() {
    let config = CliConfig::parse();

    let toml_config = match config.load_toml_config() {
        Ok(toml_config) => toml_config,
        Err(e) => fail(&e),
    };

    logger::init_cli_logger(config.verbose, &toml_config.logging);

    tracing::info!("Starting riftkit");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut engine = RiftEngine::new(config, ConsoleReporter::stdout());
    if let Err(e) = engine.run() {
        tracing::error!("riftkit failed: {}", e);
        fail(&e);
    }
}

fn fail(e: &RiftError) -> ! {
    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
