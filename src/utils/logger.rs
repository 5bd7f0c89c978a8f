use crate::config::toml_config::{LogFormat, LoggingConfig};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `--verbose` wins over the config file.
pub fn default_directive(verbose: bool, logging: &LoggingConfig) -> String {
    if verbose {
        return "riftkit=debug".to_string();
    }
    match logging.level.as_deref() {
        Some(level) => format!("riftkit={}", level.to_ascii_lowercase()),
        None => "riftkit=warn".to_string(),
    }
}

/// Logs go to stderr; stdout is reserved for the status report.
pub fn init_cli_logger(verbose: bool, logging: &LoggingConfig) {
    let directive = default_directive(verbose, logging);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));
    let ansi = std::io::stderr().is_terminal();

    match logging.format.unwrap_or_default() {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(false)
                    .json(),
            )
            .init(),
    }
}
