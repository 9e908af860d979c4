mod cli;
mod commands;
mod serve;

use colourmix_config::ColourmixConfig;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Bare level names apply to every colourmix crate; anything else is passed
/// through as a tracing directive.
fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("colourmix={}", level.to_ascii_lowercase())
    }
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive(level)
                    .parse()
                    .unwrap_or_else(|_| "colourmix=info".parse().unwrap()),
            ),
        )
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first so its logging level can seed the subscriber
    let loaded = colourmix_config::load_config_from(args.config.as_deref());
    let level = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".into());
    init_logging(&level);

    tracing::debug!("colourmix v{} starting", env!("CARGO_PKG_VERSION"));
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        ColourmixConfig::default()
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match commands::execute(&args.command, &config, stdin.lock(), &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
