//! encvar - inline encrypted values for configuration files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use encvar::cli::output;
use encvar::cli::{execute, Cli};
use encvar::core::constants::LOG_ENV;
use encvar::error::{CipherError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("encvar=debug")
        } else {
            EnvFilter::new("encvar=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::NoKey(_)) => Some("run: encvar keygen --output <path>"),
            Error::Config(ConfigError::KeyFileExists(_)) => Some("pass --force to replace it"),
            Error::Value {
                source: CipherError::AuthenticationFailed,
                ..
            } => Some("check that the key matches the one used to encrypt"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
