//! Tracing setup for the binary. Logs go to stderr so `folio query` output on
//! stdout stays machine-readable.

use crate::config::{LogConfig, LogFormat};
use crate::error::Result;
use std::io;

/// Filter directive for the configured level, raised by each `-v`.
pub fn level_for(config: &LogConfig, verbose: u8) -> String {
    match verbose {
        0 => config.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LogConfig, verbose: u8) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = level_for(config, verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    match config.format()? {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_writer(io::stderr))
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> LogConfig {
        LogConfig {
            level: level.to_string(),
            format: "pretty".to_string(),
        }
    }

    #[test]
    fn verbosity_raises_level() {
        let config = config("warn");
        assert_eq!(level_for(&config, 0), "warn");
        assert_eq!(level_for(&config, 1), "debug");
        assert_eq!(level_for(&config, 3), "trace");
    }
}
