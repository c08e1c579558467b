//! Structured logging for the `wgraphs` binary
//!
//! The library only emits `tracing` events; installing a subscriber is up to the caller.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable consulted when `RUST_LOG` is not set
pub const LOG_ENV: &str = "WGRAPHS_LOG";

/// Initialize structured logging based on CLI arguments.
///
/// Without an explicit `log_level`, `verbose` selects `debug` and otherwise `warn`.
/// `RUST_LOG` and [`LOG_ENV`] take precedence over both.
///
/// # Errors
/// Fails if a global subscriber was already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Plain levels are scoped to this crate; full directives are passed through
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wgraphs={level}")
    }
}
