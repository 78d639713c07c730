//! Diagnostic logging
//!
//! Logs go to stderr and stay quiet unless asked for: `warn` by default,
//! `debug` with `--verbose`, or any filter given in `ARCADE_LOG`.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "ARCADE_LOG";

pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.is_empty() => EnvFilter::try_new(directive)?,
        _ if verbose => EnvFilter::new("debug"),
        _ => EnvFilter::new("warn"),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    tracing::debug!(verbose, "logging initialized");
    Ok(())
}
