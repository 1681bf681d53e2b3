use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable consulted when `RUST_LOG` is not set
pub const LOG_ENV: &str = "WGRAPHS_LOG";

/// Installs a compact `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` or [`LOG_ENV`] take precedence; otherwise only warnings are shown, or debug
/// events if `verbose` is set.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = if verbose { "wgraphs=debug" } else { "wgraphs=warn" };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
