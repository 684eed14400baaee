use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{ServerError, ServerResult};

/// Initialize logging based on environment configuration
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error).
///   Logging stays off when it is unset.
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(ServerError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> ServerResult<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| ServerError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_logging_setup() {
        // No-op without RUST_LOG, otherwise the only subscriber installed in this binary
        assert!(init_logging().is_ok());
    }
}
