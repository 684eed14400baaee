use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::config::Config;
use crate::errors::{ServerError, ServerResult};

/// Timezone Converter API
///
/// A REST service for converting wall-clock times between IANA time zones.
///
/// ## Endpoints
/// - `GET /`: health check
/// - `GET /timezones`: list of supported time zone names
/// - `POST /convert-time`: convert a `YYYY-MM-DD HH:MM` time between zones
/// - `GET /openapi.json`: OpenAPI document
///
/// ## Development
/// ```bash
/// RUST_LOG=info cargo run --bin timezone-converter-api -- --port 8000
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "timezone-converter-api")]
#[command(about = "REST API for converting times between different global time zones")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0", value_name = "ADDR")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000, value_name = "PORT")]
    pub port: u16,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> ServerResult<Config> {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> ServerResult<Config> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ServerError::InvalidAddress {
                host: self.host.clone(),
            })?;

        Ok(Config {
            addr: SocketAddr::new(ip, self.port),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Cli::parse_from(["timezone-converter-api"])
            .into_config()
            .unwrap();
        assert_eq!(config.addr, "0.0.0.0:8000".parse().unwrap());
    }

    #[test]
    fn test_custom_address() {
        let config = Cli::parse_from(["timezone-converter-api", "--host", "::1", "-p", "9090"])
            .into_config()
            .unwrap();
        assert_eq!(config.addr, "[::1]:9090".parse().unwrap());
    }

    #[test]
    fn test_invalid_host() {
        let result = Cli::parse_from(["timezone-converter-api", "--host", "localhost:80"])
            .into_config();
        assert!(matches!(result, Err(ServerError::InvalidAddress { .. })));
    }
}
