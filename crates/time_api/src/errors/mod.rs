use std::net::SocketAddr;

/// Result type for startup and serving
pub type ServerResult<T> = Result<T, ServerError>;

/// Process-level errors
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Invalid listen address: {host}")]
    InvalidAddress { host: String },
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}
