use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching suggestions
///
/// Every variant is caught by the fetch worker and surfaced inline in the
/// dropdown; none of them reach the event loop.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Configured endpoint is not an absolute URL
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Endpoint answered with a non-success status
    #[error("Failed to fetch suggestions: HTTP {code} from {url}")]
    Status { code: u16, url: String },

    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not a list of `{id, name}` records
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Custom error types for typeahead
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Fetch worker failed to start: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
