//! Error types for chainpulse

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Probe-related errors
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Chain name or id not present in the registry
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Probe-specific errors.
///
/// These never cross the engine boundary: every variant collapses into
/// `reachable = false` on the endpoint's `ProbeResult`.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Probe timeout after {0}ms")]
    Timeout(u64),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Endpoint returned status {0}")]
    BadStatus(u16),

    #[error("Invalid response from endpoint: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    InvalidFile(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    WriteError(String),
}

/// Output-related errors
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write JSON: {0}")]
    JsonWrite(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to create output file: {0}")]
    FileCreate(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
