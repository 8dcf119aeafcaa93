use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors reported by exchange REST endpoints.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("{venue} credentials not configured (set {env})")]
    MissingCredentials {
        venue: &'static str,
        env: &'static str,
    },

    #[error("{venue} returned HTTP {status}: {body}")]
    Status {
        venue: &'static str,
        status: u16,
        body: String,
    },

    #[error("{venue} rejected the request: {detail}")]
    Rejected { venue: &'static str, detail: String },

    #[error("{venue} response missing `{field}`")]
    MissingField {
        venue: &'static str,
        field: &'static str,
    },
}

/// Key material and signature errors.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("secret key is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("secret key must be 32 or 64 bytes, got {0}")]
    InvalidLength(usize),

    #[error("secret key does not match its public half: {0}")]
    InvalidKeypair(String),

    #[error("HMAC key rejected: {0}")]
    InvalidHmacKey(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

pub type Result<T> = std::result::Result<T, Error>;
