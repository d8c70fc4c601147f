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

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Every configured proxy identity has already been handed out.
    #[error("proxy pool exhausted")]
    PoolExhausted,

    /// The warm-up request or the directory seed crawl failed.
    #[error("failed to initialize client: {source}")]
    Initialization {
        #[source]
        source: Box<Error>,
    },

    #[error("upstream returned HTTP {status} for {path}")]
    Upstream { status: u16, path: String },

    #[error("response from {path} has an unexpected shape: {reason}")]
    MalformedResponse { path: String, reason: String },

    #[error("unknown politician: {0}")]
    UnknownPolitician(String),

    /// A single record could not be normalized; siblings are unaffected.
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn initialization(source: Error) -> Self {
        match source {
            // Pool exhaustion is reported as-is; nothing was attempted yet.
            Error::PoolExhausted => Error::PoolExhausted,
            other => Error::Initialization {
                source: Box::new(other),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
