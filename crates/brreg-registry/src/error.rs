use thiserror::Error;

/// Errors returned by the registry HTTP client.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("entity not found: {url}")]
    NotFound { url: String },

    /// Any 5xx response.
    #[error("registry unavailable (HTTP {status})")]
    ServiceUnavailable { status: u16 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
