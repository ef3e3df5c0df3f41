use thiserror::Error;

/// Errors returned by the geocoder HTTP layer.
///
/// These never escape past [`crate::resolve_participant`], which converts
/// every failure into a fallthrough to the non-network lookup chain.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client, or a
    /// non-2xx response status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
