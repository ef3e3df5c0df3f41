use thiserror::Error;

/// Errors returned by the job-search API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client, or a
    /// non-2xx response status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint URL could not be parsed.
    #[error("invalid job API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The endpoint answered with `success: false` and (usually) a message.
    #[error("job API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
