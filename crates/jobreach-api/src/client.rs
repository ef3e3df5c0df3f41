//! HTTP client for the job-search REST endpoint.
//!
//! Wraps `reqwest` with typed response deserialization and envelope
//! checking: the endpoint always answers 200 with a `success` flag, so an
//! application-level failure surfaces as [`ApiError::Api`] rather than an
//! HTTP status.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::error::ApiError;
use crate::query::SearchQuery;
use crate::types::{SearchResponse, SearchResults};

/// Client for the job-search endpoint.
///
/// The endpoint base URL is deployment-specific (it comes from
/// `JOBREACH_API_URL`), so there is no production default here.
#[derive(Debug)]
pub struct JobsClient {
    client: Client,
    base_url: Url,
}

impl JobsClient {
    /// Creates a new client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches one page of job listings matching `query`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the endpoint reports `success: false`.
    /// - [`ApiError::Http`] on network failure or a non-2xx status.
    /// - [`ApiError::Deserialize`] if the response body does not match the
    ///   expected shape.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, ApiError> {
        let mut url = self.base_url.clone();
        query.apply_to(&mut url);
        tracing::debug!(%url, "job search request");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        if !envelope.success {
            return Err(ApiError::Api(
                envelope
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(SearchResults {
            jobs: envelope.jobs,
            total_count: envelope.total_count,
            total_pages: envelope.total_pages,
        })
    }
}
