//! Flight Delay Prediction Client
//!
//! Submits flight queries to the realtime delay classifier and polls for the
//! result.
//!
//! The pieces compose bottom-up:
//! - [`PredictionClient`] speaks HTTP to the two service endpoints
//! - [`PollLoop`] re-polls a job every second until it is ready
//! - [`Renderer`] turns the prediction into its display text
//! - [`SubmissionHandler`] drives the whole flow and owns the results view
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use delay_client::{ClientConfig, PredictionClient, RecordingView, SubmissionHandler};
//! use delay_core::dto::query::FlightQuery;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new("http://localhost:5000");
//!     let client = Arc::new(PredictionClient::from_config(&config)?);
//!     let handler = SubmissionHandler::new(client, RecordingView::default(), &config);
//!
//!     let query = FlightQuery::new(
//!         "AA", "ATL", "SFO", "1519",
//!         NaiveDate::from_ymd_opt(2016, 12, 25).unwrap(),
//!         5.0,
//!     );
//!     let outcome = handler.submit(&query).await?;
//!
//!     println!("{:?}", outcome.category);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod poller;
mod predictions;
pub mod render;
pub mod submission;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use api::PredictionApi;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use poller::PollLoop;
pub use render::{RecordingView, Renderer, ResultsView, SharedView, ViewContent};
pub use submission::{PredictionOutcome, SubmissionHandler};

use delay_core::domain::job::JobId;
use reqwest::Client;

/// HTTP client for the prediction service
///
/// Covers the two endpoints of the realtime classifier:
/// - form submission, answered with a job id
/// - status polling by job id
#[derive(Debug, Clone)]
pub struct PredictionClient {
    /// Base URL of the service (e.g., "http://localhost:5000")
    base_url: String,
    submit_path: String,
    response_path: String,
    /// HTTP client instance
    client: Client,
}

impl PredictionClient {
    /// Create a new client with default endpoint paths
    ///
    /// # Example
    /// ```
    /// use delay_client::PredictionClient;
    ///
    /// let client = PredictionClient::new("http://localhost:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            submit_path: config::DEFAULT_SUBMIT_PATH.to_string(),
            response_path: config::DEFAULT_RESPONSE_PATH.to_string(),
            client,
        }
    }

    /// Create a client from a validated configuration
    ///
    /// The per-request timeout is applied to the underlying HTTP client.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_client = Client::builder().timeout(config.request_timeout).build()?;

        let mut client = Self::with_client(config.base_url.clone(), http_client);
        client.submit_path = config.submit_path.clone();
        client.response_path = config.response_path.clone();
        Ok(client)
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL the flight query form is posted to
    pub fn submit_url(&self) -> String {
        format!("{}{}", self.base_url, self.submit_path)
    }

    /// URL polled for the status of `id`
    ///
    /// The id is appended verbatim, as a path slug.
    pub fn response_url(&self, id: &JobId) -> String {
        format!("{}{}{}", self.base_url, self.response_path, id)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and return the body text
    ///
    /// The service does not always label its JSON with a JSON content type,
    /// so bodies are decoded by the caller from text.
    async fn read_body(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.text().await?)
    }
}
