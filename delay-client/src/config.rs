//! Client configuration
//!
//! Endpoint locations and the polling schedule. The defaults match the
//! deployed service: a 1 second fixed poll interval against the realtime
//! classification endpoints.

use std::time::Duration;

use crate::error::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SUBMIT_PATH: &str = "/flights/delays/predict/classify_realtime";
pub const DEFAULT_RESPONSE_PATH: &str = "/flights/delays/predict/classify_realtime/response/";

/// Prediction client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Form action the query is posted to
    pub submit_path: String,

    /// Prefix the job id is appended to when polling
    pub response_path: String,

    /// Fixed delay between a WAIT response and the next poll
    pub poll_interval: Duration,

    /// Maximum number of poll requests before giving up
    pub max_attempts: u32,

    /// Upper bound for each individual HTTP request
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with default paths and schedule
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            submit_path: DEFAULT_SUBMIT_PATH.to_string(),
            response_path: DEFAULT_RESPONSE_PATH.to_string(),
            poll_interval: Duration::from_millis(1000),
            max_attempts: 300,
            request_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_paths(
        mut self,
        submit_path: impl Into<String>,
        response_path: impl Into<String>,
    ) -> Self {
        self.submit_path = submit_path.into();
        self.response_path = response_path.into();
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(invalid("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(invalid("base_url must start with http:// or https://"));
        }

        if !self.submit_path.starts_with('/') {
            return Err(invalid("submit_path must start with /"));
        }

        if !self.response_path.starts_with('/') {
            return Err(invalid("response_path must start with /"));
        }

        if self.poll_interval.is_zero() {
            return Err(invalid("poll_interval must be greater than 0"));
        }

        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be greater than 0"));
        }

        if self.request_timeout.is_zero() {
            return Err(invalid("request_timeout must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn invalid(message: &str) -> ClientError {
    ClientError::InvalidConfig(message.to_string())
}
