//! Configuration module
//!
//! Handles CLI configuration: where the service lives and how to poll it.

use std::time::Duration;

use delay_client::ClientConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the prediction service
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub max_attempts: u32,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Client configuration with the default endpoint paths
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
            .with_max_attempts(self.max_attempts)
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_mapping() {
        let config = Config {
            base_url: "http://predict.local:5000".to_string(),
            poll_interval_ms: 250,
            max_attempts: 12,
            request_timeout_secs: 3,
        };

        let client = config.client_config();
        assert_eq!(client.base_url, "http://predict.local:5000");
        assert_eq!(client.poll_interval, Duration::from_millis(250));
        assert_eq!(client.max_attempts, 12);
        assert_eq!(client.request_timeout, Duration::from_secs(3));
        assert!(client.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_fails_validation() {
        let config = Config {
            base_url: "http://predict.local:5000".to_string(),
            poll_interval_ms: 0,
            max_attempts: 12,
            request_timeout_secs: 3,
        };

        assert!(config.client_config().validate().is_err());
    }
}
