//! Job poller
//!
//! Polls the status endpoint of a submitted job until the service reports a
//! terminal response.
//!
//! - `WAIT`: sleep for the configured interval (1 s by default, no backoff)
//!   and poll again with the id carried by the response
//! - `OK`: return the prediction
//! - anything else, including transport failures: stop and return the error
//!
//! The loop is bounded by `max_attempts` and can be cancelled at any point,
//! both while a request is in flight and while sleeping.

use delay_core::domain::job::JobId;
use delay_core::domain::prediction::Prediction;
use delay_core::dto::job::PollResponse;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::PredictionApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Poll loop for a single job
pub struct PollLoop<A: ?Sized> {
    api: Arc<A>,
    poll_interval: Duration,
    max_attempts: u32,
}

impl<A: ?Sized> Clone for PollLoop<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            poll_interval: self.poll_interval,
            max_attempts: self.max_attempts,
        }
    }
}

impl<A: PredictionApi + ?Sized> PollLoop<A> {
    /// Creates a poll loop using the schedule from `config`
    pub fn new(api: Arc<A>, config: &ClientConfig) -> Self {
        Self {
            api,
            poll_interval: config.poll_interval,
            max_attempts: config.max_attempts,
        }
    }

    /// Polls job `id` until it completes, fails, or `cancel` fires
    pub async fn run(&self, id: JobId, cancel: &CancellationToken) -> Result<Prediction> {
        info!(
            "Waiting for prediction {} (interval: {:?}, max attempts: {})",
            id, self.poll_interval, self.max_attempts
        );

        let mut id = id;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            debug!("Polling for request id {} (attempt {})...", id, attempt);

            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                response = self.api.fetch_response(&id) => response,
            };

            match response {
                Ok(PollResponse::Ready { prediction }) => {
                    info!(
                        "Prediction {} ready after {} attempt(s): code {}",
                        id, attempt, prediction.code
                    );
                    return Ok(prediction);
                }
                Ok(PollResponse::Wait { id: next }) => {
                    if attempt >= self.max_attempts {
                        warn!("Giving up on {} after {} attempt(s)", id, attempt);
                        return Err(ClientError::PollingExhausted { attempts: attempt });
                    }
                    if next != id {
                        debug!("Service continued {} as {}", id, next);
                    }
                    id = next;
                }
                Err(e) => {
                    warn!("Polling {} failed on attempt {}: {}", id, attempt, e);
                    return Err(e);
                }
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                _ = time::sleep(self.poll_interval) => {}
            }
        }
    }
}
