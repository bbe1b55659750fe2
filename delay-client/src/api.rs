//! Prediction service abstraction
//!
//! The poll loop and the submission handler talk to the service through
//! this trait so they can be driven by scripted responses in tests.

use async_trait::async_trait;
use delay_core::domain::job::JobId;
use delay_core::dto::job::{PollResponse, SubmitResponse};
use delay_core::dto::query::FlightQuery;

use crate::PredictionClient;
use crate::error::Result;

/// Operations offered by the prediction service
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submits a query, returning the service's verdict on it
    async fn submit(&self, query: &FlightQuery) -> Result<SubmitResponse>;

    /// Fetches the status of job `id` once
    async fn fetch_response(&self, id: &JobId) -> Result<PollResponse>;
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn submit(&self, query: &FlightQuery) -> Result<SubmitResponse> {
        self.submit_query(query).await
    }

    async fn fetch_response(&self, id: &JobId) -> Result<PollResponse> {
        self.get_response(id).await
    }
}
