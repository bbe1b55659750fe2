//! Prediction endpoints

use delay_core::domain::job::JobId;
use delay_core::dto::job::{PollResponse, SubmitResponse};
use delay_core::dto::query::FlightQuery;
use tracing::debug;

use crate::PredictionClient;
use crate::error::Result;

impl PredictionClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit a flight query for classification
    ///
    /// The query is posted form-encoded to the submit endpoint.
    ///
    /// # Returns
    /// Whether the service accepted the query, and under which job id
    pub async fn submit_query(&self, query: &FlightQuery) -> Result<SubmitResponse> {
        let url = self.submit_url();
        let response = self
            .client
            .post(&url)
            .form(&query.to_form_fields())
            .send()
            .await?;

        let body = self.read_body(response).await?;
        Ok(SubmitResponse::from_json(&body)?)
    }

    /// Fetch the current status of a submitted job
    ///
    /// # Arguments
    /// * `id` - The job id returned on submission or by a previous WAIT
    pub async fn get_response(&self, id: &JobId) -> Result<PollResponse> {
        let url = self.response_url(id);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let body = self.read_body(response).await?;
        Ok(PollResponse::from_json(&body)?)
    }
}
