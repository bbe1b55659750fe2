//! Submission handler
//!
//! Drives one prediction from form submission to rendered result:
//!
//! 1. post the query; anything but an OK with a job id is an error
//! 2. show the processing placeholder
//! 3. run the poll loop for the job
//! 4. render the prediction, or show the error that ended the loop
//!
//! Only the most recent submission owns the results view. Starting a new
//! submission (or resuming a job) cancels the previous one first, and a
//! cancelled submission never writes to the view again.

use delay_core::domain::job::JobId;
use delay_core::domain::prediction::{DelayCategory, Prediction};
use delay_core::dto::job::SubmitResponse;
use delay_core::dto::query::FlightQuery;
use std::sync::{Arc, Mutex, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::api::PredictionApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::poller::PollLoop;
use crate::render::{Renderer, ResultsView, SharedView, ViewContent, show_unless_cancelled};

/// Final state of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionOutcome {
    /// Job id the service issued on submission
    pub id: JobId,
    pub prediction: Prediction,
    /// Rendered category; `None` when the code was not recognized
    pub category: Option<DelayCategory>,
}

/// Submits queries and renders their predictions into a results view
pub struct SubmissionHandler<V, A: ?Sized = dyn PredictionApi> {
    api: Arc<A>,
    poller: PollLoop<A>,
    renderer: Renderer<V>,
    current: Mutex<Option<CancellationToken>>,
}

impl<V: ResultsView, A: PredictionApi + ?Sized> SubmissionHandler<V, A> {
    pub fn new(api: Arc<A>, view: V, config: &ClientConfig) -> Self {
        Self::with_shared_view(api, Arc::new(Mutex::new(view)), config)
    }

    /// Creates a handler writing to a view the caller also holds
    pub fn with_shared_view(api: Arc<A>, view: SharedView<V>, config: &ClientConfig) -> Self {
        Self {
            poller: PollLoop::new(Arc::clone(&api), config),
            api,
            renderer: Renderer::new(view),
            current: Mutex::new(None),
        }
    }

    pub fn view(&self) -> &SharedView<V> {
        self.renderer.view()
    }

    /// Submits `query` and waits for its prediction
    pub async fn submit(&self, query: &FlightQuery) -> Result<PredictionOutcome> {
        let token = self.begin();

        info!(
            "Submitting {} flight {} {} -> {} on {}",
            query.carrier, query.flight_num, query.origin, query.dest, query.flight_date
        );

        let result = self.submit_and_poll(query, &token).await;
        self.report(&token, result)
    }

    /// Resumes polling for a job submitted earlier
    pub async fn resume(&self, id: JobId) -> Result<PredictionOutcome> {
        let token = self.begin();

        info!("Resuming prediction {}", id);
        show_unless_cancelled(self.view(), &token, ViewContent::Processing);

        let result = self.poll_and_render(id, &token).await;
        self.report(&token, result)
    }

    /// Cancels the in-flight submission, if any
    pub fn cancel(&self) {
        let current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(token) = current.as_ref() {
            token.cancel();
        }
    }

    /// Registers a new submission, cancelling the one it replaces
    fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = current.replace(token.clone()) {
            if !previous.is_cancelled() {
                info!("Superseding in-flight submission");
            }
            previous.cancel();
        }

        token
    }

    async fn submit_and_poll(
        &self,
        query: &FlightQuery,
        token: &CancellationToken,
    ) -> Result<PredictionOutcome> {
        let response = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(ClientError::Cancelled),
            response = self.api.submit(query) => response?,
        };

        let id = match response {
            SubmitResponse::Accepted { id } => id,
            SubmitResponse::Rejected { status } => {
                return Err(ClientError::SubmissionRejected(status));
            }
        };

        info!("Query accepted as {}", id);
        show_unless_cancelled(self.view(), token, ViewContent::Processing);

        self.poll_and_render(id, token).await
    }

    async fn poll_and_render(
        &self,
        id: JobId,
        token: &CancellationToken,
    ) -> Result<PredictionOutcome> {
        let prediction = self.poller.run(id.clone(), token).await?;
        let category = self.renderer.render_for(&prediction, token);

        // A recognized code that was not rendered lost the race to a cancel.
        if category.is_none() && prediction.category().is_some() {
            return Err(ClientError::Cancelled);
        }

        Ok(PredictionOutcome {
            id,
            prediction,
            category,
        })
    }

    /// Surfaces a failure in the view
    fn report(
        &self,
        token: &CancellationToken,
        result: Result<PredictionOutcome>,
    ) -> Result<PredictionOutcome> {
        if let Err(e) = &result {
            if e.is_cancelled() {
                info!("Submission cancelled");
            } else {
                warn!("Prediction failed: {}", e);
                show_unless_cancelled(self.view(), token, ViewContent::Failed(e));
            }
        }
        result
    }
}
