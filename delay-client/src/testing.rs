//! Scripted prediction service for unit tests

use async_trait::async_trait;
use delay_core::domain::job::JobId;
use delay_core::domain::prediction::Prediction;
use delay_core::dto::job::{PollResponse, SubmitResponse};
use delay_core::dto::query::FlightQuery;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use tokio::time::Instant;

use crate::api::PredictionApi;
use crate::error::Result;

pub(crate) fn job(id: &str) -> JobId {
    JobId::parse(id).unwrap()
}

pub(crate) fn wait(id: &str) -> PollResponse {
    PollResponse::Wait { id: job(id) }
}

pub(crate) fn ready(code: i64) -> PollResponse {
    PollResponse::Ready {
        prediction: Prediction::new(code),
    }
}

pub(crate) fn accepted(id: &str) -> SubmitResponse {
    SubmitResponse::Accepted { id: job(id) }
}

/// Answers from per-job scripts
///
/// Polls for a job with no script left answer `WAIT` with the same id.
/// Polls for a job marked with [`ScriptedApi::hang`] never answer.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    submits: Mutex<VecDeque<Result<SubmitResponse>>>,
    polls: Mutex<HashMap<JobId, VecDeque<Result<PollResponse>>>>,
    hanging: Mutex<HashSet<JobId>>,
    poll_log: Mutex<Vec<(JobId, Instant)>>,
    submit_log: Mutex<Vec<FlightQuery>>,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn submit(self, response: Result<SubmitResponse>) -> Self {
        self.submits.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn poll(self, id: &str, response: Result<PollResponse>) -> Self {
        self.polls
            .lock()
            .unwrap()
            .entry(job(id))
            .or_default()
            .push_back(response);
        self
    }

    pub(crate) fn hang(self, id: &str) -> Self {
        self.hanging.lock().unwrap().insert(job(id));
        self
    }

    pub(crate) fn polled_ids(&self) -> Vec<String> {
        self.poll_log
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.to_string())
            .collect()
    }

    pub(crate) fn poll_times(&self) -> Vec<Instant> {
        self.poll_log.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub(crate) fn submitted(&self) -> Vec<FlightQuery> {
        self.submit_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionApi for ScriptedApi {
    async fn submit(&self, query: &FlightQuery) -> Result<SubmitResponse> {
        self.submit_log.lock().unwrap().push(query.clone());
        self.submits
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted submission")
    }

    async fn fetch_response(&self, id: &JobId) -> Result<PollResponse> {
        self.poll_log
            .lock()
            .unwrap()
            .push((id.clone(), Instant::now()));

        let hangs = self.hanging.lock().unwrap().contains(id);
        if hangs {
            std::future::pending::<()>().await;
        }

        let next = self
            .polls
            .lock()
            .unwrap()
            .get_mut(id)
            .and_then(|script| script.pop_front());

        next.unwrap_or_else(|| Ok(PollResponse::Wait { id: id.clone() }))
    }
}
