//! Job envelopes returned by the prediction service
//!
//! Both endpoints answer with a JSON object keyed on `status`:
//!
//! - submit: `{"status": "OK", "id": "<job id>"}`
//! - poll: `{"status": "WAIT", "id": "<job id>"}` or
//!   `{"status": "OK", "prediction": {"Prediction": 1}}`
//!
//! Bodies are decoded in two steps so that an unrecognized `status` can be
//! told apart from a body that is not an envelope at all.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::job::JobId;
use crate::domain::prediction::Prediction;

pub const STATUS_OK: &str = "OK";
pub const STATUS_WAIT: &str = "WAIT";

/// Errors decoding a status envelope
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Body is not JSON or fields have the wrong type
    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("envelope has no status field")]
    MissingStatus,

    /// A field required by the given status is absent or empty
    #[error("{status} envelope is missing `{field}`")]
    MissingField {
        status: &'static str,
        field: &'static str,
    },

    /// Poll status outside {OK, WAIT}
    #[error("unknown status `{0}`")]
    UnknownStatus(String),
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    status: Option<String>,
    id: Option<String>,
    prediction: Option<Prediction>,
}

impl RawEnvelope {
    fn parse(body: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(body)?)
    }

    fn job_id(&mut self, status: &'static str) -> Result<JobId, EnvelopeError> {
        self.id
            .take()
            .and_then(JobId::parse)
            .ok_or(EnvelopeError::MissingField { status, field: "id" })
    }
}

/// Answer to a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResponse {
    /// The query was queued under `id`
    Accepted { id: JobId },
    /// Any status other than OK
    Rejected { status: String },
}

impl SubmitResponse {
    pub fn from_json(body: &str) -> Result<Self, EnvelopeError> {
        let mut raw = RawEnvelope::parse(body)?;
        let status = raw.status.take().ok_or(EnvelopeError::MissingStatus)?;

        if status == STATUS_OK {
            let id = raw.job_id(STATUS_OK)?;
            Ok(SubmitResponse::Accepted { id })
        } else {
            Ok(SubmitResponse::Rejected { status })
        }
    }
}

/// Answer to a status poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResponse {
    /// Not ready yet; poll again with `id`
    Wait { id: JobId },
    /// Terminal: the classifier finished
    Ready { prediction: Prediction },
}

impl PollResponse {
    pub fn from_json(body: &str) -> Result<Self, EnvelopeError> {
        let mut raw = RawEnvelope::parse(body)?;
        let status = raw.status.take().ok_or(EnvelopeError::MissingStatus)?;

        match status.as_str() {
            STATUS_OK => {
                let prediction = raw.prediction.ok_or(EnvelopeError::MissingField {
                    status: STATUS_OK,
                    field: "prediction",
                })?;
                Ok(PollResponse::Ready { prediction })
            }
            STATUS_WAIT => {
                let id = raw.job_id(STATUS_WAIT)?;
                Ok(PollResponse::Wait { id })
            }
            _ => Err(EnvelopeError::UnknownStatus(status)),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PollResponse::Ready { .. })
    }
}
