//! Poll command handler
//!
//! Resumes waiting on a request submitted earlier, e.g. after an
//! interrupted `predict`.

use anyhow::{Context, Result, anyhow};
use delay_core::domain::job::JobId;

use super::{Handler, finish};

/// Poll an existing request until its prediction is ready
pub async fn handle_poll_command(id: &str, handler: &Handler) -> Result<()> {
    let id = JobId::parse(id).ok_or_else(|| anyhow!("Request id cannot be empty"))?;

    let outcome = handler
        .resume(id.clone())
        .await
        .with_context(|| format!("No prediction for request {}", id))?;

    finish(outcome)
}
