//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod poll;
mod predict;

pub use predict::PredictArgs;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use delay_client::{PredictionClient, PredictionOutcome, SubmissionHandler};
use std::sync::Arc;
use tracing::warn;

use crate::config::Config;
use crate::view::TerminalView;

type Handler = SubmissionHandler<TerminalView, PredictionClient>;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a flight and wait for its delay prediction
    Predict(PredictArgs),
    /// Wait for the prediction of an already submitted request
    Poll {
        /// Request id returned on submission
        id: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let handler = build_handler(config)?;
    let ctrl_c = cancel_on_ctrl_c(&handler);

    let result = match command {
        Commands::Predict(args) => predict::handle_predict_command(args, &handler).await,
        Commands::Poll { id } => poll::handle_poll_command(&id, &handler).await,
    };

    ctrl_c.abort();
    result
}

/// Builds a submission handler printing to stdout
fn build_handler(config: &Config) -> Result<Arc<Handler>> {
    let client_config = config.client_config();
    let client = PredictionClient::from_config(&client_config)
        .context("Invalid prediction service configuration")?;

    Ok(Arc::new(SubmissionHandler::new(
        Arc::new(client),
        TerminalView::stdout(),
        &client_config,
    )))
}

/// Cancels the in-flight prediction when Ctrl-C is pressed
fn cancel_on_ctrl_c(handler: &Arc<Handler>) -> tokio::task::JoinHandle<()> {
    let handler = Arc::clone(handler);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling prediction");
            handler.cancel();
        }
    })
}

/// Checks that a finished prediction was actually shown
fn finish(outcome: PredictionOutcome) -> Result<()> {
    if outcome.category.is_none() {
        bail!(
            "Service returned unrecognized prediction code {} for request {}",
            outcome.prediction.code,
            outcome.id
        );
    }

    println!("{}", format!("Request id: {}", outcome.id).dimmed());
    Ok(())
}
