//! Results view and renderer
//!
//! A results view is the single output surface of a submission: it shows a
//! placeholder while the job runs, then either the prediction text or the
//! failure. Each update replaces the previous content.
//!
//! The view is shared between the submission handler and the renderer. A
//! write is skipped once the owning submission has been cancelled, and the
//! check happens under the view lock, so a superseded poll loop can never
//! overwrite the content of a newer one.

use delay_core::domain::prediction::{DelayCategory, Prediction};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::ClientError;

pub const PROCESSING_MESSAGE: &str = "Processing...";

/// Content written to a results view
#[derive(Debug, Clone, Copy)]
pub enum ViewContent<'a> {
    /// Job accepted, waiting for the classifier
    Processing,
    Prediction(DelayCategory),
    Failed(&'a ClientError),
}

impl ViewContent<'_> {
    /// Plain-text rendering of the content
    pub fn text(&self) -> String {
        match self {
            ViewContent::Processing => PROCESSING_MESSAGE.to_string(),
            ViewContent::Prediction(category) => category.message().to_string(),
            ViewContent::Failed(err) => format!("Error: {}", err),
        }
    }
}

/// Output surface for a submission
pub trait ResultsView: Send {
    /// Replaces the current content
    fn show(&mut self, content: ViewContent<'_>);
}

/// A results view shared between writers
pub type SharedView<V> = Arc<Mutex<V>>;

pub(crate) fn lock_view<V>(view: &SharedView<V>) -> MutexGuard<'_, V> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writes `content` unless `token` has been cancelled
///
/// Returns whether the write happened.
pub(crate) fn show_unless_cancelled<V: ResultsView>(
    view: &SharedView<V>,
    token: &CancellationToken,
    content: ViewContent<'_>,
) -> bool {
    let mut guard = lock_view(view);
    if token.is_cancelled() {
        debug!("Skipping view update from a cancelled submission");
        return false;
    }
    guard.show(content);
    true
}

/// In-memory view that keeps every update
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    history: Vec<String>,
}

impl RecordingView {
    /// Current content, or `None` if nothing was shown yet
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// All updates in the order they were shown
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl ResultsView for RecordingView {
    fn show(&mut self, content: ViewContent<'_>) {
        self.history.push(content.text());
    }
}

/// Writes predictions into a results view
#[derive(Debug)]
pub struct Renderer<V> {
    view: SharedView<V>,
}

impl<V> Clone for Renderer<V> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
        }
    }
}

impl<V: ResultsView> Renderer<V> {
    pub fn new(view: SharedView<V>) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &SharedView<V> {
        &self.view
    }

    /// Shows the display text for `prediction`
    ///
    /// An unrecognized code leaves the view untouched and returns `None`.
    pub fn render(&self, prediction: &Prediction) -> Option<DelayCategory> {
        self.render_for(prediction, &CancellationToken::new())
    }

    /// Like [`Renderer::render`], but only while `token` is live
    pub(crate) fn render_for(
        &self,
        prediction: &Prediction,
        token: &CancellationToken,
    ) -> Option<DelayCategory> {
        let Some(category) = prediction.category() else {
            warn!(
                "Unrecognized prediction code {}; leaving results unchanged",
                prediction.code
            );
            return None;
        };

        if show_unless_cancelled(&self.view, token, ViewContent::Prediction(category)) {
            Some(category)
        } else {
            None
        }
    }
}
