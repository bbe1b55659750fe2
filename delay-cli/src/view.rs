//! Terminal results view
//!
//! A terminal cannot replace earlier output, so each view update is printed
//! as its own line.

use colored::*;
use delay_client::{ResultsView, ViewContent};
use delay_core::domain::prediction::DelayCategory;
use std::io::{self, Write};

/// Prints view updates to a writer (stdout by default)
pub struct TerminalView<W = io::Stdout> {
    out: W,
}

impl TerminalView {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> TerminalView<W> {
    #[cfg(test)]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ResultsView for TerminalView<W> {
    fn show(&mut self, content: ViewContent<'_>) {
        let text = content.text();
        let line = match content {
            ViewContent::Processing => text.dimmed(),
            ViewContent::Prediction(category) => colorize_category(category, &text),
            ViewContent::Failed(_) => text.red(),
        };

        // Nothing sensible to do if stdout is gone
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }
}

/// Colorize a prediction for display
fn colorize_category(category: DelayCategory, text: &str) -> ColoredString {
    match category {
        DelayCategory::OnTime => text.green().bold(),
        DelayCategory::SlightlyLate => text.yellow().bold(),
        DelayCategory::VeryLate => text.red().bold(),
    }
}
