//! Step progress reporting for a single generation run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] step {{pos}} (restarts: {{prefix}})");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports progress of one `run`, ticking once per `step` call
///
/// Wraps a single `indicatif` bar sized to the step budget; restarts reset
/// the visible position but are tallied in the bar's prefix rather than
/// losing the count.
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a progress bar sized to `max_steps`
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        let bar = ProgressBar::new(max_steps as u64);
        bar.set_style(STEP_STYLE.clone());
        bar.set_message("generating");
        bar.set_prefix("0");
        Self { bar }
    }

    /// Record one completed step
    pub fn tick(&self, steps: usize) {
        self.bar.set_position(steps as u64);
    }

    /// Record a contradiction restart
    pub fn record_restart(&self, restarts: usize) {
        self.bar.set_prefix(restarts.to_string());
    }

    /// Mark the run as finished
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }

    /// Mark the run as abandoned, e.g. on budget exhaustion
    pub fn abandon(&self) {
        self.bar.abandon_with_message("budget exhausted");
    }
}
