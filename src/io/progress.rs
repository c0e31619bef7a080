//! Multi-input progress tracking with automatic batching for large sets

use crate::algorithm::solver::RowProgress;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch counting
///
/// Shows one row-propagation bar per input for small batches and adds a
/// single batch bar once the input count exceeds the individual bar limit
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    input_bars: Vec<ProgressBar>,
    input_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows {{msg}}"
        ))
        .unwrap_or_else(|_template_error| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Inputs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_template_error| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            input_bars: Vec::new(),
            input_count: 0,
        }
    }

    /// Initialize progress bars based on input count
    pub fn initialize(&mut self, input_count: usize) {
        self.input_count = input_count;

        if input_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(input_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..input_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(ROW_STYLE.clone());
            self.input_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of inputs the manager was initialized for
    pub const fn input_count(&self) -> usize {
        self.input_count
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        let slots = self.input_bars.len();
        if slots == 0 {
            return None;
        }
        // Inputs beyond the visible bars reuse slots in rotation
        self.input_bars.get(index % slots)
    }

    /// Configure the bar for a new input
    pub fn start_input(&self, index: usize, name: &str, rows: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.reset();
            bar.set_length(rows as u64);
            bar.set_position(0);
            bar.set_prefix(name.to_string());
            bar.set_message(String::new());
        }
    }

    /// Report a finished image row
    pub fn update_row(&self, index: usize, progress: RowProgress) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position(progress.completed as u64);
            bar.set_message(format!("({} boundary states)", progress.boundary_states));
        }
    }

    /// Mark an input as counted
    pub fn complete_input(&self, index: usize, count: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.bar_for(index) {
            bar.set_message(format!("✓ {count}"));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All inputs processed");
        }
        let _ = self.multi_progress.clear();
    }
}
