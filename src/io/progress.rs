//! Generation progress reporting for dataset batches

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} generations")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Datasets: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch runs
///
/// One bar tracks the dataset batch, a second tracks generations inside
/// the dataset currently being optimized.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    generation_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            generation_bar: None,
        }
    }

    /// Show a batch bar when more than one dataset is queued
    pub fn initialize(&mut self, dataset_count: usize) {
        if dataset_count > 1 {
            let bar = ProgressBar::new(dataset_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(bar));
        }
    }

    /// Start a generation bar for one dataset
    pub fn start_dataset(&mut self, path: &Path, generations: usize) {
        if let Some(old) = self.generation_bar.take() {
            old.finish_and_clear();
        }
        let bar = ProgressBar::new(generations as u64);
        bar.set_style(GENERATION_STYLE.clone());
        bar.set_message(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.generation_bar = Some(self.multi_progress.add(bar));
    }

    /// Report the current generation
    pub fn update_generation(&self, generation: usize) {
        if let Some(ref bar) = self.generation_bar {
            bar.set_position(generation as u64);
        }
    }

    /// Mark the active dataset as done and advance the batch bar
    pub fn complete_dataset(&mut self) {
        if let Some(bar) = self.generation_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All datasets processed");
        }
        let _ = self.multi_progress.clear();
    }
}
