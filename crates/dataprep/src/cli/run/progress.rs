//! Progress bar and end-of-dataset summary.

use std::path::Path;
use std::time::Instant;

use dataprep_core::{Dataset, DatasetReport, FileOutcome, ProgressObserver};
use indicatif::{ProgressBar, ProgressStyle};

/// Draws one progress bar per dataset and prints a summary when it ends.
pub struct BarProgress {
    bar: Option<ProgressBar>,
    started: Instant,
    written: u64,
    hidden: bool,
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl BarProgress {
    pub fn new() -> Self {
        Self {
            bar: None,
            started: Instant::now(),
            written: 0,
            hidden: false,
        }
    }

    /// Progress observer that tracks counts without drawing.
    #[cfg(test)]
    pub fn hidden() -> Self {
        let mut progress = Self::new();
        progress.hidden = true;
        progress
    }
}

impl ProgressObserver for BarProgress {
    fn dataset_started(&mut self, dataset: &Dataset, total: usize) {
        let bar = if self.hidden {
            ProgressBar::hidden()
        } else {
            create_progress_bar(total as u64)
        };
        bar.set_prefix(dataset.name());
        self.bar = Some(bar);
        self.started = Instant::now();
        self.written = 0;
    }

    fn entry_finished(&mut self, _entry: &Path, outcome: FileOutcome) {
        let Some(bar) = &self.bar else {
            return;
        };
        if matches!(outcome, FileOutcome::Written { .. }) {
            self.written += 1;
        }

        bar.inc(1);
        let elapsed = self.started.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            bar.set_message(format!("{:.1} img/sec", self.written as f64 / elapsed));
        }
    }

    fn dataset_finished(&mut self, report: &DatasetReport) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        if !self.hidden {
            print_summary(report);
        }
    }
}

impl Drop for BarProgress {
    /// Clears a bar left open when a dataset ends in an error.
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Create a progress bar for one dataset.
fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} {prefix:>8} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary block after a dataset.
fn print_summary(report: &DatasetReport) {
    let mb_processed = report.bytes_read as f64 / 1_000_000.0;
    let secs = report.elapsed.as_secs_f64();
    let throughput = if secs > 0.0 { mb_processed / secs } else { 0.0 };

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("    {}", report.dataset.name());
    eprintln!("    -> {}", report.dataset.output_dir.display());
    eprintln!("  ====================================");
    eprintln!("    Written:      {:>8}", report.written);
    if report.skipped > 0 {
        eprintln!("    Skipped:      {:>8}", report.skipped);
    }
    if report.interrupted {
        eprintln!(
            "    Remaining:    {:>8}",
            report.total - report.processed()
        );
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", report.total);
    eprintln!("    Duration:     {:>7.1}s", secs);
    eprintln!("    Rate:         {:>7.1} img/sec", report.rate());
    eprintln!("    Throughput:   {:>7.1} MB/sec", throughput);
    eprintln!("  ====================================");
}
