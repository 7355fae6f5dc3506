//! Pipeline orchestration - wires together all processing stages.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::types::{Dataset, DatasetReport, FileOutcome};

use super::decode::ImageDecoder;
use super::discovery::FileDiscovery;
use super::encode::{ensure_dir, JpegWriter};
use super::layout::output_path_for;
use super::normalize::normalize;

/// Receives progress events while datasets are processed.
///
/// All methods default to no-ops.
pub trait ProgressObserver {
    /// A dataset's entries have been enumerated.
    fn dataset_started(&mut self, _dataset: &Dataset, _total: usize) {}

    /// One entry has been written or skipped.
    fn entry_finished(&mut self, _entry: &Path, _outcome: FileOutcome) {}

    /// A dataset completed or was interrupted.
    fn dataset_finished(&mut self, _report: &DatasetReport) {}
}

/// Observer that ignores every event.
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Normalizes dataset directories into fixed-size RGB JPEGs.
///
/// Files are processed one at a time. The decode/resize/encode work for each
/// file runs on the blocking pool and is awaited before the next file starts.
pub struct Normalizer {
    size: u32,
    writer: JpegWriter,
    stop: Arc<AtomicBool>,
}

impl Normalizer {
    /// Create a normalizer with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            size: config.output.size,
            writer: JpegWriter::new(config.output.quality),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use `flag` as the stop signal. Once it is set, no further entries
    /// are started.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = flag;
        self
    }

    /// Handle that stops processing before the next entry when set.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Output edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Normalize each input directory in order.
    ///
    /// The first error aborts everything: later datasets are never started.
    /// An interruption ends the run after the current dataset's report.
    pub async fn normalize_all(
        &self,
        inputs: &[PathBuf],
        observer: &mut dyn ProgressObserver,
    ) -> PipelineResult<Vec<DatasetReport>> {
        let mut reports = Vec::with_capacity(inputs.len());

        for input in inputs {
            let dataset = Dataset::for_input(input, self.size)?;
            let report = self.normalize_dataset(&dataset, observer).await?;
            let interrupted = report.interrupted;
            reports.push(report);
            if interrupted {
                break;
            }
        }

        Ok(reports)
    }

    /// Normalize a single dataset.
    pub async fn normalize_dataset(
        &self,
        dataset: &Dataset,
        observer: &mut dyn ProgressObserver,
    ) -> PipelineResult<DatasetReport> {
        let start = std::time::Instant::now();

        let entries = FileDiscovery::discover(&dataset.input_dir)?;
        ensure_dir(&dataset.output_dir)?;

        tracing::info!(
            "Normalizing {} entries from {:?} into {:?}",
            entries.len(),
            dataset.input_dir,
            dataset.output_dir
        );

        let mut report = DatasetReport::new(dataset.clone(), entries.len());
        observer.dataset_started(dataset, entries.len());

        for entry in &entries {
            if self.stop.load(Ordering::SeqCst) {
                tracing::warn!(
                    "Interrupted after {} of {} entries in {:?}",
                    report.processed(),
                    report.total,
                    dataset.input_dir
                );
                report.interrupted = true;
                break;
            }

            let outcome = self.process_entry(entry, &dataset.output_dir).await?;
            report.record(outcome);
            observer.entry_finished(entry, outcome);
        }

        report.elapsed = start.elapsed();
        observer.dataset_finished(&report);
        tracing::debug!(
            "Finished {:?}: {} written, {} skipped in {:?}",
            dataset.input_dir,
            report.written,
            report.skipped,
            report.elapsed
        );

        Ok(report)
    }

    /// Process one entry: skip when its output exists, otherwise decode,
    /// normalize and write it.
    pub async fn process_entry(
        &self,
        entry: &Path,
        output_dir: &Path,
    ) -> PipelineResult<FileOutcome> {
        let output_path = output_path_for(entry, output_dir)?;
        if output_path.exists() {
            tracing::trace!("Skipping {:?}: {:?} exists", entry, output_path);
            return Ok(FileOutcome::Skipped);
        }

        let entry_owned = entry.to_path_buf();
        let writer = self.writer.clone();
        let size = self.size;

        tokio::task::spawn_blocking(move || {
            Self::convert_sync(&entry_owned, &output_path, size, &writer)
        })
        .await
        .map_err(|e| PipelineError::Worker {
            path: entry.to_path_buf(),
            message: e.to_string(),
        })?
    }

    /// Synchronous decode → normalize → encode (runs in spawn_blocking).
    fn convert_sync(
        entry: &Path,
        output_path: &Path,
        size: u32,
        writer: &JpegWriter,
    ) -> PipelineResult<FileOutcome> {
        let start = std::time::Instant::now();

        let decoded = ImageDecoder::decode(entry)?;
        let decode_time = start.elapsed();
        tracing::trace!("  Decode: {:?}", decode_time);

        let resize_start = std::time::Instant::now();
        let normalized = normalize(&decoded.image, size);
        tracing::trace!("  Normalize: {:?}", resize_start.elapsed());

        let encode_start = std::time::Instant::now();
        writer.write(&normalized, output_path)?;
        tracing::trace!("  Encode: {:?}", encode_start.elapsed());

        tracing::debug!(
            "Wrote {:?} ({}x{} {:?} -> {size}x{size}) in {:?}",
            output_path,
            decoded.width,
            decoded.height,
            decoded.format,
            start.elapsed()
        );

        Ok(FileOutcome::Written {
            file_size: decoded.file_size,
        })
    }
}
