//! Core data types for dataset normalization.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::PipelineResult;
use crate::pipeline::layout::output_dir_for;

/// One input directory and the directory its normalized images go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Directory holding the source images
    pub input_dir: PathBuf,
    /// Sibling directory receiving `<stem>.jpg` files
    pub output_dir: PathBuf,
}

impl Dataset {
    /// Pair `input_dir` with its `<name>_<size>` sibling.
    pub fn for_input(input_dir: &Path, size: u32) -> PipelineResult<Self> {
        Ok(Self {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir_for(input_dir, size)?,
        })
    }

    /// Short display name (the input directory's file name).
    pub fn name(&self) -> String {
        self.input_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_dir.display().to_string())
    }
}

/// What happened to a single input entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// A new output was encoded and written
    Written {
        /// Size of the source file in bytes
        file_size: u64,
    },
    /// The output already existed
    Skipped,
}

/// Summary of one dataset run.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    /// The dataset processed
    pub dataset: Dataset,
    /// Entries found in the input directory
    pub total: usize,
    /// Outputs written during this run
    pub written: usize,
    /// Entries whose output already existed
    pub skipped: usize,
    /// Bytes of source images decoded
    pub bytes_read: u64,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// Whether the run stopped early on request
    pub interrupted: bool,
}

impl DatasetReport {
    pub(crate) fn new(dataset: Dataset, total: usize) -> Self {
        Self {
            dataset,
            total,
            written: 0,
            skipped: 0,
            bytes_read: 0,
            elapsed: Duration::ZERO,
            interrupted: false,
        }
    }

    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Written { file_size } => {
                self.written += 1;
                self.bytes_read += file_size;
            }
            FileOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Entries handled so far (written or skipped).
    pub fn processed(&self) -> usize {
        self.written + self.skipped
    }

    /// Images written per second.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.written as f64 / secs
        } else {
            0.0
        }
    }
}
