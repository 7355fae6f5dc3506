//! Dataprep Core - image dataset normalization library.
//!
//! Takes directories of images in any mix of formats, color modes and sizes
//! and writes each one as a fixed-size RGB JPEG into a sibling directory.
//!
//! # Architecture
//!
//! ```text
//! data/train/* → Enumerate → Skip if output exists → Decode → RGB → Resize → JPEG → data/train_384/*
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use dataprep_core::{Config, NoProgress, Normalizer};
//!
//! #[tokio::main]
//! async fn main() -> dataprep_core::Result<()> {
//!     let config = Config::load()?;
//!     let normalizer = Normalizer::new(&config);
//!
//!     let reports = normalizer
//!         .normalize_all(&config.input_dirs(), &mut NoProgress)
//!         .await?;
//!     for report in reports {
//!         println!("{}: {} written", report.dataset.name(), report.written);
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, PipelineError, PipelineResult, PrepError, Result};
pub use pipeline::{NoProgress, Normalizer, ProgressObserver};
pub use types::{Dataset, DatasetReport, FileOutcome};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
