//! Image normalization pipeline components.
//!
//! This module contains all the stages of the pipeline:
//! - **discovery**: List the direct entries of a dataset directory
//! - **layout**: Derive output directories and output file names
//! - **decode**: Load and decode images from various formats
//! - **normalize**: Convert to RGB and resize to a fixed square
//! - **encode**: Write JPEG outputs
//! - **processor**: Orchestrates the full pipeline

pub mod decode;
pub mod discovery;
pub mod encode;
pub mod layout;
pub mod normalize;
pub mod processor;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::FileDiscovery;
pub use encode::JpegWriter;
pub use normalize::{normalize, RESAMPLE_FILTER};
pub use processor::{NoProgress, Normalizer, ProgressObserver};
