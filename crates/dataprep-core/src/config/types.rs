//! Sub-configuration structs with defaults matching the reference layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetsConfig {
    /// Input directories, processed in order
    pub inputs: Vec<PathBuf>,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            inputs: vec![PathBuf::from("./data/train"), PathBuf::from("./data/test")],
        }
    }
}

/// Output image settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Edge length of the square output images, in pixels
    pub size: u32,

    /// JPEG quality (1-100)
    pub quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            size: 384,
            quality: 75,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
