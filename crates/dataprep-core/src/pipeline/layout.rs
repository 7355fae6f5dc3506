//! Output path derivation.
//!
//! `data/train` normalized at 384 lands in the sibling `data/train_384`, and
//! `data/train/cat.png` becomes `data/train_384/cat.jpg`.

use std::path::{Path, PathBuf};

use crate::error::{PipelineError, PipelineResult};

/// Extension of every output file.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Output directory for an input directory: a sibling named `<name>_<size>`.
pub fn output_dir_for(input_dir: &Path, size: u32) -> PipelineResult<PathBuf> {
    let name = input_dir
        .file_name()
        .ok_or_else(|| PipelineError::InvalidFileName(input_dir.to_path_buf()))?;

    let mut dir_name = name.to_os_string();
    dir_name.push(format!("_{size}"));

    Ok(match input_dir.parent() {
        Some(parent) => parent.join(dir_name),
        None => PathBuf::from(dir_name),
    })
}

/// Output file for an input entry: `<output_dir>/<stem>.jpg`.
///
/// Inputs sharing a stem (`cat.png`, `cat.bmp`) map to the same output.
pub fn output_path_for(entry: &Path, output_dir: &Path) -> PipelineResult<PathBuf> {
    let stem = entry
        .file_stem()
        .ok_or_else(|| PipelineError::InvalidFileName(entry.to_path_buf()))?;

    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);
    Ok(output_dir.join(file_name))
}

/// Staging path an output is encoded into before being renamed into place.
pub fn staging_path_for(output_path: &Path) -> PathBuf {
    let mut staged = output_path.as_os_str().to_os_string();
    staged.push(".part");
    PathBuf::from(staged)
}
