//! JPEG output with staged writes.

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

use super::layout::staging_path_for;

/// Encodes normalized images as JPEG files.
///
/// The image is encoded into `<output>.part` and renamed over `<output>`
/// only once the encoder and the flush have succeeded, so a finished `.jpg`
/// is never a partial write.
#[derive(Debug, Clone)]
pub struct JpegWriter {
    quality: u8,
}

impl JpegWriter {
    /// Create a writer encoding at the given quality (1-100).
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }

    /// Encode `image` and place it at `path`.
    pub fn write(&self, image: &RgbImage, path: &Path) -> PipelineResult<()> {
        let staged = staging_path_for(path);

        if let Err(e) = self.encode_to(image, &staged, path) {
            let _ = std::fs::remove_file(&staged);
            return Err(e);
        }

        std::fs::rename(&staged, path).map_err(|source| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn encode_to(&self, image: &RgbImage, staged: &Path, path: &Path) -> PipelineResult<()> {
        let write_err = |source: std::io::Error| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(staged).map_err(write_err)?;
        let mut out = BufWriter::new(file);

        JpegEncoder::new_with_quality(&mut out, self.quality)
            .encode_image(image)
            .map_err(|e| PipelineError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        out.flush().map_err(write_err)?;
        Ok(())
    }
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> PipelineResult<()> {
    std::fs::create_dir_all(dir).map_err(|source| PipelineError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
