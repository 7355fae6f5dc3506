//! Image decoding with content-based format detection.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

/// Decodes image files of any format the `image` crate supports.
pub struct ImageDecoder;

/// Result of decoding an image.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
}

impl ImageDecoder {
    /// Read and decode the file at `path`.
    pub fn decode(path: &Path) -> PipelineResult<DecodedImage> {
        let bytes = std::fs::read(path).map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode_bytes(bytes, path)
    }

    /// Decode an in-memory buffer. `path` is used for error context and, for
    /// formats without magic bytes (TGA), as the format hint.
    pub fn decode_bytes(bytes: Vec<u8>, path: &Path) -> PipelineResult<DecodedImage> {
        let decode_err = |message: String| PipelineError::Decode {
            path: path.to_path_buf(),
            message,
        };

        let file_size = bytes.len() as u64;
        let mut reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| decode_err(format!("Cannot detect image format: {e}")))?;

        let format = match reader.format() {
            Some(sniffed) => sniffed,
            None => {
                let hinted = ImageFormat::from_path(path)
                    .map_err(|_| decode_err("Unrecognized image format".to_string()))?;
                reader.set_format(hinted);
                hinted
            }
        };

        let image = reader.decode().map_err(|e| decode_err(e.to_string()))?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            file_size,
        })
    }
}
