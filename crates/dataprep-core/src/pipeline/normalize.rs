//! Color and size normalization.
//!
//! Every image becomes 8-bit RGB at exactly `size × size`. The aspect ratio
//! is not preserved and alpha is dropped without blending.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Resampling filter used for every resize. Bicubic, matching Pillow's
/// default for `Image.resize`.
pub const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Convert to RGB, then stretch to a `size × size` square.
pub fn normalize(image: &DynamicImage, size: u32) -> RgbImage {
    let rgb = image.to_rgb8();
    if rgb.dimensions() == (size, size) {
        return rgb;
    }
    imageops::resize(&rgb, size, size, RESAMPLE_FILTER)
}
