//! Shared types for the greyscale conversion pipeline.

use serde::{Deserialize, Serialize};

use crate::format::FormatTag;

/// Re-export `RgbaImage` so downstream crates can hold the greyscale
/// output without depending on `image` directly.
pub use image::RgbaImage;

/// Re-export `DynamicImage`, the decoded source in its native
/// representation (palette, luma, 16-bit, ...).
pub use image::DynamicImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Dimensions of any image exposing per-pixel access.
    #[must_use]
    pub fn of<I: image::GenericImageView>(image: &I) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    /// Returns `true` if the image has no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A decoded source image together with the format it was detected as.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Pixel data in whatever representation the decoder produced.
    pub image: DynamicImage,
    /// Format detected from the stream's magic bytes.
    pub format: FormatTag,
}

impl DecodedImage {
    /// Source image dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.image)
    }
}

/// Configuration for the greyscale transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Split the transform across rows on the rayon thread pool.
    ///
    /// The output is bit-identical either way.
    pub parallel: bool,
}

impl TransformConfig {
    /// Default for [`TransformConfig::parallel`].
    pub const DEFAULT_PARALLEL: bool = true;
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            parallel: Self::DEFAULT_PARALLEL,
        }
    }
}

/// Errors that can occur while decoding the source image.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The stream is empty or its header is not JPEG, PNG or GIF.
    #[error("unrecognized image format (supported formats are JPEG, PNG, GIF)")]
    UnrecognizedFormat,

    /// The header matched a supported format but the body is malformed.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
}
