//! greyscale-pipeline: Pure image decoding and greyscale transform (sans-IO).
//!
//! Converts an encoded image into a greyscale rendition through:
//! format detection -> decode -> luminosity transform.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. Re-encoding lives in
//! `greyscale-export` and all filesystem interaction lives in the
//! `greyscale` binary.

pub mod decode;
pub mod format;
pub mod transform;
pub mod types;

pub use decode::{decode, detect_format};
pub use format::FormatTag;
pub use transform::{luminosity, to_greyscale, to_greyscale_serial, transform};
pub use types::{
    DecodedImage, Dimensions, DynamicImage, PipelineError, RgbaImage, TransformConfig,
};

/// Result of running the pipeline on one encoded image.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// The greyscale image, same dimensions as the source.
    pub image: RgbaImage,
    /// Format the source was detected as; the output must use it too.
    pub format: FormatTag,
}

impl ProcessResult {
    /// Output image dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.image)
    }
}

/// Run the full pipeline on raw image bytes.
///
/// # Pipeline steps
///
/// 1. Detect the container format from the magic bytes
/// 2. Decode the image in its native representation
/// 3. Luminosity greyscale transform, alpha preserved
///
/// The decoded source is dropped once the transform returns.
///
/// # Errors
///
/// Returns [`PipelineError::UnrecognizedFormat`] if the format is not
/// JPEG, PNG or GIF.
/// Returns [`PipelineError::Decode`] if the image body is corrupt.
pub fn process(
    image_bytes: &[u8],
    config: &TransformConfig,
) -> Result<ProcessResult, PipelineError> {
    let DecodedImage { image, format } = decode(image_bytes)?;
    let image = transform(&image, config);
    Ok(ProcessResult { image, format })
}
