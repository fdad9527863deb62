//! Image decoding and format detection.
//!
//! Accepts raw image bytes and produces the decoded image together with
//! the container format detected from the stream's magic bytes. The file
//! name extension plays no part in detection.
//!
//! This is the first step in the pipeline: raw bytes in, `DecodedImage` out.

use std::io::Cursor;

use image::ImageReader;

use crate::format::FormatTag;
use crate::types::{DecodedImage, PipelineError};

/// Identify the container format from the leading magic bytes.
///
/// # Errors
///
/// Returns [`PipelineError::UnrecognizedFormat`] if `bytes` is empty,
/// matches no known signature, or matches a format other than JPEG, PNG
/// or GIF.
pub fn detect_format(bytes: &[u8]) -> Result<FormatTag, PipelineError> {
    let format = image::guess_format(bytes).map_err(|_| PipelineError::UnrecognizedFormat)?;
    let tag = FormatTag::from_image_format(format);
    if !tag.is_supported() {
        log::debug!("sniffed {format:?}, which is not a supported format");
        return Err(PipelineError::UnrecognizedFormat);
    }
    Ok(tag)
}

/// Decode raw image bytes, keeping the source's native pixel layout.
///
/// The detected format is pinned for the body decode, so a PNG header
/// followed by garbage is a [`PipelineError::Decode`] rather than a
/// second detection attempt. Multi-frame GIFs yield their first frame.
///
/// # Errors
///
/// Returns [`PipelineError::UnrecognizedFormat`] if the header is not
/// JPEG, PNG or GIF.
/// Returns [`PipelineError::Decode`] if the body is malformed or
/// truncated.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, PipelineError> {
    let format = detect_format(bytes)?;
    let Some(image_format) = format.to_image_format() else {
        return Err(PipelineError::UnrecognizedFormat);
    };

    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(image_format);
    let image = reader.decode().map_err(PipelineError::Decode)?;

    log::debug!(
        "decoded {format} image: {}x{} {:?}",
        image.width(),
        image.height(),
        image.color(),
    );

    Ok(DecodedImage { image, format })
}
