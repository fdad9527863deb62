//! Encoder dispatch.
//!
//! Serializes an RGBA image into the format selected by a [`FormatTag`]:
//!
//! - **JPEG**: lossy, fixed quality [`JPEG_QUALITY`]. JPEG has no alpha
//!   channel, so alpha is dropped and RGB is written.
//! - **PNG**: lossless RGBA, no extra options.
//! - **GIF**: the `image` crate's default quantizer picks the palette.
//!   Transparent pixels stay transparent but colors may shift, so GIF
//!   output is only visually (not bitwise) reproducible.
//!
//! The sink is any [`Write`]; nothing here touches the filesystem.

use std::io::Write;

use greyscale_pipeline::{FormatTag, RgbaImage};
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// JPEG quality (out of 100) used for every JPEG output.
pub const JPEG_QUALITY: u8 = 90;

/// Errors that can occur while serializing an image.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The format tag has no serializer.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(FormatTag),

    /// The format-specific encoder failed.
    #[error("{0}")]
    Image(#[from] image::ImageError),

    /// Flushing the sink failed.
    #[error("failed to flush output: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode `image` into `sink` using the serializer for `format`.
///
/// The sink is flushed before returning. On failure it may already hold
/// a partial encoding.
///
/// # Errors
///
/// Returns [`EncodeError::UnsupportedFormat`] for [`FormatTag::Unknown`],
/// before anything is written.
/// Returns [`EncodeError::Image`] if the format encoder rejects the image.
/// Returns [`EncodeError::Io`] if the final flush fails.
pub fn encode<W: Write>(
    mut sink: W,
    image: &RgbaImage,
    format: FormatTag,
) -> Result<(), EncodeError> {
    let (width, height) = image.dimensions();
    log::debug!("encoding {width}x{height} image as {format}");

    match format {
        FormatTag::Jpeg => {
            let rgb = drop_alpha(image);
            JpegEncoder::new_with_quality(&mut sink, JPEG_QUALITY).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
        FormatTag::Png => {
            PngEncoder::new(&mut sink).write_image(
                image.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
        FormatTag::Gif => {
            // The trailer is written when the encoder drops, so keep it
            // scoped to this arm.
            let mut encoder = GifEncoder::new(&mut sink);
            encoder.encode(image.as_raw(), width, height, ExtendedColorType::Rgba8)?;
        }
        FormatTag::Unknown => return Err(EncodeError::UnsupportedFormat(format)),
    }

    sink.flush()?;
    Ok(())
}

/// Encode `image` into a new byte vector.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_to_vec(image: &RgbaImage, format: FormatTag) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode(&mut buf, image, format)?;
    Ok(buf)
}

/// Pack RGBA pixels into an RGB byte buffer.
fn drop_alpha(image: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.as_raw().len() / 4 * 3);
    for p in image.pixels() {
        rgb.extend_from_slice(&p.0[..3]);
    }
    rgb
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::Rgba;

    fn grey_image() -> RgbaImage {
        RgbaImage::from_fn(8, 6, |x, y| {
            let g = u8::try_from((x + y) * 20).unwrap();
            Rgba([g, g, g, if x % 2 == 0 { 255 } else { 0 }])
        })
    }

    #[test]
    fn unknown_format_is_rejected_without_writing() {
        let mut buf = Vec::new();
        let result = encode(&mut buf, &grey_image(), FormatTag::Unknown);
        assert!(matches!(
            result,
            Err(EncodeError::UnsupportedFormat(FormatTag::Unknown))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn unsupported_format_message_names_the_tag() {
        let err = EncodeError::UnsupportedFormat(FormatTag::Unknown);
        assert_eq!(err.to_string(), "unsupported output format: unknown");
    }

    #[test]
    fn each_format_writes_its_signature() {
        let img = grey_image();
        let png = encode_to_vec(&img, FormatTag::Png).unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        let jpeg = encode_to_vec(&img, FormatTag::Jpeg).unwrap();
        assert!(jpeg.starts_with(&[0xFF, 0xD8, 0xFF]));
        let gif = encode_to_vec(&img, FormatTag::Gif).unwrap();
        assert!(gif.starts_with(b"GIF89a"));
        // Trailer byte proves the encoder finished.
        assert_eq!(gif.last(), Some(&0x3B));
    }

    #[test]
    fn png_is_lossless() {
        let img = grey_image();
        let png = encode_to_vec(&img, FormatTag::Png).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn drop_alpha_packs_rgb() {
        let img = RgbaImage::from_pixel(2, 1, Rgba([1, 2, 3, 4]));
        assert_eq!(drop_alpha(&img), vec![1, 2, 3, 1, 2, 3]);
    }
}
