//! Luminosity greyscale transform.
//!
//! Every output pixel is `(grey, grey, grey, alpha)` where
//! `grey = round(0.299*R + 0.587*G + 0.114*B)` and alpha is copied from
//! the source. The source is only read through
//! [`GenericImageView::get_pixel`], which normalizes any native
//! representation (palette, luma, 16-bit, ...) to 8-bit RGBA using the
//! `image` crate's own color conversions.
//!
//! Pixels are independent, so [`to_greyscale`] splits the destination
//! into rows and fills them on the rayon thread pool. Each worker owns a
//! disjoint row slice of the pre-allocated output buffer.

use image::{GenericImageView, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::types::{Dimensions, TransformConfig};

/// Weight of the red channel in the luminosity sum.
pub const RED_WEIGHT: f64 = 0.299;

/// Weight of the green channel in the luminosity sum.
pub const GREEN_WEIGHT: f64 = 0.587;

/// Weight of the blue channel in the luminosity sum.
pub const BLUE_WEIGHT: f64 = 0.114;

/// Compute the luminosity grey value of an RGB triple.
///
/// Rounds half away from zero and clamps to `[0, 255]`, so floating
/// point error can never wrap a near-white result.
#[must_use]
#[allow(
    clippy::suboptimal_flops,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn luminosity(r: u8, g: u8, b: u8) -> u8 {
    // Unfused multiply-add: `mul_add` would shift some exact .5 sums.
    let grey = RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b);
    grey.round().clamp(0.0, 255.0) as u8
}

/// Convert one RGBA pixel to its greyscale counterpart, keeping alpha.
#[must_use]
pub fn greyscale_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;
    let grey = luminosity(r, g, b);
    Rgba([grey, grey, grey, a])
}

/// Convert an image to greyscale, filling output rows in parallel.
///
/// Returns a freshly allocated image of identical dimensions. A
/// zero-area source yields a zero-area output.
#[must_use = "returns the greyscale image"]
pub fn to_greyscale<I>(source: &I) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>> + Sync,
{
    let dimensions = Dimensions::of(source);
    let Dimensions { width, height } = dimensions;
    let mut output = RgbaImage::new(width, height);
    if dimensions.is_empty() {
        return output;
    }

    let row_len = width as usize * 4;
    output
        .par_chunks_exact_mut(row_len)
        .zip(0..height)
        .for_each(|(row, y)| {
            for (x, out) in (0..width).zip(row.chunks_exact_mut(4)) {
                out.copy_from_slice(&greyscale_pixel(source.get_pixel(x, y)).0);
            }
        });

    output
}

/// Single-threaded counterpart of [`to_greyscale`].
///
/// Produces bit-identical output.
#[must_use = "returns the greyscale image"]
pub fn to_greyscale_serial<I>(source: &I) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = source.dimensions();
    RgbaImage::from_fn(width, height, |x, y| greyscale_pixel(source.get_pixel(x, y)))
}

/// Convert an image to greyscale using the strategy selected by `config`.
#[must_use = "returns the greyscale image"]
pub fn transform<I>(source: &I, config: &TransformConfig) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>> + Sync,
{
    let (width, height) = source.dimensions();
    log::debug!(
        "greyscale transform: {width}x{height}, parallel={}",
        config.parallel
    );
    if config.parallel {
        to_greyscale(source)
    } else {
        to_greyscale_serial(source)
    }
}
