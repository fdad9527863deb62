//! One-shot conversion of an image file: read, decode, transform,
//! create the output file, encode.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use greyscale_pipeline::{Dimensions, FormatTag, TransformConfig};
use serde::Serialize;

use crate::error::ConvertError;
use crate::output::greyscale_output_path;

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Path the source image was read from.
    pub input: PathBuf,
    /// Path the greyscale image was written to.
    pub output: PathBuf,
    /// Format shared by the input and output.
    pub format: FormatTag,
    /// Dimensions shared by the input and output.
    pub dimensions: Dimensions,
}

/// Options for [`convert_file`].
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Write here instead of the derived `<base>_greyscale<ext>` path.
    pub output: Option<PathBuf>,
    /// Transform settings.
    pub transform: TransformConfig,
}

/// Convert the image at `input` to greyscale and write it next to it.
///
/// Progress messages go to stdout. The whole input is read before the
/// output file is created, so a failed decode never leaves an output
/// file behind.
///
/// # Errors
///
/// Returns the first [`ConvertError`] encountered; nothing is retried.
pub fn convert_file(
    input: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let bytes = std::fs::read(input).map_err(|source| ConvertError::FileOpen {
        path: input.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), input.display());

    let decoded = greyscale_pipeline::decode(&bytes)
        .map_err(|e| ConvertError::from_pipeline(input.to_path_buf(), e))?;
    drop(bytes);
    let format = decoded.format;

    println!(
        "Converting {} (format: {format}) to greyscale (Luminosity Method)...",
        input.display()
    );
    let grey = greyscale_pipeline::transform(&decoded.image, &options.transform);
    drop(decoded);
    println!("Conversion complete.");

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| greyscale_output_path(input));

    let file = File::create(&output).map_err(|source| ConvertError::FileCreate {
        path: output.clone(),
        source,
    })?;
    greyscale_export::encode(BufWriter::new(file), &grey, format).map_err(|source| {
        ConvertError::Encode {
            path: output.clone(),
            format,
            source,
        }
    })?;

    println!("Greyscale image saved as {}", output.display());

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output,
        format,
        dimensions: Dimensions::of(&grey),
    })
}
