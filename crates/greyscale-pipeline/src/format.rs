//! Container format tags.
//!
//! The tag detected on decode travels with the image through the whole
//! conversion and selects the serializer on encode. The format is never
//! changed mid-pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Container format of an image being converted.
///
/// `Unknown` only marks a detection failure. It is never a valid
/// encode target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// JPEG (baseline or progressive).
    Jpeg,
    /// PNG.
    Png,
    /// GIF.
    Gif,
    /// Anything the converter does not handle.
    Unknown,
}

impl FormatTag {
    /// All tags that can be decoded and re-encoded.
    pub const SUPPORTED: [Self; 3] = [Self::Jpeg, Self::Png, Self::Gif];

    /// Map the `image` crate's format enum onto a tag.
    ///
    /// Formats outside JPEG/PNG/GIF map to [`FormatTag::Unknown`].
    #[must_use]
    pub const fn from_image_format(format: image::ImageFormat) -> Self {
        match format {
            image::ImageFormat::Jpeg => Self::Jpeg,
            image::ImageFormat::Png => Self::Png,
            image::ImageFormat::Gif => Self::Gif,
            _ => Self::Unknown,
        }
    }

    /// The matching `image` crate format, or `None` for `Unknown`.
    #[must_use]
    pub const fn to_image_format(self) -> Option<image::ImageFormat> {
        match self {
            Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Png => Some(image::ImageFormat::Png),
            Self::Gif => Some(image::ImageFormat::Gif),
            Self::Unknown => None,
        }
    }

    /// Lowercase name used in progress messages and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `false` only for [`FormatTag::Unknown`].
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
