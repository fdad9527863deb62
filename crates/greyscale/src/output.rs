//! Output path derivation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Inserted between the input's base name and its extension.
pub const SUFFIX: &str = "_greyscale";

/// Derive the output path for `input`.
///
/// The extension is everything from the last `.` of the final path
/// component to the end, dot included; it is empty when that component
/// has no dot. The output is `base + "_greyscale" + extension`, so
/// `photo.jpg` becomes `photo_greyscale.jpg`. A name that starts with
/// its only dot, like `.png`, is all extension.
///
/// The name is assembled as an `OsString`, so non-UTF-8 paths keep
/// their exact bytes.
#[must_use]
pub fn greyscale_output_path(input: &Path) -> PathBuf {
    let Some(name) = input.file_name() else {
        let mut output = input.as_os_str().to_owned();
        output.push(SUFFIX);
        return PathBuf::from(output);
    };

    let mut file_name = OsString::new();
    match input.extension() {
        Some(extension) => {
            file_name.push(input.file_stem().unwrap_or_default());
            file_name.push(SUFFIX);
            file_name.push(".");
            file_name.push(extension);
        }
        None if name.as_encoded_bytes().starts_with(b".") => {
            file_name.push(SUFFIX);
            file_name.push(name);
        }
        None => {
            file_name.push(name);
            file_name.push(SUFFIX);
        }
    }
    input.with_file_name(file_name)
}
