//! greyscale-export: Pure format serializers (sans-IO)
//!
//! Writes greyscale images back out in the container format their
//! source was detected as. Supports JPEG, PNG and GIF.

pub mod encode;

pub use encode::{EncodeError, JPEG_QUALITY, encode, encode_to_vec};
