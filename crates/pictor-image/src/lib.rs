#![deny(missing_docs)]
//! Image container and pixel color capability for the pictor toolkit

/// image representation for the transformation operations.
pub mod image;

/// Error types for the image module.
pub mod error;

/// pixel color capability: channels, colors and color distance.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{rgb_from_slice, rgb_to_slice, Channel, Rgb};
