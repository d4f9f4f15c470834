#![deny(missing_docs)]
//! Raster-image transformation operations in Rust

/// color channel operations module.
pub mod color;

/// region compositing and chroma keying module.
pub mod composite;

/// edge detection module.
pub mod edges;

/// region highlighting module.
pub mod enhance;

/// geometric mirroring module.
pub mod mirror;

/// module containing parallelization utilities.
pub mod parallel;

/// parity steganography module.
pub mod stego;

/// composite stylization filters module.
pub mod stylize;
