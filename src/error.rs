//! Error types for the engine
//!
//! This module defines the runtime error for drawing operations ([`Error`])
//! and the error for decoding image resources ([`ImageError`]).
//!
//! Most degenerate requests are not errors: drawing without a font, drawing a
//! character the font lacks, empty rectangles and geometry clipped away
//! entirely all succeed without touching the driver.
//!
//! ## Example
//!
//! ```
//! use lcdgfx::{BmpImage, ImageError};
//!
//! let result = BmpImage::parse(b"GIF89a");
//! assert!(matches!(result, Err(ImageError::Truncated { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur while drawing
///
/// Generic over the interface type to preserve the driver's error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Driver error
    ///
    /// Wraps the error returned by the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// More pixels were written than the open window holds
    ///
    /// The extra pixel is not sent to the driver.
    WindowOverrun {
        /// Window size in pixels
        capacity: u32,
    },
    /// A pixel stream was finished before its window was full
    WindowUnderrun {
        /// Window size in pixels
        expected: u32,
        /// Pixels actually written
        written: u32,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::WindowOverrun { capacity } => {
                write!(f, "Window overrun: window holds {capacity} pixels")
            }
            Self::WindowUnderrun { expected, written } => {
                write!(
                    f,
                    "Window underrun: expected {expected} pixels, wrote {written}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when decoding an image resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    /// The data ends before a header or the pixel array is complete
    Truncated {
        /// Bytes needed
        required: usize,
        /// Bytes provided
        provided: usize,
    },
    /// The file does not start with `BM`
    BadSignature,
    /// Pixel format other than uncompressed 24 or 32 bits per pixel
    Unsupported {
        /// Bits per pixel in the header
        bits_per_pixel: u16,
        /// Compression method in the header
        compression: u32,
    },
    /// Zero or out-of-range width or height
    InvalidDimensions {
        /// Width in the header
        width: i32,
        /// Height in the header
        height: i32,
    },
}

impl core::fmt::Display for ImageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Truncated { required, provided } => write!(
                f,
                "Image truncated: required {required} bytes, provided {provided}"
            ),
            Self::BadSignature => write!(f, "Not a BMP file"),
            Self::Unsupported {
                bits_per_pixel,
                compression,
            } => write!(
                f,
                "Unsupported BMP format: {bits_per_pixel} bpp, compression {compression}"
            ),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid image dimensions: {width}x{height}")
            }
        }
    }
}

impl core::error::Error for ImageError {}
