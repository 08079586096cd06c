//! Windows bitmap (BMP) image source
//!
//! Parses the file header and `BITMAPINFOHEADER` of an in-memory BMP and
//! exposes its pixels without copying. Only uncompressed 24-bit (BGR) and
//! 32-bit (BGRA) images are supported, which covers what common image tools
//! export for small embedded assets.
//!
//! ## Example
//!
//! ```
//! use lcdgfx::{BmpImage, ImageError};
//!
//! let mut file = [0u8; 58];
//! file[0..2].copy_from_slice(b"BM");
//! file[10] = 54; // pixel data offset
//! file[14] = 40; // info header size
//! file[18] = 1; // width
//! file[22] = 1; // height
//! file[26] = 1; // planes
//! file[28] = 24; // bits per pixel
//! file[54..57].copy_from_slice(&[0x00, 0x00, 0xFF]); // one red pixel, BGR
//!
//! let bmp = BmpImage::parse(&file)?;
//! assert_eq!((bmp.width(), bmp.height()), (1, 1));
//! assert_eq!(bmp.pixel(0, 0).map(|c| c.to_u32()), Some(0xFF0000));
//! # Ok::<(), ImageError>(())
//! ```

use crate::color::Rgb;
use crate::display::{DrawResult, Graphics};
use crate::error::ImageError;
use crate::interface::DisplayInterface;

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;
const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const COMPRESSION_NONE: u32 = 0;

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    read_u32(bytes, offset) as i32
}

/// A parsed BMP image borrowing its pixel data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpImage<'a> {
    pixels: &'a [u8],
    width: u16,
    height: u16,
    bytes_per_pixel: u8,
    stride: usize,
    top_down: bool,
}

impl<'a> BmpImage<'a> {
    /// Parse a BMP file held in memory
    ///
    /// Positive header heights are bottom-up row order, negative heights
    /// top-down. Rows are padded to a multiple of four bytes.
    ///
    /// # Errors
    ///
    /// - [`ImageError::Truncated`] if the headers or pixel array are cut short
    /// - [`ImageError::BadSignature`] if the data does not start with `BM`
    /// - [`ImageError::Unsupported`] for anything but uncompressed 24 or 32 bpp
    /// - [`ImageError::InvalidDimensions`] for a zero width or height, or one
    ///   beyond `u16::MAX`
    pub fn parse(bytes: &'a [u8]) -> Result<Self, ImageError> {
        if bytes.len() < HEADERS_SIZE {
            return Err(ImageError::Truncated {
                required: HEADERS_SIZE,
                provided: bytes.len(),
            });
        }
        if !bytes.starts_with(b"BM") {
            return Err(ImageError::BadSignature);
        }

        let data_offset = read_u32(bytes, 10) as usize;
        let width = read_i32(bytes, 18);
        let height = read_i32(bytes, 22);
        let bits_per_pixel = read_u16(bytes, 28);
        let compression = read_u32(bytes, 30);

        if compression != COMPRESSION_NONE || !matches!(bits_per_pixel, 24 | 32) {
            return Err(ImageError::Unsupported {
                bits_per_pixel,
                compression,
            });
        }

        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height.unsigned_abs())) else {
            return Err(ImageError::InvalidDimensions { width, height });
        };
        if w == 0 || h == 0 {
            return Err(ImageError::InvalidDimensions { width, height });
        }

        let bytes_per_pixel = (bits_per_pixel / 8) as u8;
        let stride = (usize::from(w) * usize::from(bytes_per_pixel)).next_multiple_of(4);
        let required = data_offset.saturating_add(stride.saturating_mul(usize::from(h)));
        let Some(pixels) = bytes.get(data_offset..required) else {
            return Err(ImageError::Truncated {
                required,
                provided: bytes.len(),
            });
        };

        log::debug!(
            "bmp {}x{} {} bpp {}",
            w,
            h,
            bits_per_pixel,
            if height < 0 { "top-down" } else { "bottom-up" }
        );

        Ok(Self {
            pixels,
            width: w,
            height: h,
            bytes_per_pixel,
            stride,
            top_down: height < 0,
        })
    }

    /// Image width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Color at `(column, row)`, row 0 being the top of the picture
    pub fn pixel(&self, column: u16, row: u16) -> Option<Rgb> {
        if column >= self.width || row >= self.height {
            return None;
        }
        let stored_row = if self.top_down {
            row
        } else {
            self.height - 1 - row
        };
        let start = usize::from(stored_row) * self.stride
            + usize::from(column) * usize::from(self.bytes_per_pixel);
        match self.pixels.get(start..start + 3)? {
            [blue, green, red] => Some(Rgb::new(*red, *green, *blue)),
            _ => None,
        }
    }
}

impl<I> Graphics<I>
where
    I: DisplayInterface,
{
    /// Draw a BMP image with its top-left corner at `(x, y)`
    ///
    /// Same write pattern as [`draw_image`](Self::draw_image): top row first,
    /// one addressed pixel write per pixel, clipped per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_bmp(&mut self, bmp: &BmpImage<'_>, x: i32, y: i32) -> DrawResult<I> {
        let (x, y) = (i64::from(x), i64::from(y));
        for row in 0..bmp.height() {
            for column in 0..bmp.width() {
                if let Some(color) = bmp.pixel(column, row) {
                    self.put_pixel(
                        x + i64::from(column),
                        y + i64::from(row),
                        color.to_device(),
                    )?;
                }
            }
        }
        Ok(())
    }
}
