//! Raw RGB image blitting
//!
//! An [`Image`] is a row-major array of pixels, each `bytes_per_pixel` bytes
//! wide with red, green and blue in the first three bytes. Trailing bytes
//! (alpha or padding) are ignored.
//!
//! Images are drawn with addressed single-pixel writes rather than a window
//! stream, so a partly visible image is cut pixel by pixel.

use crate::color::Rgb;
use crate::display::{DrawResult, Graphics};
use crate::interface::DisplayInterface;

/// A borrowed row-major RGB image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image<'a> {
    data: &'a [u8],
    rows: u16,
    columns: u16,
    bytes_per_pixel: u8,
}

impl<'a> Image<'a> {
    /// Wrap pixel data
    pub const fn new(data: &'a [u8], rows: u16, columns: u16, bytes_per_pixel: u8) -> Self {
        Self {
            data,
            rows,
            columns,
            bytes_per_pixel,
        }
    }

    /// Image height in pixels
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Image width in pixels
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Bytes per pixel
    pub const fn bytes_per_pixel(&self) -> u8 {
        self.bytes_per_pixel
    }

    /// Raw pixel data
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    fn row(&self, row: u16) -> Option<&'a [u8]> {
        let stride = usize::from(self.columns) * usize::from(self.bytes_per_pixel);
        let start = usize::from(row) * stride;
        self.data.get(start..start + stride)
    }
}

impl<I> Graphics<I>
where
    I: DisplayInterface,
{
    /// Draw an image with its top-left corner at `(x, y)`
    ///
    /// Rows are drawn top to bottom, each left to right, one addressed pixel
    /// write per pixel. Pixels outside the clipping bounds are skipped.
    ///
    /// Nothing is drawn if the image has no pixels or fewer than three bytes
    /// per pixel. If the data is shorter than `rows * columns` pixels, drawing
    /// stops after the last complete row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_image(&mut self, image: &Image<'_>, x: i32, y: i32) -> DrawResult<I> {
        if image.bytes_per_pixel < 3 {
            log::warn!(
                "image with {} bytes per pixel has no RGB triplets",
                image.bytes_per_pixel
            );
            return Ok(());
        }
        if image.rows == 0 || image.columns == 0 {
            log::trace!("empty image");
            return Ok(());
        }

        let (x, y) = (i64::from(x), i64::from(y));
        for row in 0..image.rows {
            let Some(bytes) = image.row(row) else {
                log::warn!(
                    "image data ends after {} of {} rows",
                    row,
                    image.rows
                );
                break;
            };
            let py = y + i64::from(row);
            for (col, pixel) in bytes
                .chunks_exact(usize::from(image.bytes_per_pixel))
                .enumerate()
            {
                let color = Rgb::new(pixel[0], pixel[1], pixel[2]).to_device();
                self.put_pixel(x + col as i64, py, color)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DeviceColor;
    use crate::testing::graphics;

    const RED: DeviceColor = DeviceColor::from_raw(0xF800);
    const GREEN: DeviceColor = DeviceColor::from_raw(0x07E0);
    const BLUE: DeviceColor = DeviceColor::from_raw(0x001F);
    const WHITE: DeviceColor = DeviceColor::from_raw(0xFFFF);

    #[rustfmt::skip]
    const PIXELS_2X2: [u8; 12] = [
        0xFF, 0x00, 0x00,   0x00, 0xFF, 0x00,
        0x00, 0x00, 0xFF,   0xFF, 0xFF, 0xFF,
    ];

    #[test]
    fn test_draw_image_row_major_addressed_writes() {
        let mut gfx = graphics();
        let image = Image::new(&PIXELS_2X2, 2, 2, 3);
        gfx.draw_image(&image, 10, 20).unwrap();
        assert_eq!(
            gfx.interface().addressed_pixels(),
            alloc::vec![
                (10, 20, RED),
                (11, 20, GREEN),
                (10, 21, BLUE),
                (11, 21, WHITE)
            ]
        );
        assert!(gfx.interface().windows().is_empty());
    }

    #[test]
    fn test_draw_image_ignores_trailing_bytes() {
        let data = [0xFF, 0x00, 0x00, 0x7F, 0x00, 0x00, 0xFF, 0x00];
        let mut gfx = graphics();
        gfx.draw_image(&Image::new(&data, 1, 2, 4), 0, 0).unwrap();
        assert_eq!(
            gfx.interface().addressed_pixels(),
            alloc::vec![(0, 0, RED), (1, 0, BLUE)]
        );
    }

    #[test]
    fn test_draw_image_too_few_bytes_per_pixel_is_noop() {
        let mut gfx = graphics();
        gfx.draw_image(&Image::new(&PIXELS_2X2, 2, 3, 2), 0, 0)
            .unwrap();
        gfx.draw_image(&Image::new(&PIXELS_2X2, 0, 2, 3), 0, 0)
            .unwrap();
        assert!(gfx.interface().calls.is_empty());
    }

    #[test]
    fn test_draw_image_short_data_stops_at_last_full_row() {
        let mut gfx = graphics();
        gfx.draw_image(&Image::new(&PIXELS_2X2[..9], 2, 2, 3), 0, 0)
            .unwrap();
        assert_eq!(gfx.interface().addressed_pixels().len(), 2);
    }

    #[test]
    fn test_draw_image_partly_off_screen() {
        let mut gfx = graphics();
        gfx.draw_image(&Image::new(&PIXELS_2X2, 2, 2, 3), 319, -1)
            .unwrap();
        assert_eq!(
            gfx.interface().addressed_pixels(),
            alloc::vec![(319, 0, BLUE)]
        );
    }
}
