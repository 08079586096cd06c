//! Graphics support via embedded-graphics
//!
//! With the `graphics` feature, [`Graphics`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem with [`Rgb565`] as its color, which has the
//! same bit layout as [`DeviceColor`](crate::DeviceColor). Everything
//! embedded-graphics can draw (styled primitives, mono fonts, images) then
//! goes straight to the driver.
//!
//! Solid fills use a single window. Contiguous fills use a window when the
//! area is entirely inside the clipping bounds, and addressed pixel writes
//! otherwise.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! # use embedded_hal::delay::DelayNs;
//! # use lcdgfx::{Builder, DeviceColor, DisplayInterface, Graphics};
//! # #[derive(Debug)]
//! # struct Panel;
//! # impl DisplayInterface for Panel {
//! #     type Error = core::convert::Infallible;
//! #     fn width(&self) -> u16 { 320 }
//! #     fn height(&self) -> u16 { 240 }
//! #     fn initialize<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_window(&mut self, _x: u16, _y: u16, _w: u16, _h: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_gram_address(&mut self, _x: u16, _y: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn draw_next_pixel(&mut self, _color: DeviceColor) -> Result<(), Self::Error> { Ok(()) }
//! #     fn draw_pixel(&mut self, _x: u16, _y: u16, _color: DeviceColor) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct NoDelay;
//! # impl DelayNs for NoDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let mut gfx = Graphics::new(Panel, Builder::new().build(), &mut NoDelay)?;
//!
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut gfx)?;
//!
//! Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::RED, 2))
//!     .draw(&mut gfx)?;
//! # Ok::<(), lcdgfx::Error<Panel>>(())
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::color::DeviceColor;
use crate::display::Graphics;
use crate::error::Error;
use crate::interface::{DisplayInterface, PixelStream};

impl<I> DrawTarget for Graphics<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.put_pixel(i64::from(x), i64::from(y), DeviceColor::from(color))?;
        }
        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let Rectangle {
            top_left: Point { x, y },
            size: Size { width, height },
        } = *area;
        let Some(window) = self.bounds().fit_rect(
            i64::from(x),
            i64::from(y),
            i64::from(width),
            i64::from(height),
        ) else {
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        };

        let mut stream = PixelStream::open(self.interface_mut(), window)?;
        for color in colors.into_iter().take(window.pixel_count() as usize) {
            stream.write(DeviceColor::from(color))?;
        }
        stream.finish()
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_area(
            i64::from(area.top_left.x),
            i64::from(area.top_left.y),
            i64::from(area.size.width),
            i64::from(area.size.height),
            DeviceColor::from(color),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_area(
            0,
            0,
            i64::from(self.width()),
            i64::from(self.height()),
            DeviceColor::from(color),
        )
    }
}

impl<I> OriginDimensions for Graphics<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}
