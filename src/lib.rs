//! 2D Raster Graphics Engine for RGB565 Displays
//!
//! A drawing engine for dot-matrix color displays whose controller exposes a
//! window plus pixel-stream write path, such as the ILI93xx and ST77xx
//! families. The engine rasterizes primitives, text, images and simple charts
//! and pushes the pixels through a driver you supply.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 delay for driver initialization
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Rectangles, boxes, Bresenham lines, midpoint circles
//! - Column-major bitmap fonts with a built-in 8x8 font
//! - Raw RGB and BMP image blitting
//! - Line graphs and bar charts
//! - Configurable clipping and filled-circle algorithm
//!
//! ## Usage
//!
//! ```rust
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use lcdgfx::{Builder, DeviceColor, DisplayInterface, FONT_8X8, Graphics, RenderContext, Rgb};
//!
//! # #[derive(Debug)]
//! # struct Panel;
//! # impl DisplayInterface for Panel {
//! #     type Error = Infallible;
//! #     fn width(&self) -> u16 { 320 }
//! #     fn height(&self) -> u16 { 240 }
//! #     fn initialize<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_window(&mut self, _x: u16, _y: u16, _w: u16, _h: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_gram_address(&mut self, _x: u16, _y: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn draw_next_pixel(&mut self, _color: DeviceColor) -> Result<(), Self::Error> { Ok(()) }
//! #     fn draw_pixel(&mut self, _x: u16, _y: u16, _color: DeviceColor) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let config = Builder::new().clear_on_init(Some(Rgb::BLACK)).build();
//! let mut gfx = Graphics::new(Panel, config, &mut delay)?;
//!
//! gfx.fill_rect(10, 10, 50, 30, Rgb::BLUE)?;
//! gfx.draw_line(0, 0, 319, 239, Rgb::WHITE)?;
//! gfx.draw_filled_circle(160, 120, 20, Rgb::RED)?;
//!
//! let ctx = RenderContext::new().with_font(FONT_8X8);
//! gfx.draw_string(&ctx, "HELLO", 10, 200, Rgb::YELLOW, Rgb::BLACK)?;
//! gfx.draw_bar_chart(&[10, 20, 30], 200, 20, 5, Rgb::GREEN)?;
//! # Ok::<(), lcdgfx::Error<Panel>>(())
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// BMP image decoding and drawing
pub mod bmp;
/// Line graphs and bar charts
pub mod chart;
/// Coordinate clipping
pub mod clip;
/// RGB and device color types
pub mod color;
/// Engine configuration types and builder
pub mod config;
/// Core engine
pub mod display;
/// Error types for the engine
pub mod error;
/// Bitmap fonts and text drawing
pub mod font;
/// Raw RGB image drawing
pub mod image;
/// Display driver abstraction
pub mod interface;
/// Lines and circles
pub mod primitives;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod testing;

pub use bmp::BmpImage;
pub use color::{DeviceColor, Rgb, to_device_color};
pub use config::{Builder, ChartLayout, CircleFill, Clipping, Config};
pub use display::Graphics;
pub use error::{Error, ImageError};
pub use font::{FONT_8X8, Font, RenderContext};
pub use image::Image;
pub use interface::{DisplayInterface, PixelStream};
