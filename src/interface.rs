//! Display capability interface
//!
//! This module provides the [`DisplayInterface`] trait that a concrete display
//! driver implements, and the [`PixelStream`] that wraps its windowed write
//! path.
//!
//! ## Driver contract
//!
//! The engine relies on two ways of getting pixels onto the panel:
//!
//! - **Windowed**: [`set_window`](DisplayInterface::set_window) followed by
//!   [`set_gram_address`](DisplayInterface::set_gram_address) and then exactly
//!   `w * h` calls to [`draw_next_pixel`](DisplayInterface::draw_next_pixel).
//!   The driver advances its cursor left to right, wrapping to the next row at
//!   the window's right edge.
//! - **Addressed**: [`draw_pixel`](DisplayInterface::draw_pixel) writes one
//!   pixel at an explicit position.
//!
//! Writing more pixels than the window holds is undefined on real controllers,
//! and writing fewer leaves the cursor where the next caller does not expect
//! it. [`PixelStream`] counts writes so that both mistakes surface as
//! [`Error`] values instead.
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use lcdgfx::{DeviceColor, DisplayInterface};
//!
//! /// Driver for a panel that discards everything
//! struct NullPanel;
//!
//! impl DisplayInterface for NullPanel {
//!     type Error = Infallible;
//!
//!     fn width(&self) -> u16 { 320 }
//!     fn height(&self) -> u16 { 240 }
//!     fn initialize<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> { Ok(()) }
//!     fn set_window(&mut self, _x: u16, _y: u16, _w: u16, _h: u16) -> Result<(), Self::Error> { Ok(()) }
//!     fn set_gram_address(&mut self, _x: u16, _y: u16) -> Result<(), Self::Error> { Ok(()) }
//!     fn draw_next_pixel(&mut self, _color: DeviceColor) -> Result<(), Self::Error> { Ok(()) }
//!     fn draw_pixel(&mut self, _x: u16, _y: u16, _color: DeviceColor) -> Result<(), Self::Error> { Ok(()) }
//! }
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;

use crate::clip::Area;
use crate::color::DeviceColor;
use crate::error::Error;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for a display driver the engine can draw through
///
/// The engine never constructs or discovers a driver; the application hands
/// one to [`Graphics::new`](crate::display::Graphics::new), which calls
/// [`initialize`](Self::initialize) exactly once before anything else.
///
/// ## Implementing
///
/// Implement this on the type that owns the bus to the display controller.
/// Window and address commands must take effect before the next pixel write.
pub trait DisplayInterface {
    /// Error type for driver operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Physical width in pixels
    ///
    /// Read once after [`initialize`](Self::initialize) and treated as fixed.
    fn width(&self) -> u16;

    /// Physical height in pixels
    ///
    /// Read once after [`initialize`](Self::initialize) and treated as fixed.
    fn height(&self) -> u16;

    /// Bring the controller up so it accepts window, address and pixel commands
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for reset and power-up timing
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the controller fails.
    fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Establish a rectangular pixel-addressing region
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the controller fails.
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) -> InterfaceResult<(), Self::Error>;

    /// Place the write cursor inside the active window
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the controller fails.
    fn set_gram_address(&mut self, x: u16, y: u16) -> InterfaceResult<(), Self::Error>;

    /// Write one pixel at the cursor and advance it within the active window
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the controller fails.
    fn draw_next_pixel(&mut self, color: DeviceColor) -> InterfaceResult<(), Self::Error>;

    /// Write one pixel at an explicit position
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the controller fails.
    fn draw_pixel(&mut self, x: u16, y: u16, color: DeviceColor)
    -> InterfaceResult<(), Self::Error>;
}

/// A windowed burst of sequential pixel writes
///
/// Opening a stream sets the driver's window and cursor. The stream then
/// accepts exactly `w * h` pixels in row-major window order. Call
/// [`finish`](Self::finish) to confirm the count; a stream dropped short of
/// its window logs a warning.
///
/// Obtained from [`Graphics::open_window`](crate::display::Graphics::open_window).
pub struct PixelStream<'a, I>
where
    I: DisplayInterface,
{
    interface: &'a mut I,
    expected: u32,
    written: u32,
    finished: bool,
}

impl<'a, I> PixelStream<'a, I>
where
    I: DisplayInterface,
{
    /// Set the window and cursor for `area` and start counting writes
    pub(crate) fn open(interface: &'a mut I, area: Area) -> Result<Self, Error<I>> {
        interface
            .set_window(area.x, area.y, area.w, area.h)
            .map_err(Error::Interface)?;
        interface
            .set_gram_address(area.x, area.y)
            .map_err(Error::Interface)?;
        Ok(Self {
            interface,
            expected: area.pixel_count(),
            written: 0,
            finished: false,
        })
    }

    /// Write the next pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::WindowOverrun`] without touching the driver if the
    /// window is already full, or [`Error::Interface`] if the driver fails.
    pub fn write(&mut self, color: DeviceColor) -> Result<(), Error<I>> {
        if self.written >= self.expected {
            return Err(Error::WindowOverrun {
                capacity: self.expected,
            });
        }
        self.interface
            .draw_next_pixel(color)
            .map_err(Error::Interface)?;
        self.written += 1;
        Ok(())
    }

    /// Write the same color `count` times
    ///
    /// # Errors
    ///
    /// Same as [`write`](Self::write); pixels before the failing one are sent.
    pub fn fill(&mut self, color: DeviceColor, count: u32) -> Result<(), Error<I>> {
        for _ in 0..count {
            self.write(color)?;
        }
        Ok(())
    }

    /// Pixels the window still expects
    pub fn remaining(&self) -> u32 {
        self.expected - self.written
    }

    /// Close the stream, checking that the window was filled exactly
    ///
    /// # Errors
    ///
    /// Returns [`Error::WindowUnderrun`] if fewer than `w * h` pixels were
    /// written.
    pub fn finish(mut self) -> Result<(), Error<I>> {
        self.finished = true;
        if self.written != self.expected {
            return Err(Error::WindowUnderrun {
                expected: self.expected,
                written: self.written,
            });
        }
        Ok(())
    }
}

impl<I> Drop for PixelStream<'_, I>
where
    I: DisplayInterface,
{
    fn drop(&mut self) {
        if !self.finished && self.written != self.expected {
            log::warn!(
                "pixel stream dropped after {} of {} pixels",
                self.written,
                self.expected
            );
        }
    }
}
