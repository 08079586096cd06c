//! Core engine: driver binding, rectangles and screen clearing

use embedded_hal::delay::DelayNs;

use crate::clip::{Area, Bounds};
use crate::color::{DeviceColor, Rgb};
use crate::config::{Clipping, Config};
use crate::error::Error;
use crate::interface::{DisplayInterface, PixelStream};

pub(crate) type DrawResult<I> = core::result::Result<(), Error<I>>;

/// 2D graphics engine bound to one display driver
///
/// All drawing goes through the [`DisplayInterface`] the engine was created
/// with. Drawing methods take `&mut self`, so one engine is never driven from
/// two places at once; sharing it across threads needs an external mutex.
///
/// Rectangles, boxes and the screen clear live here. Lines and circles are in
/// [`primitives`](crate::primitives), text in [`font`](crate::font), images in
/// [`image`](crate::image) and [`bmp`](crate::bmp), charts in
/// [`chart`](crate::chart).
pub struct Graphics<I>
where
    I: DisplayInterface,
{
    /// Display driver
    interface: I,
    /// Engine configuration
    config: Config,
    /// Width reported by the driver after initialization
    width: u16,
    /// Height reported by the driver after initialization
    height: u16,
}

impl<I> Graphics<I>
where
    I: DisplayInterface,
{
    /// Bind a driver, initialize it and clear the screen
    ///
    /// Calls [`DisplayInterface::initialize`] exactly once, then reads the
    /// panel geometry. If [`Config::clear_on_init`] is set the screen is
    /// filled with that color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if initialization or the clear fails.
    pub fn new<D: DelayNs>(mut interface: I, config: Config, delay: &mut D) -> Result<Self, Error<I>> {
        interface.initialize(delay).map_err(Error::Interface)?;
        let width = interface.width();
        let height = interface.height();
        log::debug!("display initialized: {}x{}", width, height);

        let mut graphics = Self {
            interface,
            config,
            width,
            height,
        };
        if let Some(color) = graphics.config.clear_on_init {
            graphics.clear_screen(color)?;
        }
        Ok(graphics)
    }

    /// Screen width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Screen height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying driver
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Access the underlying driver mutably
    ///
    /// Anything done here bypasses the engine; leave the driver with no
    /// half-written window.
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Give the driver back
    pub fn release(self) -> I {
        self.interface
    }

    /// Bounds for the configured clipping policy
    pub(crate) fn bounds(&self) -> Bounds {
        match self.config.clipping {
            Clipping::Display => Bounds::new(self.width, self.height),
            Clipping::Addressable => Bounds::ADDRESSABLE,
        }
    }

    /// Fill the whole screen with one color
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the driver fails.
    pub fn clear_screen(&mut self, color: Rgb) -> DrawResult<I> {
        self.fill_rect(0, 0, i32::from(self.width), i32::from(self.height), color)
    }

    /// Draw a filled rectangle
    ///
    /// Sets the window to the rectangle and streams `w * h` pixels of the
    /// color. A rectangle with `w <= 0` or `h <= 0` draws nothing and makes
    /// no driver calls. With [`Clipping::Display`] the rectangle is first cut
    /// to the screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the driver fails.
    #[allow(clippy::many_single_char_names)]
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) -> DrawResult<I> {
        self.fill_area(
            i64::from(x),
            i64::from(y),
            i64::from(w),
            i64::from(h),
            color.to_device(),
        )
    }

    /// Draw an empty rectangle with borders `line_width` pixels thick
    ///
    /// Drawn as four filled strips: left, top, right, bottom. The left and
    /// right strips span the full height; top and bottom fit between them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the driver fails.
    #[allow(clippy::many_single_char_names)]
    pub fn draw_box(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        line_width: i32,
        color: Rgb,
    ) -> DrawResult<I> {
        let (x, y, w, h, lw) = (
            i64::from(x),
            i64::from(y),
            i64::from(w),
            i64::from(h),
            i64::from(line_width),
        );
        let color = color.to_device();
        let inner_w = w - 2 * lw;

        self.fill_area(x, y, lw, h, color)?;
        self.fill_area(x + lw, y, inner_w, lw, color)?;
        self.fill_area(x + w - lw, y, lw, h, color)?;
        self.fill_area(x + lw, y + h - lw, inner_w, lw, color)
    }

    /// Write a single pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the driver fails.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb) -> DrawResult<I> {
        self.put_pixel(i64::from(x), i64::from(y), color.to_device())
    }

    /// Open a window for streaming pixels directly
    ///
    /// The area is not clipped; it is the caller's job to keep it on screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if setting the window or cursor fails.
    #[allow(clippy::many_single_char_names)]
    pub fn open_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<PixelStream<'_, I>, Error<I>> {
        PixelStream::open(&mut self.interface, Area::new(x, y, w, h))
    }

    /// Addressed single-pixel write, clipped per the configured policy
    pub(crate) fn put_pixel(&mut self, x: i64, y: i64, color: DeviceColor) -> DrawResult<I> {
        let Some((x, y)) = self.bounds().point(x, y) else {
            return Ok(());
        };
        self.interface
            .draw_pixel(x, y, color)
            .map_err(Error::Interface)
    }

    /// Windowed rectangle fill, clipped per the configured policy
    #[allow(clippy::many_single_char_names)]
    pub(crate) fn fill_area(
        &mut self,
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        color: DeviceColor,
    ) -> DrawResult<I> {
        let Some(area) = self.bounds().clip_rect(x, y, w, h) else {
            log::trace!("rectangle ({}, {}, {}x{}) clipped away", x, y, w, h);
            return Ok(());
        };
        let mut stream = PixelStream::open(&mut self.interface, area)?;
        stream.fill(color, area.pixel_count())?;
        stream.finish()
    }
}
