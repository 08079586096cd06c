//! Coordinate clipping utilities
//!
//! Application coordinates are signed and unbounded; the driver addresses
//! pixels with `u16` coordinates. [`Bounds`] maps the former onto the latter,
//! dropping whatever falls outside.
//!
//! Which bounds apply is decided by [`Clipping`](crate::config::Clipping):
//! the visible screen, or the whole addressable `u16` range.
//!
//! ## Example
//!
//! ```
//! use lcdgfx::clip::{Area, Bounds};
//!
//! let screen = Bounds::new(320, 240);
//!
//! // A rectangle hanging off the top-left corner is cut down to the visible part
//! assert_eq!(screen.clip_rect(-5, -5, 10, 10), Some(Area::new(0, 0, 5, 5)));
//!
//! // Points off screen are dropped
//! assert_eq!(screen.point(320, 0), None);
//! assert_eq!(screen.point(319, 239), Some((319, 239)));
//! ```

/// A rectangle in driver coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Area {
    /// Left column
    pub x: u16,
    /// Top row
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Area {
    /// Create a new area
    #[allow(clippy::many_single_char_names)]
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u32 {
        self.w as u32 * self.h as u32
    }
}

/// Exclusive extents that coordinates are clipped against
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: i64,
    height: i64,
}

impl Bounds {
    /// The full range a `u16` driver coordinate can express, `0..=u16::MAX`
    pub const ADDRESSABLE: Self = Self {
        width: u16::MAX as i64 + 1,
        height: u16::MAX as i64 + 1,
    };

    /// Bounds covering `[0, width) x [0, height)`
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as i64,
            height: height as i64,
        }
    }

    /// Exclusive horizontal extent
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Exclusive vertical extent
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// Map a point to driver coordinates, or `None` if it lies outside
    pub fn point(&self, x: i64, y: i64) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((x as u16, y as u16))
    }

    /// Intersect a rectangle with the bounds
    ///
    /// Returns `None` for empty rectangles (`w <= 0` or `h <= 0`) and for
    /// rectangles entirely outside. A window is at most `u16::MAX` pixels
    /// wide or tall, so a rectangle spanning all 65536 addressable columns
    /// loses its last one.
    #[allow(clippy::many_single_char_names)]
    pub fn clip_rect(&self, x: i64, y: i64, w: i64, h: i64) -> Option<Area> {
        if w <= 0 || h <= 0 {
            return None;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x
            .saturating_add(w)
            .min(self.width)
            .min(x0.saturating_add(i64::from(u16::MAX)));
        let y1 = y
            .saturating_add(h)
            .min(self.height)
            .min(y0.saturating_add(i64::from(u16::MAX)));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Area::new(
            x0 as u16,
            y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }

    /// Map a rectangle that must lie entirely inside the bounds
    ///
    /// Used where a pixel stream cannot be cut short, such as glyphs.
    #[allow(clippy::many_single_char_names)]
    pub fn fit_rect(&self, x: i64, y: i64, w: i64, h: i64) -> Option<Area> {
        let area = self.clip_rect(x, y, w, h)?;
        if i64::from(area.x) != x
            || i64::from(area.y) != y
            || i64::from(area.w) != w
            || i64::from(area.h) != h
        {
            return None;
        }
        Some(area)
    }
}
