//! Bitmap font rendering
//!
//! Fonts are column-major bitmaps: each glyph is `columns` columns of
//! `bytes_per_column` bytes, and within a byte the least significant bit is
//! the topmost pixel. Glyph `n` starts at byte `n * columns * bytes_per_column`.
//!
//! There is no global "current font". Text calls take a [`RenderContext`]
//! that carries the selected font; contexts are `Copy`, so a caller that needs
//! a different font for one call copies the context and swaps the font in the
//! copy.
//!
//! ## Example
//!
//! ```
//! use lcdgfx::{FONT_8X8, RenderContext};
//!
//! let mut ctx = RenderContext::new();
//! assert!(ctx.font().is_none());
//!
//! ctx.set_font(FONT_8X8);
//! assert_eq!(ctx.font().map(|f| f.columns()), Some(8));
//! assert!(FONT_8X8.glyph('A').is_some());
//! assert!(FONT_8X8.glyph('a').is_some());
//! assert!(FONT_8X8.glyph('\u{7F}').is_none());
//! ```

use crate::color::{DeviceColor, Rgb};
use crate::display::{DrawResult, Graphics};
use crate::interface::{DisplayInterface, PixelStream};

const BITS_PER_BYTE: u16 = 8;

/// A column-major bitmap font
///
/// The data is borrowed, not copied. Nothing is validated on construction;
/// glyphs that the data is too short to hold are treated as missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font<'a> {
    data: &'a [u8],
    first_char: u8,
    char_count: u16,
    columns: u8,
    bytes_per_column: u8,
}

impl<'a> Font<'a> {
    /// Create a font over raw glyph data
    ///
    /// # Arguments
    ///
    /// * `data` - Glyph bitmaps, one after another
    /// * `first_char` - Code of the first glyph in `data`
    /// * `char_count` - Number of glyphs
    /// * `columns` - Glyph width in pixels
    /// * `bytes_per_column` - Bytes per column; glyph height is 8 times this
    pub const fn new(
        data: &'a [u8],
        first_char: u8,
        char_count: u16,
        columns: u8,
        bytes_per_column: u8,
    ) -> Self {
        Self {
            data,
            first_char,
            char_count,
            columns,
            bytes_per_column,
        }
    }

    /// Code of the first glyph
    pub const fn first_char(&self) -> u8 {
        self.first_char
    }

    /// Number of glyphs
    pub const fn char_count(&self) -> u16 {
        self.char_count
    }

    /// Glyph width in pixels
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Bytes per glyph column
    pub const fn bytes_per_column(&self) -> u8 {
        self.bytes_per_column
    }

    /// Glyph height in pixels
    pub const fn glyph_height(&self) -> u16 {
        self.bytes_per_column as u16 * BITS_PER_BYTE
    }

    /// Index of the glyph for `ch`, if the font has one
    pub fn glyph_index(&self, ch: char) -> Option<usize> {
        let index = u32::from(ch).checked_sub(u32::from(self.first_char))?;
        (index < u32::from(self.char_count)).then_some(index as usize)
    }

    /// Bitmap of the glyph for `ch`
    ///
    /// `None` if `ch` is outside the font's range or the data is too short.
    pub fn glyph(&self, ch: char) -> Option<&'a [u8]> {
        let index = self.glyph_index(ch)?;
        let size = usize::from(self.columns) * usize::from(self.bytes_per_column);
        let start = size.checked_mul(index)?;
        self.data.get(start..start.checked_add(size)?)
    }
}

/// Font selection for text drawing
///
/// Starts with no font; drawing text without one is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderContext<'a> {
    font: Option<Font<'a>>,
}

impl<'a> RenderContext<'a> {
    /// Context with no font selected
    pub const fn new() -> Self {
        Self { font: None }
    }

    /// Copy of this context with `font` selected
    pub const fn with_font(self, font: Font<'a>) -> Self {
        Self { font: Some(font) }
    }

    /// Select a font
    pub fn set_font(&mut self, font: Font<'a>) {
        self.font = Some(font);
    }

    /// Deselect the font
    pub fn clear_font(&mut self) {
        self.font = None;
    }

    /// Selected font
    pub const fn font(&self) -> Option<Font<'a>> {
        self.font
    }
}

impl<I> Graphics<I>
where
    I: DisplayInterface,
{
    /// Draw one character with the context's font
    ///
    /// Nothing is drawn, and the driver is not touched, if the context has no
    /// font or the font has no glyph for `ch`. With
    /// [`Clipping::Display`](crate::Clipping::Display) a glyph that does not fit
    /// on screen entirely is skipped as well.
    ///
    /// Otherwise a window of `columns x glyph_height` is opened at `(x, y)` and
    /// the glyph is streamed column by column, each column top to bottom,
    /// set bits in `fg` and clear bits in `bg`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_char(
        &mut self,
        ctx: &RenderContext<'_>,
        ch: char,
        x: i32,
        y: i32,
        fg: Rgb,
        bg: Rgb,
    ) -> DrawResult<I> {
        let Some(font) = ctx.font() else {
            return Ok(());
        };
        self.glyph_at(&font, ch, i64::from(x), i64::from(y), fg.to_device(), bg.to_device())
    }

    /// Draw a string left to right with the context's font
    ///
    /// Each character advances `x` by the font's column count, whether or not
    /// the font has a glyph for it. No wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_string(
        &mut self,
        ctx: &RenderContext<'_>,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb,
        bg: Rgb,
    ) -> DrawResult<I> {
        self.text_at(
            ctx,
            text,
            i64::from(x),
            i64::from(y),
            fg.to_device(),
            bg.to_device(),
        )
    }

    /// [`draw_string`](Self::draw_string) in engine coordinates
    pub(crate) fn text_at(
        &mut self,
        ctx: &RenderContext<'_>,
        text: &str,
        x: i64,
        y: i64,
        fg: DeviceColor,
        bg: DeviceColor,
    ) -> DrawResult<I> {
        let Some(font) = ctx.font() else {
            return Ok(());
        };
        let mut cursor = x;
        for ch in text.chars() {
            self.glyph_at(&font, ch, cursor, y, fg, bg)?;
            cursor += i64::from(font.columns());
        }
        Ok(())
    }

    fn glyph_at(
        &mut self,
        font: &Font<'_>,
        ch: char,
        x: i64,
        y: i64,
        fg: DeviceColor,
        bg: DeviceColor,
    ) -> DrawResult<I> {
        let Some(glyph) = font.glyph(ch) else {
            log::trace!("no glyph for {:?}", ch);
            return Ok(());
        };
        let width = i64::from(font.columns());
        let height = i64::from(font.glyph_height());
        let Some(area) = self.bounds().fit_rect(x, y, width, height) else {
            log::trace!("glyph {:?} at ({}, {}) does not fit", ch, x, y);
            return Ok(());
        };

        let mut stream = PixelStream::open(self.interface_mut(), area)?;
        for column in glyph.chunks_exact(usize::from(font.bytes_per_column())) {
            for byte in column {
                for bit in 0..BITS_PER_BYTE {
                    let color = if byte & (1 << bit) != 0 { fg } else { bg };
                    stream.write(color)?;
                }
            }
        }
        stream.finish()
    }
}

/// Glyph data for [`FONT_8X8`]: ASCII `' '` to `'~'`, 8 columns of 1 byte
#[rustfmt::skip]
const FONT_8X8_DATA: [u8; 95 * 8] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x00, 0x00, 0x00, 0x5F, 0x5F, 0x00, 0x00, 0x00, // !
    0x00, 0x03, 0x07, 0x00, 0x03, 0x07, 0x00, 0x00, // "
    0x12, 0x3F, 0x3F, 0x12, 0x3F, 0x3F, 0x12, 0x00, // #
    0x00, 0x2E, 0x2A, 0x7F, 0x7F, 0x2A, 0x32, 0x00, // $
    0x00, 0x23, 0x13, 0x08, 0x04, 0x32, 0x31, 0x00, // %
    0x30, 0x7A, 0x4F, 0x5D, 0x37, 0x7A, 0x48, 0x00, // &
    0x00, 0x00, 0x04, 0x07, 0x03, 0x00, 0x00, 0x00, // '
    0x00, 0x00, 0x1C, 0x3E, 0x63, 0x41, 0x00, 0x00, // (
    0x00, 0x00, 0x41, 0x63, 0x3E, 0x1C, 0x00, 0x00, // )
    0x08, 0x2A, 0x3E, 0x1C, 0x1C, 0x3E, 0x2A, 0x08, // *
    0x00, 0x08, 0x08, 0x3E, 0x3E, 0x08, 0x08, 0x00, // +
    0x00, 0x00, 0x80, 0xE0, 0x60, 0x00, 0x00, 0x00, // ,
    0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, // -
    0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00, // .
    0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00, // /
    0x3E, 0x7F, 0x51, 0x49, 0x45, 0x7F, 0x3E, 0x00, // 0
    0x00, 0x40, 0x42, 0x7F, 0x7F, 0x40, 0x40, 0x00, // 1
    0x62, 0x73, 0x51, 0x59, 0x49, 0x4F, 0x46, 0x00, // 2
    0x22, 0x63, 0x49, 0x49, 0x49, 0x7F, 0x36, 0x00, // 3
    0x18, 0x1C, 0x16, 0x53, 0x7F, 0x7F, 0x50, 0x00, // 4
    0x27, 0x67, 0x45, 0x45, 0x45, 0x7D, 0x39, 0x00, // 5
    0x3C, 0x7E, 0x4B, 0x49, 0x49, 0x78, 0x30, 0x00, // 6
    0x03, 0x03, 0x71, 0x79, 0x0D, 0x07, 0x03, 0x00, // 7
    0x36, 0x7F, 0x49, 0x49, 0x49, 0x7F, 0x36, 0x00, // 8
    0x06, 0x4F, 0x49, 0x49, 0x69, 0x3F, 0x1E, 0x00, // 9
    0x00, 0x00, 0x00, 0x66, 0x66, 0x00, 0x00, 0x00, // :
    0x00, 0x00, 0x80, 0xE6, 0x66, 0x00, 0x00, 0x00, // ;
    0x00, 0x08, 0x1C, 0x36, 0x63, 0x41, 0x00, 0x00, // <
    0x00, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00, // =
    0x00, 0x00, 0x41, 0x63, 0x36, 0x1C, 0x08, 0x00, // >
    0x02, 0x03, 0x01, 0x59, 0x5D, 0x07, 0x02, 0x00, // ?
    0x3E, 0x7F, 0x41, 0x5D, 0x5D, 0x5F, 0x1E, 0x00, // @
    0x7C, 0x7E, 0x13, 0x11, 0x13, 0x7E, 0x7C, 0x00, // A
    0x7F, 0x7F, 0x49, 0x49, 0x49, 0x7F, 0x36, 0x00, // B
    0x3E, 0x7F, 0x41, 0x41, 0x41, 0x63, 0x22, 0x00, // C
    0x7F, 0x7F, 0x41, 0x41, 0x63, 0x3E, 0x1C, 0x00, // D
    0x7F, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x41, 0x00, // E
    0x7F, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x01, 0x00, // F
    0x3E, 0x7F, 0x41, 0x41, 0x49, 0x7B, 0x7A, 0x00, // G
    0x7F, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x7F, 0x00, // H
    0x00, 0x41, 0x41, 0x7F, 0x7F, 0x41, 0x41, 0x00, // I
    0x30, 0x70, 0x40, 0x41, 0x41, 0x7F, 0x3F, 0x00, // J
    0x7F, 0x7F, 0x08, 0x1C, 0x36, 0x63, 0x41, 0x00, // K
    0x7F, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, // L
    0x7F, 0x7F, 0x06, 0x0C, 0x06, 0x7F, 0x7F, 0x00, // M
    0x7F, 0x7F, 0x06, 0x0C, 0x18, 0x7F, 0x7F, 0x00, // N
    0x3E, 0x7F, 0x41, 0x41, 0x41, 0x7F, 0x3E, 0x00, // O
    0x7F, 0x7F, 0x09, 0x09, 0x09, 0x0F, 0x06, 0x00, // P
    0x3E, 0x7F, 0x41, 0x71, 0x61, 0xFF, 0xBE, 0x00, // Q
    0x7F, 0x7F, 0x09, 0x19, 0x39, 0x6F, 0x46, 0x00, // R
    0x26, 0x6F, 0x49, 0x49, 0x49, 0x7B, 0x32, 0x00, // S
    0x01, 0x01, 0x01, 0x7F, 0x7F, 0x01, 0x01, 0x01, // T
    0x3F, 0x7F, 0x40, 0x40, 0x40, 0x7F, 0x3F, 0x00, // U
    0x0F, 0x1F, 0x30, 0x60, 0x30, 0x1F, 0x0F, 0x00, // V
    0x7F, 0x7F, 0x30, 0x18, 0x30, 0x7F, 0x7F, 0x00, // W
    0x63, 0x77, 0x1C, 0x08, 0x1C, 0x77, 0x63, 0x00, // X
    0x03, 0x07, 0x0C, 0x78, 0x78, 0x0C, 0x07, 0x03, // Y
    0x41, 0x61, 0x71, 0x59, 0x4D, 0x47, 0x43, 0x00, // Z
    0x00, 0x00, 0x7F, 0x7F, 0x41, 0x41, 0x00, 0x00, // [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, // backslash
    0x00, 0x00, 0x41, 0x41, 0x7F, 0x7F, 0x00, 0x00, // ]
    0x08, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x08, 0x00, // ^
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, // _
    0x00, 0x00, 0x00, 0x03, 0x07, 0x04, 0x00, 0x00, // backtick
    0x20, 0x74, 0x54, 0x54, 0x54, 0x7C, 0x78, 0x00, // a
    0x7F, 0x7F, 0x44, 0x44, 0x44, 0x7C, 0x38, 0x00, // b
    0x38, 0x7C, 0x44, 0x44, 0x44, 0x6C, 0x28, 0x00, // c
    0x38, 0x7C, 0x44, 0x44, 0x44, 0x7F, 0x7F, 0x00, // d
    0x38, 0x7C, 0x54, 0x54, 0x54, 0x5C, 0x18, 0x00, // e
    0x00, 0x08, 0x7E, 0x7F, 0x09, 0x09, 0x00, 0x00, // f
    0x18, 0xBC, 0xA4, 0xA4, 0xA4, 0xFC, 0x7C, 0x00, // g
    0x7F, 0x7F, 0x04, 0x04, 0x04, 0x7C, 0x78, 0x00, // h
    0x00, 0x00, 0x44, 0x7D, 0x7D, 0x40, 0x00, 0x00, // i
    0x00, 0x80, 0x84, 0xFD, 0x7D, 0x00, 0x00, 0x00, // j
    0x7F, 0x7F, 0x10, 0x10, 0x38, 0x6C, 0x44, 0x00, // k
    0x00, 0x00, 0x41, 0x7F, 0x7F, 0x40, 0x00, 0x00, // l
    0x7C, 0x7C, 0x0C, 0x18, 0x0C, 0x7C, 0x78, 0x00, // m
    0x7C, 0x7C, 0x04, 0x04, 0x04, 0x7C, 0x78, 0x00, // n
    0x38, 0x7C, 0x44, 0x44, 0x44, 0x7C, 0x38, 0x00, // o
    0xFC, 0xFC, 0x24, 0x24, 0x24, 0x3C, 0x18, 0x00, // p
    0x18, 0x3C, 0x24, 0x24, 0x24, 0xFC, 0xFC, 0x00, // q
    0x7C, 0x7C, 0x08, 0x04, 0x04, 0x0C, 0x08, 0x00, // r
    0x48, 0x5C, 0x54, 0x54, 0x54, 0x74, 0x24, 0x00, // s
    0x00, 0x04, 0x3F, 0x7F, 0x44, 0x44, 0x00, 0x00, // t
    0x3C, 0x7C, 0x40, 0x40, 0x40, 0x7C, 0x7C, 0x00, // u
    0x1C, 0x3C, 0x60, 0x40, 0x60, 0x3C, 0x1C, 0x00, // v
    0x3C, 0x7C, 0x60, 0x30, 0x60, 0x7C, 0x3C, 0x00, // w
    0x44, 0x6C, 0x38, 0x10, 0x38, 0x6C, 0x44, 0x00, // x
    0x1C, 0xBC, 0xA0, 0xA0, 0xA0, 0xFC, 0x7C, 0x00, // y
    0x44, 0x64, 0x74, 0x54, 0x5C, 0x4C, 0x44, 0x00, // z
    0x00, 0x08, 0x08, 0x3E, 0x77, 0x41, 0x41, 0x00, // {
    0x00, 0x00, 0x00, 0x7F, 0x7F, 0x00, 0x00, 0x00, // pipe
    0x00, 0x41, 0x41, 0x77, 0x3E, 0x08, 0x08, 0x00, // }
    0x02, 0x01, 0x01, 0x03, 0x02, 0x02, 0x01, 0x00, // ~
];

/// Built-in 8x8 font covering printable ASCII `0x20..=0x7E`
///
/// Used by the chart renderer for axis labels.
pub const FONT_8X8: Font<'static> = Font::new(&FONT_8X8_DATA, b' ', 95, 8, 1);
