//! Color types and RGB888 to RGB565 reduction
//!
//! Callers describe colors as 24-bit [`Rgb`] values (`0xRRGGBB`). The display
//! consumes 16-bit [`DeviceColor`] values packed as 5 bits red, 6 bits green
//! and 5 bits blue. The reduction keeps the high bits of each channel; it is
//! lossy and there is no way back.
//!
//! | Channel | Source bits (of `0xRRGGBB`) | Device bits |
//! |---------|-----------------------------|-------------|
//! | Red     | 23..19                      | 15..11      |
//! | Green   | 15..10                      | 10..5       |
//! | Blue    | 7..3                        | 4..0        |
//!
//! ## Example
//!
//! ```
//! use lcdgfx::{Rgb, to_device_color};
//!
//! assert_eq!(to_device_color(Rgb::RED).raw(), 0xF800);
//! assert_eq!(to_device_color(Rgb::GREEN).raw(), 0x07E0);
//! assert_eq!(to_device_color(Rgb::BLUE).raw(), 0x001F);
//! assert_eq!(Rgb::from_u32(0xFFFFFF).to_device().raw(), 0xFFFF);
//! ```

/// A 24-bit RGB color as supplied by application code
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// Black
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// White
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Red
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    /// Green
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    /// Blue
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    /// Yellow
    pub const YELLOW: Self = Self::new(0xFF, 0xFF, 0x00);
    /// Cyan
    pub const CYAN: Self = Self::new(0x00, 0xFF, 0xFF);
    /// Magenta
    pub const MAGENTA: Self = Self::new(0xFF, 0x00, 0xFF);
    /// Mid gray
    pub const GRAY: Self = Self::new(0x80, 0x80, 0x80);

    /// Build a color from its three channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Build a color from a packed `0xRRGGBB` value
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// Packed `0xRRGGBB` value
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Reduce to the display's 16-bit format
    ///
    /// Same as [`to_device_color`].
    pub const fn to_device(self) -> DeviceColor {
        to_device_color(self)
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

/// A 16-bit RGB565 color in the layout the display consumes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeviceColor(u16);

impl DeviceColor {
    /// Wrap an already packed RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Packed RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// 5-bit red field
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8 & 0x1F
    }

    /// 6-bit green field
    pub const fn green(self) -> u8 {
        (self.0 >> 5) as u8 & 0x3F
    }

    /// 5-bit blue field
    pub const fn blue(self) -> u8 {
        self.0 as u8 & 0x1F
    }
}

/// Convert a 24-bit RGB color to the display's 16-bit RGB565 format
///
/// Takes the 5 high bits of red, the 6 high bits of green and the 5 high bits
/// of blue. No rounding or dithering.
pub const fn to_device_color(rgb: Rgb) -> DeviceColor {
    let value = rgb.0;
    let red = (value >> 19) & 0x1F;
    let green = (value >> 10) & 0x3F;
    let blue = (value >> 3) & 0x1F;
    DeviceColor(((red << 11) | (green << 5) | blue) as u16)
}

#[cfg(feature = "graphics")]
mod interop {
    use embedded_graphics_core::pixelcolor::raw::RawU16;
    use embedded_graphics_core::pixelcolor::{IntoStorage, Rgb565, Rgb888, RgbColor};

    use super::{DeviceColor, Rgb};

    impl From<Rgb888> for Rgb {
        fn from(color: Rgb888) -> Self {
            Self::new(color.r(), color.g(), color.b())
        }
    }

    impl From<Rgb565> for DeviceColor {
        fn from(color: Rgb565) -> Self {
            Self(color.into_storage())
        }
    }

    impl From<DeviceColor> for Rgb565 {
        fn from(color: DeviceColor) -> Self {
            Self::from(RawU16::new(color.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors_reduce_to_full_fields() {
        assert_eq!(to_device_color(Rgb::from_u32(0xFF0000)).raw(), 0xF800);
        assert_eq!(to_device_color(Rgb::from_u32(0x00FF00)).raw(), 0x07E0);
        assert_eq!(to_device_color(Rgb::from_u32(0x0000FF)).raw(), 0x001F);
        assert_eq!(to_device_color(Rgb::from_u32(0xFFFFFF)).raw(), 0xFFFF);
        assert_eq!(to_device_color(Rgb::BLACK).raw(), 0x0000);
    }

    #[test]
    fn test_low_bits_are_truncated_not_rounded() {
        // 0x07 red, 0x03 green, 0x07 blue all fall below the kept bits
        assert_eq!(to_device_color(Rgb::new(0x07, 0x03, 0x07)).raw(), 0x0000);
        // 0x08 red is the lowest kept red bit, 0x04 green, 0x08 blue likewise
        let c = to_device_color(Rgb::new(0x08, 0x04, 0x08));
        assert_eq!((c.red(), c.green(), c.blue()), (1, 1, 1));
    }

    #[test]
    fn test_fields_match_channel_high_bits() {
        for value in [0x123456u32, 0xABCDEF, 0x80_7F_01, 0xFE_01_80] {
            let rgb = Rgb::from_u32(value);
            let c = rgb.to_device();
            assert_eq!(c.red(), rgb.red() >> 3);
            assert_eq!(c.green(), rgb.green() >> 2);
            assert_eq!(c.blue(), rgb.blue() >> 3);
        }
    }

    #[test]
    fn test_from_u32_masks_upper_byte() {
        let rgb = Rgb::from(0xAB12_3456);
        assert_eq!(rgb.to_u32(), 0x12_3456);
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (0x12, 0x34, 0x56));
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_rgb565_interop_preserves_layout() {
        use embedded_graphics_core::pixelcolor::{Rgb565, Rgb888, RgbColor};

        assert_eq!(DeviceColor::from(Rgb565::RED).raw(), 0xF800);
        assert_eq!(Rgb565::from(DeviceColor::from_raw(0x07E0)), Rgb565::GREEN);
        assert_eq!(Rgb::from(Rgb888::new(1, 2, 3)), Rgb::new(1, 2, 3));
    }
}
