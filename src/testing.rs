//! Recording driver shared by the unit tests

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::color::DeviceColor;
use crate::config::{Builder, Config};
use crate::display::Graphics;
use crate::interface::DisplayInterface;

/// One driver call as observed by [`RecordingInterface`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    Initialize,
    SetWindow { x: u16, y: u16, w: u16, h: u16 },
    SetGramAddress { x: u16, y: u16 },
    NextPixel(DeviceColor),
    Pixel { x: u16, y: u16, color: DeviceColor },
}

#[derive(Debug, Clone, Copy)]
pub struct MockError;

/// Driver that records every call and models the window cursor
///
/// `pixels` holds the last color written at each position and how many times
/// the position was written. `writes` lists every written position in the
/// order the driver received it.
#[derive(Debug)]
pub struct RecordingInterface {
    pub width: u16,
    pub height: u16,
    pub calls: Vec<Call>,
    pub pixels: BTreeMap<(u16, u16), (DeviceColor, u32)>,
    pub writes: Vec<(u16, u16, DeviceColor)>,
    pub fail_pixels: bool,
    window: (u16, u16, u16, u16),
    cursor: (u16, u16),
}

impl RecordingInterface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            pixels: BTreeMap::new(),
            writes: Vec::new(),
            fail_pixels: false,
            window: (0, 0, width, height),
            cursor: (0, 0),
        }
    }

    pub fn reset_log(&mut self) {
        self.calls.clear();
        self.pixels.clear();
        self.writes.clear();
    }

    fn record_write(&mut self, x: u16, y: u16, color: DeviceColor) {
        self.writes.push((x, y, color));
        let entry = self.pixels.entry((x, y)).or_insert((color, 0));
        entry.0 = color;
        entry.1 += 1;
    }

    pub fn windows(&self) -> Vec<(u16, u16, u16, u16)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::SetWindow { x, y, w, h } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    pub fn next_pixel_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::NextPixel(_)))
            .count()
    }

    pub fn addressed_pixels(&self) -> Vec<(u16, u16, DeviceColor)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::Pixel { x, y, color } => Some((x, y, color)),
                _ => None,
            })
            .collect()
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<DeviceColor> {
        self.pixels.get(&(x, y)).map(|(color, _)| *color)
    }
}

impl DisplayInterface for RecordingInterface {
    type Error = MockError;

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn initialize<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.calls.push(Call::Initialize);
        Ok(())
    }

    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), Self::Error> {
        self.calls.push(Call::SetWindow { x, y, w, h });
        self.window = (x, y, w, h);
        Ok(())
    }

    fn set_gram_address(&mut self, x: u16, y: u16) -> Result<(), Self::Error> {
        self.calls.push(Call::SetGramAddress { x, y });
        self.cursor = (x, y);
        Ok(())
    }

    fn draw_next_pixel(&mut self, color: DeviceColor) -> Result<(), Self::Error> {
        if self.fail_pixels {
            return Err(MockError);
        }
        self.calls.push(Call::NextPixel(color));
        let (x, y) = self.cursor;
        self.record_write(x, y, color);
        let (wx, _, ww, _) = self.window;
        if u32::from(x) + 1 >= u32::from(wx) + u32::from(ww) {
            self.cursor = (wx, y.wrapping_add(1));
        } else {
            self.cursor = (x + 1, y);
        }
        Ok(())
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: DeviceColor) -> Result<(), Self::Error> {
        if self.fail_pixels {
            return Err(MockError);
        }
        self.calls.push(Call::Pixel { x, y, color });
        self.record_write(x, y, color);
        Ok(())
    }
}

pub struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Engine over a fresh recording driver, with the init log cleared
pub fn graphics_with(width: u16, height: u16, config: Config) -> Graphics<RecordingInterface> {
    let mut gfx = Graphics::new(RecordingInterface::new(width, height), config, &mut MockDelay)
        .unwrap();
    gfx.interface_mut().reset_log();
    gfx
}

/// 320x240 engine with default settings and no clear on init
pub fn graphics() -> Graphics<RecordingInterface> {
    graphics_with(320, 240, Builder::new().clear_on_init(None).build())
}
