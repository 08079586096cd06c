//! Engine configuration types and builder

use crate::color::Rgb;
use crate::font::{FONT_8X8, Font};

/// What drawing coordinates are clipped against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clipping {
    /// Drop everything outside the visible screen
    ///
    /// Rectangles are cut to the screen before a window is opened. Glyphs
    /// that do not fit entirely are skipped.
    #[default]
    Display,
    /// Pass coordinates through to the driver unchecked against the screen
    ///
    /// Only coordinates that a `u16` cannot express (negative or too large)
    /// are dropped. What the controller does with off-screen addresses is up
    /// to the controller.
    Addressable,
}

/// How filled circles are rasterized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CircleFill {
    /// Concentric midpoint rings from the radius down to zero
    ///
    /// Leaves a scattering of unfilled pixels at some radii.
    #[default]
    Rings,
    /// One horizontal span per scanline, no gaps
    Scanline,
}

/// Fixed geometry used by the chart renderer
///
/// Offsets are relative to the origin passed to the chart call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Distance from the chart origin to the plot origin (x, y)
    pub origin_offset: (i32, i32),
    /// Columns kept free right of the trace
    pub right_margin: i32,
    /// Gap between the axes and the plot origin
    pub axis_gap: i32,
    /// Distance from the screen edge at which the axes stop
    pub axis_end_margin: i32,
    /// Length of each arrowhead stroke along both axes
    pub arrow_size: i32,
    /// Axis label text
    pub label: &'static str,
    /// Axis label position
    pub label_position: (i32, i32),
    /// Font the label is drawn with
    pub label_font: Font<'static>,
    /// Horizontal space between bars
    pub bar_gap: i32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            origin_offset: (30, 30),
            right_margin: 20,
            axis_gap: 2,
            axis_end_margin: 10,
            arrow_size: 10,
            label: "Voltage [V]",
            label_position: (5, 50),
            label_font: FONT_8X8,
            bar_gap: 5,
        }
    }
}

/// Engine configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Clipping policy
    pub clipping: Clipping,
    /// Filled circle algorithm
    pub circle_fill: CircleFill,
    /// Color the screen is cleared to right after initialization
    pub clear_on_init: Option<Rgb>,
    /// Chart geometry
    pub chart: ChartLayout,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing engine configuration
///
/// # Example
///
/// ```
/// use lcdgfx::{Builder, CircleFill, Clipping, Rgb};
///
/// let config = Builder::new()
///     .clipping(Clipping::Addressable)
///     .circle_fill(CircleFill::Scanline)
///     .clear_on_init(Some(Rgb::WHITE))
///     .build();
/// assert_eq!(config.clipping, Clipping::Addressable);
/// ```
#[must_use]
pub struct Builder {
    clipping: Clipping,
    circle_fill: CircleFill,
    clear_on_init: Option<Rgb>,
    chart: ChartLayout,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            clipping: Clipping::Display,
            circle_fill: CircleFill::Rings,
            // Start from a known screen, as the panel RAM is random after power-up
            clear_on_init: Some(Rgb::BLACK),
            chart: ChartLayout::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clipping policy
    pub fn clipping(mut self, clipping: Clipping) -> Self {
        self.clipping = clipping;
        self
    }

    /// Set the filled circle algorithm
    pub fn circle_fill(mut self, circle_fill: CircleFill) -> Self {
        self.circle_fill = circle_fill;
        self
    }

    /// Set the color the screen is cleared to after initialization
    ///
    /// `None` leaves the panel contents untouched.
    pub fn clear_on_init(mut self, color: Option<Rgb>) -> Self {
        self.clear_on_init = color;
        self
    }

    /// Replace the whole chart layout
    pub fn chart_layout(mut self, layout: ChartLayout) -> Self {
        self.chart = layout;
        self
    }

    /// Set the space between bars in bar charts
    pub fn bar_gap(mut self, gap: i32) -> Self {
        self.chart.bar_gap = gap;
        self
    }

    /// Set the line graph axis label
    pub fn chart_label(mut self, label: &'static str) -> Self {
        self.chart.label = label;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            clipping: self.clipping,
            circle_fill: self.circle_fill,
            clear_on_init: self.clear_on_init,
            chart: self.chart,
        }
    }
}
