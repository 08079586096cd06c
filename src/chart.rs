//! Line graphs and bar charts
//!
//! Chart geometry comes from [`ChartLayout`](crate::ChartLayout) in the
//! engine configuration. Sample values are plotted unscaled: a sample of `n`
//! lands `n` pixels below the plot origin, or makes a bar `n` pixels tall.

use crate::color::Rgb;
use crate::display::{DrawResult, Graphics};
use crate::font::RenderContext;
use crate::interface::DisplayInterface;

impl<I> Graphics<I>
where
    I: DisplayInterface,
{
    /// Draw a line graph with labelled, arrowed axes
    ///
    /// The plot origin is `(x, y)` moved by the layout's origin offset. The
    /// axis label is drawn with the layout's label font on a copy of `ctx`,
    /// so the caller's font selection is left as it was. Both axes start just
    /// outside the plot origin and run to near the screen edge, each ending
    /// in a two-stroke arrowhead.
    ///
    /// At most `width - origin_offset.x - right_margin` samples are plotted.
    /// Sample `i` becomes three stacked pixels in column `i` of the plot, one
    /// above and one below the sample row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_line_graph(
        &mut self,
        ctx: &RenderContext<'_>,
        samples: &[u8],
        x: i32,
        y: i32,
        fg: Rgb,
        bg: Rgb,
    ) -> DrawResult<I> {
        let layout = self.config().chart;
        let width = i64::from(self.width());
        let height = i64::from(self.height());
        let (x, y) = (i64::from(x), i64::from(y));
        let (origin_x, origin_y) = (
            i64::from(layout.origin_offset.0),
            i64::from(layout.origin_offset.1),
        );
        let gap = i64::from(layout.axis_gap);
        let arrow = i64::from(layout.arrow_size);
        let end_margin = i64::from(layout.axis_end_margin);

        let max_samples = (width - origin_x - i64::from(layout.right_margin)).max(0);
        let samples = &samples[..samples.len().min(max_samples as usize)];
        log::debug!(
            "line graph at ({}, {}) with {} samples",
            x,
            y,
            samples.len()
        );

        let (fg, bg) = (fg.to_device(), bg.to_device());
        let label_ctx = ctx.with_font(layout.label_font);
        self.text_at(
            &label_ctx,
            layout.label,
            x + i64::from(layout.label_position.0),
            y + i64::from(layout.label_position.1),
            fg,
            bg,
        )?;

        let gx = x + origin_x;
        let gy = y + origin_y;
        let ax = gx - gap;
        let ay = gy - gap;

        let bottom = height - end_margin;
        self.line(ax, ay, ax, bottom, fg)?;
        self.line(ax, bottom, ax - arrow, bottom - arrow, fg)?;
        self.line(ax, bottom, ax + arrow, bottom - arrow, fg)?;

        let right = width - end_margin;
        self.line(ax, ay, right, ay, fg)?;
        self.line(right, ay, right - arrow, ay - arrow, fg)?;
        self.line(right, ay, right - arrow, ay + arrow, fg)?;

        for (i, sample) in samples.iter().enumerate() {
            let px = gx + i as i64;
            let py = gy + i64::from(*sample);
            self.put_pixel(px, py - 1, fg)?;
            self.put_pixel(px, py, fg)?;
            self.put_pixel(px, py + 1, fg)?;
        }
        Ok(())
    }

    /// Draw a bar chart
    ///
    /// Bar `i` is a filled rectangle `bar_width` wide and `samples[i]` tall at
    /// `x + i * (bar_width + bar_gap)`, top edge at `y`. No axes, no scaling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_bar_chart(
        &mut self,
        samples: &[u8],
        x: i32,
        y: i32,
        bar_width: i32,
        color: Rgb,
    ) -> DrawResult<I> {
        let pitch = i64::from(bar_width) + i64::from(self.config().chart.bar_gap);
        let color = color.to_device();
        let mut left = i64::from(x);
        for sample in samples {
            self.fill_area(left, i64::from(y), i64::from(bar_width), i64::from(*sample), color)?;
            left += pitch;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::color::{DeviceColor, Rgb};
    use crate::config::Builder;
    use crate::font::{FONT_8X8, Font, RenderContext};
    use crate::testing::{graphics, graphics_with};

    const FG: DeviceColor = DeviceColor::from_raw(0xFFFF);

    #[test]
    fn test_bar_chart_default_gap() {
        let mut gfx = graphics();
        gfx.draw_bar_chart(&[10, 20, 30], 0, 0, 5, Rgb::RED).unwrap();
        assert_eq!(
            gfx.interface().windows(),
            alloc::vec![(0, 0, 5, 10), (10, 0, 5, 20), (20, 0, 5, 30)]
        );
        assert_eq!(gfx.interface().next_pixel_count(), 5 * 60);
    }

    #[test]
    fn test_bar_chart_wide_gap() {
        let config = Builder::new().clear_on_init(None).bar_gap(10).build();
        let mut gfx = graphics_with(320, 240, config);
        gfx.draw_bar_chart(&[10, 20, 30], 0, 0, 5, Rgb::RED).unwrap();
        assert_eq!(
            gfx.interface().windows(),
            alloc::vec![(0, 0, 5, 10), (15, 0, 5, 20), (30, 0, 5, 30)]
        );
    }

    #[test]
    fn test_bar_chart_uses_y_and_skips_zero_samples() {
        let mut gfx = graphics();
        gfx.draw_bar_chart(&[4, 0, 6], 2, 100, 3, Rgb::RED).unwrap();
        assert_eq!(
            gfx.interface().windows(),
            alloc::vec![(2, 100, 3, 4), (18, 100, 3, 6)]
        );
    }

    #[test]
    fn test_line_graph_label_uses_layout_font() {
        const TINY_DATA: [u8; 2] = [0xFF, 0xFF];
        let tiny = Font::new(&TINY_DATA, b'A', 1, 2, 1);
        let ctx = RenderContext::new().with_font(tiny);

        let mut gfx = graphics();
        gfx.draw_line_graph(&ctx, &[], 0, 0, Rgb::WHITE, Rgb::BLACK)
            .unwrap();

        let windows = gfx.interface().windows();
        assert_eq!(windows.len(), "Voltage [V]".len());
        assert_eq!(windows[0], (5, 50, 8, 8));
        assert_eq!(windows[1], (13, 50, 8, 8));
        assert_eq!(ctx.font(), Some(tiny));
    }

    #[test]
    fn test_line_graph_without_font_still_labels() {
        let ctx = RenderContext::new();
        let mut gfx = graphics();
        gfx.draw_line_graph(&ctx, &[], 10, 0, Rgb::WHITE, Rgb::BLACK)
            .unwrap();
        assert_eq!(gfx.interface().windows()[0], (15, 50, 8, 8));
        assert_eq!(ctx.font(), None);
    }

    #[test]
    fn test_line_graph_axes_and_arrowheads() {
        let ctx = RenderContext::new().with_font(FONT_8X8);
        let mut gfx = graphics();
        gfx.draw_line_graph(&ctx, &[], 0, 0, Rgb::WHITE, Rgb::BLACK)
            .unwrap();
        let interface = gfx.interface();
        // axes meet at (28, 28)
        assert_eq!(interface.pixel(28, 28), Some(FG));
        // vertical axis ends at 230 with strokes to (18, 220) and (38, 220)
        assert_eq!(interface.pixel(28, 230), Some(FG));
        assert_eq!(interface.pixel(18, 220), Some(FG));
        assert_eq!(interface.pixel(38, 220), Some(FG));
        // horizontal axis ends at 310 with strokes to (300, 18) and (300, 38)
        assert_eq!(interface.pixel(310, 28), Some(FG));
        assert_eq!(interface.pixel(300, 18), Some(FG));
        assert_eq!(interface.pixel(300, 38), Some(FG));
        assert_eq!(interface.pixel(28, 231), None);
        assert_eq!(interface.pixel(311, 28), None);
    }

    #[test]
    fn test_line_graph_trace_is_three_pixels_per_sample() {
        let ctx = RenderContext::new();
        let mut gfx = graphics();
        gfx.draw_line_graph(&ctx, &[10, 50], 0, 0, Rgb::WHITE, Rgb::BLACK)
            .unwrap();
        let writes = gfx.interface().addressed_pixels();
        let trace: alloc::vec::Vec<_> = writes[writes.len() - 6..]
            .iter()
            .map(|(x, y, _)| (*x, *y))
            .collect();
        assert_eq!(
            trace,
            alloc::vec![(30, 39), (30, 40), (30, 41), (31, 79), (31, 80), (31, 81)]
        );
    }

    #[test]
    fn test_line_graph_clamps_sample_count() {
        let ctx = RenderContext::new();
        let config = Builder::new().clear_on_init(None).build();

        let mut empty = graphics_with(100, 100, config.clone());
        empty
            .draw_line_graph(&ctx, &[], 0, 0, Rgb::WHITE, Rgb::BLACK)
            .unwrap();
        let baseline = empty.interface().addressed_pixels().len();

        let mut full = graphics_with(100, 100, config);
        full.draw_line_graph(&ctx, &[10; 60], 0, 0, Rgb::WHITE, Rgb::BLACK)
            .unwrap();
        let plotted = full.interface().addressed_pixels().len() - baseline;

        // 100 - 30 - 20 columns available
        assert_eq!(plotted, 50 * 3);
    }

    #[test]
    fn test_line_graph_origin_at_coordinate_extremes() {
        let ctx = RenderContext::new();
        let mut gfx = graphics();
        assert!(
            gfx.draw_line_graph(&ctx, &[1], i32::MAX - 10, 0, Rgb::WHITE, Rgb::BLACK)
                .is_ok()
        );
        assert!(
            gfx.draw_line_graph(&ctx, &[1], i32::MIN, i32::MIN, Rgb::WHITE, Rgb::BLACK)
                .is_ok()
        );
        assert!(
            gfx.draw_line_graph(&ctx, &[255], i32::MAX, i32::MAX, Rgb::WHITE, Rgb::BLACK)
                .is_ok()
        );
    }

    #[test]
    fn test_line_graph_far_right_keeps_visible_axis_tail() {
        let ctx = RenderContext::new();
        let mut gfx = graphics();
        gfx.draw_line_graph(&ctx, &[1], i32::MAX - 10, 0, Rgb::WHITE, Rgb::BLACK)
            .unwrap();
        let interface = gfx.interface();
        // the horizontal axis runs back from far right to its arrow tip
        assert_eq!(interface.pixel(310, 28), Some(FG));
        assert_eq!(interface.pixel(319, 28), Some(FG));
        assert_eq!(interface.pixel(309, 28), None);
    }
}
