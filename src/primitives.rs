//! Line and circle rasterization
//!
//! Both algorithms are integer-only and emit addressed single-pixel writes.
//! Lines use Bresenham's algorithm; circles use the midpoint algorithm with
//! 8-way symmetry.
//!
//! Filled circles default to concentric rings, which leave isolated unset
//! pixels between neighbouring rings at some radii. Select
//! [`CircleFill::Scanline`] for a solid fill.

use crate::color::{DeviceColor, Rgb};
use crate::config::CircleFill;
use crate::display::{DrawResult, Graphics};
use crate::interface::DisplayInterface;

impl<I> Graphics<I>
where
    I: DisplayInterface,
{
    /// Draw a straight line, both endpoints included
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) -> DrawResult<I> {
        self.line(
            i64::from(x1),
            i64::from(y1),
            i64::from(x2),
            i64::from(y2),
            color.to_device(),
        )
    }

    /// Bresenham line in engine coordinates
    ///
    /// Horizontal and vertical lines only visit the part inside the clipping
    /// bounds, so an endpoint far off screen costs nothing.
    pub(crate) fn line(
        &mut self,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        color: DeviceColor,
    ) -> DrawResult<I> {
        let bounds = self.bounds();
        if y1 == y2 {
            if !(0..bounds.height()).contains(&y1) {
                return Ok(());
            }
            let Some(span) = visible_span(x1, x2, bounds.width()) else {
                return Ok(());
            };
            return self.axis_run(span, x1 > x2, |x| (x, y1), color);
        }
        if x1 == x2 {
            if !(0..bounds.width()).contains(&x1) {
                return Ok(());
            }
            let Some(span) = visible_span(y1, y2, bounds.height()) else {
                return Ok(());
            };
            return self.axis_run(span, y1 > y2, |y| (x1, y), color);
        }

        let (mut x, mut y) = (x1, y1);
        let dx = (x2 - x).abs();
        let dy = (y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut error = (if dx >= dy { dx } else { -dy }) / 2;

        loop {
            self.put_pixel(x, y, color)?;
            if x == x2 && y == y2 {
                return Ok(());
            }
            let previous = error;
            if previous > -dx {
                error -= dy;
                x += sx;
            }
            if previous < dy {
                error += dx;
                y += sy;
            }
        }
    }

    fn axis_run(
        &mut self,
        (low, high): (i64, i64),
        reversed: bool,
        point: impl Fn(i64) -> (i64, i64),
        color: DeviceColor,
    ) -> DrawResult<I> {
        if reversed {
            for t in (low..=high).rev() {
                let (x, y) = point(t);
                self.put_pixel(x, y, color)?;
            }
        } else {
            for t in low..=high {
                let (x, y) = point(t);
                self.put_pixel(x, y, color)?;
            }
        }
        Ok(())
    }

    /// Draw a one pixel wide circle outline
    ///
    /// Radius 0 writes the centre pixel eight times. A negative radius draws
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) -> DrawResult<I> {
        self.circle_ring(i64::from(cx), i64::from(cy), i64::from(radius), color.to_device())
    }

    /// Draw a filled circle
    ///
    /// The algorithm is chosen by [`Config::circle_fill`](crate::Config::circle_fill).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`](crate::Error::Interface) if the driver fails.
    pub fn draw_filled_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        color: Rgb,
    ) -> DrawResult<I> {
        let (cx, cy, radius) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let color = color.to_device();
        match self.config().circle_fill {
            CircleFill::Rings => {
                for r in (0..=radius).rev() {
                    self.circle_ring(cx, cy, r, color)?;
                }
                Ok(())
            }
            CircleFill::Scanline => {
                for dy in -radius..=radius {
                    let half = (radius * radius - dy * dy).unsigned_abs().isqrt() as i64;
                    self.fill_area(cx - half, cy + dy, 2 * half + 1, 1, color)?;
                }
                Ok(())
            }
        }
    }

    fn circle_ring(&mut self, cx: i64, cy: i64, radius: i64, color: DeviceColor) -> DrawResult<I> {
        let mut x = radius;
        let mut y = 0;
        let mut error = 1 - x;

        while x >= y {
            self.put_pixel(cx + x, cy + y, color)?;
            self.put_pixel(cx + y, cy + x, color)?;
            self.put_pixel(cx - x, cy + y, color)?;
            self.put_pixel(cx - y, cy + x, color)?;
            self.put_pixel(cx - x, cy - y, color)?;
            self.put_pixel(cx - y, cy - x, color)?;
            self.put_pixel(cx + x, cy - y, color)?;
            self.put_pixel(cx + y, cy - x, color)?;

            y += 1;
            if error < 0 {
                error += 2 * y + 1;
            } else {
                x -= 1;
                error += 2 * (y - x + 1);
            }
        }
        Ok(())
    }
}

/// Part of `[min(a, b), max(a, b)]` inside `[0, extent)`
fn visible_span(a: i64, b: i64, extent: i64) -> Option<(i64, i64)> {
    let low = a.min(b).max(0);
    let high = a.max(b).min(extent - 1);
    (low <= high).then_some((low, high))
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    use crate::color::{DeviceColor, Rgb};
    use crate::config::{Builder, CircleFill, Clipping};
    use crate::testing::{graphics, graphics_with};

    const RED: DeviceColor = DeviceColor::from_raw(0xF800);

    fn points(writes: &[(u16, u16, DeviceColor)]) -> Vec<(u16, u16)> {
        writes.iter().map(|(x, y, _)| (*x, *y)).collect()
    }

    #[test]
    fn test_line_single_point() {
        let mut gfx = graphics();
        gfx.draw_line(7, 9, 7, 9, Rgb::RED).unwrap();
        assert_eq!(gfx.interface().addressed_pixels(), alloc::vec![(7, 9, RED)]);
    }

    #[test]
    fn test_line_horizontal_in_order() {
        let mut gfx = graphics();
        gfx.draw_line(0, 0, 4, 0, Rgb::RED).unwrap();
        assert_eq!(
            points(&gfx.interface().addressed_pixels()),
            alloc::vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn test_line_vertical_reversed() {
        let mut gfx = graphics();
        gfx.draw_line(3, 4, 3, 1, Rgb::RED).unwrap();
        assert_eq!(
            points(&gfx.interface().addressed_pixels()),
            alloc::vec![(3, 4), (3, 3), (3, 2), (3, 1)]
        );
    }

    #[test]
    fn test_line_diagonal() {
        let mut gfx = graphics();
        gfx.draw_line(0, 0, 3, 3, Rgb::RED).unwrap();
        assert_eq!(
            points(&gfx.interface().addressed_pixels()),
            alloc::vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn test_line_shallow_slope_steps_once_per_column() {
        let mut gfx = graphics();
        gfx.draw_line(0, 0, 6, 2, Rgb::RED).unwrap();
        let pts = points(&gfx.interface().addressed_pixels());
        assert_eq!(pts.len(), 7);
        assert_eq!(pts.first(), Some(&(0, 0)));
        assert_eq!(pts.last(), Some(&(6, 2)));
        for pair in pts.windows(2) {
            assert_eq!(pair[1].0, pair[0].0 + 1);
            assert!(pair[1].1 - pair[0].1 <= 1);
        }
    }

    #[test]
    fn test_line_off_screen_part_is_dropped() {
        let mut gfx = graphics();
        gfx.draw_line(-2, 0, 2, 0, Rgb::RED).unwrap();
        assert_eq!(
            points(&gfx.interface().addressed_pixels()),
            alloc::vec![(0, 0), (1, 0), (2, 0)]
        );
    }

    #[test]
    fn test_axis_lines_with_extreme_endpoints_draw_visible_part() {
        let mut gfx = graphics();
        gfx.draw_line(i32::MAX, 5, i32::MIN, 5, Rgb::RED).unwrap();
        gfx.draw_line(7, i32::MIN, 7, i32::MAX, Rgb::RED).unwrap();
        gfx.draw_line(i32::MIN, i32::MAX, i32::MAX, i32::MAX, Rgb::RED)
            .unwrap();
        gfx.draw_line(i32::MAX, i32::MIN, i32::MAX, i32::MAX, Rgb::RED)
            .unwrap();

        let writes = points(&gfx.interface().addressed_pixels());
        assert_eq!(writes.len(), 320 + 240);
        assert_eq!(writes[0], (319, 5));
        assert_eq!(writes[319], (0, 5));
        assert_eq!(writes[320], (7, 0));
        assert_eq!(writes[320 + 239], (7, 239));
    }

    #[test]
    fn test_circle_radius_zero_writes_centre_eight_times() {
        let mut gfx = graphics();
        gfx.draw_circle(10, 10, 0, Rgb::RED).unwrap();
        let writes = gfx.interface().addressed_pixels();
        assert_eq!(writes.len(), 8);
        assert!(writes.iter().all(|w| *w == (10, 10, RED)));
    }

    #[test]
    fn test_circle_radius_one_symmetric_points() {
        let mut gfx = graphics();
        gfx.draw_circle(5, 5, 1, Rgb::RED).unwrap();
        let writes = gfx.interface().addressed_pixels();
        assert_eq!(
            points(&writes[..8]),
            alloc::vec![(6, 5), (5, 6), (4, 5), (5, 6), (4, 5), (5, 4), (6, 5), (5, 4)]
        );
        let distinct: BTreeSet<_> = points(&writes).into_iter().collect();
        assert_eq!(
            distinct.into_iter().collect::<Vec<_>>(),
            alloc::vec![(4, 5), (5, 4), (5, 6), (6, 5)]
        );
    }

    #[test]
    fn test_circle_points_stay_near_radius() {
        let mut gfx = graphics();
        gfx.draw_circle(50, 50, 10, Rgb::RED).unwrap();
        for (x, y, _) in gfx.interface().addressed_pixels() {
            let dx = i32::from(x) - 50;
            let dy = i32::from(y) - 50;
            let d2 = dx * dx + dy * dy;
            assert!((81..=121).contains(&d2), "({x}, {y}) off the ring");
        }
    }

    #[test]
    fn test_circle_negative_radius_draws_nothing() {
        let mut gfx = graphics();
        gfx.draw_circle(10, 10, -3, Rgb::RED).unwrap();
        gfx.draw_filled_circle(10, 10, -3, Rgb::RED).unwrap();
        assert!(gfx.interface().calls.is_empty());
    }

    #[test]
    fn test_filled_circle_rings_from_radius_down_to_zero() {
        let mut gfx = graphics();
        gfx.draw_filled_circle(20, 20, 2, Rgb::RED).unwrap();
        let writes = gfx.interface().addressed_pixels();
        // first ring is the outer one, last eight writes are the centre
        assert_eq!(points(&writes[..1]), alloc::vec![(22, 20)]);
        assert!(writes[writes.len() - 8..].iter().all(|w| *w == (20, 20, RED)));
        assert_eq!(gfx.interface().next_pixel_count(), 0);
    }

    #[test]
    fn test_filled_circle_scanline_is_solid() {
        let config = Builder::new()
            .clear_on_init(None)
            .circle_fill(CircleFill::Scanline)
            .build();
        let mut gfx = graphics_with(320, 240, config);
        gfx.draw_filled_circle(20, 20, 6, Rgb::RED).unwrap();
        let interface = gfx.interface();
        assert_eq!(interface.windows().len(), 13);
        for y in 14u16..=26 {
            for x in 14u16..=26 {
                let dx = i64::from(x) - 20;
                let dy = i64::from(y) - 20;
                if dx * dx + dy * dy <= 25 {
                    assert_eq!(interface.pixel(x, y), Some(RED), "hole at ({x}, {y})");
                }
            }
        }
        assert!(interface.pixels.values().all(|(_, count)| *count == 1));
    }

    #[test]
    fn test_circle_addressable_keeps_off_screen_points() {
        let config = Builder::new()
            .clear_on_init(None)
            .clipping(Clipping::Addressable)
            .build();
        let mut gfx = graphics_with(320, 240, config);
        gfx.draw_circle(319, 100, 3, Rgb::RED).unwrap();
        assert!(
            gfx.interface()
                .addressed_pixels()
                .iter()
                .any(|(x, _, _)| *x == 322)
        );
    }
}
