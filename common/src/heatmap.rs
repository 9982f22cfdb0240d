//! Heatmap renderers for the two panels.
//!
//! # Animated (auxiliary panel)
//!
//! [`AnimatedHeatmap`] keeps two palette-index frames at display resolution.
//! Every sensor grid runs the full chain once:
//!
//! ```text
//! grid -> low-pass (separable) -> bilinear resize -> palette index -> current
//! ```
//!
//! after the old `current` frame has become `previous`. Every animation tick
//! then cross-fades `previous` toward `current` and pushes the result to the
//! panel with a single region write. Nothing reaches the panel until two grids
//! have arrived, since a cross-fade needs two endpoints.
//!
//! Arriving grids never draw; the tick owns the panel. Ticks recolorize the
//! whole frame even when the ratio is saturated.
//!
//! # Simple (touch LCD)
//!
//! [`SimpleHeatmap`] redraws straight from temperatures with nearest-neighbor
//! resizing and the continuous palette, one pixel write at a time.

use core::iter;
use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::animator::{ColorIndexFrame, RgbFrame, interpolate};
use crate::color_map::{BACKGROUND_INDEX, color_from_temperature, index_from_temperature};
use crate::colors::BLACK;
use crate::dsp::{Grid, convolve_separable, resize_bilinear, resize_nearest};
use crate::sink::PixelSink;

/// Grids needed before a cross-fade can be drawn.
const FRAMES_BEFORE_DRAW: u32 = 2;

/// Rectangle of a `width` x `height` heatmap at `top_left`.
const fn heatmap_area(
    top_left: Point,
    width: usize,
    height: usize,
) -> Rectangle {
    Rectangle::new(top_left, Size::new(width as u32, height as u32))
}

// =============================================================================
// Animated Heatmap
// =============================================================================

/// Double-buffered, cross-fading heatmap.
///
/// `SH` x `SW` is the sensor grid, `DH` x `DW` the on-panel size and `K` the
/// low-pass kernel length.
pub struct AnimatedHeatmap<const SH: usize, const SW: usize, const DH: usize, const DW: usize, const K: usize> {
    area: Rectangle,
    kernel: [f64; K],
    expected_ms: f64,
    filtered: Grid<SH, SW>,
    resized: Grid<DH, DW>,
    current: ColorIndexFrame<DH, DW>,
    previous: ColorIndexFrame<DH, DW>,
    frame: RgbFrame<DH, DW>,
    frames_received: u32,
    last_update: Duration,
}

impl<const SH: usize, const SW: usize, const DH: usize, const DW: usize, const K: usize>
    AnimatedHeatmap<SH, SW, DH, DW, K>
{
    /// Create a heatmap with its top-left corner at `top_left`.
    ///
    /// A new grid is expected every `expected_ms_between_updates`; the
    /// cross-fade completes after that long.
    pub fn new(
        top_left: Point,
        kernel: [f64; K],
        expected_ms_between_updates: u32,
    ) -> Self {
        Self {
            area: heatmap_area(top_left, DW, DH),
            kernel,
            expected_ms: f64::from(expected_ms_between_updates.max(1)),
            filtered: [[0.0; SW]; SH],
            resized: [[0.0; DW]; DH],
            current: [[BACKGROUND_INDEX; DW]; DH],
            previous: [[BACKGROUND_INDEX; DW]; DH],
            frame: [[BLACK; DW]; DH],
            frames_received: 0,
            last_update: Duration::ZERO,
        }
    }

    /// Panel rectangle covered by the heatmap.
    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    /// Grids received since construction or the last reset (saturating).
    #[inline]
    pub const fn frames_received(&self) -> u32 { self.frames_received }

    /// Whether enough grids arrived to draw.
    #[inline]
    pub const fn is_animating(&self) -> bool { self.frames_received >= FRAMES_BEFORE_DRAW }

    /// Newest palette-index frame.
    #[inline]
    pub const fn current(&self) -> &ColorIndexFrame<DH, DW> { &self.current }

    /// Palette-index frame the cross-fade starts from.
    #[inline]
    pub const fn previous(&self) -> &ColorIndexFrame<DH, DW> { &self.previous }

    /// Accept a sensor grid that arrived at `now`.
    pub fn on_new_grid(
        &mut self,
        grid: &Grid<SH, SW>,
        now: Duration,
    ) {
        core::mem::swap(&mut self.current, &mut self.previous);

        convolve_separable(grid, &self.kernel, &mut self.filtered);
        resize_bilinear(&self.filtered, &mut self.resized);
        for (row, out_row) in self.resized.iter().zip(self.current.iter_mut()) {
            for (&t, out) in row.iter().zip(out_row.iter_mut()) {
                *out = index_from_temperature(t);
            }
        }

        self.frames_received = self.frames_received.saturating_add(1);
        self.last_update = now;
    }

    /// Draw the frame for `now`, if two grids have arrived.
    ///
    /// Returns whether anything was written.
    pub fn on_animation_tick<S>(
        &mut self,
        now: Duration,
        sink: &mut S,
    ) -> bool
    where
        S: PixelSink,
        S::Color: From<Rgb888>,
    {
        self.draw_frame(self.ratio_at(now), sink)
    }

    /// Cross-fade ratio at `now`: elapsed time over the expected interval.
    pub fn ratio_at(
        &self,
        now: Duration,
    ) -> f64 {
        let elapsed_ms = now.saturating_sub(self.last_update).as_secs_f64() * 1000.0;
        elapsed_ms / self.expected_ms
    }

    /// Blend the frames by `ratio` and write them with one region write.
    ///
    /// Returns whether anything was written.
    pub fn draw_frame<S>(
        &mut self,
        ratio: f64,
        sink: &mut S,
    ) -> bool
    where
        S: PixelSink,
        S::Color: From<Rgb888>,
    {
        if !self.is_animating() {
            return false;
        }

        interpolate(&self.previous, &self.current, ratio, &mut self.frame);
        sink.write_pixel_region(&self.area, self.frame.iter().flatten().map(|&c| S::Color::from(c)));
        true
    }

    /// Forget both frames. Drawing resumes after two more grids.
    pub fn reset(&mut self) {
        self.frames_received = 0;
        self.current = [[BACKGROUND_INDEX; DW]; DH];
        self.previous = [[BACKGROUND_INDEX; DW]; DH];
    }

    /// Fill the heatmap rectangle with `color`.
    pub fn paint_background<S>(
        &self,
        sink: &mut S,
        color: Rgb888,
    ) where
        S: PixelSink,
        S::Color: From<Rgb888>,
    {
        sink.write_pixel_region(&self.area, iter::repeat_n(S::Color::from(color), DH * DW));
    }
}

// =============================================================================
// Simple Heatmap
// =============================================================================

/// Non-animated heatmap drawn straight from temperatures.
pub struct SimpleHeatmap<const SH: usize, const SW: usize, const DH: usize, const DW: usize> {
    area: Rectangle,
    body_color: Rgb888,
    resized: Grid<DH, DW>,
}

impl<const SH: usize, const SW: usize, const DH: usize, const DW: usize> SimpleHeatmap<SH, SW, DH, DW> {
    /// Create a heatmap at `top_left`; `body_color` is painted on reset.
    pub fn new(
        top_left: Point,
        body_color: Rgb888,
    ) -> Self {
        Self {
            area: heatmap_area(top_left, DW, DH),
            body_color,
            resized: [[0.0; DW]; DH],
        }
    }

    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    /// Resize `grid` and write every pixel.
    pub fn draw<S>(
        &mut self,
        grid: &Grid<SH, SW>,
        sink: &mut S,
    ) where
        S: PixelSink,
        S::Color: From<Rgb888>,
    {
        resize_nearest(grid, &mut self.resized);

        let origin = self.area.top_left;
        for (y, row) in self.resized.iter().enumerate() {
            for (x, &t) in row.iter().enumerate() {
                let point = origin + Point::new(x as i32, y as i32);
                sink.write_pixel(point, color_from_temperature(t).into());
            }
        }
    }

    /// Paint the body color over the heatmap.
    pub fn reset<S>(
        &self,
        sink: &mut S,
    ) where
        S: PixelSink,
        S::Color: From<Rgb888>,
    {
        sink.write_pixel_region(&self.area, iter::repeat_n(S::Color::from(self.body_color), DH * DW));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb565;

    use super::*;
    use crate::animator::lerp_rgb888;
    use crate::color_map::{TEMPERATURE_MAX, TEMPERATURE_MIN, color_from_index};
    use crate::colors::DARK_BLUE;
    use crate::testing::RecordingSink;

    /// Kernel that passes every sample through unchanged.
    const NEUTRAL: [f64; 5] = [0.0, 0.0, 1.0, 0.0, 0.0];

    type Identity = AnimatedHeatmap<10, 10, 10, 10, 5>;

    fn flat<const H: usize, const W: usize>(t: f64) -> Grid<H, W> { [[t; W]; H] }

    fn ms(ms: u64) -> Duration { Duration::from_millis(ms) }

    #[test]
    fn test_nothing_drawn_before_two_grids() {
        let mut heatmap = Identity::new(Point::new(2, 3), NEUTRAL, 500);
        let mut sink = RecordingSink::new(20, 20);

        assert!(!heatmap.on_animation_tick(ms(0), &mut sink));

        heatmap.on_new_grid(&flat(20.0), ms(0));
        assert!(!heatmap.on_animation_tick(ms(100), &mut sink));
        assert!(sink.regions.is_empty());
        assert_eq!(sink.pixel_writes, 0);

        heatmap.on_new_grid(&flat(30.0), ms(500));
        assert!(heatmap.on_animation_tick(ms(600), &mut sink));
        assert_eq!(sink.regions, [heatmap.area()]);
        assert_eq!(sink.pixel_writes, 0);
    }

    #[test]
    fn test_new_grid_does_not_draw() {
        let mut heatmap = Identity::new(Point::zero(), NEUTRAL, 500);
        let mut sink = RecordingSink::new(10, 10);
        for i in 0..3 {
            heatmap.on_new_grid(&flat(20.0), ms(i * 500));
        }
        assert!(sink.regions.is_empty());
        assert!(heatmap.on_animation_tick(ms(1200), &mut sink));
        assert_eq!(sink.regions.len(), 1);
    }

    #[test]
    fn test_flat_field_end_to_end() {
        let mut heatmap = Identity::new(Point::new(5, 5), NEUTRAL, 500);
        let mut sink = RecordingSink::new(20, 20);

        for i in 0..3 {
            heatmap.on_new_grid(&flat(37.0), ms(i * 500));
        }
        assert!(heatmap.draw_frame(0.5, &mut sink));

        let expected = color_from_index(index_from_temperature(37.0));
        let pixels = sink.area_pixels(&heatmap.area());
        assert_eq!(pixels.len(), 100);
        assert!(pixels.iter().all(|&c| c == expected));
    }

    #[test]
    fn test_swap_keeps_previous_frame() {
        let mut heatmap = Identity::new(Point::zero(), NEUTRAL, 500);
        heatmap.on_new_grid(&flat(TEMPERATURE_MIN), ms(0));
        heatmap.on_new_grid(&flat(TEMPERATURE_MAX), ms(500));

        assert!(heatmap.previous().iter().flatten().all(|&i| i == index_from_temperature(TEMPERATURE_MIN)));
        assert!(heatmap.current().iter().flatten().all(|&i| i == index_from_temperature(TEMPERATURE_MAX)));
    }

    #[test]
    fn test_tick_ratio_follows_clock() {
        let mut heatmap = Identity::new(Point::zero(), NEUTRAL, 500);
        let mut sink = RecordingSink::new(10, 10);

        heatmap.on_new_grid(&flat(TEMPERATURE_MIN), ms(1000));
        heatmap.on_new_grid(&flat(TEMPERATURE_MAX), ms(1500));
        assert_eq!(heatmap.ratio_at(ms(1750)), 0.5);
        assert!(heatmap.on_animation_tick(ms(1750), &mut sink));

        let cold = color_from_index(index_from_temperature(TEMPERATURE_MIN));
        let hot = color_from_index(index_from_temperature(TEMPERATURE_MAX));
        assert_eq!(sink.pixel(Point::new(4, 4)), lerp_rgb888(cold, hot, 0.5));
    }

    #[test]
    fn test_late_tick_holds_current() {
        let mut heatmap = Identity::new(Point::zero(), NEUTRAL, 500);
        let mut sink = RecordingSink::new(10, 10);

        heatmap.on_new_grid(&flat(TEMPERATURE_MIN), ms(0));
        heatmap.on_new_grid(&flat(TEMPERATURE_MAX), ms(500));
        heatmap.on_animation_tick(ms(5000), &mut sink);

        let hot = color_from_index(index_from_temperature(TEMPERATURE_MAX));
        assert_eq!(sink.pixel(Point::new(9, 9)), hot);
    }

    #[test]
    fn test_clock_before_update_is_ratio_zero() {
        let mut heatmap = Identity::new(Point::zero(), NEUTRAL, 500);
        heatmap.on_new_grid(&flat(20.0), ms(1000));
        assert_eq!(heatmap.ratio_at(ms(400)), 0.0);
    }

    #[test]
    fn test_reset_rearms_guard() {
        let mut heatmap = Identity::new(Point::zero(), NEUTRAL, 500);
        let mut sink = RecordingSink::new(10, 10);
        heatmap.on_new_grid(&flat(20.0), ms(0));
        heatmap.on_new_grid(&flat(25.0), ms(500));
        assert!(heatmap.is_animating());

        heatmap.reset();
        assert_eq!(heatmap.frames_received(), 0);
        assert!(heatmap.current().iter().flatten().all(|&i| i == BACKGROUND_INDEX));
        assert!(heatmap.previous().iter().flatten().all(|&i| i == BACKGROUND_INDEX));
        assert!(!heatmap.on_animation_tick(ms(700), &mut sink));

        heatmap.on_new_grid(&flat(20.0), ms(1000));
        assert!(!heatmap.on_animation_tick(ms(1100), &mut sink));
        heatmap.on_new_grid(&flat(20.0), ms(1500));
        assert!(heatmap.on_animation_tick(ms(1600), &mut sink));
    }

    #[test]
    fn test_low_pass_smooths_hot_pixel() {
        let mut heatmap = Identity::new(Point::zero(), [0.1, 0.2, 0.4, 0.2, 0.1], 500);
        let mut grid = flat::<10, 10>(TEMPERATURE_MIN);
        grid[5][5] = TEMPERATURE_MAX;
        heatmap.on_new_grid(&grid, ms(0));

        // 0.4 * 0.4 of the 90 degree spike survives at the center
        assert_eq!(heatmap.current()[5][5], index_from_temperature(TEMPERATURE_MIN + 0.16 * 90.0));
        assert!(heatmap.current()[5][5] < index_from_temperature(TEMPERATURE_MAX));
    }

    #[test]
    fn test_converts_to_native_color() {
        struct Rgb565Sink {
            inner: Vec<Rgb565>,
        }

        impl PixelSink for Rgb565Sink {
            type Color = Rgb565;

            fn write_pixel(
                &mut self,
                _point: Point,
                color: Rgb565,
            ) {
                self.inner.push(color);
            }

            fn write_pixel_region<I>(
                &mut self,
                _area: &Rectangle,
                colors: I,
            ) where
                I: IntoIterator<Item = Rgb565>,
            {
                self.inner.extend(colors);
            }
        }

        let mut heatmap = Identity::new(Point::zero(), NEUTRAL, 500);
        let mut sink = Rgb565Sink { inner: Vec::new() };
        heatmap.on_new_grid(&flat(37.0), ms(0));
        heatmap.on_new_grid(&flat(37.0), ms(500));
        heatmap.draw_frame(1.0, &mut sink);

        let expected = Rgb565::from(color_from_index(index_from_temperature(37.0)));
        assert_eq!(sink.inner.len(), 100);
        assert!(sink.inner.iter().all(|&c| c == expected));
    }

    #[test]
    fn test_paint_background() {
        let heatmap = Identity::new(Point::new(1, 1), NEUTRAL, 500);
        let mut sink = RecordingSink::new(12, 12);
        heatmap.paint_background(&mut sink, DARK_BLUE);
        assert!(sink.area_pixels(&heatmap.area()).iter().all(|&c| c == DARK_BLUE));
        assert_eq!(sink.pixel(Point::zero()), BLACK);
    }

    #[test]
    fn test_simple_heatmap_nearest_upscale() {
        let mut heatmap: SimpleHeatmap<2, 2, 4, 4> = SimpleHeatmap::new(Point::new(3, 2), DARK_BLUE);
        let mut sink = RecordingSink::new(10, 10);
        let grid = [[-10.0, 10.0], [30.0, 50.0]];

        heatmap.draw(&grid, &mut sink);

        assert_eq!(sink.pixel_writes, 16);
        assert!(sink.regions.is_empty());
        assert_eq!(sink.pixel(Point::new(3, 2)), color_from_temperature(-10.0));
        assert_eq!(sink.pixel(Point::new(4, 3)), color_from_temperature(-10.0));
        assert_eq!(sink.pixel(Point::new(5, 2)), color_from_temperature(10.0));
        assert_eq!(sink.pixel(Point::new(3, 4)), color_from_temperature(30.0));
        assert_eq!(sink.pixel(Point::new(6, 5)), color_from_temperature(50.0));
    }

    #[test]
    fn test_simple_heatmap_reset_paints_body() {
        let mut heatmap: SimpleHeatmap<2, 2, 4, 4> = SimpleHeatmap::new(Point::zero(), DARK_BLUE);
        let mut sink = RecordingSink::new(4, 4);
        heatmap.draw(&[[60.0; 2]; 2], &mut sink);
        heatmap.reset(&mut sink);
        assert!(sink.area_pixels(&heatmap.area()).iter().all(|&c| c == DARK_BLUE));
    }
}
