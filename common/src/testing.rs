//! Test doubles for the pipeline's collaborators.

use core::cell::Cell;
use core::convert::Infallible;
use core::time::Duration;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::sink::Clock;

/// In-memory display that records how it was written to.
pub struct RecordingSink {
    size: Size,
    pixels: Vec<Rgb888>,
    /// Number of pixels written through `draw_iter`.
    pub pixel_writes: usize,
    /// Areas written through `fill_contiguous`, in call order.
    pub regions: Vec<Rectangle>,
}

impl RecordingSink {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb888::BLACK; (width * height) as usize],
            pixel_writes: 0,
            regions: Vec::new(),
        }
    }

    /// Color at `point`. Panics when out of bounds.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Rgb888 {
        assert!(self.contains(point), "{point:?} outside {:?}", self.size);
        self.pixels[point.y as usize * self.size.width as usize + point.x as usize]
    }

    /// Every pixel inside `area`, row by row.
    pub fn area_pixels(
        &self,
        area: &Rectangle,
    ) -> Vec<Rgb888> {
        area.points().map(|p| self.pixel(p)).collect()
    }

    fn contains(
        &self,
        point: Point,
    ) -> bool {
        self.bounding_box().contains(point)
    }

    fn set(
        &mut self,
        point: Point,
        color: Rgb888,
    ) {
        if self.contains(point) {
            let idx = point.y as usize * self.size.width as usize + point.x as usize;
            self.pixels[idx] = color;
        }
    }
}

impl OriginDimensions for RecordingSink {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for RecordingSink {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.pixel_writes += 1;
            self.set(point, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.regions.push(*area);
        for (point, color) in area.points().zip(colors) {
            self.set(point, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        for point in area.points() {
            self.set(point, color);
        }
        Ok(())
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self { Self::default() }

    pub fn set(
        &self,
        now: Duration,
    ) {
        self.now.set(now);
    }

    pub fn advance(
        &self,
        by: Duration,
    ) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration { self.now.get() }
}
