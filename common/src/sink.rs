//! Collaborator interfaces consumed by the pipeline.
//!
//! - [`PixelSink`]: direct pixel and pixel-region writes to a display
//! - [`Clock`]: monotonic time source for animation ratios and graph timing
//!
//! # Hardware Writes
//!
//! The pipeline never touches framebuffers or registers itself. It hands fully
//! computed pixels to a [`PixelSink`]. Every `embedded-graphics`
//! [`DrawTarget`] is a sink: single pixels go through `draw_iter` and regions go
//! through `fill_contiguous`, which display drivers implement as one windowed
//! bulk transfer.

use core::time::Duration;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Direct pixel output to one display.
///
/// Writes outside the display are clipped by the implementation. Writes never
/// fail from the pipeline's point of view.
pub trait PixelSink {
    /// Native pixel encoding of the display.
    type Color: PixelColor;

    /// Write a single pixel.
    fn write_pixel(
        &mut self,
        point: Point,
        color: Self::Color,
    );

    /// Write a whole rectangle in one call.
    ///
    /// `colors` yields the pixels row by row, left to right, top to bottom.
    fn write_pixel_region<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) where
        I: IntoIterator<Item = Self::Color>;
}

impl<D> PixelSink for D
where
    D: DrawTarget,
{
    type Color = D::Color;

    #[inline]
    fn write_pixel(
        &mut self,
        point: Point,
        color: Self::Color,
    ) {
        self.draw_iter(core::iter::once(Pixel(point, color))).ok();
    }

    #[inline]
    fn write_pixel_region<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) where
        I: IntoIterator<Item = Self::Color>,
    {
        self.fill_contiguous(area, colors).ok();
    }
}

/// Monotonic time source.
///
/// Returns the time elapsed since an arbitrary fixed epoch (typically boot).
/// Successive calls never go backwards.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Duration { (**self).now() }
}
