//! Cross-fade between two color-index frames.
//!
//! The sensor delivers a new grid only a couple of times per second, but the
//! panel refreshes much faster. Between two grids every pixel fades linearly
//! from its previous color to its current one, driven by the fraction of the
//! expected update interval that has elapsed.
//!
//! # Ratio
//!
//! | Ratio        | Output                          |
//! |--------------|---------------------------------|
//! | `<= 0`       | the previous frame              |
//! | `0 .. 1`     | per-channel linear blend        |
//! | `>= 1`, NaN  | the current frame (held)        |
//!
//! A late sensor therefore freezes the picture on the newest frame rather
//! than extrapolating past it.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::color_map::{ColorIndex, color_from_index, lerp_channel};

/// Palette-index frame at display resolution.
pub type ColorIndexFrame<const H: usize, const W: usize> = [[ColorIndex; W]; H];

/// Blended RGB frame at display resolution.
pub type RgbFrame<const H: usize, const W: usize> = [[Rgb888; W]; H];

/// Clamp a blend ratio into `[0, 1]`. NaN holds on the newest frame.
#[inline]
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() { 1.0 } else { ratio.clamp(0.0, 1.0) }
}

/// Linear interpolation between two colors, each channel rounded to nearest.
///
/// `t` is expected in `[0, 1]`.
#[inline]
pub fn lerp_rgb888(
    from: Rgb888,
    to: Rgb888,
    t: f64,
) -> Rgb888 {
    Rgb888::new(
        lerp_channel(from.r(), to.r(), t),
        lerp_channel(from.g(), to.g(), t),
        lerp_channel(from.b(), to.b(), t),
    )
}

/// Blend every pixel of `prev` toward `curr` by `ratio`, writing into `out`.
pub fn interpolate<const H: usize, const W: usize>(
    prev: &ColorIndexFrame<H, W>,
    curr: &ColorIndexFrame<H, W>,
    ratio: f64,
    out: &mut RgbFrame<H, W>,
) {
    let t = clamp_ratio(ratio);

    for ((prev_row, curr_row), out_row) in prev.iter().zip(curr.iter()).zip(out.iter_mut()) {
        for ((&p, &c), out) in prev_row.iter().zip(curr_row.iter()).zip(out_row.iter_mut()) {
            *out = if p == c {
                color_from_index(c)
            } else {
                lerp_rgb888(color_from_index(p), color_from_index(c), t)
            };
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::color_map::PALETTE_SIZE;

    const COLD: ColorIndex = 0;
    const HOT: ColorIndex = (PALETTE_SIZE - 1) as ColorIndex;

    fn frames() -> (ColorIndexFrame<2, 3>, ColorIndexFrame<2, 3>) {
        let prev = [[COLD, 10, 20], [30, 40, HOT]];
        let curr = [[HOT, 20, 20], [0, 90, COLD]];
        (prev, curr)
    }

    fn colors(frame: &ColorIndexFrame<2, 3>) -> RgbFrame<2, 3> { frame.map(|row| row.map(color_from_index)) }

    #[test]
    fn test_ratio_zero_reproduces_previous() {
        let (prev, curr) = frames();
        let mut out = [[Rgb888::BLACK; 3]; 2];
        interpolate(&prev, &curr, 0.0, &mut out);
        assert_eq!(out, colors(&prev));
    }

    #[test]
    fn test_ratio_one_reproduces_current() {
        let (prev, curr) = frames();
        let mut out = [[Rgb888::BLACK; 3]; 2];
        interpolate(&prev, &curr, 1.0, &mut out);
        assert_eq!(out, colors(&curr));
    }

    #[test]
    fn test_ratio_past_one_holds_current() {
        let (prev, curr) = frames();
        let mut out = [[Rgb888::BLACK; 3]; 2];
        interpolate(&prev, &curr, 3.7, &mut out);
        assert_eq!(out, colors(&curr));
    }

    #[test]
    fn test_negative_ratio_holds_previous() {
        let (prev, curr) = frames();
        let mut out = [[Rgb888::BLACK; 3]; 2];
        interpolate(&prev, &curr, -0.5, &mut out);
        assert_eq!(out, colors(&prev));
    }

    #[test]
    fn test_nan_ratio_holds_current() {
        let (prev, curr) = frames();
        let mut out = [[Rgb888::BLACK; 3]; 2];
        interpolate(&prev, &curr, f64::NAN, &mut out);
        assert_eq!(out, colors(&curr));
    }

    #[test]
    fn test_lerp_midpoint() {
        let from = Rgb888::new(0, 100, 200);
        let to = Rgb888::new(100, 100, 0);
        assert_eq!(lerp_rgb888(from, to, 0.5), Rgb888::new(50, 100, 100));
    }

    proptest! {
        #[test]
        fn prop_blend_is_linear_per_channel(
            p in 0..PALETTE_SIZE as u8,
            c in 0..PALETTE_SIZE as u8,
            ratio in 0.0f64..=1.0,
        ) {
            let prev = [[p]];
            let curr = [[c]];
            let mut out = [[Rgb888::BLACK]];
            interpolate(&prev, &curr, ratio, &mut out);

            let (a, b) = (color_from_index(p), color_from_index(c));
            let expect = |x: u8, y: u8| f64::from(x) + ratio * (f64::from(y) - f64::from(x));
            let got = out[0][0];
            prop_assert!((f64::from(got.r()) - expect(a.r(), b.r())).abs() <= 0.5);
            prop_assert!((f64::from(got.g()) - expect(a.g(), b.g())).abs() <= 0.5);
            prop_assert!((f64::from(got.b()) - expect(a.b(), b.b())).abs() <= 0.5);
        }
    }
}
