//! Temperature to color mapping.
//!
//! Two paths share one thermal palette:
//!
//! - **Indexed**: [`index_from_temperature`] quantizes to a [`ColorIndex`] and
//!   [`color_from_index`] looks the color up in [`PALETTE`]. The animated
//!   heatmap stores indices so cross-fades and palette swaps work on frames
//!   that were filtered and resized once.
//! - **Continuous**: [`color_from_temperature`] blends the palette stops
//!   directly, skipping the quantization round-trip. Used by the LCD heatmap.
//!
//! # Clamping
//!
//! Temperatures outside `[TEMPERATURE_MIN, TEMPERATURE_MAX]` (and NaN) map to
//! the nearest boundary color. A transient spike or a noisy pixel never wraps
//! to an unrelated hue and never produces an index past the palette.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::THERMAL_STOPS;

// =============================================================================
// Palette Configuration
// =============================================================================

/// Index into [`PALETTE`].
pub type ColorIndex = u8;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 128;

/// Coldest temperature with a distinct color (degrees Celsius).
pub const TEMPERATURE_MIN: f64 = -20.0;

/// Hottest temperature with a distinct color (degrees Celsius).
pub const TEMPERATURE_MAX: f64 = 70.0;

/// Index used for cleared frames (the coldest color).
pub const BACKGROUND_INDEX: ColorIndex = 0;

const _: () = assert!(PALETTE_SIZE >= 2 && PALETTE_SIZE <= ColorIndex::MAX as usize + 1);
const _: () = assert!(TEMPERATURE_MIN < TEMPERATURE_MAX);

const SEGMENTS: usize = THERMAL_STOPS.len() - 1;

/// Thermal palette, coldest first, evenly interpolated between the stops.
pub static PALETTE: [Rgb888; PALETTE_SIZE] = build_palette();

const fn build_palette() -> [Rgb888; PALETTE_SIZE] {
    const LAST: usize = PALETTE_SIZE - 1;

    let mut palette = [Rgb888::new(0, 0, 0); PALETTE_SIZE];
    let mut i = 0;
    while i < PALETTE_SIZE {
        let scaled = i * SEGMENTS;
        let (segment, weight) = if i == LAST {
            (SEGMENTS - 1, LAST)
        } else {
            (scaled / LAST, scaled % LAST)
        };

        let from = THERMAL_STOPS[segment];
        let to = THERMAL_STOPS[segment + 1];
        palette[i] = Rgb888::new(
            blend_fixed(from.0, to.0, weight, LAST),
            blend_fixed(from.1, to.1, weight, LAST),
            blend_fixed(from.2, to.2, weight, LAST),
        );
        i += 1;
    }
    palette
}

/// Integer blend `a + (b - a) * weight / total`, rounded to nearest.
const fn blend_fixed(
    a: u8,
    b: u8,
    weight: usize,
    total: usize,
) -> u8 {
    ((a as usize * (total - weight) + b as usize * weight + total / 2) / total) as u8
}

/// Blend two channel values, `t` in `[0, 1]`, rounded to nearest.
#[inline]
pub(crate) fn lerp_channel(
    a: u8,
    b: u8,
    t: f64,
) -> u8 {
    let a = f64::from(a);
    libm::round(a + t * (f64::from(b) - a)) as u8
}

/// Position of `t` within the palette range as a fraction in `[0, 1]`.
#[inline]
fn normalized(t: f64) -> f64 {
    let fraction = (t - TEMPERATURE_MIN) / (TEMPERATURE_MAX - TEMPERATURE_MIN);
    if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) }
}

// =============================================================================
// Mapping
// =============================================================================

/// Quantize a temperature to its palette index.
#[inline]
pub fn index_from_temperature(t: f64) -> ColorIndex {
    libm::round(normalized(t) * (PALETTE_SIZE - 1) as f64) as ColorIndex
}

/// Palette color for an index. Indices past the end clamp to the last entry.
#[inline]
pub fn color_from_index(index: ColorIndex) -> Rgb888 { PALETTE[usize::from(index).min(PALETTE_SIZE - 1)] }

/// Continuous palette color for a temperature, without quantizing to an index.
pub fn color_from_temperature(t: f64) -> Rgb888 {
    let position = normalized(t) * SEGMENTS as f64;
    let segment = (libm::floor(position) as usize).min(SEGMENTS - 1);
    let weight = position - segment as f64;

    let from = THERMAL_STOPS[segment];
    let to = THERMAL_STOPS[segment + 1];
    Rgb888::new(
        lerp_channel(from.0, to.0, weight),
        lerp_channel(from.1, to.1, weight),
        lerp_channel(from.2, to.2, weight),
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;
    use proptest::prelude::*;

    use super::*;

    fn stop(i: usize) -> Rgb888 {
        let (r, g, b) = THERMAL_STOPS[i];
        Rgb888::new(r, g, b)
    }

    #[test]
    fn test_palette_endpoints_match_stops() {
        assert_eq!(PALETTE[0], stop(0));
        assert_eq!(PALETTE[PALETTE_SIZE - 1], stop(THERMAL_STOPS.len() - 1));
    }

    #[test]
    fn test_palette_brightens_overall() {
        let luma = |c: Rgb888| u32::from(c.r()) + u32::from(c.g()) + u32::from(c.b());
        assert!(luma(PALETTE[0]) < luma(PALETTE[PALETTE_SIZE / 2]));
        assert!(luma(PALETTE[PALETTE_SIZE / 2]) < luma(PALETTE[PALETTE_SIZE - 1]));
    }

    #[test]
    fn test_index_range_endpoints() {
        assert_eq!(index_from_temperature(TEMPERATURE_MIN), 0);
        assert_eq!(usize::from(index_from_temperature(TEMPERATURE_MAX)), PALETTE_SIZE - 1);
    }

    #[test]
    fn test_index_clamps_above_range() {
        assert_eq!(
            index_from_temperature(TEMPERATURE_MAX + 100.0),
            index_from_temperature(TEMPERATURE_MAX)
        );
    }

    #[test]
    fn test_index_clamps_below_range() {
        assert_eq!(
            index_from_temperature(TEMPERATURE_MIN - 100.0),
            index_from_temperature(TEMPERATURE_MIN)
        );
    }

    #[test]
    fn test_index_nan_is_coldest() {
        assert_eq!(index_from_temperature(f64::NAN), 0);
    }

    #[test]
    fn test_index_midpoint() {
        let mid = (TEMPERATURE_MIN + TEMPERATURE_MAX) / 2.0;
        // 0.5 * 127 = 63.5 rounds away from zero
        assert_eq!(index_from_temperature(mid), 64);
    }

    #[test]
    fn test_color_from_index_clamps() {
        assert_eq!(color_from_index(ColorIndex::MAX), PALETTE[PALETTE_SIZE - 1]);
    }

    #[test]
    fn test_continuous_color_endpoints() {
        assert_eq!(color_from_temperature(TEMPERATURE_MIN), stop(0));
        assert_eq!(color_from_temperature(TEMPERATURE_MAX), stop(THERMAL_STOPS.len() - 1));
        assert_eq!(color_from_temperature(TEMPERATURE_MAX + 50.0), stop(THERMAL_STOPS.len() - 1));
        assert_eq!(color_from_temperature(TEMPERATURE_MIN - 50.0), stop(0));
    }

    #[test]
    fn test_continuous_color_hits_interior_stops() {
        let span = TEMPERATURE_MAX - TEMPERATURE_MIN;
        for i in 1..SEGMENTS {
            let t = TEMPERATURE_MIN + span * i as f64 / SEGMENTS as f64;
            let color = color_from_temperature(t);
            let expected = stop(i);
            let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
            assert!(
                close(color.r(), expected.r()) && close(color.g(), expected.g()) && close(color.b(), expected.b()),
                "stop {i}: {color:?} != {expected:?}"
            );
        }
    }

    #[test]
    fn test_lerp_channel() {
        assert_eq!(lerp_channel(0, 200, 0.0), 0);
        assert_eq!(lerp_channel(0, 200, 1.0), 200);
        assert_eq!(lerp_channel(0, 200, 0.25), 50);
        assert_eq!(lerp_channel(200, 0, 0.25), 150);
        assert_eq!(lerp_channel(0, 1, 0.5), 1);
    }

    proptest! {
        #[test]
        fn prop_index_is_monotonic(a in -200.0f64..200.0, b in -200.0f64..200.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(index_from_temperature(lo) <= index_from_temperature(hi));
        }

        #[test]
        fn prop_index_always_in_palette(t in proptest::num::f64::ANY) {
            prop_assert!(usize::from(index_from_temperature(t)) < PALETTE_SIZE);
        }
    }
}
