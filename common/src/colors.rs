//! Color constants for both instrument displays.
//!
//! # Color Model
//!
//! Everything the pipeline computes is [`Rgb888`]. The thermal palette, the
//! cross-fade arithmetic and the chrome colors below all live in 8-bit-per-channel
//! space so that interpolation never loses precision to the panel format.
//!
//! Conversion to the hardware's native encoding (for example [`Rgb565`] on the
//! touch LCD) happens exactly once, at the [`PixelSink`](crate::sink::PixelSink)
//! boundary, through the `From<Rgb888>` impls that `embedded-graphics` provides.
//!
//! [`Rgb565`]: embedded_graphics::pixelcolor::Rgb565

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Heatmap background before the first frame pair arrives.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Axis labels on the trend graph.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Instrument Chrome
// =============================================================================

/// Panel body color behind the heatmap and around the trend graph.
pub const DARK_BLUE: Rgb888 = Rgb888::new(0x0B, 0x1D, 0x3A);

/// Plot background inside the trend graph body.
pub const GRAPH_BACKGROUND: Rgb888 = Rgb888::new(0x05, 0x0E, 0x1E);

/// Grid lines (temperature divisions and elapsed-minute divisions).
pub const GRID_LINE: Rgb888 = Rgb888::new(0x1E, 0x34, 0x58);

/// Peak temperature trace.
pub const PEAK_TRACE: Rgb888 = Rgb888::new(0xF5, 0xF5, 0xF5);

/// Hot alert threshold trace.
pub const HOT_LIMIT: Rgb888 = Rgb888::new(0xE8, 0x3A, 0x2E);

/// Cold alert threshold trace.
pub const COLD_LIMIT: Rgb888 = Rgb888::new(0x2E, 0x9C, 0xE8);

// =============================================================================
// Thermal Palette Stops
// =============================================================================

/// Color stops of the thermal ("iron") palette as `(r, g, b)`, coldest first.
///
/// The palette table and the continuous temperature-to-color path are both
/// derived from these stops, evenly spaced over the temperature range. Kept as
/// plain tuples so the palette can be built in a `const` context.
pub const THERMAL_STOPS: [(u8, u8, u8); 7] = [
    (0x00, 0x00, 0x10), // near black
    (0x1C, 0x0C, 0x6E), // indigo
    (0x78, 0x0C, 0x8C), // violet
    (0xD0, 0x2C, 0x50), // crimson
    (0xF5, 0x78, 0x10), // orange
    (0xFC, 0xD0, 0x2C), // amber
    (0xFF, 0xFF, 0xE8), // white hot
];
