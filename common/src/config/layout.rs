//! Display and layout configuration constants.
//!
//! Rectangles are pre-computed at compile time so the per-frame paths never
//! recompute positions.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Touch LCD
// =============================================================================

/// Touch LCD width in pixels.
pub const LCD_WIDTH: u32 = 320;

/// Touch LCD height in pixels.
pub const LCD_HEIGHT: u32 = 240;

/// Heatmap width on the LCD (nearest-neighbor path).
pub const LCD_HEATMAP_WIDTH: usize = 128;

/// Heatmap height on the LCD.
pub const LCD_HEATMAP_HEIGHT: usize = 96;

/// Heatmap rectangle on the LCD, centered horizontally under a 24px status strip.
pub const LCD_HEATMAP_AREA: Rectangle = Rectangle::new(
    Point::new(((LCD_WIDTH - LCD_HEATMAP_WIDTH as u32) / 2) as i32, 24),
    Size::new(LCD_HEATMAP_WIDTH as u32, LCD_HEATMAP_HEIGHT as u32),
);

const _: () = assert!(LCD_HEATMAP_WIDTH as u32 <= LCD_WIDTH);
const _: () = assert!(LCD_HEATMAP_WIDTH % crate::config::SENSOR_WIDTH == 0);
const _: () = assert!(LCD_HEATMAP_HEIGHT as u32 + 24 <= LCD_HEIGHT);

// =============================================================================
// Auxiliary Panel
// =============================================================================

/// Auxiliary panel width in pixels.
pub const AUX_WIDTH: u32 = 640;

/// Auxiliary panel height in pixels.
pub const AUX_HEIGHT: u32 = 400;

/// Animated heatmap width on the auxiliary panel (bilinear path).
pub const AUX_HEATMAP_WIDTH: usize = 160;

/// Animated heatmap height on the auxiliary panel.
pub const AUX_HEATMAP_HEIGHT: usize = 120;

/// Animated heatmap rectangle on the auxiliary panel.
pub const AUX_HEATMAP_AREA: Rectangle = Rectangle::new(
    Point::new(24, 24),
    Size::new(AUX_HEATMAP_WIDTH as u32, AUX_HEATMAP_HEIGHT as u32),
);

/// Trend graph plot body on the auxiliary panel.
///
/// The width is a whole multiple of the time divisions so grid lines land on
/// integer pixels.
pub const AUX_PLOT_AREA: Rectangle = Rectangle::new(Point::new(56, 176), Size::new(560, 180));

const _: () = assert!(24 + AUX_HEATMAP_WIDTH as u32 <= AUX_WIDTH);
const _: () = assert!(24 + AUX_HEATMAP_HEIGHT as u32 <= 176);
const _: () = assert!(56 >= 48 && 56 + 560 + 16 <= AUX_WIDTH);
const _: () = assert!(176 + 180 + 40 <= AUX_HEIGHT);
