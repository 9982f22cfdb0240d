//! Thermal sensor configuration.

/// Sensor grid rows.
pub const SENSOR_HEIGHT: usize = 24;

/// Sensor grid columns.
pub const SENSOR_WIDTH: usize = 32;

/// Nominal time between two sensor grids, in milliseconds.
///
/// The animated heatmap reaches the newest frame when this much time has
/// elapsed since it arrived.
pub const EXPECTED_MS_BETWEEN_UPDATES: u32 = 500;

/// Number of taps in [`LOW_PASS_KERNEL`].
pub const LOW_PASS_TAPS: usize = 5;

/// Gaussian-like low-pass kernel applied along both axes before resizing.
pub const LOW_PASS_KERNEL: [f64; LOW_PASS_TAPS] = [0.055_045_87, 0.244_036_7, 0.401_834_86, 0.244_036_7, 0.055_045_87];

const _: () = assert!(LOW_PASS_TAPS % 2 == 1);
const _: () = assert!(EXPECTED_MS_BETWEEN_UPDATES > 0);
