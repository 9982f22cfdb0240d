//! Trend graph configuration.
//!
//! The graph plots one peak-temperature sample per second over a sliding
//! window, with the hot and cold alert thresholds that were active when each
//! sample was taken.

/// Nominal seconds between two scalar samples.
///
/// Pausing assumes the instrument stopped one period after the last sample.
pub const SAMPLE_PERIOD_SECONDS: f64 = 1.0;

/// Minutes of history visible across the plot width.
pub const WINDOW_MINUTES: f64 = 10.0;

/// Minutes between two elapsed-time grid lines.
pub const X_AXIS_GRANULARITY_MINUTES: f64 = 1.0;

/// Number of elapsed-time divisions across the plot.
pub const TIME_DIVISIONS: usize = 10;

/// Hottest temperature on the Y axis (top edge).
pub const GRAPH_TEMP_MAX: f64 = 70.0;

/// Coldest temperature on the Y axis (bottom edge).
pub const GRAPH_TEMP_MIN: f64 = -20.0;

/// Number of 10 degree divisions on the Y axis.
pub const TEMP_DIVISIONS: usize = 9;

/// Hot alert threshold before the operator sets one (degrees Celsius).
pub const DEFAULT_HOT_THRESHOLD: f64 = 40.0;

/// Cold alert threshold before the operator sets one (degrees Celsius).
pub const DEFAULT_COLD_THRESHOLD: f64 = 10.0;

/// Ring buffer capacity: one window of samples plus a minute of slack, so the
/// oldest visible point is never evicted before it scrolls off the plot.
pub const HISTORY_CAPACITY: usize = 660;

const _: () = assert!(GRAPH_TEMP_MIN < GRAPH_TEMP_MAX);
const _: () = assert!(DEFAULT_COLD_THRESHOLD < DEFAULT_HOT_THRESHOLD);
const _: () = assert!(TIME_DIVISIONS as f64 * X_AXIS_GRANULARITY_MINUTES == WINDOW_MINUTES);
const _: () = assert!((GRAPH_TEMP_MAX - GRAPH_TEMP_MIN) / TEMP_DIVISIONS as f64 == 10.0);
const _: () = assert!(HISTORY_CAPACITY as f64 >= WINDOW_MINUTES * 60.0 / SAMPLE_PERIOD_SECONDS);
