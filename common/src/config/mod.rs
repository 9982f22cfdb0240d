//! Compile-time configuration.
//!
//! - `layout`: Panel dimensions and the heatmap / plot rectangles
//! - `sensor`: Thermal sensor grid, low-pass kernel and update cadence
//! - `graph`: Trend graph window, axes and history sizing

pub mod graph;
pub mod layout;
pub mod sensor;

pub use graph::{
    DEFAULT_COLD_THRESHOLD,
    DEFAULT_HOT_THRESHOLD,
    GRAPH_TEMP_MAX,
    GRAPH_TEMP_MIN,
    HISTORY_CAPACITY,
    SAMPLE_PERIOD_SECONDS,
    TEMP_DIVISIONS,
    TIME_DIVISIONS,
    WINDOW_MINUTES,
    X_AXIS_GRANULARITY_MINUTES,
};
pub use layout::{
    AUX_HEATMAP_AREA,
    AUX_HEATMAP_HEIGHT,
    AUX_HEATMAP_WIDTH,
    AUX_HEIGHT,
    AUX_PLOT_AREA,
    AUX_WIDTH,
    LCD_HEATMAP_AREA,
    LCD_HEATMAP_HEIGHT,
    LCD_HEATMAP_WIDTH,
    LCD_HEIGHT,
    LCD_WIDTH,
};
pub use sensor::{EXPECTED_MS_BETWEEN_UPDATES, LOW_PASS_KERNEL, LOW_PASS_TAPS, SENSOR_HEIGHT, SENSOR_WIDTH};
