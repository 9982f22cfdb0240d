//! Synthetic thermal sensor.
//!
//! Produces a warm ambient field with a hot spot that orbits the frame, plus a
//! little per-pixel flicker so the low-pass filter has something to smooth.

use micromath::F32;
use thermal_common::TemperatureGrid;
use thermal_common::config::{SENSOR_HEIGHT, SENSOR_WIDTH};

/// Background temperature of the scene (degrees Celsius).
const AMBIENT: f32 = 22.0;

/// Hot spot peak above ambient.
const SPOT_RISE: f32 = 42.0;

/// Hot spot spread in squared sensor pixels.
const SPOT_SPREAD: f32 = 10.0;

/// Per-pixel flicker amplitude.
const FLICKER: f32 = 0.8;

/// Animation phase advance per grid.
const PHASE_STEP: f32 = 0.15;

pub struct SyntheticSensor {
    phase: f32,
}

impl SyntheticSensor {
    pub const fn new() -> Self { Self { phase: 0.0 } }

    /// Fill `grid` with the next frame.
    pub fn next_grid(
        &mut self,
        grid: &mut TemperatureGrid,
    ) {
        self.phase += PHASE_STEP;

        let half_w = SENSOR_WIDTH as f32 / 2.0;
        let half_h = SENSOR_HEIGHT as f32 / 2.0;
        let cx = half_w + 0.6 * half_w * F32(self.phase).sin().0;
        let cy = half_h + 0.6 * half_h * F32(self.phase * 1.3).cos().0;
        // Breathing intensity so the peak sample moves on the trend graph
        let rise = SPOT_RISE * (0.75 + 0.25 * F32(self.phase * 0.21).sin().0);

        for (y, row) in grid.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let spot = rise / (1.0 + (dx * dx + dy * dy) / SPOT_SPREAD);
                let flicker = FLICKER * F32((x * 7 + y * 13) as f32 + self.phase * 9.0).sin().0;
                *cell = f64::from(AMBIENT + spot + flicker);
            }
        }
    }
}

/// Hottest cell of a grid.
pub fn peak(grid: &TemperatureGrid) -> f64 { grid.iter().flatten().copied().fold(f64::MIN, f64::max) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_stays_in_plausible_range() {
        let mut sensor = SyntheticSensor::new();
        let mut grid = [[0.0; SENSOR_WIDTH]; SENSOR_HEIGHT];
        for _ in 0..50 {
            sensor.next_grid(&mut grid);
            let hottest = peak(&grid);
            assert!(hottest > f64::from(AMBIENT) + 20.0, "peak {hottest}");
            assert!(hottest < f64::from(AMBIENT + SPOT_RISE + FLICKER) + 0.1);
            assert!(grid.iter().flatten().all(|&t| t > f64::from(AMBIENT - FLICKER) - 0.1));
        }
    }

    #[test]
    fn test_hot_spot_moves() {
        let mut sensor = SyntheticSensor::new();
        let mut grid = [[0.0; SENSOR_WIDTH]; SENSOR_HEIGHT];
        let hottest_cell = |grid: &TemperatureGrid| {
            let mut best = (0, 0);
            for (y, row) in grid.iter().enumerate() {
                for (x, &t) in row.iter().enumerate() {
                    if t > grid[best.0][best.1] {
                        best = (y, x);
                    }
                }
            }
            best
        };

        sensor.next_grid(&mut grid);
        let first = hottest_cell(&grid);
        for _ in 0..10 {
            sensor.next_grid(&mut grid);
        }
        assert_ne!(hottest_cell(&grid), first);
    }

    #[test]
    fn test_peak() {
        let mut grid = [[1.0; SENSOR_WIDTH]; SENSOR_HEIGHT];
        grid[3][4] = 9.5;
        assert_eq!(peak(&grid), 9.5);
    }
}
