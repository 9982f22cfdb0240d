//! Timing for the simulator loop.
//!
//! These constants use `std::time::Duration`, so they live here rather than in
//! the `no_std` common crate.

use std::time::{Duration, Instant};

use thermal_common::Clock;
use thermal_common::config::{EXPECTED_MS_BETWEEN_UPDATES, SAMPLE_PERIOD_SECONDS};

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Time between two synthetic sensor grids.
pub const GRID_PERIOD: Duration = Duration::from_millis(EXPECTED_MS_BETWEEN_UPDATES as u64);

/// Time between two peak-temperature samples.
pub const SAMPLE_PERIOD: Duration = Duration::from_secs(SAMPLE_PERIOD_SECONDS as u64);

/// Wall clock measured from simulator start.
pub struct StdClock {
    start: Instant,
}

impl StdClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Clock for StdClock {
    fn now(&self) -> Duration { self.start.elapsed() }
}
