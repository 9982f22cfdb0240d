//! Thermal display simulator for desktop.
//!
//! Runs the instrument display pipeline against two simulated panels (an
//! RGB565 touch LCD and an RGB888 auxiliary panel) fed by a synthetic sensor,
//! and shows both in one embedded-graphics-simulator window.
//!
//! # Keys
//!
//! - `P`: pause / resume peak sampling
//! - `R`: reset both heatmaps
//! - `Up` / `Down`: raise / lower the hot alert threshold
//! - `Left` / `Right`: lower / raise the cold alert threshold
//! - `Q` / `Esc`: quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod log;
mod screen;
mod sensor;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use thermal_common::config::{
    AUX_HEIGHT,
    AUX_WIDTH,
    DEFAULT_COLD_THRESHOLD,
    DEFAULT_HOT_THRESHOLD,
    GRAPH_TEMP_MAX,
    GRAPH_TEMP_MIN,
    LCD_HEIGHT,
    LCD_WIDTH,
    SENSOR_HEIGHT,
    SENSOR_WIDTH,
};
use thermal_common::{DataPoint, DisplayEvent, TemperatureGrid, ThermalDisplay};

use crate::log::DebugLog;
use crate::screen::{SCREEN_SIZE, SimThermalDisplay, draw_status, flush_region};
use crate::sensor::{SyntheticSensor, peak};
use crate::timing::{FRAME_TIME, GRID_PERIOD, SAMPLE_PERIOD, StdClock};

/// Threshold step per key press (degrees Celsius).
const THRESHOLD_STEP: f64 = 1.0;

/// Minimum distance kept between the hot and cold thresholds.
const THRESHOLD_GAP: f64 = 2.0;

fn main() {
    let mut screen: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(SCREEN_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Thermal Display Sim", &output_settings);

    let lcd: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(LCD_WIDTH, LCD_HEIGHT));
    let aux: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(AUX_WIDTH, AUX_HEIGHT));
    let mut display = ThermalDisplay::new(StdClock::new(), lcd, aux);

    let mut log = DebugLog::new();
    let mut sensor = SyntheticSensor::new();
    let mut grid: TemperatureGrid = [[0.0; SENSOR_WIDTH]; SENSOR_HEIGHT];

    let mut hot_threshold = DEFAULT_HOT_THRESHOLD;
    let mut cold_threshold = DEFAULT_COLD_THRESHOLD;
    let mut sampling = true;
    let mut latest: Option<DataPoint> = None;

    screen::clear(&mut screen);
    display.draw_chrome();
    flush_events(&mut screen, &mut display, &mut latest);
    log.push("Started");

    let mut last_grid: Option<Instant> = None;
    let mut last_sample: Option<Instant> = None;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    match keycode {
                        Keycode::Q | Keycode::Escape => return,
                        Keycode::P if !repeat => {
                            sampling = !sampling;
                            if sampling {
                                log.push("Sampling resumed");
                                // Sample right away so the timeline resumes now
                                last_sample = None;
                            } else {
                                display.pause();
                                let paused_at = display.trend().pause_state().elapsed_seconds_at_pause;
                                log.push_fmt(format_args!("Paused at T+{paused_at:.0}s"));
                            }
                        }
                        Keycode::R if !repeat => {
                            display.reset();
                            log.push("Heatmaps reset");
                        }
                        Keycode::Up | Keycode::Down => {
                            let step = if keycode == Keycode::Up { THRESHOLD_STEP } else { -THRESHOLD_STEP };
                            hot_threshold = (hot_threshold + step).clamp(cold_threshold + THRESHOLD_GAP, GRAPH_TEMP_MAX);
                            display.set_hot_threshold(hot_threshold);
                            log.push_fmt(format_args!("Hot limit: {hot_threshold:.0} C"));
                        }
                        Keycode::Left | Keycode::Right => {
                            let step = if keycode == Keycode::Right { THRESHOLD_STEP } else { -THRESHOLD_STEP };
                            cold_threshold = (cold_threshold + step).clamp(GRAPH_TEMP_MIN, hot_threshold - THRESHOLD_GAP);
                            display.set_cold_threshold(cold_threshold);
                            log.push_fmt(format_args!("Cold limit: {cold_threshold:.0} C"));
                        }
                        _ => {}
                    }
                    flush_events(&mut screen, &mut display, &mut latest);
                }
                _ => {}
            }
        }

        // Sensor cadence
        if last_grid.is_none_or(|at| at.elapsed() >= GRID_PERIOD) {
            sensor.next_grid(&mut grid);
            display.on_new_grid(&grid);
            last_grid = Some(Instant::now());
            flush_events(&mut screen, &mut display, &mut latest);
        }

        if sampling && last_sample.is_none_or(|at| at.elapsed() >= SAMPLE_PERIOD) {
            display.on_new_scalar_sample(peak(&grid), hot_threshold, cold_threshold);
            last_sample = Some(Instant::now());
            flush_events(&mut screen, &mut display, &mut latest);
        }

        // Display cadence
        display.on_animation_tick();
        flush_events(&mut screen, &mut display, &mut latest);

        draw_status(&mut screen, latest, hot_threshold, cold_threshold, sampling, &log);
        window.update(&screen);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

/// Drain the context's events, copying redrawn regions into the window.
fn flush_events(
    screen: &mut SimulatorDisplay<Rgb888>,
    display: &mut SimThermalDisplay,
    latest: &mut Option<DataPoint>,
) {
    while let Some(event) = display.poll_event() {
        match event {
            DisplayEvent::Redraw { panel, area } => flush_region(screen, display, panel, area),
            DisplayEvent::Temperature(point) => *latest = Some(point),
        }
    }
}
