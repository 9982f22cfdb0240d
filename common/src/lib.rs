//! Display pipeline for a handheld thermographic instrument.
//!
//! Turns a live stream of temperature grids and peak-temperature samples into
//! an animated heatmap and a scrolling trend graph on two displays:
//!
//! - [`dsp`]: Separable low-pass filter and grid resizing
//! - [`color_map`]: Temperature to palette index and color
//! - [`animator`]: Per-pixel cross-fade between two index frames
//! - [`heatmap`]: Double-buffered animated heatmap and the simple LCD heatmap
//! - [`history`]: Fixed-capacity sample ring buffer
//! - [`trend`]: Trend graph timeline, projection and drawing
//! - [`display`]: Context owning both panels and publishing redraw events
//! - [`sink`]: Pixel sink and clock interfaces
//! - [`colors`], [`styles`], [`config`]: Constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and never allocates. All buffers are fixed-size
//! fields sized by const generics. Tests run on the host with `std`.
//!
//! # Logging
//!
//! Enable the `defmt` feature to derive `defmt::Format` on the public data
//! types and log state transitions through `defmt`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animator;
pub mod color_map;
pub mod colors;
pub mod config;
pub mod display;
pub mod dsp;
pub mod heatmap;
pub mod history;
pub mod sink;
pub mod styles;
pub mod trend;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use color_map::{ColorIndex, color_from_index, color_from_temperature, index_from_temperature};
pub use display::{DisplayEvent, Panel, TemperatureGrid, ThermalDisplay};
pub use dsp::Grid;
pub use heatmap::{AnimatedHeatmap, SimpleHeatmap};
pub use history::{DataPoint, EmptyError, SampleHistory};
pub use sink::{Clock, PixelSink};
pub use trend::TrendGraph;
