//! Instrument display context.
//!
//! [`ThermalDisplay`] owns both panels, both heatmaps, the trend graph and
//! the clock. The host forwards its two cadences into it:
//!
//! - sensor arrival: [`on_new_grid`](ThermalDisplay::on_new_grid) and
//!   [`on_new_scalar_sample`](ThermalDisplay::on_new_scalar_sample)
//! - panel refresh: [`on_animation_tick`](ThermalDisplay::on_animation_tick)
//!
//! Every event takes `&mut self`, so grid arrival and animation ticks can
//! never interleave. A host that receives them on different threads wraps the
//! context in one mutex.
//!
//! # Events
//!
//! Whatever the context draws is reported as a [`DisplayEvent`] so the host
//! can flush just that region to the panel. Events wait in a bounded queue
//! drained with [`poll_event`](ThermalDisplay::poll_event); when the host
//! falls behind, the oldest event is dropped.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Deque;

use crate::color_map::{BACKGROUND_INDEX, color_from_index};
use crate::colors::DARK_BLUE;
use crate::config::layout::{AUX_HEATMAP_AREA, AUX_PLOT_AREA, LCD_HEATMAP_AREA};
use crate::config::{
    AUX_HEATMAP_HEIGHT,
    AUX_HEATMAP_WIDTH,
    DEFAULT_COLD_THRESHOLD,
    DEFAULT_HOT_THRESHOLD,
    EXPECTED_MS_BETWEEN_UPDATES,
    HISTORY_CAPACITY,
    LCD_HEATMAP_HEIGHT,
    LCD_HEATMAP_WIDTH,
    LOW_PASS_KERNEL,
    LOW_PASS_TAPS,
    SENSOR_HEIGHT,
    SENSOR_WIDTH,
};
use crate::dsp::Grid;
use crate::heatmap::{AnimatedHeatmap, SimpleHeatmap};
use crate::history::DataPoint;
use crate::sink::{Clock, PixelSink};
use crate::trend::TrendGraph;

/// Pending events kept before the oldest is dropped.
pub const EVENT_QUEUE_CAPACITY: usize = 8;

/// Raw sensor grid.
pub type TemperatureGrid = Grid<SENSOR_HEIGHT, SENSOR_WIDTH>;

/// Nearest-neighbor heatmap on the touch LCD.
pub type LcdHeatmap = SimpleHeatmap<SENSOR_HEIGHT, SENSOR_WIDTH, LCD_HEATMAP_HEIGHT, LCD_HEATMAP_WIDTH>;

/// Animated heatmap on the auxiliary panel.
pub type AuxHeatmap = AnimatedHeatmap<SENSOR_HEIGHT, SENSOR_WIDTH, AUX_HEATMAP_HEIGHT, AUX_HEATMAP_WIDTH, LOW_PASS_TAPS>;

/// Peak temperature trend on the auxiliary panel.
pub type PeakTrendGraph = TrendGraph<HISTORY_CAPACITY>;

/// Physical display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Panel {
    /// Small touch LCD.
    Lcd,
    /// Larger auxiliary panel.
    Aux,
}

/// Outward notification from the display context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayEvent {
    /// `area` of `panel` changed and should be flushed.
    Redraw { panel: Panel, area: Rectangle },
    /// A scalar sample was added to the trend graph.
    Temperature(DataPoint),
}

/// Display pipeline for both panels.
pub struct ThermalDisplay<K, L, A> {
    clock: K,
    lcd: L,
    aux: A,
    lcd_heatmap: LcdHeatmap,
    aux_heatmap: AuxHeatmap,
    trend: PeakTrendGraph,
    events: Deque<DisplayEvent, EVENT_QUEUE_CAPACITY>,
}

impl<K, L, A> ThermalDisplay<K, L, A>
where
    K: Clock,
    L: PixelSink,
    L::Color: From<Rgb888>,
    A: DrawTarget,
    A::Color: From<Rgb888>,
{
    /// Create the context. Nothing is drawn until [`draw_chrome`](Self::draw_chrome).
    pub fn new(
        clock: K,
        lcd: L,
        aux: A,
    ) -> Self {
        Self {
            clock,
            lcd,
            aux,
            lcd_heatmap: LcdHeatmap::new(LCD_HEATMAP_AREA.top_left, DARK_BLUE),
            aux_heatmap: AuxHeatmap::new(AUX_HEATMAP_AREA.top_left, LOW_PASS_KERNEL, EXPECTED_MS_BETWEEN_UPDATES),
            trend: PeakTrendGraph::new(AUX_PLOT_AREA, DEFAULT_HOT_THRESHOLD, DEFAULT_COLD_THRESHOLD),
            events: Deque::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn clock(&self) -> &K { &self.clock }

    #[inline]
    pub fn lcd(&self) -> &L { &self.lcd }

    #[inline]
    pub fn aux(&self) -> &A { &self.aux }

    #[inline]
    pub fn lcd_heatmap(&self) -> &LcdHeatmap { &self.lcd_heatmap }

    #[inline]
    pub fn aux_heatmap(&self) -> &AuxHeatmap { &self.aux_heatmap }

    #[inline]
    pub fn trend(&self) -> &PeakTrendGraph { &self.trend }

    // -------------------------------------------------------------------------
    // Events in
    // -------------------------------------------------------------------------

    /// Paint both heatmap backgrounds and the whole trend graph.
    pub fn draw_chrome(&mut self) {
        self.lcd_heatmap.reset(&mut self.lcd);
        self.push_redraw(Panel::Lcd, self.lcd_heatmap.area());

        self.aux_heatmap
            .paint_background(&mut self.aux, color_from_index(BACKGROUND_INDEX));
        self.push_redraw(Panel::Aux, self.aux_heatmap.area());

        self.trend.draw(&mut self.aux);
        self.push_redraw(Panel::Aux, self.trend.frame_area());
    }

    /// Accept a sensor grid.
    ///
    /// The LCD heatmap is redrawn right away. The animated heatmap only
    /// updates its frames; the next tick draws it.
    pub fn on_new_grid(
        &mut self,
        grid: &TemperatureGrid,
    ) {
        let now = self.clock.now();
        self.aux_heatmap.on_new_grid(grid, now);

        self.lcd_heatmap.draw(grid, &mut self.lcd);
        self.push_redraw(Panel::Lcd, self.lcd_heatmap.area());

        #[cfg(feature = "defmt")]
        defmt::trace!("grid #{} at {} ms", self.aux_heatmap.frames_received(), now.as_millis() as u64);
    }

    /// Draw the next animated heatmap frame. Returns whether one was drawn.
    pub fn on_animation_tick(&mut self) -> bool {
        let now = self.clock.now();
        let drawn = self.aux_heatmap.on_animation_tick(now, &mut self.aux);
        if drawn {
            self.push_redraw(Panel::Aux, self.aux_heatmap.area());
        }
        drawn
    }

    /// Record a peak temperature with the thresholds active right now.
    pub fn on_new_scalar_sample(
        &mut self,
        value: f64,
        hot_threshold: f64,
        cold_threshold: f64,
    ) -> DataPoint {
        self.trend.set_hot_threshold(hot_threshold);
        self.trend.set_cold_threshold(cold_threshold);
        let point = self.trend.update(value, self.clock.now());

        self.push_event(DisplayEvent::Temperature(point));
        self.redraw_graph();
        point
    }

    /// Pause the trend timeline until the next scalar sample.
    pub fn pause(&mut self) {
        self.trend.pause();

        #[cfg(feature = "defmt")]
        defmt::debug!("trend paused at {} s", self.trend.pause_state().elapsed_seconds_at_pause);
    }

    /// Clear both heatmaps. The animated heatmap waits for two fresh grids.
    pub fn reset(&mut self) {
        self.aux_heatmap.reset();
        self.aux_heatmap
            .paint_background(&mut self.aux, color_from_index(BACKGROUND_INDEX));
        self.push_redraw(Panel::Aux, self.aux_heatmap.area());

        self.lcd_heatmap.reset(&mut self.lcd);
        self.push_redraw(Panel::Lcd, self.lcd_heatmap.area());

        #[cfg(feature = "defmt")]
        defmt::debug!("heatmaps reset");
    }

    pub fn set_hot_threshold(
        &mut self,
        celsius: f64,
    ) {
        self.trend.set_hot_threshold(celsius);
        self.redraw_graph();
    }

    pub fn set_cold_threshold(
        &mut self,
        celsius: f64,
    ) {
        self.trend.set_cold_threshold(celsius);
        self.redraw_graph();
    }

    // -------------------------------------------------------------------------
    // Events out
    // -------------------------------------------------------------------------

    /// Oldest pending event, if any.
    pub fn poll_event(&mut self) -> Option<DisplayEvent> { self.events.pop_front() }

    fn redraw_graph(&mut self) {
        self.trend.draw_graph_area(&mut self.aux);
        self.push_redraw(Panel::Aux, self.trend.refresh_region());
    }

    fn push_redraw(
        &mut self,
        panel: Panel,
        area: Rectangle,
    ) {
        self.push_event(DisplayEvent::Redraw { panel, area });
    }

    fn push_event(
        &mut self,
        event: DisplayEvent,
    ) {
        if self.events.is_full() {
            self.events.pop_front();

            #[cfg(feature = "defmt")]
            defmt::warn!("display event queue full, dropped oldest");
        }
        self.events.push_back(event).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
