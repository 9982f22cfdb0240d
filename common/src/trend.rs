//! Scrolling peak-temperature trend graph.
//!
//! Plots the last [`WINDOW_MINUTES`] of scalar samples, newest at the right
//! edge, together with the hot and cold alert thresholds that were active when
//! each sample was taken.
//!
//! # Timeline
//!
//! Samples are stamped on the graph's own timeline, which stops while the
//! graph is paused. Pausing assumes the instrument stopped one sample period
//! after the last sample; the first sample after a pause lands exactly there,
//! and later samples advance with the clock from that point. The plot never
//! shows a gap for the time spent paused.
//!
//! # Scrolling
//!
//! Horizontal positions are measured back from the most recent sample, not
//! from the wall clock, so the plot only scrolls when a sample arrives.

use core::fmt::Write;
use core::time::Duration;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::{String, Vec};

use crate::colors::{COLD_LIMIT, DARK_BLUE, GRAPH_BACKGROUND, GRID_LINE, HOT_LIMIT, PEAK_TRACE, WHITE};
use crate::config::{
    GRAPH_TEMP_MAX,
    GRAPH_TEMP_MIN,
    SAMPLE_PERIOD_SECONDS,
    TEMP_DIVISIONS,
    TIME_DIVISIONS,
    WINDOW_MINUTES,
    X_AXIS_GRANULARITY_MINUTES,
};
use crate::history::{DataPoint, SampleHistory};
use crate::styles::{AXIS_LABEL_FONT, AXIS_TITLE_FONT, CENTERED, LEFT_ALIGNED, RIGHT_MIDDLE};

// =============================================================================
// Geometry
// =============================================================================

/// Body margins around the plot: left, top, right, bottom.
const FRAME_MARGINS: (u32, u32, u32, u32) = (48, 20, 16, 40);

/// Corner radius of the graph body.
const FRAME_CORNER_RADIUS: u32 = 5;

/// Gap between the plot's left edge and the temperature labels.
const Y_LABEL_GAP: i32 = 6;

/// Baseline of the time labels below the plot.
const X_LABEL_OFFSET: i32 = 14;

/// Height of the strip below the plot holding the time labels.
const X_LABEL_STRIP_HEIGHT: u32 = 20;

/// Widest time label in characters (minutes up to 9999).
const X_LABEL_MAX_CHARS: u32 = 4;

// =============================================================================
// Pause State
// =============================================================================

/// Pause bookkeeping for the graph timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PauseState {
    pub is_paused: bool,
    /// Timeline position the first sample after a pause is stamped with.
    pub elapsed_seconds_at_pause: f64,
    /// Clock reading when the timeline last resumed.
    pub resume_instant: Duration,
}

impl PauseState {
    /// Paused at the start of the timeline, so the first sample lands at zero.
    pub const fn new() -> Self {
        Self {
            is_paused: true,
            elapsed_seconds_at_pause: 0.0,
            resume_instant: Duration::ZERO,
        }
    }
}

impl Default for PauseState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Projection Output
// =============================================================================

/// Screen-space polylines for one graph draw, oldest point first.
pub struct TrendPaths<const N: usize> {
    pub data: Vec<Point, N>,
    pub hot: Vec<Point, N>,
    pub cold: Vec<Point, N>,
}

/// One elapsed-time division, numbered from the right edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeTick {
    /// Horizontal position in panel coordinates.
    pub x: f64,
    /// Elapsed minutes shown under the tick, if non-negative.
    pub label: Option<i32>,
    /// Whether a vertical grid line is drawn at `x`.
    pub grid_line: bool,
}

/// Time axis layout for the current graph position.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxis {
    pub ticks: Vec<TimeTick, TIME_DIVISIONS>,
    /// Label at the plot's left edge, shown only when the ticks are aligned.
    pub trailing_label: Option<i32>,
}

// =============================================================================
// Trend Graph
// =============================================================================

/// Peak-temperature trend graph holding the last `N` samples.
pub struct TrendGraph<const N: usize> {
    plot: Rectangle,
    history: SampleHistory<N>,
    snapshot: [DataPoint; N],
    pause: PauseState,
    last_update_seconds: f64,
    hot_threshold: f64,
    cold_threshold: f64,
}

impl<const N: usize> TrendGraph<N> {
    /// Create a graph plotting into `plot`.
    pub fn new(
        plot: Rectangle,
        hot_threshold: f64,
        cold_threshold: f64,
    ) -> Self {
        Self {
            plot,
            history: SampleHistory::new(),
            snapshot: [DataPoint::ZERO; N],
            pause: PauseState::new(),
            last_update_seconds: 0.0,
            hot_threshold,
            cold_threshold,
        }
    }

    #[inline]
    pub const fn plot_area(&self) -> Rectangle { self.plot }

    #[inline]
    pub const fn history(&self) -> &SampleHistory<N> { &self.history }

    #[inline]
    pub const fn pause_state(&self) -> PauseState { self.pause }

    #[inline]
    pub const fn is_paused(&self) -> bool { self.pause.is_paused }

    /// Timeline position of the most recent sample.
    #[inline]
    pub const fn last_update_seconds(&self) -> f64 { self.last_update_seconds }

    #[inline]
    pub const fn hot_threshold(&self) -> f64 { self.hot_threshold }

    #[inline]
    pub const fn cold_threshold(&self) -> f64 { self.cold_threshold }

    pub fn set_hot_threshold(
        &mut self,
        celsius: f64,
    ) {
        self.hot_threshold = celsius;
    }

    pub fn set_cold_threshold(
        &mut self,
        celsius: f64,
    ) {
        self.cold_threshold = celsius;
    }

    /// Stop the timeline. The next sample resumes it.
    pub fn pause(&mut self) {
        self.pause.is_paused = true;
        self.pause.elapsed_seconds_at_pause = match self.history.peek_last() {
            Ok(last) => last.elapsed_seconds + SAMPLE_PERIOD_SECONDS,
            Err(_) => 0.0,
        };
    }

    /// Record a sample taken at clock time `now` and return the stored point.
    ///
    /// The value is clamped to the graph's temperature range.
    pub fn update(
        &mut self,
        value: f64,
        now: Duration,
    ) -> DataPoint {
        let elapsed_seconds = if self.pause.is_paused {
            self.pause.is_paused = false;
            self.pause.resume_instant = now;
            self.pause.elapsed_seconds_at_pause
        } else {
            self.pause.elapsed_seconds_at_pause + now.saturating_sub(self.pause.resume_instant).as_secs_f64()
        };

        let point = DataPoint {
            elapsed_seconds,
            value: clamp_to_graph(value),
            threshold_hot: self.hot_threshold,
            threshold_cold: self.cold_threshold,
        };

        self.last_update_seconds = elapsed_seconds;
        self.history.push(point);
        point
    }

    // -------------------------------------------------------------------------
    // Projection
    // -------------------------------------------------------------------------

    /// Horizontal position of a point `minutes_ago` before the newest sample.
    pub fn x_for_minutes_ago(
        &self,
        minutes_ago: f64,
    ) -> i32 {
        let left = f64::from(self.plot.top_left.x);
        let width = f64::from(self.plot.size.width);
        let x = left + width - (minutes_ago / WINDOW_MINUTES) * width + 1.0;
        libm::round(x.clamp(left, left + width - 1.0)) as i32
    }

    /// Vertical position of a temperature.
    pub fn y_for_temperature(
        &self,
        celsius: f64,
    ) -> i32 {
        let top = f64::from(self.plot.top_left.y);
        let height = f64::from(self.plot.size.height);
        let y = top + height * ((celsius - GRAPH_TEMP_MAX) / (GRAPH_TEMP_MIN - GRAPH_TEMP_MAX));
        libm::round(y.clamp(top, top + height - 1.0)) as i32
    }

    /// Project a snapshot (oldest first) into the three polylines.
    ///
    /// Points older than the visible window are skipped.
    pub fn project(
        &self,
        snapshot: &[DataPoint],
    ) -> TrendPaths<N> {
        let mut paths = TrendPaths {
            data: Vec::new(),
            hot: Vec::new(),
            cold: Vec::new(),
        };

        for point in snapshot {
            let minutes_ago = (self.last_update_seconds - point.elapsed_seconds) / 60.0;
            if minutes_ago > WINDOW_MINUTES {
                continue;
            }

            let x = self.x_for_minutes_ago(minutes_ago);
            // Capacity matches the history, so these never overflow.
            paths.data.push(Point::new(x, self.y_for_temperature(point.value))).ok();
            paths.hot.push(Point::new(x, self.y_for_temperature(point.threshold_hot))).ok();
            paths.cold.push(Point::new(x, self.y_for_temperature(point.threshold_cold))).ok();
        }
        paths
    }

    /// Tick positions and labels for the elapsed-time axis.
    pub fn time_axis(&self) -> TimeAxis {
        let left = f64::from(self.plot.top_left.x);
        let width = f64::from(self.plot.size.width);
        let division_width = width / TIME_DIVISIONS as f64;

        let minutes = self.last_update_seconds / 60.0;
        let divisions = minutes / X_AXIS_GRANULARITY_MINUTES;
        let whole = libm::floor(divisions);
        let mut fractional = divisions - whole;
        let rounded = whole * X_AXIS_GRANULARITY_MINUTES;

        // Offsets under one pixel would draw a grid line on the plot edge.
        if fractional < 1.0 / division_width {
            fractional = 0.0;
        }

        let mut ticks = Vec::new();
        for i in 0..TIME_DIVISIONS {
            let label = rounded - i as f64 * X_AXIS_GRANULARITY_MINUTES;
            let tick = TimeTick {
                x: left + width - division_width * (fractional + i as f64),
                label: (label >= 0.0).then_some(label as i32),
                grid_line: !(i == 0 && fractional == 0.0),
            };
            ticks.push(tick).ok();
        }

        let trailing = rounded - WINDOW_MINUTES;
        TimeAxis {
            ticks,
            trailing_label: (fractional == 0.0 && trailing >= 0.0).then_some(trailing as i32),
        }
    }

    /// Panel area a graph draw touches: the plot plus its label margins.
    pub fn refresh_region(&self) -> Rectangle {
        let strip = self.time_label_strip();
        Rectangle::new(
            Point::new(strip.top_left.x, self.plot.top_left.y),
            Size::new(strip.size.width, self.plot.size.height + X_LABEL_STRIP_HEIGHT),
        )
    }

    /// Strip under the plot cleared before the time labels are drawn.
    ///
    /// Labels are centered on their tick and ticks reach both plot edges (the
    /// right one sits a column past the plot), so the strip overhangs each side
    /// by half the widest label plus one. It starts at the top of the label
    /// glyphs to leave the lowest temperature label alone.
    fn time_label_strip(&self) -> Rectangle {
        let glyph_width = AXIS_LABEL_FONT.character_size.width + AXIS_LABEL_FONT.character_spacing;
        let overhang = X_LABEL_MAX_CHARS * glyph_width / 2 + 1;
        let glyph_top = X_LABEL_OFFSET - AXIS_LABEL_FONT.baseline as i32;
        let plot_bottom = self.plot.top_left.y + self.plot.size.height as i32;

        Rectangle::new(
            Point::new(self.plot.top_left.x - overhang as i32, plot_bottom + glyph_top),
            Size::new(self.plot.size.width + 2 * overhang, X_LABEL_STRIP_HEIGHT - glyph_top as u32),
        )
    }

    /// Whole graph body including the axis labels and titles.
    pub fn frame_area(&self) -> Rectangle {
        let (left, top, right, bottom) = FRAME_MARGINS;
        Rectangle::new(
            self.plot.top_left - Point::new(left as i32, top as i32),
            self.plot.size + Size::new(left + right, top + bottom),
        )
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Draw the body, temperature labels, axis titles and the graph area.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        RoundedRectangle::with_equal_corners(
            self.frame_area(),
            Size::new(FRAME_CORNER_RADIUS, FRAME_CORNER_RADIUS),
        )
        .into_styled(PrimitiveStyle::with_fill(D::Color::from(DARK_BLUE)))
        .draw(display)
        .ok();

        self.draw_temperature_labels(display);
        self.draw_titles(display);
        self.draw_graph_area(display);
    }

    /// Redraw only the plot, the time axis and the three lines.
    pub fn draw_graph_area<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        self.draw_plot_body(display);
        self.draw_time_axis(display);
        self.draw_lines(display);
    }

    fn division_height(&self) -> f64 { f64::from(self.plot.size.height) / TEMP_DIVISIONS as f64 }

    fn draw_temperature_labels<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let style = MonoTextStyle::new(AXIS_LABEL_FONT, D::Color::from(WHITE));
        let step = (GRAPH_TEMP_MAX - GRAPH_TEMP_MIN) / TEMP_DIVISIONS as f64;
        let x = self.plot.top_left.x - Y_LABEL_GAP;

        for i in 0..=TEMP_DIVISIONS {
            let mut label: String<6> = String::new();
            write!(label, "{}", (GRAPH_TEMP_MAX - step * i as f64) as i32).ok();
            let y = self.plot.top_left.y + libm::round(self.division_height() * i as f64) as i32;
            Text::with_text_style(&label, Point::new(x, y), style, RIGHT_MIDDLE)
                .draw(display)
                .ok();
        }
    }

    fn draw_titles<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let style = MonoTextStyle::new(AXIS_TITLE_FONT, D::Color::from(WHITE));
        let frame = self.frame_area();
        let plot_bottom = self.plot.top_left.y + self.plot.size.height as i32;

        Text::with_text_style("PEAK TEMP (C)", frame.top_left + Point::new(8, 14), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(
            "ELAPSED MINUTES",
            Point::new(self.plot.center().x, plot_bottom + 34),
            style,
            CENTERED,
        )
        .draw(display)
        .ok();
    }

    fn draw_plot_body<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        self.plot
            .into_styled(PrimitiveStyle::with_fill(D::Color::from(GRAPH_BACKGROUND)))
            .draw(display)
            .ok();

        let grid_style = PrimitiveStyle::with_fill(D::Color::from(GRID_LINE));
        for i in 1..TEMP_DIVISIONS {
            let y = self.plot.top_left.y + libm::round(self.division_height() * i as f64) as i32;
            Rectangle::new(Point::new(self.plot.top_left.x, y), Size::new(self.plot.size.width, 1))
                .into_styled(grid_style)
                .draw(display)
                .ok();
        }
    }

    fn draw_time_axis<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let plot_bottom = self.plot.top_left.y + self.plot.size.height as i32;

        // Clear the old labels
        self.time_label_strip()
            .into_styled(PrimitiveStyle::with_fill(D::Color::from(DARK_BLUE)))
            .draw(display)
            .ok();

        let axis = self.time_axis();
        let label_style = MonoTextStyle::new(AXIS_LABEL_FONT, D::Color::from(WHITE));
        let grid_style = PrimitiveStyle::with_fill(D::Color::from(GRID_LINE));
        let label_y = plot_bottom + X_LABEL_OFFSET;

        let draw_label = |display: &mut D, value: i32, x: f64| {
            let mut text: String<6> = String::new();
            write!(text, "{value}").ok();
            Text::with_text_style(&text, Point::new(libm::round(x) as i32, label_y), label_style, CENTERED)
                .draw(display)
                .ok();
        };

        for tick in &axis.ticks {
            if let Some(value) = tick.label {
                draw_label(display, value, tick.x);
            }
            if tick.grid_line {
                Rectangle::new(
                    Point::new(libm::round(tick.x) as i32, self.plot.top_left.y),
                    Size::new(1, self.plot.size.height),
                )
                .into_styled(grid_style)
                .draw(display)
                .ok();
            }
        }

        if let Some(value) = axis.trailing_label {
            draw_label(display, value, f64::from(self.plot.top_left.x));
        }
    }

    fn draw_lines<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let count = self.history.peek(&mut self.snapshot);
        let paths = self.project(&self.snapshot[..count]);

        for (points, color) in [(&paths.data, PEAK_TRACE), (&paths.hot, HOT_LIMIT), (&paths.cold, COLD_LIMIT)] {
            Polyline::new(points)
                .into_styled(PrimitiveStyle::with_stroke(D::Color::from(color), 1))
                .draw(display)
                .ok();
        }
    }
}

/// Clamp a sample to the plotted temperature range. NaN plots at the bottom.
#[inline]
fn clamp_to_graph(celsius: f64) -> f64 {
    if celsius.is_nan() {
        GRAPH_TEMP_MIN
    } else {
        celsius.clamp(GRAPH_TEMP_MIN, GRAPH_TEMP_MAX)
    }
}

// =============================================================================
// Tests
// =============================================================================
