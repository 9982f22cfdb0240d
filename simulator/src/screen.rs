//! Desktop window layout.
//!
//! Both instrument panels are composited into one simulator window: the
//! touch LCD on the left with a status block and the event log beneath it,
//! and the auxiliary panel on the right. Panel pixels are copied into the
//! window only for the regions the display context reports as redrawn.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use profont::PROFONT_9_POINT;
use thermal_common::colors::{BLACK, COLD_LIMIT, HOT_LIMIT, WHITE};
use thermal_common::config::{AUX_HEIGHT, AUX_WIDTH, LCD_HEIGHT, LCD_WIDTH};
use thermal_common::{DataPoint, Panel, ThermalDisplay};

use crate::log::DebugLog;
use crate::timing::StdClock;

/// Display context as wired up in the simulator.
pub type SimThermalDisplay = ThermalDisplay<StdClock, SimulatorDisplay<Rgb565>, SimulatorDisplay<Rgb888>>;

const GAP: u32 = 16;

/// Window size holding both panels side by side.
pub const SCREEN_SIZE: Size = Size::new(LCD_WIDTH + GAP + AUX_WIDTH, AUX_HEIGHT);

const LCD_ORIGIN: Point = Point::zero();
const AUX_ORIGIN: Point = Point::new((LCD_WIDTH + GAP) as i32, 0);

const STATUS_AREA: Rectangle = Rectangle::new(
    Point::new(0, LCD_HEIGHT as i32 + 4),
    Size::new(LCD_WIDTH, AUX_HEIGHT - LCD_HEIGHT - 4),
);
const LINE_HEIGHT: i32 = 12;
const TEXT_X: i32 = 6;

const PANEL_BG: Rgb888 = Rgb888::new(0x10, 0x10, 0x14);
const PROMPT_COLOR: Rgb888 = Rgb888::new(0x40, 0xC0, 0x60);
const LOG_TEXT_COLOR: Rgb888 = Rgb888::new(0xF0, 0xA0, 0x30);

/// Copy a redrawn panel region into the window.
pub fn flush_region(
    screen: &mut SimulatorDisplay<Rgb888>,
    display: &SimThermalDisplay,
    panel: Panel,
    area: Rectangle,
) {
    match panel {
        Panel::Lcd => {
            let lcd = display.lcd();
            let area = area.intersection(&lcd.bounding_box());
            let colors = area.points().map(|p| Rgb888::from(lcd.get_pixel(p)));
            screen.fill_contiguous(&area.translate(LCD_ORIGIN), colors).ok();
        }
        Panel::Aux => {
            let aux = display.aux();
            let area = area.intersection(&aux.bounding_box());
            let colors = area.points().map(|p| aux.get_pixel(p));
            screen.fill_contiguous(&area.translate(AUX_ORIGIN), colors).ok();
        }
    }
}

/// Controls, live readings and the event log under the LCD view.
pub fn draw_status(
    screen: &mut SimulatorDisplay<Rgb888>,
    latest: Option<DataPoint>,
    hot_threshold: f64,
    cold_threshold: f64,
    sampling: bool,
    log: &DebugLog,
) {
    STATUS_AREA
        .into_styled(PrimitiveStyle::with_fill(PANEL_BG))
        .draw(screen)
        .ok();

    let white = MonoTextStyle::new(&PROFONT_9_POINT, WHITE);
    let hot = MonoTextStyle::new(&PROFONT_9_POINT, HOT_LIMIT);
    let cold = MonoTextStyle::new(&PROFONT_9_POINT, COLD_LIMIT);
    let mut y = STATUS_AREA.top_left.y + LINE_HEIGHT;

    Text::new("P pause  R reset  Up/Dn hot  Lt/Rt cold", Point::new(TEXT_X, y), white)
        .draw(screen)
        .ok();
    y += LINE_HEIGHT + 4;

    let mut s: String<40> = String::new();
    match latest {
        Some(point) => {
            let _ = write!(s, "PEAK {:.1} C  T+{:.0}s", point.value, point.elapsed_seconds);
        }
        None => {
            let _ = write!(s, "PEAK --");
        }
    }
    if !sampling {
        let _ = write!(s, "  PAUSED");
    }
    Text::new(&s, Point::new(TEXT_X, y), white).draw(screen).ok();

    let mut s: String<16> = String::new();
    let _ = write!(s, "HOT {hot_threshold:.0}");
    Text::new(&s, Point::new(200, y), hot).draw(screen).ok();
    let mut s: String<16> = String::new();
    let _ = write!(s, "COLD {cold_threshold:.0}");
    Text::new(&s, Point::new(256, y), cold).draw(screen).ok();
    y += LINE_HEIGHT + 4;

    draw_log(screen, log, y);
}

fn draw_log(
    screen: &mut SimulatorDisplay<Rgb888>,
    log: &DebugLog,
    mut y: i32,
) {
    let prompt_style = MonoTextStyle::new(&PROFONT_9_POINT, PROMPT_COLOR);
    let text_style = MonoTextStyle::new(&PROFONT_9_POINT, LOG_TEXT_COLOR);

    for line in log.iter() {
        Text::new(">", Point::new(TEXT_X, y), prompt_style).draw(screen).ok();
        Text::new(line, Point::new(TEXT_X + 10, y), text_style).draw(screen).ok();
        y += LINE_HEIGHT;
    }
}

/// Blank the whole window.
pub fn clear(screen: &mut SimulatorDisplay<Rgb888>) { screen.clear(BLACK).ok(); }
