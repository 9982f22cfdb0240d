//! Shared text styles for graph labels.
//!
//! Alignments are `const` so label drawing never builds style objects per
//! frame. Fonts are exposed as references because the label color has to be
//! converted to each panel's native color type before a
//! [`MonoTextStyle`](embedded_graphics::mono_font::MonoTextStyle) can be made:
//! `MonoTextStyle::new(AXIS_LABEL_FONT, D::Color::from(WHITE))`.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_9_POINT, PROFONT_10_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered on the anchor, baseline at the anchor. Time-axis labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned, baseline at the anchor. Axis titles.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned, vertically centered on the anchor. Temperature-axis labels.
pub const RIGHT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Axis tick labels.
pub const AXIS_LABEL_FONT: &MonoFont = &PROFONT_9_POINT;

/// Axis titles.
pub const AXIS_TITLE_FONT: &MonoFont = &PROFONT_10_POINT;
