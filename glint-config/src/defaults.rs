//! Default value functions for configuration.
//!
//! Free functions used as `#[serde(default = "crate::defaults::...")]`
//! attributes on `Config` fields, and by `Config::default()`.

use crate::color::HighlightColor;

// ── Fade timing ────────────────────────────────────────────────────────────

pub fn fade_duration_secs() -> f32 {
    0.3
}

pub fn fade_delay_secs() -> f32 {
    0.1
}

// ── Highlight shape & color ────────────────────────────────────────────────

pub fn highlight_width() -> usize {
    40
}

pub fn highlight_color() -> HighlightColor {
    HighlightColor::Brightness(0.5)
}

// ── Trigger policy ─────────────────────────────────────────────────────────

pub fn movement_line_threshold() -> usize {
    3
}

// ── Navigation ring ────────────────────────────────────────────────────────

pub fn ring_capacity() -> usize {
    48
}

pub fn bool_true() -> bool {
    true
}
