//! Color types shared by the configuration surface and the fade ramp.

use serde::{Deserialize, Serialize};

/// A color in RGB format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear interpolation toward `other` by `t` in `[0, 1]`, per channel.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Relative luminance in `[0, 1]` using ITU-R BT.601 channel weights.
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }
}

/// Highlight seed color setting.
///
/// Either an explicit RGB value, or a brightness fraction in `(0, 1]` used
/// to derive a seed from the ambient background at blink time (dark
/// backgrounds fade from a white-leaning seed, light ones from
/// black-leaning).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum HighlightColor {
    /// Derive the seed from the background, scaled by this fraction.
    Brightness(f32),
    /// Use this exact color as the ramp seed.
    Explicit(Color),
}
