//! Fade ramp construction.
//!
//! A ramp is a run of colors that starts at a seed and walks toward the
//! ambient background without ever reaching it. One ramp color backs one
//! highlight cell, so the ramp length equals the configured highlight
//! width and the decay timer consumes one color per tick.

use glint_config::{Color, HighlightColor};

/// Build a `steps`-long ramp from `seed` toward `background`.
///
/// The first color is exactly `seed`; each following color moves an even
/// fraction closer to `background`. The background itself is never
/// emitted, so even the last cell stays visible against it.
pub fn color_ramp(seed: Color, background: Color, steps: usize) -> Vec<Color> {
    (0..steps)
        .map(|i| seed.lerp(background, i as f32 / steps as f32))
        .collect()
}

/// Derive a highlight seed from the ambient background.
///
/// Dark backgrounds blend toward white, light backgrounds toward black,
/// with `brightness` controlling how far the blend travels. A brightness
/// of 1.0 yields the full contrast extreme; small values stay close to
/// the background.
pub fn derive_seed(background: Color, brightness: f32) -> Color {
    let extreme = if background.luminance() < 0.5 {
        Color::WHITE
    } else {
        Color::BLACK
    };
    background.lerp(extreme, brightness.clamp(0.0, 1.0))
}

/// Resolve the configured highlight color against an ambient background.
pub fn resolve_seed(color: &HighlightColor, background: Color) -> Color {
    match color {
        HighlightColor::Explicit(c) => *c,
        HighlightColor::Brightness(fraction) => derive_seed(background, *fraction),
    }
}
