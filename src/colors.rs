//! Color constants and helpers for dashboard rendering.
//!
//! # Rgb888 Color Format
//!
//! Dashboards are rendered into a 24-bit `Rgb888` canvas (8 bits per channel).
//! Smart displays accept full-color images, so there is no need for the
//! reduced `Rgb565` format used by SPI panels.
//!
//! Configuration files describe colors as `[r, g, b]` arrays; the [`serde_rgb`]
//! and [`serde_rgb_opt`] modules plug that format into `#[serde(with = ...)]`.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Default canvas background.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Primary text on dark backgrounds.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red. Error / "off" status.
pub const RED: Rgb888 = Rgb888::RED;

// =============================================================================
// Accent Colors
// =============================================================================

/// Default accent for gauges and charts.
pub const CYAN: Rgb888 = Rgb888::new(0, 200, 220);

/// Warm accent, used for temperatures.
pub const ORANGE: Rgb888 = Rgb888::new(255, 140, 0);

/// Bright green, used for "on" status.
pub const LIME: Rgb888 = Rgb888::new(120, 220, 60);

/// Yellow warning color.
pub const YELLOW: Rgb888 = Rgb888::new(255, 210, 0);

/// Gold accent, used for lights.
pub const GOLD: Rgb888 = Rgb888::new(255, 190, 40);

/// Purple accent.
pub const PURPLE: Rgb888 = Rgb888::new(170, 100, 255);

/// Teal accent.
pub const TEAL: Rgb888 = Rgb888::new(0, 160, 140);

/// Blue accent.
pub const BLUE: Rgb888 = Rgb888::new(60, 140, 255);

// =============================================================================
// Neutral Colors
// =============================================================================

/// Secondary text (labels, min/max annotations).
pub const GRAY: Rgb888 = Rgb888::new(140, 140, 150);

/// Gauge tracks and unfilled bar backgrounds.
pub const DARK_GRAY: Rgb888 = Rgb888::new(50, 50, 58);

/// Panel background behind entity widgets.
pub const PANEL: Rgb888 = Rgb888::new(24, 24, 30);

// =============================================================================
// Color Math
// =============================================================================

/// Calculate perceptual luminance (0-255) from an Rgb888 color.
///
/// Uses ITU-R BT.601 weights with the integer approximation
/// `(77*R + 150*G + 29*B) >> 8`.
#[inline]
pub fn luminance(color: Rgb888) -> u32 {
    let r = u32::from(color.r());
    let g = u32::from(color.g());
    let b = u32::from(color.b());
    (r * 77 + g * 150 + b * 29) >> 8
}

/// Pick readable text (WHITE or BLACK) for a given background.
pub fn text_color_for_bg(bg_color: Rgb888) -> Rgb888 { if luminance(bg_color) < 128 { WHITE } else { BLACK } }

/// Linear blend between two colors. `t = 0.0` returns `from`, `t = 1.0` returns `to`.
pub fn blend(
    from: Rgb888,
    to: Rgb888,
    t: f32,
) -> Rgb888 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 { (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8 };
    Rgb888::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Darken a color towards black. `factor = 1.0` keeps the color, `0.0` gives black.
pub fn dim(
    color: Rgb888,
    factor: f32,
) -> Rgb888 {
    blend(BLACK, color, factor)
}

// =============================================================================
// Serde Adapters
// =============================================================================

/// `[r, g, b]` (de)serialization for `Rgb888` fields.
pub mod serde_rgb {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(
        color: &Rgb888,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [color.r(), color.g(), color.b()].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgb888, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
        Ok(Rgb888::new(r, g, b))
    }
}

/// `[r, g, b]` (de)serialization for `Option<Rgb888>` fields.
///
/// Combine with `#[serde(default)]` so a missing key maps to `None`.
pub mod serde_rgb_opt {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(
        color: &Option<Rgb888>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        color.map(|c| [c.r(), c.g(), c.b()]).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Rgb888>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<[u8; 3]>::deserialize(deserializer)?;
        Ok(raw.map(|[r, g, b]| Rgb888::new(r, g, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_color_for_dark_backgrounds() {
        assert_eq!(text_color_for_bg(BLACK), WHITE, "BLACK should give WHITE text");
        assert_eq!(text_color_for_bg(PANEL), WHITE, "PANEL should give WHITE text");
        assert_eq!(text_color_for_bg(DARK_GRAY), WHITE, "DARK_GRAY should give WHITE text");
    }

    #[test]
    fn test_text_color_for_light_backgrounds() {
        assert_eq!(text_color_for_bg(WHITE), BLACK, "WHITE should give BLACK text");
        assert_eq!(text_color_for_bg(YELLOW), BLACK, "YELLOW should give BLACK text");
        assert_eq!(text_color_for_bg(LIME), BLACK, "LIME should give BLACK text");
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(BLACK, WHITE, 0.0), BLACK);
        assert_eq!(blend(BLACK, WHITE, 1.0), WHITE);
        assert_eq!(blend(BLACK, WHITE, 0.5), Rgb888::new(128, 128, 128));
        // Out-of-range factors clamp
        assert_eq!(blend(BLACK, WHITE, 3.0), WHITE);
    }

    #[test]
    fn test_dim_keeps_hue_ordering() {
        let dimmed = dim(CYAN, 0.5);
        assert!(dimmed.g() < CYAN.g());
        assert!(dimmed.b() < CYAN.b());
        assert_eq!(dimmed.r(), 0);
    }
}
