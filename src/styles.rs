//! Font-size tags, the monospace font ladder and text placement styles.
//!
//! Widgets never reference a concrete font. They ask for a [`FontSize`] tag and
//! the render context resolves it to the largest font of the ladder whose glyph
//! height fits the scaled target height. Because every font in the ladder is
//! monospaced, text measurement is exact and deterministic:
//! `width = chars * glyph_width + (chars - 1) * spacing`.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::iso_8859_1::{FONT_4X6, FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X15, FONT_10X20};
use embedded_graphics::prelude::Size;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Ladder
// =============================================================================

/// Every font available to widgets. Selection is by glyph height, so the
/// order here does not matter. The Latin-1 variants cover units like `°C`.
const FONT_LADDER: [&MonoFont<'static>; 10] = [
    &FONT_4X6,
    &FONT_5X8,
    &FONT_6X10,
    &FONT_7X13,
    &PROFONT_12_POINT,
    &FONT_9X15,
    &PROFONT_14_POINT,
    &FONT_10X20,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Smallest font; used when nothing in the ladder fits.
pub const SMALLEST_FONT: &MonoFont<'static> = &FONT_4X6;

/// Suffix appended to truncated text.
pub const ELLIPSIS: &str = "..";

/// Maximum characters kept when fitting text into a box.
pub const MAX_FITTED_CHARS: usize = 64;

/// Byte capacity of fitted text: every kept character may be up to 4 bytes.
pub const MAX_FITTED_BYTES: usize = 4 * MAX_FITTED_CHARS;

// =============================================================================
// Font Size Tags
// =============================================================================

/// Closed set of font size tags used by widgets and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Tiny,
    Small,
    #[default]
    Regular,
    Medium,
    Large,
    XLarge,
    Huge,
}

impl FontSize {
    /// Target glyph height in pixels at a render scale of 1.0.
    pub const fn base_height(self) -> u32 {
        match self {
            Self::Tiny => 8,
            Self::Small => 10,
            Self::Regular => 13,
            Self::Medium => 15,
            Self::Large => 20,
            Self::XLarge => 24,
            Self::Huge => 30,
        }
    }

    /// Target glyph height for a render scale.
    pub fn scaled_height(
        self,
        scale: f32,
    ) -> u32 {
        ((self.base_height() as f32 * scale).round() as u32).max(1)
    }
}

/// Largest ladder font whose glyph height is at most `max_height`.
pub fn largest_font_within(max_height: u32) -> Option<&'static MonoFont<'static>> {
    FONT_LADDER
        .iter()
        .copied()
        .filter(|font| font.character_size.height <= max_height)
        .max_by_key(|font| (font.character_size.height, font.character_size.width))
}

/// Like [`largest_font_within`] but never fails: falls back to [`SMALLEST_FONT`].
pub fn font_for_height(target_height: u32) -> &'static MonoFont<'static> {
    largest_font_within(target_height).unwrap_or(SMALLEST_FONT)
}

// =============================================================================
// Text Measurement
// =============================================================================

/// Rendered width of `text` in `font`.
pub fn text_width(
    text: &str,
    font: &MonoFont<'_>,
) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// Rendered size of `text` in `font`. Empty text measures zero.
pub fn text_size(
    text: &str,
    font: &MonoFont<'_>,
) -> Size {
    let width = text_width(text, font);
    if width == 0 { Size::zero() } else { Size::new(width, font.character_size.height) }
}

/// Number of characters of `font` that fit into `max_width`.
pub fn chars_within(
    font: &MonoFont<'_>,
    max_width: u32,
) -> usize {
    let advance = font.character_size.width + font.character_spacing;
    if advance == 0 || max_width < font.character_size.width {
        return 0;
    }
    // n glyphs need n*advance - spacing pixels
    ((max_width + font.character_spacing) / advance) as usize
}

/// Fit `text` into `max_width`, replacing the tail with [`ELLIPSIS`] when it overflows.
pub fn fit_text(
    text: &str,
    font: &MonoFont<'_>,
    max_width: u32,
) -> heapless::String<MAX_FITTED_BYTES> {
    let mut fitted: heapless::String<MAX_FITTED_BYTES> = heapless::String::new();
    let available = chars_within(font, max_width).min(MAX_FITTED_CHARS);
    let total = text.chars().count();

    let (keep, suffix) = if total <= available {
        (total, "")
    } else if available > ELLIPSIS.len() {
        (available - ELLIPSIS.len(), ELLIPSIS)
    } else {
        (available, "")
    };
    // At most MAX_FITTED_CHARS chars of up to 4 bytes each, so pushes fit
    for c in text.chars().take(keep) {
        if fitted.push(c).is_err() {
            break;
        }
    }
    fitted.push_str(suffix).ok();
    fitted
}

/// Truncate `text` to `max_chars` characters, ending with [`ELLIPSIS`] when cut.
pub fn ellipsize(
    text: &str,
    max_chars: usize,
) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

// =============================================================================
// Text Placement
// =============================================================================

/// Horizontal alignment of a text node inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Point of the text's bounding box that sits on the draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    LeftTop,
    CenterTop,
    RightTop,
    LeftMiddle,
    Center,
    RightMiddle,
    LeftBottom,
    CenterBottom,
    RightBottom,
}

impl Anchor {
    /// `embedded-graphics` text style for this anchor.
    pub const fn text_style(self) -> TextStyle {
        let (alignment, baseline) = match self {
            Self::LeftTop => (Alignment::Left, Baseline::Top),
            Self::CenterTop => (Alignment::Center, Baseline::Top),
            Self::RightTop => (Alignment::Right, Baseline::Top),
            Self::LeftMiddle => (Alignment::Left, Baseline::Middle),
            Self::Center => (Alignment::Center, Baseline::Middle),
            Self::RightMiddle => (Alignment::Right, Baseline::Middle),
            Self::LeftBottom => (Alignment::Left, Baseline::Bottom),
            Self::CenterBottom => (Alignment::Center, Baseline::Bottom),
            Self::RightBottom => (Alignment::Right, Baseline::Bottom),
        };
        TextStyleBuilder::new().alignment(alignment).baseline(baseline).build()
    }
}

impl From<TextAlign> for Anchor {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => Self::LeftMiddle,
            TextAlign::Center => Self::Center,
            TextAlign::Right => Self::RightMiddle,
        }
    }
}
