//! Color themes shared by every widget in a render pass.
//!
//! A [`Theme`] is read-only during rendering and is passed by reference through
//! the whole render chain (slot manager -> widget builder -> compositor).

use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

use crate::colors::{self, serde_rgb};

/// Named bundle of colors used for backgrounds, accents and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Canvas background.
    #[serde(with = "serde_rgb")]
    pub background: Rgb888,
    /// Panel fill behind boxed widgets.
    #[serde(with = "serde_rgb")]
    pub panel: Rgb888,
    /// Fallback accent when neither thresholds nor the widget color apply.
    #[serde(with = "serde_rgb")]
    pub accent: Rgb888,
    /// "On" / healthy status color.
    #[serde(with = "serde_rgb")]
    pub success: Rgb888,
    /// "Off" / failure status color.
    #[serde(with = "serde_rgb")]
    pub error: Rgb888,
    /// Values.
    #[serde(with = "serde_rgb")]
    pub text_primary: Rgb888,
    /// Labels, annotations and placeholders.
    #[serde(with = "serde_rgb")]
    pub text_secondary: Rgb888,
    /// Unfilled gauge tracks and timeline "off" segments.
    #[serde(with = "serde_rgb")]
    pub track: Rgb888,
}

impl Theme {
    /// Dark theme with cyan accents.
    pub fn classic() -> Self {
        Self {
            name: "classic".into(),
            background: colors::BLACK,
            panel: colors::PANEL,
            accent: colors::CYAN,
            success: colors::LIME,
            error: colors::RED,
            text_primary: colors::WHITE,
            text_secondary: colors::GRAY,
            track: colors::DARK_GRAY,
        }
    }

    /// Flat, low-contrast dark theme.
    pub fn minimal() -> Self {
        Self {
            name: "minimal".into(),
            background: Rgb888::new(16, 16, 16),
            panel: Rgb888::new(30, 30, 30),
            accent: colors::WHITE,
            success: Rgb888::new(140, 200, 140),
            error: Rgb888::new(220, 110, 110),
            text_primary: colors::WHITE,
            text_secondary: Rgb888::new(120, 120, 120),
            track: Rgb888::new(45, 45, 45),
        }
    }

    /// Saturated colors on a deep purple background.
    pub fn neon() -> Self {
        Self {
            name: "neon".into(),
            background: Rgb888::new(10, 0, 20),
            panel: Rgb888::new(30, 10, 50),
            accent: Rgb888::new(255, 0, 200),
            success: Rgb888::new(0, 255, 160),
            error: Rgb888::new(255, 40, 80),
            text_primary: colors::WHITE,
            text_secondary: Rgb888::new(160, 120, 200),
            track: Rgb888::new(50, 20, 70),
        }
    }

    /// Light background for daytime use.
    pub fn light() -> Self {
        Self {
            name: "light".into(),
            background: Rgb888::new(240, 240, 244),
            panel: colors::WHITE,
            accent: Rgb888::new(0, 120, 215),
            success: Rgb888::new(30, 150, 60),
            error: Rgb888::new(200, 30, 30),
            text_primary: Rgb888::new(20, 20, 24),
            text_secondary: Rgb888::new(100, 100, 110),
            track: Rgb888::new(205, 205, 212),
        }
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "minimal" => Some(Self::minimal()),
            "neon" => Some(Self::neon()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Names of every built-in theme.
    pub const BUILT_IN: [&'static str; 4] = ["classic", "minimal", "neon", "light"];
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}
