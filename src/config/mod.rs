//! Display constants and dashboard configuration.
//!
//! A dashboard is described by one [`DashboardConfig`]: canvas size, theme,
//! slot layout and the widgets placed into it.
//!
//! ```json
//! {
//!   "width": 240, "height": 240, "theme": "classic",
//!   "layout": "grid", "rows": 2, "cols": 2,
//!   "widgets": [{ "slot": 0, "type": "gauge", "entity_id": "sensor.cpu" }]
//! }
//! ```

mod layout;
mod widgets;

pub use layout::LayoutConfig;
use serde::{Deserialize, Serialize};
pub use widgets::*;

use crate::error::ConfigError;
use crate::theme::Theme;

// =============================================================================
// Display Configuration
// =============================================================================

/// Default canvas width in pixels (square smart-display panel).
pub const DISPLAY_WIDTH: u32 = 240;

/// Default canvas height in pixels.
pub const DISPLAY_HEIGHT: u32 = 240;

/// Outer padding of slot layouts.
pub const DEFAULT_PADDING: u32 = 8;

/// Gap between slots.
pub const DEFAULT_GAP: u32 = 8;

/// Upper bound on the slots of one layout.
pub const MAX_SLOTS: usize = 64;

// =============================================================================
// Font Scaling
// =============================================================================

/// Widget edge length (shorter side) rendered at font scale 1.0.
pub const SCALE_REFERENCE: f32 = 120.0;

/// Lower bound of the font scale for tiny slots.
pub const MIN_SCALE: f32 = 0.6;

/// Upper bound of the font scale for full-canvas widgets.
pub const MAX_SCALE: f32 = 2.0;

const _: () = assert!(MIN_SCALE < 1.0 && 1.0 < MAX_SCALE);

// =============================================================================
// Dashboard Configuration
// =============================================================================

/// Built-in theme by name, or a fully specified custom theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeChoice {
    Named(String),
    Custom(Theme),
}

impl ThemeChoice {
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        match self {
            Self::Named(name) => Theme::by_name(name).ok_or_else(|| ConfigError::UnknownTheme(name.clone())),
            Self::Custom(theme) => Ok(theme.clone()),
        }
    }
}

impl Default for ThemeChoice {
    fn default() -> Self { Self::Named("classic".into()) }
}

const fn default_width() -> u32 { DISPLAY_WIDTH }

const fn default_height() -> u32 { DISPLAY_HEIGHT }

/// Complete description of one dashboard image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub theme: ThemeChoice,
    #[serde(flatten)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

impl DashboardConfig {
    /// Checks that do not need the slot manager: canvas size, spacing and slot uniqueness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        // Padding on both sides, or a single gap, must leave room for a slot.
        let (padding, gap) = self.layout.spacing();
        let half = self.width.min(self.height) / 2;
        if padding >= half || gap >= half {
            return Err(ConfigError::Spacing {
                padding,
                gap,
                width: self.width,
                height: self.height,
            });
        }
        let mut seen = std::collections::BTreeSet::new();
        for widget in &self.widgets {
            if !seen.insert(widget.slot) {
                return Err(ConfigError::DuplicateSlot { slot: widget.slot });
            }
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            theme: ThemeChoice::default(),
            layout: LayoutConfig::default(),
            widgets: Vec::new(),
        }
    }
}
