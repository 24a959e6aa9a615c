//! Typed per-widget configuration.
//!
//! Each widget kind has one options struct with named fields and explicit
//! defaults. In JSON the options sit next to the common widget keys and the
//! kind is selected by the `"type"` tag:
//!
//! ```json
//! { "slot": 0, "type": "gauge", "entity_id": "sensor.cpu", "style": "ring", "max": 100 }
//! ```

use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

use crate::colors::serde_rgb_opt;
use crate::styles::{FontSize, TextAlign};
use crate::thresholds::Thresholds;

// =============================================================================
// Common Widget Configuration
// =============================================================================

/// One widget instance: slot, bound entity, overrides and kind-specific options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub slot: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Overrides the entity's friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Accent color, used when no threshold matches.
    #[serde(default, with = "serde_rgb_opt", skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb888>,
    #[serde(flatten)]
    pub kind: WidgetKind,
}

impl WidgetConfig {
    pub fn new(
        slot: usize,
        kind: impl Into<WidgetKind>,
    ) -> Self {
        Self {
            slot,
            entity_id: None,
            label: None,
            color: None,
            kind: kind.into(),
        }
    }

    pub fn entity(
        mut self,
        entity_id: &str,
    ) -> Self {
        self.entity_id = Some(entity_id.to_owned());
        self
    }

    pub fn label(
        mut self,
        label: &str,
    ) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    pub fn color(
        mut self,
        color: Rgb888,
    ) -> Self {
        self.color = Some(color);
        self
    }
}

/// Widget kind with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetKind {
    Gauge(GaugeOptions),
    Chart(ChartOptions),
    Text(TextOptions),
    Entity(EntityOptions),
    Status(StatusOptions),
    Progress(ProgressOptions),
}

impl WidgetKind {
    /// Tag used in configuration files and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gauge(_) => "gauge",
            Self::Chart(_) => "chart",
            Self::Text(_) => "text",
            Self::Entity(_) => "entity",
            Self::Status(_) => "status",
            Self::Progress(_) => "progress",
        }
    }
}

macro_rules! impl_into_kind {
    ($($options:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$options> for WidgetKind {
                fn from(options: $options) -> Self { Self::$variant(options) }
            }
        )*
    };
}

impl_into_kind! {
    GaugeOptions => Gauge,
    ChartOptions => Chart,
    TextOptions => Text,
    EntityOptions => Entity,
    StatusOptions => Status,
    ProgressOptions => Progress,
}

// =============================================================================
// Gauge
// =============================================================================

/// Gauge presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeStyle {
    #[default]
    Bar,
    Ring,
    Arc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeOptions {
    pub style: GaugeStyle,
    pub min: f32,
    pub max: f32,
    pub icon: Option<String>,
    pub show_value: bool,
    /// Overrides the entity's unit.
    pub unit: Option<String>,
    /// Read the value from this attribute instead of the primary state.
    pub attribute: Option<String>,
    pub color_thresholds: Thresholds,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            style: GaugeStyle::Bar,
            min: 0.0,
            max: 100.0,
            icon: None,
            show_value: true,
            unit: None,
            attribute: None,
            color_thresholds: Thresholds::default(),
        }
    }
}

impl GaugeOptions {
    pub fn styled(style: GaugeStyle) -> Self { Self { style, ..Self::default() } }
}

// =============================================================================
// Chart
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// History window the caller should collect, in hours.
    pub hours: u32,
    pub show_value: bool,
    /// Min/max footer (sparkline mode only).
    pub show_range: bool,
    /// Fill the area under the line.
    pub fill: bool,
    /// Fade the line from a dimmed accent (oldest) to the full accent (newest).
    pub color_gradient: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            hours: 24,
            show_value: true,
            show_range: true,
            fill: false,
            color_gradient: false,
        }
    }
}

// =============================================================================
// Text
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Static text, shown when no entity is bound.
    pub text: String,
    pub size: FontSize,
    pub align: TextAlign,
    /// Overrides the widget's entity.
    pub entity_id: Option<String>,
}

impl TextOptions {
    pub fn fixed(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Entity
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityOptions {
    pub icon: Option<String>,
    pub show_name: bool,
    pub show_unit: bool,
    /// Rounded panel behind the widget.
    pub show_panel: bool,
    pub attribute: Option<String>,
    pub color_thresholds: Thresholds,
}

impl Default for EntityOptions {
    fn default() -> Self {
        Self {
            icon: None,
            show_name: true,
            show_unit: true,
            show_panel: false,
            attribute: None,
            color_thresholds: Thresholds::default(),
        }
    }
}

// =============================================================================
// Status
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusOptions {
    pub icon: Option<String>,
    /// Defaults to the theme's success color.
    #[serde(with = "serde_rgb_opt")]
    pub on_color: Option<Rgb888>,
    /// Defaults to the theme's error color.
    #[serde(with = "serde_rgb_opt")]
    pub off_color: Option<Rgb888>,
    pub on_text: String,
    pub off_text: String,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            icon: None,
            on_color: None,
            off_color: None,
            on_text: "ON".into(),
            off_text: "OFF".into(),
        }
    }
}

// =============================================================================
// Progress
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressOptions {
    /// Goal value; 100% when reached.
    pub target: f32,
    pub unit: Option<String>,
    pub icon: Option<String>,
    /// Show `"{percent}%"` instead of `"{value}/{target}{unit}"`.
    pub show_percent: bool,
    pub color_thresholds: Thresholds,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            target: 100.0,
            unit: None,
            icon: None,
            show_percent: false,
            color_thresholds: Thresholds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn test_gauge_defaults_from_minimal_json() {
        let json = r#"{"slot": 1, "type": "gauge", "entity_id": "sensor.cpu"}"#;
        let config: WidgetConfig = serde_json::from_str(json).expect("valid gauge");
        assert_eq!(config.slot, 1);
        assert_eq!(config.entity_id.as_deref(), Some("sensor.cpu"));
        let WidgetKind::Gauge(gauge) = config.kind else {
            panic!("expected gauge, got {:?}", config.kind);
        };
        assert_eq!(gauge, GaugeOptions::default());
        assert_eq!(gauge.max, 100.0);
        assert!(gauge.show_value);
    }

    #[test]
    fn test_gauge_options_from_json() {
        let json = r#"{
            "slot": 0, "type": "gauge", "style": "arc", "min": -20, "max": 40,
            "unit": "°C", "attribute": "current_temperature", "color": [255, 0, 255],
            "color_thresholds": [{"value": 30, "color": [255, 0, 0]}, {"value": 0, "color": [0, 0, 255]}]
        }"#;
        let config: WidgetConfig = serde_json::from_str(json).expect("valid gauge");
        assert_eq!(config.color, Some(Rgb888::new(255, 0, 255)));
        let WidgetKind::Gauge(gauge) = config.kind else {
            panic!("expected gauge");
        };
        assert_eq!(gauge.style, GaugeStyle::Arc);
        assert_eq!(gauge.min, -20.0);
        assert_eq!(gauge.attribute.as_deref(), Some("current_temperature"));
        assert_eq!(gauge.color_thresholds.steps()[0].value, 0.0, "thresholds sorted at load");
    }

    #[test]
    fn test_chart_defaults() {
        let config: WidgetConfig = serde_json::from_str(r#"{"slot": 0, "type": "chart"}"#).expect("valid chart");
        let WidgetKind::Chart(chart) = config.kind else {
            panic!("expected chart");
        };
        assert_eq!(chart.hours, 24);
        assert!(chart.show_value && chart.show_range);
        assert!(!chart.fill && !chart.color_gradient);
    }

    #[test]
    fn test_text_and_status_options() {
        let text: WidgetConfig =
            serde_json::from_str(r#"{"slot": 0, "type": "text", "text": "Hello", "size": "xlarge", "align": "left"}"#)
                .expect("valid text");
        assert_eq!(
            text.kind,
            WidgetKind::Text(TextOptions {
                text: "Hello".into(),
                size: FontSize::XLarge,
                align: TextAlign::Left,
                entity_id: None,
            })
        );

        let status: WidgetConfig =
            serde_json::from_str(r#"{"slot": 2, "type": "status", "on_text": "OPEN", "on_color": [0, 255, 0]}"#)
                .expect("valid status");
        let WidgetKind::Status(status) = status.kind else {
            panic!("expected status");
        };
        assert_eq!(status.on_text, "OPEN");
        assert_eq!(status.off_text, "OFF");
        assert_eq!(status.on_color, Some(Rgb888::new(0, 255, 0)));
        assert_eq!(status.off_color, None);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_str::<WidgetConfig>(r#"{"slot": 0, "type": "weather"}"#);
        assert!(result.is_err(), "unknown widget type must fail to parse");
    }

    #[test]
    fn test_builder_round_trip() {
        let config = WidgetConfig::new(3, GaugeOptions::styled(GaugeStyle::Ring))
            .entity("sensor.battery")
            .label("Battery")
            .color(colors::LIME);
        let json = serde_json::to_string(&config).expect("serializable");
        let back: WidgetConfig = serde_json::from_str(&json).expect("parsable");
        assert_eq!(back, config);
        assert_eq!(back.kind.name(), "gauge");
    }
}
