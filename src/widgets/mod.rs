//! Widget builders.
//!
//! A widget turns one entity's state into a [`Component`] tree sized for its
//! slot. Builders never draw: they pick text, colors and structure, and the
//! compositor decides the pixels. Missing or malformed state always produces
//! a placeholder tree (`"--"`, an empty bar, `"No data"`), never an error.
//!
//! | Kind | Module | Tree |
//! |---|---|---|
//! | gauge | [`gauge`] | bar, ring or arc gauge |
//! | chart | [`chart`] | header, sparkline or timeline, min/max footer |
//! | text | [`text`] | optional label over one line of text |
//! | entity | [`entity`] | icon, value and name, optional panel |
//! | status | [`status`] | icon and label left, on/off text right |
//! | progress | [`progress`] | bar gauge toward a target |

pub mod chart;
pub mod entity;
pub mod gauge;
pub mod progress;
pub mod status;
pub mod text;

use embedded_graphics::pixelcolor::Rgb888;
use log::trace;

use crate::component::Component;
use crate::config::{WidgetConfig, WidgetKind};
use crate::render::RenderContext;
use crate::state::{EntityState, HistoryBuffer, StateProvider};
use crate::theme::Theme;
use crate::thresholds::Thresholds;

/// Shown instead of a value when the entity has no usable reading.
pub const PLACEHOLDER: &str = "--";

// =============================================================================
// Widget
// =============================================================================

/// A configured widget plus the history the caller collected for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    config: WidgetConfig,
    history: HistoryBuffer,
}

impl Widget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            history: HistoryBuffer::new(),
        }
    }

    pub fn config(&self) -> &WidgetConfig { &self.config }

    pub fn slot(&self) -> usize { self.config.slot }

    /// Widget kind tag for logs.
    pub const fn kind(&self) -> &'static str { self.config.kind.name() }

    /// Replace the chart history. Other kinds ignore it.
    pub fn set_history(
        &mut self,
        history: HistoryBuffer,
    ) {
        self.history = history;
    }

    pub fn with_history(
        mut self,
        history: impl Into<HistoryBuffer>,
    ) -> Self {
        self.history = history.into();
        self
    }

    pub fn history(&self) -> &HistoryBuffer { &self.history }

    /// Component tree for the slot described by `ctx`.
    pub fn build(
        &self,
        ctx: &RenderContext,
        theme: &Theme,
        states: &dyn StateProvider,
    ) -> Component {
        let input = WidgetContext {
            config: &self.config,
            render: ctx,
            theme,
            states,
            history: &self.history,
        };
        if input.config.entity_id.is_some() && input.state().is_none() {
            trace!("widget {}: entity {:?} has no state", self.kind(), input.config.entity_id);
        }
        match &self.config.kind {
            WidgetKind::Gauge(options) => gauge::build(&input, options),
            WidgetKind::Chart(options) => chart::build(&input, options),
            WidgetKind::Text(options) => text::build(&input, options),
            WidgetKind::Entity(options) => entity::build(&input, options),
            WidgetKind::Status(options) => status::build(&input, options),
            WidgetKind::Progress(options) => progress::build(&input, options),
        }
    }
}

impl From<WidgetConfig> for Widget {
    fn from(config: WidgetConfig) -> Self { Self::new(config) }
}

// =============================================================================
// Build Inputs
// =============================================================================

/// Everything a builder may read during one render.
#[derive(Clone, Copy)]
pub struct WidgetContext<'a> {
    pub config: &'a WidgetConfig,
    pub render: &'a RenderContext,
    pub theme: &'a Theme,
    pub states: &'a dyn StateProvider,
    pub history: &'a HistoryBuffer,
}

impl<'a> WidgetContext<'a> {
    /// State of the widget's own entity.
    pub fn state(&self) -> Option<&'a EntityState> { self.state_of(self.config.entity_id.as_deref()) }

    pub fn state_of(
        &self,
        entity_id: Option<&str>,
    ) -> Option<&'a EntityState> {
        entity_id.and_then(|id| self.states.get(id))
    }

    /// Configured label, else the entity's friendly name, else its id.
    pub fn label(&self) -> String {
        if let Some(label) = &self.config.label {
            return label.clone();
        }
        self.state()
            .and_then(EntityState::friendly_name)
            .or(self.config.entity_id.as_deref())
            .unwrap_or_default()
            .to_owned()
    }

    /// Threshold color for `value`, else the widget color, else the theme accent.
    pub fn accent(
        &self,
        thresholds: &Thresholds,
        value: Option<f32>,
    ) -> Rgb888 {
        thresholds.resolve_or(value, self.config.color, self.theme.accent)
    }

    /// Explicit unit, else the entity's unit, else nothing.
    pub fn unit(
        &self,
        explicit: Option<&str>,
    ) -> String {
        explicit
            .or_else(|| self.state().and_then(EntityState::unit))
            .unwrap_or_default()
            .to_owned()
    }
}

/// `value` rounded to an integer, or [`PLACEHOLDER`], followed by `unit`.
pub fn value_text(
    value: Option<f32>,
    unit: &str,
) -> String {
    match value {
        Some(v) => format!("{v:.0}{unit}"),
        None => format!("{PLACEHOLDER}{unit}"),
    }
}

/// Non-empty text or `None`.
fn non_empty(text: String) -> Option<String> { Some(text).filter(|t| !t.is_empty()) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::config::{GaugeOptions, TextOptions};
    use crate::state::StateSnapshot;
    use crate::thresholds::ColorThreshold;

    fn snapshot() -> StateSnapshot {
        let mut states = StateSnapshot::new();
        states.insert("sensor.cpu", EntityState::new("42").with_unit("%").with_name("CPU Load"));
        states.insert("sensor.bare", EntityState::new("7"));
        states
    }

    fn with_input<R>(
        config: &WidgetConfig,
        f: impl FnOnce(&WidgetContext<'_>) -> R,
    ) -> R {
        let states = snapshot();
        let ctx = RenderContext::new(120, 120);
        let theme = Theme::classic();
        let history = HistoryBuffer::new();
        let input = WidgetContext {
            config,
            render: &ctx,
            theme: &theme,
            states: &states,
            history: &history,
        };
        f(&input)
    }

    #[test]
    fn test_label_resolution_order() {
        let config = WidgetConfig::new(0, GaugeOptions::default()).entity("sensor.cpu");
        assert_eq!(with_input(&config, |i| i.label()), "CPU Load", "friendly name");

        let config = config.label("Processor");
        assert_eq!(with_input(&config, |i| i.label()), "Processor", "configured label wins");

        let config = WidgetConfig::new(0, GaugeOptions::default()).entity("sensor.bare");
        assert_eq!(with_input(&config, |i| i.label()), "sensor.bare", "entity id last");

        let config = WidgetConfig::new(0, TextOptions::fixed("hi"));
        assert_eq!(with_input(&config, |i| i.label()), "");
    }

    #[test]
    fn test_accent_fallback_chain() {
        let thresholds = Thresholds::new(vec![ColorThreshold::new(50.0, colors::RED)]);
        let config = WidgetConfig::new(0, GaugeOptions::default());
        assert_eq!(with_input(&config, |i| i.accent(&thresholds, Some(60.0))), colors::RED);
        assert_eq!(with_input(&config, |i| i.accent(&thresholds, Some(10.0))), Theme::classic().accent);

        let config = config.color(colors::PURPLE);
        assert_eq!(with_input(&config, |i| i.accent(&thresholds, None)), colors::PURPLE);
    }

    #[test]
    fn test_unit_resolution() {
        let config = WidgetConfig::new(0, GaugeOptions::default()).entity("sensor.cpu");
        assert_eq!(with_input(&config, |i| i.unit(None)), "%");
        assert_eq!(with_input(&config, |i| i.unit(Some(" pct"))), " pct");
        let config = WidgetConfig::new(0, GaugeOptions::default()).entity("sensor.missing");
        assert_eq!(with_input(&config, |i| i.unit(None)), "");
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(Some(41.6), "%"), "42%");
        assert_eq!(value_text(None, "°C"), "--°C");
    }

    #[test]
    fn test_widget_dispatches_on_kind() {
        let widget = Widget::new(WidgetConfig::new(0, TextOptions::fixed("Hello")));
        let tree = widget.build(&RenderContext::new(100, 50), &Theme::classic(), &StateSnapshot::new());
        assert_eq!(tree.kind(), "column");
        assert_eq!(widget.kind(), "text");
    }
}
