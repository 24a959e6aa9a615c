//! Gauge widget: one numeric reading as a bar, ring or arc.

use super::{WidgetContext, non_empty, value_text};
use crate::component::{BarGauge, Component, Gauge};
use crate::config::{GaugeOptions, GaugeStyle};
use crate::geometry;

pub fn build(
    input: &WidgetContext<'_>,
    options: &GaugeOptions,
) -> Component {
    let value = input.state().and_then(|s| s.numeric(options.attribute.as_deref()));
    let percent = value.map_or(0.0, |v| geometry::percent_of(v, options.min, options.max));
    let color = input.accent(&options.color_thresholds, value);
    let text = if options.show_value {
        value_text(value, &input.unit(options.unit.as_deref()))
    } else {
        String::new()
    };
    let label = non_empty(input.label());
    let theme = input.theme;

    match options.style {
        GaugeStyle::Bar => Component::BarGauge(BarGauge {
            percent,
            icon: options.icon.clone(),
            label,
            value: text,
            color,
            track: theme.track,
            value_color: theme.text_primary,
            label_color: theme.text_secondary,
        }),
        GaugeStyle::Ring | GaugeStyle::Arc => {
            let gauge = Gauge {
                percent,
                value: text,
                label,
                color,
                track: theme.track,
                value_color: theme.text_primary,
                label_color: theme.text_secondary,
            };
            if options.style == GaugeStyle::Ring { Component::RingGauge(gauge) } else { Component::ArcGauge(gauge) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::config::WidgetConfig;
    use crate::render::RenderContext;
    use crate::state::{EntityState, HistoryBuffer, StateSnapshot};
    use crate::theme::Theme;
    use crate::thresholds::{ColorThreshold, Thresholds};

    fn build_with(
        config: &WidgetConfig,
        states: &StateSnapshot,
    ) -> Component {
        let ctx = RenderContext::new(108, 108);
        let theme = Theme::classic();
        let history = HistoryBuffer::new();
        let input = WidgetContext {
            config,
            render: &ctx,
            theme: &theme,
            states,
            history: &history,
        };
        let crate::config::WidgetKind::Gauge(options) = &config.kind else {
            panic!("gauge config expected");
        };
        build(&input, options)
    }

    fn states() -> StateSnapshot {
        let mut states = StateSnapshot::new();
        states
            .insert("sensor.cpu", EntityState::new("42").with_unit("%").with_name("CPU"))
            .insert("climate.living", EntityState::new("heat").with_attribute("current_temperature", 21.5))
            .insert("sensor.broken", EntityState::new("unavailable"));
        states
    }

    #[test]
    fn test_bar_gauge_from_state() {
        let config = WidgetConfig::new(0, GaugeOptions::default()).entity("sensor.cpu");
        let Component::BarGauge(gauge) = build_with(&config, &states()) else {
            panic!("bar style builds a bar gauge");
        };
        assert_eq!(gauge.percent, 42.0);
        assert_eq!(gauge.value, "42%");
        assert_eq!(gauge.label.as_deref(), Some("CPU"));
        assert_eq!(gauge.color, Theme::classic().accent);
        assert_eq!(gauge.track, Theme::classic().track);
    }

    #[test]
    fn test_missing_reading_is_placeholder() {
        let config = WidgetConfig::new(0, GaugeOptions::styled(GaugeStyle::Ring)).entity("sensor.broken");
        let Component::RingGauge(gauge) = build_with(&config, &states()) else {
            panic!("ring style builds a ring gauge");
        };
        assert_eq!(gauge.percent, 0.0, "no reading draws an empty gauge");
        assert_eq!(gauge.value, "--");
    }

    #[test]
    fn test_attribute_range_and_unit_override() {
        let options = GaugeOptions {
            style: GaugeStyle::Arc,
            min: 10.0,
            max: 30.0,
            unit: Some("°".into()),
            attribute: Some("current_temperature".into()),
            ..GaugeOptions::default()
        };
        let config = WidgetConfig::new(0, options).entity("climate.living");
        let Component::ArcGauge(gauge) = build_with(&config, &states()) else {
            panic!("arc style builds an arc gauge");
        };
        assert_eq!(gauge.percent, 57.5);
        assert_eq!(gauge.value, "22°");
    }

    #[test]
    fn test_thresholds_pick_color() {
        let thresholds = Thresholds::new(vec![
            ColorThreshold::new(0.0, colors::RED),
            ColorThreshold::new(30.0, colors::YELLOW),
            ColorThreshold::new(80.0, colors::LIME),
        ]);
        let options = GaugeOptions {
            color_thresholds: thresholds,
            show_value: false,
            ..GaugeOptions::default()
        };
        let config = WidgetConfig::new(0, options).entity("sensor.cpu").color(colors::PURPLE);
        let Component::BarGauge(gauge) = build_with(&config, &states()) else {
            panic!("bar gauge expected");
        };
        assert_eq!(gauge.color, colors::YELLOW);
        assert!(gauge.value.is_empty(), "show_value = false hides the value");
    }

    #[test]
    fn test_degenerate_range_is_zero() {
        let options = GaugeOptions {
            min: 50.0,
            max: 50.0,
            ..GaugeOptions::default()
        };
        let config = WidgetConfig::new(0, options).entity("sensor.cpu");
        let Component::BarGauge(gauge) = build_with(&config, &states()) else {
            panic!("bar gauge expected");
        };
        assert_eq!(gauge.percent, 0.0);
    }
}
