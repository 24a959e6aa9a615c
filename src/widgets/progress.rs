//! Progress widget: how far a reading is toward a target, as a bar gauge.

use super::{PLACEHOLDER, WidgetContext, non_empty, value_text};
use crate::component::{BarGauge, Component};
use crate::config::ProgressOptions;
use crate::geometry;

pub fn build(
    input: &WidgetContext<'_>,
    options: &ProgressOptions,
) -> Component {
    let theme = input.theme;
    let value = input.state().and_then(|s| s.numeric(None));
    let percent = value.map_or(0.0, |v| geometry::percent_of(v, 0.0, options.target));

    let text = if options.show_percent {
        value_text(value.map(|_| percent), "%")
    } else {
        let unit = input.unit(options.unit.as_deref());
        let current = value.map_or_else(|| PLACEHOLDER.to_owned(), |v| format!("{v:.0}"));
        format!("{current}/{:.0}{unit}", options.target)
    };

    Component::BarGauge(BarGauge {
        percent,
        icon: options.icon.clone(),
        label: non_empty(input.label()),
        value: text,
        color: input.accent(&options.color_thresholds, value),
        track: theme.track,
        value_color: theme.text_primary,
        label_color: theme.text_secondary,
    })
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

    fn build_progress(config: &WidgetConfig) -> BarGauge {
        let mut states = StateSnapshot::new();
        states
            .insert("sensor.steps", EntityState::new("6500").with_unit(" steps").with_name("Steps"))
            .insert("sensor.water", EntityState::new("unknown"));
        let ctx = RenderContext::new(224, 65);
        let theme = Theme::classic();
        let history = HistoryBuffer::new();
        let input = WidgetContext {
            config,
            render: &ctx,
            theme: &theme,
            states: &states,
            history: &history,
        };
        let crate::config::WidgetKind::Progress(options) = &config.kind else {
            panic!("progress config expected");
        };
        let Component::BarGauge(gauge) = build(&input, options) else {
            panic!("progress builds a bar gauge");
        };
        gauge
    }

    fn steps(options: ProgressOptions) -> BarGauge {
        build_progress(&WidgetConfig::new(0, options).entity("sensor.steps"))
    }

    #[test]
    fn test_value_over_target() {
        let gauge = steps(ProgressOptions {
            target: 10000.0,
            icon: Some("walk".into()),
            ..ProgressOptions::default()
        });
        assert_eq!(gauge.percent, 65.0);
        assert_eq!(gauge.value, "6500/10000 steps");
        assert_eq!(gauge.icon.as_deref(), Some("walk"));
        assert_eq!(gauge.label.as_deref(), Some("Steps"));
    }

    #[test]
    fn test_percent_text() {
        let gauge = steps(ProgressOptions {
            target: 8000.0,
            show_percent: true,
            ..ProgressOptions::default()
        });
        assert_eq!(gauge.value, "81%");
    }

    #[test]
    fn test_target_reached_is_full() {
        let gauge = steps(ProgressOptions {
            target: 5000.0,
            unit: Some("".into()),
            color_thresholds: Thresholds::new(vec![ColorThreshold::new(5000.0, colors::GOLD)]),
            ..ProgressOptions::default()
        });
        assert_eq!(gauge.percent, 100.0, "clamped at the target");
        assert_eq!(gauge.value, "6500/5000");
        assert_eq!(gauge.color, colors::GOLD);
    }

    #[test]
    fn test_unknown_state() {
        let gauge = build_progress(&WidgetConfig::new(0, ProgressOptions::default()).entity("sensor.water"));
        assert_eq!(gauge.percent, 0.0);
        assert_eq!(gauge.value, "--/100");
        assert_eq!(gauge.color, Theme::classic().accent);
    }
}
