//! Chart widget: entity history as a sparkline, or as an on/off timeline
//! when every sample is exactly 0.0 or 1.0.
//!
//! ```text
//! +---------------------------+
//! | LABEL              21.5°C | header
//! |      /\      __/\         |
//! |  /\_/  \____/    \_       | sparkline / timeline / "No data"
//! | 18.0                 23.1 | footer (sparkline + show_range)
//! +---------------------------+
//! ```

use super::WidgetContext;
use crate::component::Component;
use crate::config::ChartOptions;
use crate::layout::{Align, Justify};
use crate::styles::{self, FontSize, TextAlign};

/// Shown when the history has fewer than two samples.
pub const NO_DATA: &str = "No data";

/// Chart padding as a fraction of the widget width.
const PADDING_FRACTION: f32 = 0.06;

/// Gap between header, chart and footer.
const SECTION_GAP: u32 = 2;

/// Shortest header label before truncation kicks in.
const MIN_LABEL_CHARS: usize = 3;

/// Widget width per header label character.
const PIXELS_PER_LABEL_CHAR: u32 = 12;

pub fn build(
    input: &WidgetContext<'_>,
    options: &ChartOptions,
) -> Component {
    let theme = input.theme;
    let ctx = input.render;
    let color = input.config.color.unwrap_or(theme.accent);
    let history = input.history;

    let mut sections = Vec::with_capacity(3);

    // Header
    let label = input.label();
    let max_chars = MIN_LABEL_CHARS.max((ctx.width() / PIXELS_PER_LABEL_CHAR) as usize);
    let label = styles::ellipsize(&label.to_uppercase(), max_chars);
    let reading = input.state().and_then(|s| s.numeric(None)).filter(|_| options.show_value);
    let mut header = Vec::with_capacity(2);
    if !label.is_empty() {
        header.push(Component::text(label, FontSize::Small, theme.text_secondary).aligned(TextAlign::Left));
    }
    if let Some(value) = reading {
        let unit = input.unit(None);
        header.push(Component::text(format!("{value:.1}{unit}"), FontSize::Regular, color).aligned(TextAlign::Right));
    }
    if !header.is_empty() {
        sections.push(Component::row(header).justify(Justify::SpaceBetween));
    }

    // Body
    if history.len() < 2 {
        sections.push(Component::text(NO_DATA, FontSize::Small, theme.text_secondary).expand());
        return column(sections, ctx.width());
    }
    if history.is_binary() {
        sections.push(Component::Timeline {
            samples: history.samples().to_vec(),
            on_color: color,
            off_color: theme.track,
        });
        return column(sections, ctx.width());
    }
    sections.push(Component::Sparkline {
        samples: history.samples().to_vec(),
        color,
        fill: options.fill,
        gradient: options.color_gradient,
    });

    // Footer
    let range = history.min_max().filter(|_| options.show_range);
    if let Some((min, max)) = range {
        sections.push(
            Component::row(vec![
                Component::text(format!("{min:.1}"), FontSize::Small, theme.text_secondary),
                Component::text(format!("{max:.1}"), FontSize::Small, theme.text_secondary),
            ])
            .justify(Justify::SpaceBetween),
        );
    }
    column(sections, ctx.width())
}

fn column(
    sections: Vec<Component>,
    width: u32,
) -> Component {
    let padding = (width as f32 * PADDING_FRACTION).round() as u32;
    Component::column(sections)
        .gap(SECTION_GAP)
        .padding(padding)
        .align(Align::Stretch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::component::Container;
    use crate::config::WidgetConfig;
    use crate::render::RenderContext;
    use crate::state::{EntityState, HistoryBuffer, StateSnapshot};
    use crate::theme::Theme;

    fn build_chart(
        config: &WidgetConfig,
        history: &HistoryBuffer,
        width: u32,
    ) -> Container {
        let mut states = StateSnapshot::new();
        states.insert(
            "sensor.temperature",
            EntityState::new("21.46").with_unit("°C").with_name("Living room temperature"),
        );
        let ctx = RenderContext::new(width, 108);
        let theme = Theme::classic();
        let input = WidgetContext {
            config,
            render: &ctx,
            theme: &theme,
            states: &states,
            history,
        };
        let crate::config::WidgetKind::Chart(options) = &config.kind else {
            panic!("chart config expected");
        };
        let Component::Column(column) = build(&input, options) else {
            panic!("chart builds a column");
        };
        column
    }

    fn config() -> WidgetConfig { WidgetConfig::new(0, ChartOptions::default()).entity("sensor.temperature") }

    fn texts(component: &Component) -> Vec<String> {
        match component {
            Component::Text(t) => vec![t.content.clone()],
            Component::Row(c) | Component::Column(c) => c.children.iter().flat_map(texts).collect(),
            Component::Expand { child, .. } => texts(child),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_short_history_shows_placeholder() {
        for samples in [vec![], vec![3.0]] {
            let column = build_chart(&config(), &HistoryBuffer::from(samples), 108);
            let body = column.children.last().expect("body section");
            assert_eq!(texts(body), vec![NO_DATA.to_owned()]);
        }
    }

    #[test]
    fn test_binary_history_is_timeline() {
        let history = HistoryBuffer::from(vec![0.0, 1.0, 1.0, 0.0]);
        let column = build_chart(&config().color(colors::LIME), &history, 108);
        assert_eq!(column.children.len(), 2, "header and timeline, no range footer");
        let Component::Timeline { on_color, off_color, samples } = &column.children[1] else {
            panic!("binary data draws a timeline");
        };
        assert_eq!(*on_color, colors::LIME);
        assert_eq!(*off_color, Theme::classic().track);
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn test_one_non_binary_sample_is_sparkline() {
        let history = HistoryBuffer::from(vec![0.0, 1.0, 0.5]);
        let column = build_chart(&config(), &history, 108);
        assert_eq!(column.children[1].kind(), "sparkline");
        assert_eq!(texts(&column.children[2]), vec!["0.0".to_owned(), "1.0".to_owned()]);
    }

    #[test]
    fn test_header_label_and_value() {
        let history = HistoryBuffer::from(vec![20.0, 21.0]);
        let column = build_chart(&config(), &history, 108);
        // 108 / 12 = 9 characters, the last two being the ellipsis
        assert_eq!(texts(&column.children[0]), vec!["LIVING ..".to_owned(), "21.5°C".to_owned()]);

        let narrow = build_chart(&config().label("Temp"), &history, 24);
        assert_eq!(texts(&narrow.children[0])[0], "T..", "never fewer than three characters");
    }

    #[test]
    fn test_show_value_and_range_disabled() {
        let options = ChartOptions {
            show_value: false,
            show_range: false,
            ..ChartOptions::default()
        };
        let config = WidgetConfig::new(0, options).entity("sensor.temperature").label("T");
        let column = build_chart(&config, &HistoryBuffer::from(vec![1.0, 5.0, 3.0]), 108);
        assert_eq!(texts(&column.children[0]), vec!["T".to_owned()]);
        assert_eq!(column.children.len(), 2, "no footer");
    }
}
