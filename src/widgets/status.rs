//! Status widget: binary entity state as colored text.
//!
//! Icon and label on the left, the on/off text pinned right. An entity
//! without state reads as unknown and shows the placeholder in the secondary
//! text color.

use super::{PLACEHOLDER, WidgetContext};
use crate::component::Component;
use crate::config::StatusOptions;
use crate::layout::Align;
use crate::styles::{FontSize, TextAlign};

/// Icon edge as a fraction of the widget height.
const ICON_FRACTION: f32 = 0.3;

const MIN_ICON: u32 = 10;
const ROW_GAP: u32 = 6;

/// Row padding as a fraction of the widget width.
const PADDING_FRACTION: f32 = 0.06;

pub fn build(
    input: &WidgetContext<'_>,
    options: &StatusOptions,
) -> Component {
    let theme = input.theme;
    let ctx = input.render;

    let (text, color) = match input.state().map(|s| s.is_on()) {
        Some(true) => (options.on_text.clone(), options.on_color.unwrap_or(theme.success)),
        Some(false) => (options.off_text.clone(), options.off_color.unwrap_or(theme.error)),
        None => (PLACEHOLDER.to_owned(), theme.text_secondary),
    };

    let mut children = Vec::with_capacity(3);
    if let Some(icon) = &options.icon {
        let side = ctx.pct_height(ICON_FRACTION).max(MIN_ICON);
        children.push(Component::icon(icon, side, color));
    }
    children.push(
        Component::text(input.label(), FontSize::Regular, theme.text_primary)
            .aligned(TextAlign::Left)
            .expand(),
    );
    children.push(Component::text(text, FontSize::Medium, color).aligned(TextAlign::Right));

    let padding = (ctx.width() as f32 * PADDING_FRACTION).round() as u32;
    Component::row(children).gap(ROW_GAP).padding(padding).align(Align::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::config::WidgetConfig;
    use crate::render::RenderContext;
    use crate::state::{EntityState, HistoryBuffer, StateSnapshot};
    use crate::theme::Theme;

    fn build_status(config: &WidgetConfig) -> Vec<Component> {
        let mut states = StateSnapshot::new();
        states
            .insert("lock.front", EntityState::new("unlocked").with_name("Front Door"))
            .insert("light.hall", EntityState::new("off"))
            .insert("person.sam", EntityState::new("Home"));
        let ctx = RenderContext::new(224, 50);
        let theme = Theme::classic();
        let history = HistoryBuffer::new();
        let input = WidgetContext {
            config,
            render: &ctx,
            theme: &theme,
            states: &states,
            history: &history,
        };
        let crate::config::WidgetKind::Status(options) = &config.kind else {
            panic!("status config expected");
        };
        let Component::Row(row) = build(&input, options) else {
            panic!("status builds a row");
        };
        row.children
    }

    fn status_text(children: &[Component]) -> (String, embedded_graphics::pixelcolor::Rgb888) {
        match children.last() {
            Some(Component::Text(t)) => (t.content.clone(), t.color),
            _ => panic!("status text is the last child"),
        }
    }

    #[test]
    fn test_on_state_uses_success_color() {
        let options = StatusOptions {
            icon: Some("lock".into()),
            ..StatusOptions::default()
        };
        let children = build_status(&WidgetConfig::new(0, options).entity("lock.front"));
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].kind(), "icon");
        assert_eq!(children[1].kind(), "expand");
        assert_eq!(status_text(&children), ("ON".to_owned(), Theme::classic().success));
    }

    #[test]
    fn test_off_state_with_custom_text_and_color() {
        let options = StatusOptions {
            off_text: "DARK".into(),
            off_color: Some(colors::PURPLE),
            ..StatusOptions::default()
        };
        let children = build_status(&WidgetConfig::new(0, options).entity("light.hall"));
        assert_eq!(children.len(), 2, "no icon");
        assert_eq!(status_text(&children), ("DARK".to_owned(), colors::PURPLE));
    }

    #[test]
    fn test_on_states_ignore_case() {
        let children = build_status(&WidgetConfig::new(0, StatusOptions::default()).entity("person.sam"));
        assert_eq!(status_text(&children).0, "ON");
    }

    #[test]
    fn test_missing_state_is_unknown() {
        let children = build_status(&WidgetConfig::new(0, StatusOptions::default()).entity("lock.back"));
        assert_eq!(status_text(&children), (PLACEHOLDER.to_owned(), Theme::classic().text_secondary));
    }
}
