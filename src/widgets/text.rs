//! Text widget: static text or the live state of an entity.

use super::WidgetContext;
use crate::component::Component;
use crate::config::TextOptions;
use crate::layout::{Align, Justify};
use crate::styles::FontSize;

const LABEL_GAP: u32 = 4;

pub fn build(
    input: &WidgetContext<'_>,
    options: &TextOptions,
) -> Component {
    let theme = input.theme;
    // The option's entity takes precedence over the widget's.
    let entity_id = options.entity_id.as_deref().or(input.config.entity_id.as_deref());
    let content = match input.state_of(entity_id) {
        Some(state) => state.state.clone(),
        None => options.text.clone(),
    };

    let mut children = Vec::with_capacity(2);
    if let Some(label) = input.config.label.as_deref().filter(|l| !l.is_empty()) {
        children.push(Component::text(label.to_uppercase(), FontSize::Small, theme.text_secondary));
    }
    let color = input.config.color.unwrap_or(theme.text_primary);
    children.push(Component::text(content, options.size, color).aligned(options.align));

    Component::column(children)
        .gap(LABEL_GAP)
        .align(Align::Stretch)
        .justify(Justify::Center)
}
