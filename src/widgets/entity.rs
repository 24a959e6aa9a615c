//! Entity widget: an entity's value with its name and an optional icon.
//!
//! With an icon the stack is icon, value, name (top to bottom) in medium and
//! tiny fonts; without one the value gets the large font.

use super::{PLACEHOLDER, WidgetContext};
use crate::component::Component;
use crate::config::EntityOptions;
use crate::layout::Justify;
use crate::styles::FontSize;

/// Icon edge as a fraction of the shorter widget side.
const ICON_FRACTION: f32 = 0.3;

const MIN_ICON: u32 = 12;
const STACK_GAP: u32 = 4;
const PANEL_RADIUS: u32 = 8;
const PANEL_PADDING: u32 = 4;

pub fn build(
    input: &WidgetContext<'_>,
    options: &EntityOptions,
) -> Component {
    let theme = input.theme;
    let state = input.state();
    let attribute = options.attribute.as_deref();

    let raw = state.and_then(|s| match attribute {
        Some(key) => s.attributes.get(key).map(ToString::to_string),
        None => Some(s.state.clone()),
    });
    let text = match raw {
        Some(raw) if options.show_unit => match input.unit(None) {
            unit if unit.is_empty() => raw,
            unit => format!("{raw}{unit}"),
        },
        Some(raw) => raw,
        None => PLACEHOLDER.to_owned(),
    };
    let value = state.and_then(|s| s.numeric(attribute));
    let color = input.accent(&options.color_thresholds, value);

    let (value_size, label_size) = if options.icon.is_some() {
        (FontSize::Medium, FontSize::Tiny)
    } else {
        (FontSize::Large, FontSize::Small)
    };

    let mut children = Vec::with_capacity(3);
    if let Some(icon) = &options.icon {
        let ctx = input.render;
        let side = ((ctx.width().min(ctx.height()) as f32 * ICON_FRACTION).round() as u32).max(MIN_ICON);
        children.push(Component::icon(icon, side, color));
    }
    children.push(Component::text(text, value_size, color));
    if options.show_name {
        let label = input.label();
        if !label.is_empty() {
            children.push(Component::text(label, label_size, theme.text_secondary));
        }
    }

    let stack = Component::column(children).gap(STACK_GAP).justify(Justify::Center);
    if options.show_panel {
        stack.in_panel(theme.panel, PANEL_RADIUS, PANEL_PADDING)
    } else {
        stack
    }
}
