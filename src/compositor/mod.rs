//! Component tree compositor.
//!
//! [`compose`] walks a [`Component`] tree, asks the layout solvers where each
//! node goes and draws the leaves with the [`primitives`]. Every node is drawn
//! strictly inside the box it was given; content that cannot fit is omitted
//! (and traced) rather than clipped mid-glyph.

pub mod icons;
pub mod primitives;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::trace;

use crate::component::{BarGauge, Component, Container, Gauge, Text};
use crate::geometry::LayoutBox;
use crate::layout::{self, Axis, BarGaugeRequest, StackItem, StackSpec};
use crate::render::RenderContext;
use crate::styles::{self, Anchor, FontSize, TextAlign};

/// Gap between a circular gauge and its label row.
pub const GAUGE_LABEL_GAP: u32 = 2;

/// Share of the inner ring diameter the value text may use.
pub const GAUGE_VALUE_WIDTH: f32 = 0.8;

/// Smallest bar gauge icon.
pub const MIN_GAUGE_ICON: u32 = 10;

/// Bar gauge icon edge as a fraction of the container height.
const GAUGE_ICON_FRACTION: f32 = 0.23;

/// Bar gauge bar thickness as a fraction of the container height.
const GAUGE_BAR_FRACTION: f32 = 0.15;

const GAUGE_BAR_MIN: u32 = 4;
const GAUGE_BAR_MAX: u32 = 12;

/// Draw `component` into `area`.
pub fn compose<D>(
    target: &mut D,
    component: &Component,
    area: LayoutBox,
    ctx: &RenderContext,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if area.is_empty() {
        trace!("compose: {} omitted, empty box", component.kind());
        return;
    }

    match component {
        Component::Text(text) => draw_text_node(target, text, area, ctx),
        Component::Icon { name, size, color } => {
            let side = (*size).min(area.width).min(area.height);
            icons::draw_icon(target, name, area.centered(Size::new(side, side)), *color);
        }
        Component::Bar {
            percent,
            color,
            track,
            height,
        } => {
            let bar = match height {
                Some(h) => {
                    let h = (*h).min(area.height);
                    LayoutBox::new(area.x, area.y + ((area.height - h) / 2) as i32, area.width, h)
                }
                None => area,
            };
            primitives::draw_bar(target, bar, *percent, *color, *track);
        }
        Component::RingGauge(gauge) => draw_circular(target, gauge, area, ctx, primitives::draw_ring),
        Component::ArcGauge(gauge) => draw_circular(target, gauge, area, ctx, primitives::draw_arc),
        Component::BarGauge(gauge) => draw_bar_gauge(target, gauge, area, ctx),
        Component::Sparkline {
            samples,
            color,
            fill,
            gradient,
        } => primitives::draw_sparkline(target, area, samples, *color, *fill, *gradient),
        Component::Timeline {
            samples,
            on_color,
            off_color,
        } => primitives::draw_timeline(target, area, samples, *on_color, *off_color),
        Component::Panel {
            color,
            radius,
            padding,
            child,
        } => {
            primitives::draw_panel(target, area, *radius, *color);
            compose(target, child, area.inset(*padding, *padding), ctx);
        }
        Component::Spacer(_) => {}
        Component::Expand { child, .. } => compose(target, child, area, ctx),
        Component::Row(container) => draw_stack(target, container, Axis::Horizontal, area, ctx),
        Component::Column(container) => draw_stack(target, container, Axis::Vertical, area, ctx),
        Component::Grid {
            cols,
            gap,
            padding,
            children,
        } => {
            let cells = layout::layout_grid(area, children.len(), *cols, *gap, *padding);
            for (child, cell) in children.iter().zip(cells) {
                compose(target, child, cell, ctx);
            }
        }
    }
}

/// Draw `component` into `area` of `target` in local coordinates: the
/// origin moves to the corner of `area` and nothing lands outside it.
pub fn compose_in<D>(
    target: &mut D,
    component: &Component,
    area: LayoutBox,
    ctx: &RenderContext,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let mut cropped = target.cropped(&area.to_rectangle());
    let mut clipped = cropped.clipped(&Rectangle::new(Point::zero(), area.size()));
    compose(&mut clipped, component, ctx.bounds(), ctx);
}

// =============================================================================
// Text
// =============================================================================

fn draw_text_node<D>(
    target: &mut D,
    text: &Text,
    area: LayoutBox,
    ctx: &RenderContext,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if text.content.is_empty() {
        return;
    }
    let mut font = ctx.font(text.size);
    if font.character_size.height > area.height {
        match styles::largest_font_within(area.height) {
            Some(smaller) => font = smaller,
            None => {
                trace!("compose: text {:?} omitted, {}px too short", text.content, area.height);
                return;
            }
        }
    }

    let fitted = styles::fit_text(&text.content, font, area.width);
    let middle = area.center().y;
    let position = match text.align {
        TextAlign::Left => Point::new(area.x, middle),
        TextAlign::Center => area.center(),
        TextAlign::Right => Point::new(area.right() - 1, middle),
    };
    primitives::draw_text(target, &fitted, position, font, text.color, Anchor::from(text.align));
}

// =============================================================================
// Gauges
// =============================================================================

type GaugeDrawer<D> = fn(&mut D, LayoutBox, f32, Rgb888, Rgb888);

/// Ring or arc with the value inside and an optional label row underneath.
fn draw_circular<D>(
    target: &mut D,
    gauge: &Gauge,
    area: LayoutBox,
    ctx: &RenderContext,
    draw: GaugeDrawer<D>,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let mut dial_area = area;
    if let Some(label) = gauge.label.as_deref().filter(|l| !l.is_empty()) {
        let font = ctx.font(FontSize::Small);
        let row_h = font.character_size.height;
        // Keep the label only while the dial stays at least twice as tall as it.
        if area.height >= row_h * 3 + GAUGE_LABEL_GAP {
            let row = LayoutBox::new(area.x, area.bottom() - row_h as i32, area.width, row_h);
            primitives::draw_text_centered(target, label, row, font, gauge.label_color);
            dial_area.height -= row_h + GAUGE_LABEL_GAP;
        } else {
            trace!("compose: gauge label omitted, {}px too short", area.height);
        }
    }

    let side = dial_area.width.min(dial_area.height);
    let circle = dial_area.centered(Size::new(side, side));
    draw(target, circle, gauge.percent, gauge.color, gauge.track);

    let inner = side.saturating_sub(primitives::ring_stroke(side) * 2);
    let cap = ctx.font(FontSize::XLarge).character_size.height;
    let Some(font) = styles::largest_font_within((inner / 3).min(cap)) else {
        trace!("compose: gauge value omitted, {side}px dial");
        return;
    };
    let text_width = (inner as f32 * GAUGE_VALUE_WIDTH) as u32;
    let fitted = styles::fit_text(&gauge.value, font, text_width);
    primitives::draw_text(target, &fitted, circle.center(), font, gauge.value_color, Anchor::Center);
}

fn bar_gauge_request(
    gauge: &BarGauge,
    area: LayoutBox,
    ctx: &RenderContext,
) -> BarGaugeRequest {
    let label = gauge
        .label
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(|l| ctx.text_size(&l.to_uppercase(), FontSize::Small));
    let value = Some(ctx.text_size(&gauge.value, FontSize::Medium)).filter(|s| s.width > 0);
    let icon = gauge
        .icon
        .as_ref()
        .map(|_| ((area.height as f32 * GAUGE_ICON_FRACTION).round() as u32).max(MIN_GAUGE_ICON));
    let bar_height = ((area.height as f32 * GAUGE_BAR_FRACTION).round() as u32).clamp(GAUGE_BAR_MIN, GAUGE_BAR_MAX);
    BarGaugeRequest {
        icon,
        label,
        value,
        bar_height,
    }
}

fn draw_bar_gauge<D>(
    target: &mut D,
    gauge: &BarGauge,
    area: LayoutBox,
    ctx: &RenderContext,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let request = bar_gauge_request(gauge, area, ctx);
    let flex = layout::layout_bar_gauge(area, &request);
    let (label_align, value_align) = match flex.mode {
        layout::FlexMode::Horizontal => (TextAlign::Left, TextAlign::Right),
        layout::FlexMode::Vertical => (TextAlign::Center, TextAlign::Center),
    };

    if let (Some(icon_box), Some(name)) = (flex.icon, gauge.icon.as_deref()) {
        icons::draw_icon(target, name, icon_box, gauge.color);
    }
    if let (Some(label_box), Some(label)) = (flex.label, gauge.label.as_deref()) {
        let node = Text {
            content: label.to_uppercase(),
            size: FontSize::Small,
            color: gauge.label_color,
            align: label_align,
        };
        draw_text_node(target, &node, label_box, ctx);
    }
    if let Some(value_box) = flex.value {
        let node = Text {
            content: gauge.value.clone(),
            size: FontSize::Medium,
            color: gauge.value_color,
            align: value_align,
        };
        draw_text_node(target, &node, value_box, ctx);
    }
    if let Some(bar) = flex.get(layout::Region::Bar) {
        primitives::draw_bar(target, bar, gauge.percent, gauge.color, gauge.track);
    }
}

// =============================================================================
// Containers
// =============================================================================

fn stack_item(
    child: &Component,
    axis: Axis,
    ctx: &RenderContext,
) -> StackItem {
    let measure = child.measure(ctx);
    match child {
        // Flexible along the main axis, aligned by what the child would need.
        Component::Expand { weight, child } => {
            let (_, cross) = child.measure(ctx).along(axis);
            StackItem::flexible((*weight).max(1), cross)
        }
        _ => match measure.along(axis) {
            (Some(main), cross) => StackItem::fixed(main, cross),
            (None, cross) => StackItem::flexible(measure.weight.max(1), cross),
        },
    }
}

fn draw_stack<D>(
    target: &mut D,
    container: &Container,
    axis: Axis,
    area: LayoutBox,
    ctx: &RenderContext,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let items: Vec<StackItem> = container.children.iter().map(|c| stack_item(c, axis, ctx)).collect();
    let spec = StackSpec {
        axis,
        gap: container.gap,
        padding: container.padding,
        align: container.align,
        justify: container.justify,
    };
    let boxes = layout::layout_stack(area, &spec, &items);
    for (child, slot) in container.children.iter().zip(boxes) {
        match slot {
            Some(child_box) => compose(target, child, child_box, ctx),
            None => trace!("compose: {} omitted from {:?}", child.kind(), axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::geometry;
    use crate::layout::{Align, Justify};
    use crate::render::Canvas;

    const BG: Rgb888 = colors::BLACK;

    fn total(
        canvas: &Canvas,
        color: Rgb888,
    ) -> usize {
        canvas.pixels().iter().filter(|p| **p == color).count()
    }

    fn columns_with(
        canvas: &Canvas,
        color: Rgb888,
    ) -> Vec<i32> {
        let size = canvas.size();
        (0..size.width as i32)
            .filter(|x| (0..size.height as i32).any(|y| canvas.pixel(Point::new(*x, y)) == Some(color)))
            .collect()
    }

    #[test]
    fn test_text_alignment() {
        let ctx = RenderContext::new(100, 20);
        let area = LayoutBox::new(10, 0, 80, 20);

        let mut canvas = Canvas::new(100, 20, BG);
        let left = Component::text("HI", FontSize::Small, colors::WHITE).aligned(TextAlign::Left);
        compose(&mut canvas, &left, area, &ctx);
        let cols = columns_with(&canvas, colors::WHITE);
        assert!(cols.first().is_some_and(|x| *x >= 10 && *x < 14), "left text starts at the edge: {cols:?}");

        let mut canvas = Canvas::new(100, 20, BG);
        let right = Component::text("HI", FontSize::Small, colors::WHITE).aligned(TextAlign::Right);
        compose(&mut canvas, &right, area, &ctx);
        let cols = columns_with(&canvas, colors::WHITE);
        assert!(cols.last().is_some_and(|x| *x <= 89 && *x > 84), "right text ends at the edge: {cols:?}");
    }

    #[test]
    fn test_text_too_short_is_omitted() {
        let ctx = RenderContext::new(60, 60);
        let mut canvas = Canvas::new(60, 10, BG);
        compose(
            &mut canvas,
            &Component::text("VALUE", FontSize::Large, colors::WHITE),
            LayoutBox::new(0, 0, 60, 3),
            &ctx,
        );
        assert_eq!(total(&canvas, colors::WHITE), 0);
    }

    #[test]
    fn test_text_shrinks_to_short_box() {
        let ctx = RenderContext::new(120, 120);
        let mut canvas = Canvas::new(120, 20, BG);
        let area = LayoutBox::new(0, 0, 120, 12);
        compose(&mut canvas, &Component::text("42", FontSize::Huge, colors::WHITE), area, &ctx);
        assert!(total(&canvas, colors::WHITE) > 0, "a smaller font is used");
        assert_eq!(canvas.count_in(area, colors::WHITE), total(&canvas, colors::WHITE));
    }

    #[test]
    fn test_row_splits_flexible_bars() {
        let ctx = RenderContext::new(100, 10);
        let bar = |color| Component::Bar {
            percent: 100.0,
            color,
            track: colors::DARK_GRAY,
            height: None,
        };
        let row = Component::row(vec![bar(colors::RED), bar(colors::CYAN)]).gap(0);
        let mut canvas = Canvas::new(100, 10, BG);
        compose(&mut canvas, &row, LayoutBox::new(0, 0, 100, 10), &ctx);
        assert_eq!(total(&canvas, colors::RED), 50 * 10);
        assert_eq!(total(&canvas, colors::CYAN), 50 * 10);
    }

    #[test]
    fn test_fixed_height_bar_is_centered() {
        let ctx = RenderContext::new(40, 20);
        let bar = Component::Bar {
            percent: 100.0,
            color: colors::LIME,
            track: colors::DARK_GRAY,
            height: Some(4),
        };
        let mut canvas = Canvas::new(40, 20, BG);
        compose(&mut canvas, &bar, LayoutBox::new(0, 0, 40, 20), &ctx);
        assert_eq!(total(&canvas, colors::LIME), 40 * 4);
        assert_eq!(canvas.pixel(Point::new(0, 8)), Some(colors::LIME));
        assert_eq!(canvas.pixel(Point::new(0, 7)), Some(BG));
    }

    #[test]
    fn test_bar_gauge_fill_matches_percent() {
        let area = LayoutBox::new(0, 0, 200, 60);
        let ctx = RenderContext::for_box(area);
        let gauge = BarGauge {
            percent: 42.0,
            icon: None,
            label: None,
            value: String::new(),
            color: colors::CYAN,
            track: colors::DARK_GRAY,
            value_color: colors::WHITE,
            label_color: colors::GRAY,
        };
        let flex = layout::layout_bar_gauge(area, &bar_gauge_request(&gauge, area, &ctx));
        let mut canvas = Canvas::new(200, 60, BG);
        compose(&mut canvas, &Component::BarGauge(gauge), area, &ctx);

        let fill = geometry::fill_width(42.0, flex.bar.width) as usize;
        assert_eq!(total(&canvas, colors::CYAN), fill * flex.bar.height as usize);
        assert_eq!(
            total(&canvas, colors::CYAN) + total(&canvas, colors::DARK_GRAY),
            (flex.bar.width * flex.bar.height) as usize,
            "fill and track cover the bar"
        );
    }

    #[test]
    fn test_ring_gauge_draws_value_and_label() {
        let area = LayoutBox::new(0, 0, 120, 120);
        let ctx = RenderContext::for_box(area);
        let gauge = Gauge {
            percent: 50.0,
            value: "50".into(),
            label: Some("CPU".into()),
            color: colors::CYAN,
            track: colors::DARK_GRAY,
            value_color: colors::WHITE,
            label_color: colors::GOLD,
        };
        let mut canvas = Canvas::new(120, 120, BG);
        compose(&mut canvas, &Component::RingGauge(gauge), area, &ctx);
        assert!(total(&canvas, colors::WHITE) > 0, "value drawn");
        assert!(total(&canvas, colors::CYAN) > 0, "arc drawn");
        let label_row = LayoutBox::new(0, 100, 120, 20);
        assert_eq!(canvas.count_in(label_row, colors::GOLD), total(&canvas, colors::GOLD), "label sits at the bottom");
        assert!(total(&canvas, colors::GOLD) > 0);
    }

    #[test]
    fn test_tree_stays_inside_its_box() {
        let area = LayoutBox::new(20, 30, 90, 70);
        let ctx = RenderContext::for_box(area);
        let tree = Component::column(vec![
            Component::row(vec![
                Component::icon("fire", 14, colors::ORANGE),
                Component::text("Kitchen temperature", FontSize::Small, colors::ORANGE).expand(),
            ])
            .gap(4)
            .align(Align::Center),
            Component::Sparkline {
                samples: vec![1.0, 4.0, 2.0, 8.0, 3.0],
                color: colors::ORANGE,
                fill: true,
                gradient: false,
            },
            Component::text("21.5C", FontSize::Large, colors::ORANGE),
        ])
        .gap(4)
        .justify(Justify::Center)
        .in_panel(colors::PANEL, 6, 4);

        let mut canvas = Canvas::new(160, 140, BG);
        compose(&mut canvas, &tree, area, &ctx);
        let drawn = canvas.pixels().iter().filter(|p| **p != BG).count();
        let inside = area.to_rectangle().points().filter(|p| canvas.pixel(*p) != Some(BG)).count();
        assert!(drawn > 0);
        assert_eq!(drawn, inside, "nothing drawn outside the box");
    }

    #[test]
    fn test_compose_in_clips_to_its_area() {
        // The context is larger than the area, so the bar overshoots it
        let ctx = RenderContext::new(50, 50);
        let bar = Component::Bar {
            percent: 100.0,
            color: colors::RED,
            track: colors::DARK_GRAY,
            height: None,
        };
        let area = LayoutBox::new(10, 10, 5, 5);
        let mut canvas = Canvas::new(40, 40, BG);
        compose_in(&mut canvas, &bar, area, &ctx);
        assert_eq!(total(&canvas, colors::RED), 25);
        assert_eq!(canvas.count_in(area, colors::RED), 25);
    }

    #[test]
    fn test_grid_places_children_row_major() {
        let ctx = RenderContext::new(40, 40);
        let cell = |color| Component::Bar {
            percent: 100.0,
            color,
            track: BG,
            height: None,
        };
        let grid = Component::Grid {
            cols: 2,
            gap: 0,
            padding: 0,
            children: vec![cell(colors::RED), cell(colors::LIME), cell(colors::BLUE)],
        };
        let mut canvas = Canvas::new(40, 40, BG);
        compose(&mut canvas, &grid, LayoutBox::new(0, 0, 40, 40), &ctx);
        assert_eq!(canvas.pixel(Point::new(5, 5)), Some(colors::RED));
        assert_eq!(canvas.pixel(Point::new(25, 5)), Some(colors::LIME));
        assert_eq!(canvas.pixel(Point::new(5, 25)), Some(colors::BLUE));
        assert_eq!(canvas.pixel(Point::new(25, 25)), Some(BG));
    }
}
