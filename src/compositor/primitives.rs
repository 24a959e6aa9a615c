//! Low-level drawing primitives used by the compositor.
//!
//! Every function takes the target area as a [`LayoutBox`] and never draws
//! outside it. Draw errors are ignored per primitive (`.ok()`), so a failing
//! target degrades the image instead of aborting the render.
//!
//! # Sparkline
//!
//! [`draw_sparkline`] renders a compact line graph, auto-scaled to the local
//! min/max of the samples. X positions follow the actual sample count, so a
//! short buffer still spans the full width. A range of (almost) zero draws a
//! flat line through the middle instead of dividing by zero.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc,
    Circle,
    CornerRadii,
    Line,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    RoundedRectangle,
    StrokeAlignment,
};
use embedded_graphics::text::Text;

use crate::colors;
use crate::geometry::{self, LayoutBox};
use crate::styles::{self, Anchor};

/// Ring stroke width as a fraction of the gauge diameter.
pub const STROKE_RATIO: f32 = 0.1;

/// Thinnest ring stroke.
pub const MIN_STROKE: u32 = 2;

/// Brightness of the area fill under a sparkline.
const SPARKLINE_FILL_DIM: f32 = 0.35;

/// Brightness of the oldest sample when the line is drawn as a gradient.
const GRADIENT_START_DIM: f32 = 0.3;

/// Ranges narrower than this are drawn as a flat line.
const FLAT_RANGE: f32 = 1e-6;

// =============================================================================
// Text
// =============================================================================

/// Draw `text` anchored at `position`. The caller has already fitted it.
pub fn draw_text<D>(
    target: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    color: Rgb888,
    anchor: Anchor,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if text.is_empty() {
        return;
    }
    Text::with_text_style(text, position, MonoTextStyle::new(font, color), anchor.text_style())
        .draw(target)
        .ok();
}

/// Draw `text` centered in `area`, truncated to its width.
pub fn draw_text_centered<D>(
    target: &mut D,
    text: &str,
    area: LayoutBox,
    font: &MonoFont<'_>,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if area.height < font.character_size.height {
        return;
    }
    let fitted = styles::fit_text(text, font, area.width);
    draw_text(target, &fitted, area.center(), font, color, Anchor::Center);
}

// =============================================================================
// Bars and Panels
// =============================================================================

/// Filled rectangle.
pub fn fill_box<D>(
    target: &mut D,
    area: LayoutBox,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if area.is_empty() {
        return;
    }
    area.to_rectangle().into_styled(PrimitiveStyle::with_fill(color)).draw(target).ok();
}

/// Track across the whole `area` and a fill of `percent` of its width from the left.
pub fn draw_bar<D>(
    target: &mut D,
    area: LayoutBox,
    percent: f32,
    color: Rgb888,
    track: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    fill_box(target, area, track);
    let fill = geometry::fill_width(percent, area.width);
    if fill > 0 {
        fill_box(target, LayoutBox::new(area.x, area.y, fill, area.height), color);
    }
}

/// Rounded background.
pub fn draw_panel<D>(
    target: &mut D,
    area: LayoutBox,
    radius: u32,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if area.is_empty() {
        return;
    }
    let radius = radius.min(area.width / 2).min(area.height / 2);
    RoundedRectangle::new(area.to_rectangle(), CornerRadii::new(Size::new(radius, radius)))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
        .ok();
}

// =============================================================================
// Circular Gauges
// =============================================================================

/// Stroke width for a ring of `diameter`.
pub fn ring_stroke(diameter: u32) -> u32 {
    ((diameter as f32 * STROKE_RATIO).round() as u32).max(MIN_STROKE).min(diameter / 2)
}

pub(crate) fn inside_stroke(
    color: Rgb888,
    width: u32,
) -> PrimitiveStyle<Rgb888> {
    PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

/// Full-circle track plus a clockwise arc from 12 o'clock.
///
/// `circle` is the square the ring is inscribed in. A zero sweep draws the
/// track only.
pub fn draw_ring<D>(
    target: &mut D,
    circle: LayoutBox,
    percent: f32,
    color: Rgb888,
    track: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let diameter = circle.width.min(circle.height);
    if diameter < MIN_STROKE * 2 {
        return;
    }
    let stroke = ring_stroke(diameter);
    let top_left = Point::new(circle.x, circle.y);

    Circle::new(top_left, diameter).into_styled(inside_stroke(track, stroke)).draw(target).ok();

    let sweep = geometry::sweep_degrees(percent, geometry::RING_RANGE_DEG);
    if sweep > 0.0 {
        Arc::new(top_left, diameter, geometry::RING_START_DEG.deg(), sweep.deg())
            .into_styled(inside_stroke(color, stroke))
            .draw(target)
            .ok();
    }
}

/// 270 degree track plus a clockwise arc from the track's start.
pub fn draw_arc<D>(
    target: &mut D,
    circle: LayoutBox,
    percent: f32,
    color: Rgb888,
    track: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let diameter = circle.width.min(circle.height);
    if diameter < MIN_STROKE * 2 {
        return;
    }
    let stroke = ring_stroke(diameter);
    let top_left = Point::new(circle.x, circle.y);
    let start = geometry::ARC_START_DEG.deg();

    Arc::new(top_left, diameter, start, geometry::ARC_RANGE_DEG.deg())
        .into_styled(inside_stroke(track, stroke))
        .draw(target)
        .ok();

    let sweep = geometry::sweep_degrees(percent, geometry::ARC_RANGE_DEG);
    if sweep > 0.0 {
        Arc::new(top_left, diameter, start, sweep.deg())
            .into_styled(inside_stroke(color, stroke))
            .draw(target)
            .ok();
    }
}

// =============================================================================
// Charts
// =============================================================================

/// Line graph of `samples` (oldest first) inside `area`.
///
/// Fewer than two samples draw nothing.
pub fn draw_sparkline<D>(
    target: &mut D,
    area: LayoutBox,
    samples: &[f32],
    color: Rgb888,
    fill: bool,
    gradient: bool,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let count = samples.len();
    if count < 2 || area.width < 2 || area.height < 2 {
        return;
    }

    let (data_min, data_max) = samples
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let flat = data_max - data_min <= FLAT_RANGE;

    let max_x = area.right() - 1;
    let max_y = area.bottom() - 1;
    let graph_height = (area.height - 1) as f32;
    let x_step = (area.width - 1) as f32 / (count - 1) as f32;

    let screen_point = |i: usize, value: f32| -> Point {
        let x = (area.x + (i as f32 * x_step).round() as i32).min(max_x);
        let y = if flat {
            area.y + (area.height as i32 - 1) / 2
        } else {
            let t = geometry::normalize(value, data_min, data_max);
            (max_y - (t * graph_height).round() as i32).clamp(area.y, max_y)
        };
        Point::new(x, y)
    };

    let line_color = |i: usize| -> Rgb888 {
        if gradient {
            colors::blend(colors::dim(color, GRADIENT_START_DIM), color, i as f32 / (count - 1) as f32)
        } else {
            color
        }
    };

    if fill {
        let fill_color = colors::dim(color, SPARKLINE_FILL_DIM);
        let fill_style = PrimitiveStyle::with_stroke(fill_color, 1);
        for pair in 0..count - 1 {
            let a = screen_point(pair, samples[pair]);
            let b = screen_point(pair + 1, samples[pair + 1]);
            for x in a.x..=b.x {
                // Linear interpolation of the line height at this column
                let t = if b.x == a.x { 0.0 } else { (x - a.x) as f32 / (b.x - a.x) as f32 };
                let y = (a.y as f32 + (b.y - a.y) as f32 * t).round() as i32;
                if y < max_y {
                    Line::new(Point::new(x, y + 1), Point::new(x, max_y))
                        .into_styled(fill_style)
                        .draw(target)
                        .ok();
                }
            }
        }
    }

    let mut prev = screen_point(0, samples[0]);
    for (i, value) in samples.iter().enumerate().skip(1) {
        let point = screen_point(i, *value);
        Line::new(prev, point)
            .into_styled(PrimitiveStyle::with_stroke(line_color(i), 1))
            .draw(target)
            .ok();
        prev = point;
    }
}

/// One segment per sample: `on_color` where the sample is exactly 1.0,
/// `off_color` otherwise.
pub fn draw_timeline<D>(
    target: &mut D,
    area: LayoutBox,
    samples: &[f32],
    on_color: Rgb888,
    off_color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let count = samples.len() as u32;
    if count == 0 || area.is_empty() {
        return;
    }
    let edge = |i: u32| -> i32 { area.x + (u64::from(area.width) * u64::from(i) / u64::from(count)) as i32 };
    for (i, sample) in samples.iter().enumerate() {
        let i = i as u32;
        let (start, end) = (edge(i), edge(i + 1));
        if end <= start {
            continue;
        }
        let color = if *sample == 1.0 { on_color } else { off_color };
        fill_box(target, LayoutBox::new(start, area.y, (end - start) as u32, area.height), color);
    }
}
