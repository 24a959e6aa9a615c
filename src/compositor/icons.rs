//! Built-in icon glyphs drawn with primitives.
//!
//! Icons are vector shapes scaled to the requested square, so they stay crisp
//! from 10px footer cells to full-canvas heroes. Unknown names fall back to a
//! plain ring.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, Triangle};

use super::primitives::inside_stroke;
use crate::geometry::LayoutBox;

/// Names with a dedicated glyph.
pub const ICON_NAMES: [&str; 9] = [
    "thermometer",
    "lightbulb",
    "battery",
    "flash",
    "water",
    "lock",
    "walk",
    "fire",
    "heart",
];

/// Smallest square an icon is drawn into.
pub const MIN_ICON_SIZE: u32 = 6;

/// Whether `name` has a dedicated glyph. Accepts an optional `mdi:` prefix.
pub fn is_known(name: &str) -> bool { ICON_NAMES.contains(&strip_prefix(name)) }

fn strip_prefix(name: &str) -> &str { name.strip_prefix("mdi:").unwrap_or(name) }

/// Unit square mapped onto the icon's pixel box.
struct Grid {
    origin: Point,
    size: f32,
}

impl Grid {
    /// Point at fractional coordinates of the square.
    fn at(
        &self,
        fx: f32,
        fy: f32,
    ) -> Point {
        self.origin + Point::new((fx * self.size).round() as i32, (fy * self.size).round() as i32)
    }

    fn len(
        &self,
        fraction: f32,
    ) -> u32 {
        ((fraction * self.size).round() as u32).max(1)
    }

    fn stroke(&self) -> u32 { self.len(0.1) }
}

/// Draw icon `name` centered in `area`, as large as the shorter side allows.
pub fn draw_icon<D>(
    target: &mut D,
    name: &str,
    area: LayoutBox,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let side = area.width.min(area.height);
    if side < MIN_ICON_SIZE {
        return;
    }
    let square = area.centered(Size::new(side, side));
    let g = Grid {
        origin: Point::new(square.x, square.y),
        size: (side - 1) as f32,
    };
    let fill = PrimitiveStyle::with_fill(color);
    // Outlines stroke inward so a glyph never grows past its square
    let line = inside_stroke(color, g.stroke());

    match strip_prefix(name) {
        "thermometer" => {
            Rectangle::with_corners(g.at(0.42, 0.05), g.at(0.58, 0.65))
                .into_styled(line)
                .draw(target)
                .ok();
            Circle::with_center(g.at(0.5, 0.78), g.len(0.36)).into_styled(fill).draw(target).ok();
        }
        "lightbulb" => {
            Circle::with_center(g.at(0.5, 0.38), g.len(0.6)).into_styled(line).draw(target).ok();
            Rectangle::with_corners(g.at(0.38, 0.72), g.at(0.62, 0.92))
                .into_styled(fill)
                .draw(target)
                .ok();
        }
        "battery" => {
            Rectangle::with_corners(g.at(0.25, 0.15), g.at(0.75, 0.95))
                .into_styled(line)
                .draw(target)
                .ok();
            Rectangle::with_corners(g.at(0.4, 0.05), g.at(0.6, 0.15))
                .into_styled(fill)
                .draw(target)
                .ok();
            Rectangle::with_corners(g.at(0.35, 0.5), g.at(0.65, 0.85))
                .into_styled(fill)
                .draw(target)
                .ok();
        }
        "flash" => {
            Triangle::new(g.at(0.6, 0.0), g.at(0.2, 0.55), g.at(0.55, 0.55))
                .into_styled(fill)
                .draw(target)
                .ok();
            Triangle::new(g.at(0.45, 0.45), g.at(0.8, 0.45), g.at(0.4, 1.0))
                .into_styled(fill)
                .draw(target)
                .ok();
        }
        "water" => {
            Triangle::new(g.at(0.5, 0.0), g.at(0.22, 0.6), g.at(0.78, 0.6))
                .into_styled(fill)
                .draw(target)
                .ok();
            Circle::with_center(g.at(0.5, 0.66), g.len(0.58)).into_styled(fill).draw(target).ok();
        }
        "lock" => {
            Arc::with_center(g.at(0.5, 0.4), g.len(0.5), 180.0.deg(), 180.0.deg())
                .into_styled(line)
                .draw(target)
                .ok();
            Rectangle::with_corners(g.at(0.2, 0.45), g.at(0.8, 0.95))
                .into_styled(fill)
                .draw(target)
                .ok();
        }
        "walk" => {
            Circle::with_center(g.at(0.55, 0.12), g.len(0.2)).into_styled(fill).draw(target).ok();
            for (from, to) in [
                ((0.5, 0.25), (0.45, 0.6)),
                ((0.45, 0.6), (0.25, 0.95)),
                ((0.45, 0.6), (0.7, 0.95)),
                ((0.48, 0.35), (0.25, 0.5)),
                ((0.48, 0.35), (0.72, 0.5)),
            ] {
                Line::new(g.at(from.0, from.1), g.at(to.0, to.1))
                    .into_styled(line)
                    .draw(target)
                    .ok();
            }
        }
        "fire" => {
            Triangle::new(g.at(0.5, 0.0), g.at(0.18, 0.65), g.at(0.82, 0.65))
                .into_styled(fill)
                .draw(target)
                .ok();
            Circle::with_center(g.at(0.5, 0.68), g.len(0.64)).into_styled(fill).draw(target).ok();
        }
        "heart" => {
            Circle::with_center(g.at(0.3, 0.35), g.len(0.44)).into_styled(fill).draw(target).ok();
            Circle::with_center(g.at(0.7, 0.35), g.len(0.44)).into_styled(fill).draw(target).ok();
            Triangle::new(g.at(0.1, 0.45), g.at(0.9, 0.45), g.at(0.5, 0.92))
                .into_styled(fill)
                .draw(target)
                .ok();
        }
        _ => {
            Circle::new(g.origin, side).into_styled(line).draw(target).ok();
        }
    }
}
