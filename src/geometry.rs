//! Geometry primitives shared by gauges, charts and the layout solvers.
//!
//! All angles are in degrees, measured clockwise from the 3 o'clock position in
//! screen space (y grows downwards). This is the convention `embedded-graphics`
//! uses for `Arc`, so the values can be handed straight to the primitives.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Gauge Geometry
// =============================================================================

/// Ring gauges start at 12 o'clock.
pub const RING_START_DEG: f32 = -90.0;

/// Full circle sweep for ring gauges.
pub const RING_RANGE_DEG: f32 = 360.0;

/// Arc gauges start at the bottom-left (7:30 position).
pub const ARC_START_DEG: f32 = 135.0;

/// Arc gauges sweep three quarters of a circle through the top.
pub const ARC_RANGE_DEG: f32 = 270.0;

const _: () = assert!(ARC_RANGE_DEG < RING_RANGE_DEG);

/// Percentage of `value` within `[min, max]`, clamped to `0..=100`.
///
/// A degenerate range (`max == min`) yields 0 instead of dividing by zero.
pub fn percent_of(
    value: f32,
    min: f32,
    max: f32,
) -> f32 {
    let range = max - min;
    if range == 0.0 || !range.is_finite() || !value.is_finite() {
        return 0.0;
    }
    ((value - min) / range * 100.0).clamp(0.0, 100.0)
}

/// Angle swept by a gauge showing `percent` of a `range_deg` track.
pub fn sweep_degrees(
    percent: f32,
    range_deg: f32,
) -> f32 {
    percent.clamp(0.0, 100.0) / 100.0 * range_deg
}

/// Filled width of a linear bar showing `percent` of `track_width`.
pub fn fill_width(
    percent: f32,
    track_width: u32,
) -> u32 {
    let width = (percent.clamp(0.0, 100.0) / 100.0 * track_width as f32).round() as u32;
    width.min(track_width)
}

/// Map `value` into `0.0..=1.0` relative to `[min, max]`.
///
/// A flat range maps every value to the middle (0.5).
pub fn normalize(
    value: f32,
    min: f32,
    max: f32,
) -> f32 {
    let range = max - min;
    if range.abs() <= f32::EPSILON {
        return 0.5;
    }
    ((value - min) / range).clamp(0.0, 1.0)
}

/// Point on a circle of `radius` around `center` at `angle_deg`.
pub fn point_on_circle(
    center: Point,
    radius: f32,
    angle_deg: f32,
) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        center.x + (radius * rad.cos()).round() as i32,
        center.y + (radius * rad.sin()).round() as i32,
    )
}

// =============================================================================
// Layout Boxes
// =============================================================================

/// Axis-aligned rectangle produced by the layout solvers.
///
/// Width and height are unsigned, so a box can never have negative extent;
/// solvers clamp to zero and callers skip empty boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl LayoutBox {
    pub const fn new(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Self {
        Self { x, y, width, height }
    }

    /// Box at the origin covering `size`.
    pub const fn from_size(size: Size) -> Self { Self::new(0, 0, size.width, size.height) }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> i32 { self.x + self.width as i32 }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> i32 { self.y + self.height as i32 }

    /// Center point (rounded towards the top-left).
    #[inline]
    pub const fn center(&self) -> Point { Point::new(self.x + self.width as i32 / 2, self.y + self.height as i32 / 2) }

    #[inline]
    pub const fn size(&self) -> Size { Size::new(self.width, self.height) }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(
        &self,
        dx: u32,
        dy: u32,
    ) -> Self {
        let width = self.width.saturating_sub(dx.saturating_mul(2));
        let height = self.height.saturating_sub(dy.saturating_mul(2));
        let dx = dx.min(self.width / 2);
        let dy = dy.min(self.height / 2);
        Self::new(self.x + dx as i32, self.y + dy as i32, width, height)
    }

    /// Box of `size` centered inside `self`, clamped so it never exceeds `self`.
    pub fn centered(
        &self,
        size: Size,
    ) -> Self {
        let width = size.width.min(self.width);
        let height = size.height.min(self.height);
        Self::new(
            self.x + ((self.width - width) / 2) as i32,
            self.y + ((self.height - height) / 2) as i32,
            width,
            height,
        )
    }

    /// Whether two boxes share at least one pixel.
    pub const fn overlaps(
        &self,
        other: &Self,
    ) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || self.right() <= other.x
            || other.right() <= self.x
            || self.bottom() <= other.y
            || other.bottom() <= self.y)
    }

    /// Whether `other` lies entirely inside `self`.
    pub const fn contains_box(
        &self,
        other: &Self,
    ) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }

    pub const fn to_rectangle(&self) -> Rectangle { Rectangle::new(Point::new(self.x, self.y), self.size()) }
}

impl From<Rectangle> for LayoutBox {
    fn from(rect: Rectangle) -> Self { Self::new(rect.top_left.x, rect.top_left.y, rect.size.width, rect.size.height) }
}
