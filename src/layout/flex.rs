//! Flex solver for bar-style gauges.
//!
//! Decides between two discrete arrangements of an optional icon, an optional
//! label, an optional value and a mandatory bar:
//!
//! ```text
//! Horizontal                      Vertical
//! +---------------------------+   +-----------+
//! | [i] LABEL          VALUE  |   |   VALUE   |
//! | ========================= |   | ========= |
//! +---------------------------+   |   LABEL   |
//!                                 +-----------+
//! ```
//!
//! Horizontal is chosen whenever icon, label and value fit side by side in the
//! padded width (an exact fit counts as fitting). Vertical mode drops the
//! icon. When the vertical stack is too tall the label goes first, then the
//! value; the bar is always kept.
//!
//! The solver is a pure function of its inputs.

use embedded_graphics::prelude::Size;
use log::{trace, warn};

use crate::geometry::LayoutBox;

// =============================================================================
// Constants
// =============================================================================

/// Container padding as a fraction of its width (horizontal) and height (vertical).
pub const PADDING_PERCENT: f32 = 0.06;

/// Space between neighbouring regions.
pub const REGION_GAP: u32 = 4;

/// Bar height in vertical mode as a fraction of the padded height.
pub const VERTICAL_BAR_FRACTION: f32 = 0.2;

/// Thinnest bar the solver produces.
pub const MIN_BAR_HEIGHT: u32 = 2;

const _: () = assert!(PADDING_PERCENT < 0.5);
const _: () = assert!(VERTICAL_BAR_FRACTION > 0.0 && VERTICAL_BAR_FRACTION < 1.0);

// =============================================================================
// Types
// =============================================================================

/// Arrangement picked by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexMode {
    Horizontal,
    Vertical,
}

/// Named region of a bar gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Icon,
    Label,
    Value,
    Bar,
}

/// Measured size requirements of the regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarGaugeRequest {
    /// Icon edge length.
    pub icon: Option<u32>,
    /// Measured label text.
    pub label: Option<Size>,
    /// Measured value text.
    pub value: Option<Size>,
    /// Preferred bar thickness.
    pub bar_height: u32,
}

/// Solver output. Absent regions are `None`; callers check before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexLayout {
    pub mode: FlexMode,
    pub icon: Option<LayoutBox>,
    pub label: Option<LayoutBox>,
    pub value: Option<LayoutBox>,
    pub bar: LayoutBox,
}

impl FlexLayout {
    pub fn get(
        &self,
        region: Region,
    ) -> Option<LayoutBox> {
        match region {
            Region::Icon => self.icon,
            Region::Label => self.label,
            Region::Value => self.value,
            Region::Bar => Some(self.bar).filter(|b| !b.is_empty()),
        }
    }

    /// Every present region.
    pub fn regions(&self) -> impl Iterator<Item = (Region, LayoutBox)> + '_ {
        [Region::Icon, Region::Label, Region::Value, Region::Bar]
            .into_iter()
            .filter_map(|r| self.get(r).map(|b| (r, b)))
    }
}

// =============================================================================
// Solver
// =============================================================================

/// Padded content area of a bar gauge container.
pub fn content_area(container: LayoutBox) -> LayoutBox {
    let pad_x = (container.width as f32 * PADDING_PERCENT).round() as u32;
    let pad_y = (container.height as f32 * PADDING_PERCENT).round() as u32;
    container.inset(pad_x, pad_y)
}

/// Width needed to put icon, label and value on one line.
pub fn horizontal_width(request: &BarGaugeRequest) -> u32 {
    let parts = [request.icon, request.label.map(|s| s.width), request.value.map(|s| s.width)];
    let present: Vec<u32> = parts.into_iter().flatten().filter(|w| *w > 0).collect();
    present.iter().sum::<u32>() + REGION_GAP * (present.len() as u32).saturating_sub(1)
}

/// Lay out a bar gauge inside `container`.
pub fn layout_bar_gauge(
    container: LayoutBox,
    request: &BarGaugeRequest,
) -> FlexLayout {
    let inner = content_area(container);
    let needed = horizontal_width(request);

    if needed > inner.width {
        trace!("flex: vertical ({needed}px needed, {}px available)", inner.width);
        layout_vertical(inner, request)
    } else {
        trace!("flex: horizontal ({needed}px needed, {}px available)", inner.width);
        layout_horizontal(inner, request)
    }
}

fn layout_horizontal(
    inner: LayoutBox,
    request: &BarGaugeRequest,
) -> FlexLayout {
    let label = request.label.filter(|s| s.width > 0);
    let value = request.value.filter(|s| s.width > 0);
    let text_h = label.map_or(0, |s| s.height).max(value.map_or(0, |s| s.height));
    let mut icon = request.icon.filter(|i| *i > 0);

    let bar_h = request.bar_height.max(MIN_BAR_HEIGHT).min(inner.height);
    let row_room = inner.height.saturating_sub(bar_h + REGION_GAP);

    // The icon shrinks to the row; text that does not fit drops the whole row.
    let mut row_h = text_h.max(icon.unwrap_or(0)).min(row_room);
    if text_h > row_room {
        if label.is_some() || value.is_some() {
            warn!("flex: {}px too short for a text row, drawing bar only", inner.height);
        }
        icon = None;
        row_h = 0;
    }
    let has_row = row_h > 0 && (label.is_some() || value.is_some() || icon.is_some());
    let block_h = if has_row { row_h + REGION_GAP + bar_h } else { bar_h };
    let top = inner.y + ((inner.height - block_h) / 2) as i32;

    let mut layout = FlexLayout {
        mode: FlexMode::Horizontal,
        icon: None,
        label: None,
        value: None,
        bar: LayoutBox::new(inner.x, top + (block_h - bar_h) as i32, inner.width, bar_h),
    };
    if !has_row {
        return layout;
    }

    let center_in_row = |h: u32| top + ((row_h - h.min(row_h)) / 2) as i32;
    let mut text_x = inner.x;
    if let Some(size) = icon {
        let size = size.min(row_h);
        layout.icon = Some(LayoutBox::new(inner.x, center_in_row(size), size, size));
        text_x += (size + REGION_GAP) as i32;
    }
    let mut text_right = inner.right();
    if let Some(v) = value {
        let x = inner.right() - v.width as i32;
        layout.value = Some(LayoutBox::new(x, center_in_row(v.height), v.width, v.height.min(row_h)));
        text_right = x - REGION_GAP as i32;
    }
    if let Some(l) = label {
        let room = (text_right - text_x).max(0) as u32;
        let width = l.width.min(room);
        if width > 0 {
            layout.label = Some(LayoutBox::new(text_x, center_in_row(l.height), width, l.height.min(row_h)));
        }
    }
    layout
}

fn layout_vertical(
    inner: LayoutBox,
    request: &BarGaugeRequest,
) -> FlexLayout {
    let mut label = request.label.filter(|s| s.width > 0);
    let mut value = request.value.filter(|s| s.width > 0);

    let bar_cap = request.bar_height.max(MIN_BAR_HEIGHT) * 2;
    let bar_h = ((inner.height as f32 * VERTICAL_BAR_FRACTION).round() as u32)
        .clamp(MIN_BAR_HEIGHT, bar_cap)
        .min(inner.height);

    let stack_height = |value: Option<Size>, label: Option<Size>| -> u32 {
        bar_h + value.map_or(0, |s| s.height + REGION_GAP) + label.map_or(0, |s| s.height + REGION_GAP)
    };
    if label.is_some() && stack_height(value, label) > inner.height {
        warn!("flex: dropping label, {}px too short", inner.height);
        label = None;
    }
    if value.is_some() && stack_height(value, label) > inner.height {
        warn!("flex: dropping value, {}px too short", inner.height);
        value = None;
    }

    let total = stack_height(value, label);
    let mut y = inner.y + ((inner.height - total) / 2) as i32;
    let centered = |size: Size, y: i32| {
        let width = size.width.min(inner.width);
        LayoutBox::new(inner.x + ((inner.width - width) / 2) as i32, y, width, size.height)
    };

    let mut layout = FlexLayout {
        mode: FlexMode::Vertical,
        icon: None,
        label: None,
        value: None,
        bar: LayoutBox::default(),
    };
    if let Some(v) = value {
        layout.value = Some(centered(v, y));
        y += (v.height + REGION_GAP) as i32;
    }
    layout.bar = LayoutBox::new(inner.x, y, inner.width, bar_h);
    y += bar_h as i32;
    if let Some(l) = label {
        layout.label = Some(centered(l, y + REGION_GAP as i32));
    }
    layout
}
