use embedded_graphics::prelude::Size;

use super::{SlotLayout, uniform_span};
use crate::config::{DEFAULT_GAP, DEFAULT_PADDING, MAX_SLOTS};
use crate::error::ConfigError;
use crate::geometry::LayoutBox;

/// Uniform `rows x cols` grid. Slots are numbered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    padding: u32,
    gap: u32,
}

impl Grid {
    pub fn new(
        rows: u32,
        cols: u32,
    ) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        let slots = u64::from(rows) * u64::from(cols);
        if slots > MAX_SLOTS as u64 {
            return Err(ConfigError::TooManySlots { slots });
        }
        Ok(Self {
            rows,
            cols,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        })
    }

    /// Outer padding and inter-cell gap.
    pub const fn spacing(
        mut self,
        padding: u32,
        gap: u32,
    ) -> Self {
        self.padding = padding;
        self.gap = gap;
        self
    }

    pub const fn grid_2x2() -> Self { Self { rows: 2, cols: 2, padding: DEFAULT_PADDING, gap: DEFAULT_GAP } }

    pub const fn grid_2x3() -> Self { Self { rows: 2, cols: 3, padding: DEFAULT_PADDING, gap: DEFAULT_GAP } }

    pub const fn grid_3x2() -> Self { Self { rows: 3, cols: 2, padding: DEFAULT_PADDING, gap: DEFAULT_GAP } }

    /// 3x3 uses tighter spacing so the nine cells stay readable.
    pub const fn grid_3x3() -> Self { Self { rows: 3, cols: 3, padding: 6, gap: 6 } }

    pub const fn rows(&self) -> u32 { self.rows }

    pub const fn cols(&self) -> u32 { self.cols }
}

impl SlotLayout for Grid {
    fn name(&self) -> &'static str { "grid" }

    fn slot_count(&self) -> usize { self.rows.saturating_mul(self.cols) as usize }

    fn slot_rect(
        &self,
        canvas: Size,
        index: usize,
    ) -> Option<LayoutBox> {
        if index >= self.slot_count() {
            return None;
        }
        let inner = LayoutBox::from_size(canvas).inset(self.padding, self.padding);
        let row = index as u32 / self.cols;
        let col = index as u32 % self.cols;
        let (x, width) = uniform_span(inner.x, inner.width, self.cols, self.gap, col);
        let (y, height) = uniform_span(inner.y, inner.height, self.rows, self.gap, row);
        Some(LayoutBox::new(x, y, width, height))
    }
}
