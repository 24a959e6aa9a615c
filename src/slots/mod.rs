//! Slot layout managers.
//!
//! A slot layout partitions the canvas into a fixed number of rectangles.
//! The formula depends only on the canvas size and the layout's own
//! parameters, never on widget content, so slot rectangles are stable across
//! render cycles.
//!
//! | Layout | Slots | Arrangement |
//! |---|---|---|
//! | [`Grid`] | rows x cols | uniform cells, row-major |
//! | [`Hero`] | 1 + footer | large top region, equal footer cells |
//! | [`Split`] | 2 | left/right or top/bottom by ratio |
//! | [`ThreeColumn`] | ratios.len() | columns by explicit ratios |

mod dashboard;
mod grid;
mod hero;
mod split;

use core::fmt;

pub use dashboard::Dashboard;
use embedded_graphics::prelude::Size;
pub use grid::Grid;
pub use hero::Hero;
pub use split::{Split, SplitDirection, ThreeColumn};

use crate::geometry::LayoutBox;
pub(crate) use crate::layout::uniform_span;

/// Tolerance for ratio lists that must sum to 1.0.
pub const RATIO_TOLERANCE: f32 = 0.01;

/// Canvas partitioning strategy.
pub trait SlotLayout: fmt::Debug + Send + Sync {
    /// Layout tag for logs.
    fn name(&self) -> &'static str;

    fn slot_count(&self) -> usize;

    /// Rectangle of slot `index` on a canvas of `canvas` size, `None` when
    /// the index is out of range.
    fn slot_rect(
        &self,
        canvas: Size,
        index: usize,
    ) -> Option<LayoutBox>;

    /// Every slot rectangle in index order.
    fn slot_rects(
        &self,
        canvas: Size,
    ) -> Vec<LayoutBox> {
        (0..self.slot_count()).filter_map(|i| self.slot_rect(canvas, i)).collect()
    }
}

/// Split `length` pixels into two spans of `ratio` and `1 - ratio` with `gap`
/// between them.
pub(crate) fn ratio_spans(
    start: i32,
    length: u32,
    ratio: f32,
    gap: u32,
) -> [(i32, u32); 2] {
    let usable = length.saturating_sub(gap);
    let first = ((usable as f32 * ratio).round() as u32).min(usable);
    let second = usable - first;
    let offset = first.saturating_add(gap).min(i32::MAX as u32);
    [(start, first), (start.saturating_add(offset as i32), second)]
}
