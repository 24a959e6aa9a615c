//! Row / column / grid partitioning for component containers.
//!
//! Children are measured first: a child with a fixed extent on the main axis
//! keeps it, a flexible child (no intrinsic extent, or wrapped in an expand
//! node) shares whatever is left. Space is handed out greedily in child order,
//! so when a container is too small the trailing children are shrunk and then
//! omitted. Boxes never overlap and never leave the container.

use log::trace;

use crate::geometry::LayoutBox;

/// Main axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
    /// Fill the whole cross extent.
    Stretch,
}

/// Main-axis distribution of free space when no child is flexible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Measured child of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackItem {
    /// Fixed main-axis extent, `None` for flexible children.
    pub main: Option<u32>,
    /// Preferred cross-axis extent, `None` to stretch.
    pub cross: Option<u32>,
    /// Share of the free space for flexible children (treated as at least 1).
    pub weight: u32,
}

impl StackItem {
    pub const fn fixed(
        main: u32,
        cross: Option<u32>,
    ) -> Self {
        Self { main: Some(main), cross, weight: 0 }
    }

    pub const fn flexible(
        weight: u32,
        cross: Option<u32>,
    ) -> Self {
        Self { main: None, cross, weight }
    }

    const fn is_flexible(&self) -> bool { self.main.is_none() }
}

/// Stack container parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackSpec {
    pub axis: Axis,
    pub gap: u32,
    pub padding: u32,
    pub align: Align,
    pub justify: Justify,
}

/// Partition `container` among `items`.
///
/// The result is index-aligned with `items`; `None` marks an omitted child.
pub fn layout_stack(
    container: LayoutBox,
    spec: &StackSpec,
    items: &[StackItem],
) -> Vec<Option<LayoutBox>> {
    let inner = container.inset(spec.padding, spec.padding);
    let (main_len, cross_len) = match spec.axis {
        Axis::Horizontal => (inner.width, inner.height),
        Axis::Vertical => (inner.height, inner.width),
    };

    // Pass 1: main-axis sizes. Fixed children are served in order; the one
    // that overflows gets the remainder and everything fixed after it is dropped.
    let flexible_count = items.iter().filter(|i| i.is_flexible()).count() as u32;
    let mut sizes: Vec<Option<u32>> = vec![None; items.len()];
    let mut used = spec.gap * flexible_count.saturating_sub(1);
    let mut visible = flexible_count;
    let mut exhausted = used >= main_len && flexible_count > 0;

    for (idx, item) in items.iter().enumerate() {
        let Some(want) = item.main else { continue };
        if exhausted {
            trace!("stack: child {idx} omitted, no space left");
            continue;
        }
        let gap = if visible > 0 { spec.gap } else { 0 };
        let remaining = main_len.saturating_sub(used + gap);
        if remaining == 0 {
            exhausted = true;
            trace!("stack: child {idx} omitted, no space left");
            continue;
        }
        let size = want.min(remaining);
        if size < want {
            exhausted = true;
        }
        sizes[idx] = Some(size);
        used += gap + size;
        visible += 1;
    }

    // Pass 2: flexible children share the free space by weight.
    let mut free = main_len.saturating_sub(used);
    if flexible_count > 0 {
        let total_weight: u32 = items.iter().filter(|i| i.is_flexible()).map(|i| i.weight.max(1)).sum();
        let mut handed_out = 0;
        let mut weight_seen = 0;
        for (idx, item) in items.iter().enumerate() {
            if !item.is_flexible() {
                continue;
            }
            weight_seen += item.weight.max(1);
            // Cumulative rounding so the shares add up to `free` exactly.
            let until = (u64::from(free) * u64::from(weight_seen) / u64::from(total_weight)) as u32;
            sizes[idx] = Some(until - handed_out);
            handed_out = until;
        }
        free = 0;
    }

    // Pass 3: positions.
    let placed = sizes.iter().filter(|s| s.is_some()).count() as u32;
    let (mut cursor, extra_gap) = match spec.justify {
        Justify::Start => (0, 0),
        Justify::Center => (free / 2, 0),
        Justify::End => (free, 0),
        Justify::SpaceBetween if placed > 1 => (0, free / (placed - 1)),
        Justify::SpaceBetween => (0, 0),
    };

    let mut out = Vec::with_capacity(items.len());
    let mut first = true;
    for (item, size) in items.iter().zip(sizes) {
        let Some(main) = size else {
            out.push(None);
            continue;
        };
        if !first {
            cursor += spec.gap + extra_gap;
        }
        first = false;
        // Gaps alone can exceed a tiny container; pin degenerate children to the edge.
        cursor = cursor.min(main_len);
        let main = main.min(main_len - cursor);

        let cross = match (spec.align, item.cross) {
            (Align::Stretch, _) | (_, None) => cross_len,
            (_, Some(c)) => c.min(cross_len),
        };
        let cross_offset = match spec.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => (cross_len - cross) / 2,
            Align::End => cross_len - cross,
        };

        let rect = match spec.axis {
            Axis::Horizontal => LayoutBox::new(inner.x + cursor as i32, inner.y + cross_offset as i32, main, cross),
            Axis::Vertical => LayoutBox::new(inner.x + cross_offset as i32, inner.y + cursor as i32, cross, main),
        };
        out.push(Some(rect));
        cursor += main;
    }
    out
}

/// Split `length` pixels starting at `start` into `parts` equal spans
/// separated by `gap`, returning span `index` as `(offset, size)`.
///
/// Leftover pixels from integer division stay unused at the far end.
pub fn uniform_span(
    start: i32,
    length: u32,
    parts: u32,
    gap: u32,
    index: u32,
) -> (i32, u32) {
    let parts = parts.max(1);
    let usable = length.saturating_sub(gap.saturating_mul(parts - 1));
    let size = usable / parts;
    let offset = index.saturating_mul(size.saturating_add(gap)).min(i32::MAX as u32);
    (start.saturating_add(offset as i32), size)
}

/// Uniform grid cells for `count` children in `cols` columns, row-major.
pub fn layout_grid(
    container: LayoutBox,
    count: usize,
    cols: u32,
    gap: u32,
    padding: u32,
) -> Vec<LayoutBox> {
    let cols = cols.max(1);
    let rows = (count as u32).div_ceil(cols).max(1);
    let inner = container.inset(padding, padding);
    (0..count as u32)
        .map(|i| {
            let (x, width) = uniform_span(inner.x, inner.width, cols, gap, i % cols);
            let (y, height) = uniform_span(inner.y, inner.height, rows, gap, i / cols);
            LayoutBox::new(x, y, width, height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(justify: Justify) -> StackSpec {
        StackSpec {
            axis: Axis::Horizontal,
            gap: 4,
            padding: 0,
            align: Align::Center,
            justify,
        }
    }

    fn assert_disjoint(
        container: LayoutBox,
        boxes: &[Option<LayoutBox>],
    ) {
        let boxes: Vec<LayoutBox> = boxes.iter().flatten().copied().collect();
        for (i, a) in boxes.iter().enumerate() {
            assert!(container.contains_box(a), "box {i} {a:?} escapes {container:?}");
            for b in &boxes[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_fixed_children_packed_from_start() {
        let container = LayoutBox::new(0, 0, 100, 20);
        let items = [StackItem::fixed(30, Some(10)), StackItem::fixed(20, Some(20))];
        let boxes = layout_stack(container, &row(Justify::Start), &items);
        assert_eq!(boxes[0], Some(LayoutBox::new(0, 5, 30, 10)));
        assert_eq!(boxes[1], Some(LayoutBox::new(34, 0, 20, 20)));
    }

    #[test]
    fn test_flexible_child_takes_remaining_space() {
        let container = LayoutBox::new(0, 0, 100, 20);
        let items = [StackItem::fixed(30, None), StackItem::flexible(1, None), StackItem::fixed(10, None)];
        let boxes = layout_stack(container, &row(Justify::Center), &items);
        // 100 - 30 - 10 - 2 gaps
        assert_eq!(boxes[1].map(|b| b.width), Some(52));
        assert_eq!(boxes[2].map(|b| b.right()), Some(100), "justify ignored with a flexible child");
        assert_disjoint(container, &boxes);
    }

    #[test]
    fn test_weights_split_free_space() {
        let container = LayoutBox::new(0, 0, 90, 10);
        let spec = StackSpec { gap: 0, ..row(Justify::Start) };
        let items = [StackItem::flexible(1, None), StackItem::flexible(2, None)];
        let boxes = layout_stack(container, &spec, &items);
        assert_eq!(boxes[0].map(|b| b.width), Some(30));
        assert_eq!(boxes[1].map(|b| b.width), Some(60));
    }

    #[test]
    fn test_space_between_pins_edges() {
        let container = LayoutBox::new(10, 0, 100, 10);
        let items = [StackItem::fixed(20, None), StackItem::fixed(30, None)];
        let boxes = layout_stack(container, &row(Justify::SpaceBetween), &items);
        assert_eq!(boxes[0].map(|b| b.x), Some(10));
        assert_eq!(boxes[1].map(|b| b.right()), Some(110));
    }

    #[test]
    fn test_overflow_shrinks_then_omits() {
        let container = LayoutBox::new(0, 0, 10, 50);
        let spec = StackSpec {
            axis: Axis::Vertical,
            gap: 2,
            padding: 0,
            align: Align::Stretch,
            justify: Justify::Start,
        };
        let items = [StackItem::fixed(6, None), StackItem::fixed(20, None), StackItem::fixed(6, None)];
        let boxes = layout_stack(LayoutBox::new(0, 0, 10, 20), &spec, &items);
        assert_eq!(boxes[0].map(|b| b.height), Some(6));
        assert_eq!(boxes[1].map(|b| b.height), Some(12), "overflowing child gets the remainder");
        assert_eq!(boxes[2], None, "children after the overflow are omitted");
        assert_disjoint(container, &boxes);
    }

    #[test]
    fn test_zero_sized_container() {
        let items = [StackItem::fixed(6, None), StackItem::flexible(1, None)];
        let boxes = layout_stack(LayoutBox::new(0, 0, 0, 0), &row(Justify::Start), &items);
        assert_eq!(boxes[0], None);
        assert!(boxes[1].is_some_and(|b| b.is_empty()));
    }

    #[test]
    fn test_grid_cells() {
        let cells = layout_grid(LayoutBox::new(0, 0, 100, 100), 3, 2, 4, 0);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], LayoutBox::new(0, 0, 48, 48));
        assert_eq!(cells[1], LayoutBox::new(52, 0, 48, 48));
        assert_eq!(cells[2], LayoutBox::new(0, 52, 48, 48));
    }

    #[test]
    fn test_uniform_span() {
        assert_eq!(uniform_span(8, 224, 2, 8, 0), (8, 108));
        assert_eq!(uniform_span(8, 224, 2, 8, 1), (124, 108));
    }

    #[test]
    fn test_uniform_span_saturates_huge_gap() {
        assert_eq!(uniform_span(0, 240, 3, u32::MAX, 2), (i32::MAX, 0));
        assert_eq!(uniform_span(0, 240, u32::MAX, 0, 0), (0, 0));
    }
}
