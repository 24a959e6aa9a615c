use embedded_graphics::prelude::Size;
use serde::{Deserialize, Serialize};

use super::{RATIO_TOLERANCE, SlotLayout, ratio_spans};
use crate::config::{DEFAULT_GAP, DEFAULT_PADDING, MAX_SLOTS};
use crate::error::ConfigError;
use crate::geometry::LayoutBox;

// =============================================================================
// Two-way Split
// =============================================================================

/// Axis along which a [`Split`] divides the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Slot 0 left, slot 1 right.
    #[default]
    Columns,
    /// Slot 0 top, slot 1 bottom.
    Rows,
}

/// Two slots divided by `ratio` (share of slot 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    direction: SplitDirection,
    ratio: f32,
    padding: u32,
    gap: u32,
}

impl Split {
    pub fn new(
        direction: SplitDirection,
        ratio: f32,
    ) -> Result<Self, ConfigError> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(ConfigError::RatioRange { ratio });
        }
        Ok(Self {
            direction,
            ratio,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        })
    }

    pub const fn spacing(
        mut self,
        padding: u32,
        gap: u32,
    ) -> Self {
        self.padding = padding;
        self.gap = gap;
        self
    }

    pub const fn direction(&self) -> SplitDirection { self.direction }
}

impl SlotLayout for Split {
    fn name(&self) -> &'static str {
        match self.direction {
            SplitDirection::Columns => "split_columns",
            SplitDirection::Rows => "split_rows",
        }
    }

    fn slot_count(&self) -> usize { 2 }

    fn slot_rect(
        &self,
        canvas: Size,
        index: usize,
    ) -> Option<LayoutBox> {
        let inner = LayoutBox::from_size(canvas).inset(self.padding, self.padding);
        match self.direction {
            SplitDirection::Columns => {
                let (x, width) = *ratio_spans(inner.x, inner.width, self.ratio, self.gap).get(index)?;
                Some(LayoutBox::new(x, inner.y, width, inner.height))
            }
            SplitDirection::Rows => {
                let (y, height) = *ratio_spans(inner.y, inner.height, self.ratio, self.gap).get(index)?;
                Some(LayoutBox::new(inner.x, y, inner.width, height))
            }
        }
    }
}

// =============================================================================
// Ratio Columns
// =============================================================================

/// Columns with explicit width ratios summing to 1.0.
///
/// Column edges are placed at rounded cumulative ratios, so the columns tile
/// the usable width exactly with no gaps lost to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeColumn {
    ratios: Vec<f32>,
    padding: u32,
    gap: u32,
}

impl ThreeColumn {
    pub fn new(ratios: Vec<f32>) -> Result<Self, ConfigError> {
        if ratios.is_empty() {
            return Err(ConfigError::NoSlots);
        }
        if ratios.len() > MAX_SLOTS {
            return Err(ConfigError::TooManySlots { slots: ratios.len() as u64 });
        }
        if let Some(&ratio) = ratios.iter().find(|r| !(**r > 0.0 && **r <= 1.0)) {
            return Err(ConfigError::RatioRange { ratio });
        }
        let sum: f32 = ratios.iter().sum();
        if (sum - 1.0).abs() > RATIO_TOLERANCE {
            return Err(ConfigError::RatioSum { sum });
        }
        Ok(Self {
            ratios,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        })
    }

    pub const fn spacing(
        mut self,
        padding: u32,
        gap: u32,
    ) -> Self {
        self.padding = padding;
        self.gap = gap;
        self
    }

    pub fn ratios(&self) -> &[f32] { &self.ratios }
}

impl Default for ThreeColumn {
    fn default() -> Self {
        Self {
            ratios: vec![0.33, 0.34, 0.33],
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        }
    }
}

impl SlotLayout for ThreeColumn {
    fn name(&self) -> &'static str { "three_column" }

    fn slot_count(&self) -> usize { self.ratios.len() }

    fn slot_rect(
        &self,
        canvas: Size,
        index: usize,
    ) -> Option<LayoutBox> {
        if index >= self.ratios.len() {
            return None;
        }
        let inner = LayoutBox::from_size(canvas).inset(self.padding, self.padding);
        let columns = self.ratios.len() as u32;
        let usable = inner.width.saturating_sub(self.gap.saturating_mul(columns - 1));
        // Normalize so a sum within tolerance of 1.0 still ends on the edge
        let total: f32 = self.ratios.iter().sum();
        let edge = |i: usize| -> u32 {
            if i == self.ratios.len() {
                return usable;
            }
            let cumulative: f32 = self.ratios[..i].iter().sum();
            ((cumulative / total * usable as f32).round() as u32).min(usable)
        };
        let start = edge(index);
        let end = edge(index + 1).max(start);
        let offset = start.saturating_add((index as u32).saturating_mul(self.gap)).min(i32::MAX as u32);
        let x = inner.x.saturating_add(offset as i32);
        Some(LayoutBox::new(x, inner.y, end - start, inner.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::tests::assert_disjoint_within;

    const CANVAS: Size = Size::new(240, 240);

    #[test]
    fn test_split_columns() {
        let split = Split::new(SplitDirection::Columns, 0.5).expect("valid split");
        assert_eq!(split.slot_rect(CANVAS, 0), Some(LayoutBox::new(8, 8, 108, 224)));
        assert_eq!(split.slot_rect(CANVAS, 1), Some(LayoutBox::new(124, 8, 108, 224)));
        assert_eq!(split.slot_rect(CANVAS, 2), None);
    }

    #[test]
    fn test_split_rows() {
        let split = Split::new(SplitDirection::Rows, 0.25).expect("valid split");
        let top = split.slot_rect(CANVAS, 0).expect("top");
        let bottom = split.slot_rect(CANVAS, 1).expect("bottom");
        assert_eq!(top.width, 224);
        assert_eq!(top.height, 54);
        assert_eq!(bottom.y, top.bottom() + 8);
        assert_eq!(top.height + bottom.height, 216);
        assert_disjoint_within(&split, CANVAS);
    }

    #[test]
    fn test_split_ratio_validated() {
        assert!(Split::new(SplitDirection::Columns, 0.0).is_err());
        assert!(Split::new(SplitDirection::Rows, 1.5).is_err());
    }

    #[test]
    fn test_three_column_default() {
        let layout = ThreeColumn::default();
        let rects = layout.slot_rects(CANVAS);
        assert_eq!(rects.len(), 3);
        // usable width 224 - 2 * 8 = 208
        assert_eq!(rects.iter().map(|r| r.width).sum::<u32>(), 208);
        assert!(rects[1].width >= rects[0].width, "middle column is the widest");
        assert_eq!(rects[2].right(), 232, "last column ends on the padding edge");
        assert_disjoint_within(&layout, CANVAS);
    }

    #[test]
    fn test_columns_follow_ratios() {
        let layout = ThreeColumn::new(vec![0.5, 0.25, 0.25]).expect("valid ratios").spacing(0, 0);
        let widths: Vec<u32> = layout.slot_rects(Size::new(200, 100)).iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![100, 50, 50]);
    }

    #[test]
    fn test_ratio_validation() {
        assert_eq!(ThreeColumn::new(vec![]), Err(ConfigError::NoSlots));
        assert!(matches!(
            ThreeColumn::new(vec![0.5, 0.6]),
            Err(ConfigError::RatioSum { .. })
        ));
        assert!(matches!(
            ThreeColumn::new(vec![1.2, -0.2]),
            Err(ConfigError::RatioRange { .. })
        ));
        assert!(ThreeColumn::new(vec![0.334, 0.333, 0.333]).is_ok());
        assert!(ThreeColumn::new(vec![1.0]).is_ok());
    }
}
