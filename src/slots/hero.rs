use embedded_graphics::prelude::Size;

use super::{SlotLayout, ratio_spans, uniform_span};
use crate::config::{DEFAULT_GAP, DEFAULT_PADDING, MAX_SLOTS};
use crate::error::ConfigError;
use crate::geometry::LayoutBox;

/// One large hero slot on top plus a row of equal footer slots.
///
/// Slot 0 is the hero; slots `1..=footer_slots` run left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hero {
    footer_slots: u32,
    hero_ratio: f32,
    padding: u32,
    gap: u32,
}

impl Hero {
    /// `hero_ratio` is the hero's share of the usable height, in `(0, 1)`.
    /// With no footer slots the hero takes the whole inner area.
    pub fn new(
        footer_slots: u32,
        hero_ratio: f32,
    ) -> Result<Self, ConfigError> {
        if !(hero_ratio > 0.0 && hero_ratio < 1.0) {
            return Err(ConfigError::RatioRange { ratio: hero_ratio });
        }
        let slots = u64::from(footer_slots) + 1;
        if slots > MAX_SLOTS as u64 {
            return Err(ConfigError::TooManySlots { slots });
        }
        Ok(Self {
            footer_slots,
            hero_ratio,
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
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            footer_slots: 3,
            hero_ratio: 0.7,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        }
    }
}

impl SlotLayout for Hero {
    fn name(&self) -> &'static str { "hero" }

    fn slot_count(&self) -> usize { 1 + self.footer_slots as usize }

    fn slot_rect(
        &self,
        canvas: Size,
        index: usize,
    ) -> Option<LayoutBox> {
        if index >= self.slot_count() {
            return None;
        }
        let inner = LayoutBox::from_size(canvas).inset(self.padding, self.padding);
        if self.footer_slots == 0 {
            return Some(inner);
        }

        let [(hero_y, hero_h), (footer_y, footer_h)] = ratio_spans(inner.y, inner.height, self.hero_ratio, self.gap);
        if index == 0 {
            return Some(LayoutBox::new(inner.x, hero_y, inner.width, hero_h));
        }
        let (x, width) = uniform_span(inner.x, inner.width, self.footer_slots, self.gap, index as u32 - 1);
        Some(LayoutBox::new(x, footer_y, width, footer_h))
    }
}
