//! Slot layout selection.
//!
//! The `"layout"` tag picks the slot manager; the remaining keys are its
//! parameters. Missing padding and gap default to [`DEFAULT_PADDING`] and
//! [`DEFAULT_GAP`].

use serde::{Deserialize, Serialize};

use super::{DEFAULT_GAP, DEFAULT_PADDING};
use crate::error::ConfigError;
use crate::slots::{Grid, Hero, SlotLayout, Split, SplitDirection, ThreeColumn};

const fn default_padding() -> u32 { DEFAULT_PADDING }

const fn default_gap() -> u32 { DEFAULT_GAP }

const fn default_footer_slots() -> u32 { 3 }

const fn default_hero_ratio() -> f32 { 0.7 }

const fn default_split_ratio() -> f32 { 0.5 }

fn default_column_ratios() -> Vec<f32> { vec![0.33, 0.34, 0.33] }

/// Slot manager and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum LayoutConfig {
    Grid {
        rows: u32,
        cols: u32,
        #[serde(default = "default_padding")]
        padding: u32,
        #[serde(default = "default_gap")]
        gap: u32,
    },
    Hero {
        #[serde(default = "default_footer_slots")]
        footer_slots: u32,
        #[serde(default = "default_hero_ratio")]
        hero_ratio: f32,
        #[serde(default = "default_padding")]
        padding: u32,
        #[serde(default = "default_gap")]
        gap: u32,
    },
    Split {
        #[serde(default)]
        direction: SplitDirection,
        #[serde(default = "default_split_ratio")]
        ratio: f32,
        #[serde(default = "default_padding")]
        padding: u32,
        #[serde(default = "default_gap")]
        gap: u32,
    },
    ThreeColumn {
        #[serde(default = "default_column_ratios")]
        ratios: Vec<f32>,
        #[serde(default = "default_padding")]
        padding: u32,
        #[serde(default = "default_gap")]
        gap: u32,
    },
}

impl LayoutConfig {
    /// Validate and build the slot manager.
    pub fn build(&self) -> Result<Box<dyn SlotLayout>, ConfigError> {
        let layout: Box<dyn SlotLayout> = match self {
            Self::Grid { rows, cols, padding, gap } => Box::new(Grid::new(*rows, *cols)?.spacing(*padding, *gap)),
            Self::Hero {
                footer_slots,
                hero_ratio,
                padding,
                gap,
            } => Box::new(Hero::new(*footer_slots, *hero_ratio)?.spacing(*padding, *gap)),
            Self::Split {
                direction,
                ratio,
                padding,
                gap,
            } => Box::new(Split::new(*direction, *ratio)?.spacing(*padding, *gap)),
            Self::ThreeColumn { ratios, padding, gap } => {
                Box::new(ThreeColumn::new(ratios.clone())?.spacing(*padding, *gap))
            }
        };
        Ok(layout)
    }

    /// Outer padding and slot gap.
    pub const fn spacing(&self) -> (u32, u32) {
        match self {
            Self::Grid { padding, gap, .. }
            | Self::Hero { padding, gap, .. }
            | Self::Split { padding, gap, .. }
            | Self::ThreeColumn { padding, gap, .. } => (*padding, *gap),
        }
    }

    /// Layout tag, as written in configuration files.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Grid { .. } => "grid",
            Self::Hero { .. } => "hero",
            Self::Split { .. } => "split",
            Self::ThreeColumn { .. } => "three_column",
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::Grid {
            rows: 2,
            cols: 2,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        }
    }
}
