//! Error types for dashboard assembly.
//!
//! Rendering itself never fails: missing state and malformed readings degrade
//! to placeholders, and draw-target errors are ignored per primitive. Errors
//! only arise while a dashboard is being put together.

use crate::config::MAX_SLOTS;

/// Widget placement errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Slot index outside `[0, slots)`.
    #[error("slot {slot} is out of range for a layout with {slots} slots")]
    SlotOutOfRange { slot: usize, slots: usize },

    /// Widget configured for a different slot than the one it is placed in.
    #[error("widget configured for slot {configured} cannot be placed in slot {slot}")]
    SlotMismatch { slot: usize, configured: usize },
}

/// Invalid layout or dashboard configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid needs at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("layout has no slots")]
    NoSlots,

    #[error("layout has {slots} slots (at most {max})", max = MAX_SLOTS)]
    TooManySlots { slots: u64 },

    #[error("padding {padding} and gap {gap} leave no room on a {width}x{height} canvas")]
    Spacing { padding: u32, gap: u32, width: u32, height: u32 },

    #[error("ratios must sum to 1.0 (got {sum})")]
    RatioSum { sum: f32 },

    #[error("ratio {ratio} is out of range")]
    RatioRange { ratio: f32 },

    #[error("slot {slot} is assigned more than once")]
    DuplicateSlot { slot: usize },

    #[error("canvas must be at least 1x1 (got {width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
