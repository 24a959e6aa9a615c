//! Value-driven color thresholds.
//!
//! A widget may carry a list of `{ value, color }` pairs. The color of the
//! highest threshold whose value is `<=` the current reading wins. The list is
//! sorted once when it is built (or deserialized), so resolution is a binary
//! search instead of a sort per frame.
//!
//! # Presets
//!
//! The preset ladders below use named constants with compile-time ordering
//! checks. Reordering them incorrectly fails the build.

use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

use crate::colors::{self, serde_rgb};

// =============================================================================
// Threshold Types
// =============================================================================

/// One `{ value, color }` step of a threshold ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorThreshold {
    pub value: f32,
    #[serde(with = "serde_rgb")]
    pub color: Rgb888,
}

impl ColorThreshold {
    pub const fn new(
        value: f32,
        color: Rgb888,
    ) -> Self {
        Self { value, color }
    }
}

/// Threshold ladder, always sorted ascending by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ColorThreshold>", into = "Vec<ColorThreshold>")]
pub struct Thresholds(Vec<ColorThreshold>);

impl Thresholds {
    pub fn new(mut steps: Vec<ColorThreshold>) -> Self {
        steps.retain(|t| !t.value.is_nan());
        steps.sort_by(|a, b| a.value.total_cmp(&b.value));
        Self(steps)
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn steps(&self) -> &[ColorThreshold] { &self.0 }

    /// Color of the highest step with `step.value <= value`.
    ///
    /// Returns `None` when the ladder is empty, the value is below every step,
    /// or there is no reading at all.
    pub fn resolve(
        &self,
        value: Option<f32>,
    ) -> Option<Rgb888> {
        let value = value.filter(|v| !v.is_nan())?;
        let idx = self.0.partition_point(|t| t.value <= value);
        idx.checked_sub(1).map(|i| self.0[i].color)
    }

    /// Full color policy: threshold, then the widget's own color, then `fallback`.
    pub fn resolve_or(
        &self,
        value: Option<f32>,
        configured: Option<Rgb888>,
        fallback: Rgb888,
    ) -> Rgb888 {
        self.resolve(value).or(configured).unwrap_or(fallback)
    }
}

impl From<Vec<ColorThreshold>> for Thresholds {
    fn from(steps: Vec<ColorThreshold>) -> Self { Self::new(steps) }
}

impl From<Thresholds> for Vec<ColorThreshold> {
    fn from(thresholds: Thresholds) -> Self { thresholds.0 }
}

impl FromIterator<ColorThreshold> for Thresholds {
    fn from_iter<I: IntoIterator<Item = ColorThreshold>>(iter: I) -> Self { Self::new(iter.into_iter().collect()) }
}

// =============================================================================
// Battery Level Presets
// =============================================================================

/// Below this level the battery is critical (RED).
pub const BATTERY_CRITICAL: f32 = 15.0;

/// Below this level the battery is low (ORANGE).
pub const BATTERY_LOW: f32 = 40.0;

const _: () = assert!(BATTERY_CRITICAL < BATTERY_LOW);

/// RED below [`BATTERY_LOW`], ORANGE up to it, LIME above.
pub fn battery() -> Thresholds {
    Thresholds::new(vec![
        ColorThreshold::new(0.0, colors::RED),
        ColorThreshold::new(BATTERY_CRITICAL, colors::ORANGE),
        ColorThreshold::new(BATTERY_LOW, colors::LIME),
    ])
}

// =============================================================================
// Indoor Temperature Presets (Celsius)
// =============================================================================

/// Below this the room is cold (BLUE).
pub const ROOM_COLD_MAX: f32 = 18.0;

/// Comfortable band upper edge (LIME below, ORANGE above).
pub const ROOM_WARM: f32 = 24.0;

/// Above this the room is hot (RED).
pub const ROOM_HOT: f32 = 28.0;

const _: () = assert!(ROOM_COLD_MAX < ROOM_WARM);
const _: () = assert!(ROOM_WARM < ROOM_HOT);

/// BLUE, LIME, ORANGE, RED from cold to hot.
pub fn room_temperature() -> Thresholds {
    Thresholds::new(vec![
        ColorThreshold::new(f32::MIN, colors::BLUE),
        ColorThreshold::new(ROOM_COLD_MAX, colors::LIME),
        ColorThreshold::new(ROOM_WARM, colors::ORANGE),
        ColorThreshold::new(ROOM_HOT, colors::RED),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traffic_light() -> Thresholds {
        Thresholds::new(vec![
            ColorThreshold::new(80.0, colors::LIME),
            ColorThreshold::new(0.0, colors::RED),
            ColorThreshold::new(50.0, colors::YELLOW),
        ])
    }

    #[test]
    fn test_thresholds_sorted_on_construction() {
        let t = traffic_light();
        let values: Vec<f32> = t.steps().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0.0, 50.0, 80.0]);
    }

    #[test]
    fn test_highest_matching_threshold_wins() {
        let t = traffic_light();
        assert_eq!(t.resolve(Some(65.0)), Some(colors::YELLOW), "65 should be YELLOW");
        assert_eq!(t.resolve(Some(10.0)), Some(colors::RED), "10 should be RED");
        assert_eq!(t.resolve(Some(95.0)), Some(colors::LIME), "95 should be GREEN");
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let t = traffic_light();
        assert_eq!(t.resolve(Some(50.0)), Some(colors::YELLOW));
        assert_eq!(t.resolve(Some(80.0)), Some(colors::LIME));
    }

    #[test]
    fn test_below_lowest_threshold_falls_back() {
        let t = traffic_light();
        assert_eq!(t.resolve(Some(-5.0)), None);
        assert_eq!(t.resolve_or(Some(-5.0), Some(colors::PURPLE), colors::CYAN), colors::PURPLE);
        assert_eq!(t.resolve_or(Some(-5.0), None, colors::CYAN), colors::CYAN);
    }

    #[test]
    fn test_no_reading_never_matches() {
        assert_eq!(traffic_light().resolve(None), None);
        assert_eq!(traffic_light().resolve(Some(f32::NAN)), None);
    }

    #[test]
    fn test_empty_thresholds() {
        let t = Thresholds::default();
        assert!(t.is_empty());
        assert_eq!(t.resolve_or(Some(42.0), None, colors::CYAN), colors::CYAN);
    }

    #[test]
    fn test_battery_preset() {
        let t = battery();
        assert_eq!(t.resolve(Some(5.0)), Some(colors::RED));
        assert_eq!(t.resolve(Some(BATTERY_CRITICAL)), Some(colors::ORANGE));
        assert_eq!(t.resolve(Some(87.0)), Some(colors::LIME));
    }

    #[test]
    fn test_room_temperature_preset_covers_negative() {
        let t = room_temperature();
        assert_eq!(t.resolve(Some(-10.0)), Some(colors::BLUE));
        assert_eq!(t.resolve(Some(21.0)), Some(colors::LIME));
        assert_eq!(t.resolve(Some(30.0)), Some(colors::RED));
    }

    #[test]
    fn test_deserialize_sorts() {
        let json = r#"[{"value": 80, "color": [0, 255, 0]}, {"value": 0, "color": [255, 0, 0]}]"#;
        let t: Thresholds = serde_json::from_str(json).expect("valid thresholds");
        assert_eq!(t.steps()[0].value, 0.0);
        assert_eq!(t.resolve(Some(90.0)), Some(Rgb888::new(0, 255, 0)));
    }
}
