//! Mock entity state and chart history for the sample dashboards.
//!
//! Everything here is deterministic so regenerated images only change when
//! the rendering code does.

use dashboard_widgets::state::{EntityState, HistoryBuffer, StateSnapshot};

// =============================================================================
// History Configuration
// =============================================================================

/// Samples per generated history (24 hours at 30 minute resolution).
pub const HISTORY_SAMPLES: usize = 48;

/// Phase step of the generated waves, in radians per sample.
const WAVE_STEP: f32 = 0.26;

// =============================================================================
// Entity State
// =============================================================================

/// States of every entity the sample dashboards reference.
pub fn mock_states() -> StateSnapshot {
    let mut states = StateSnapshot::new();
    states
        .insert("sensor.cpu", EntityState::new("42").with_unit("%").with_name("CPU"))
        .insert("sensor.memory", EntityState::new("67.5").with_unit("%").with_name("Memory"))
        .insert("sensor.disk", EntityState::new("81").with_unit("%").with_name("Disk"))
        .insert(
            "sensor.living_temp",
            EntityState::new("21.5").with_unit("°C").with_name("Living Room"),
        )
        .insert("sensor.office_temp", EntityState::new("26.1").with_unit("°C").with_name("Office"))
        .insert("sensor.outside_temp", EntityState::new("12.8").with_unit("°C").with_name("Outside"))
        .insert("sensor.humidity", EntityState::new("48").with_unit("%").with_name("Humidity"))
        .insert("sensor.phone_battery", EntityState::new("12").with_unit("%").with_name("Phone"))
        .insert("sensor.power", EntityState::new("1840").with_unit("W").with_name("Power"))
        .insert("sensor.steps", EntityState::new("6500").with_unit(" steps").with_name("Steps"))
        .insert("sensor.weather", EntityState::new("Sunny").with_name("Weather"))
        .insert(
            "climate.bedroom",
            EntityState::new("heat")
                .with_name("Bedroom")
                .with_attribute("current_temperature", 19.5)
                .with_unit("°C"),
        )
        .insert("lock.front_door", EntityState::new("locked").with_name("Front Door"))
        .insert("light.kitchen", EntityState::new("on").with_name("Kitchen"))
        .insert("binary_sensor.hall_motion", EntityState::new("off").with_name("Hall Motion"))
        .insert("sensor.offline", EntityState::new("unavailable").with_name("Garage"));
    states
}

// =============================================================================
// History
// =============================================================================

/// Smooth daily curve around `base`.
pub fn wave_history(
    base: f32,
    amplitude: f32,
    phase: f32,
) -> HistoryBuffer {
    (0..HISTORY_SAMPLES)
        .map(|i| {
            let t = i as f32 * WAVE_STEP + phase;
            base + amplitude * t.sin() + amplitude * 0.3 * (t * 3.1).sin()
        })
        .collect()
}

/// On/off pattern of a motion sensor: mostly off with a few bursts.
pub fn motion_history() -> HistoryBuffer {
    (0..HISTORY_SAMPLES)
        .map(|i| if matches!(i % 12, 3..=5) || i % 17 == 0 { 1.0 } else { 0.0 })
        .collect()
}
