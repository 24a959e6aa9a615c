//! Device state consumed by widgets.
//!
//! Widgets never own state. Each render cycle the caller hands in something
//! implementing [`StateProvider`] and, for charts, a [`HistoryBuffer`] with the
//! recent samples. Every lookup may miss; widgets degrade to placeholders.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute holding the human-readable entity name.
pub const FRIENDLY_NAME: &str = "friendly_name";

/// Attribute holding the unit of the primary value.
pub const UNIT_OF_MEASUREMENT: &str = "unit_of_measurement";

/// Primary values that count as "on" for binary widgets.
pub const ON_STATES: [&str; 8] = ["on", "home", "open", "unlocked", "true", "playing", "detected", "active"];

// =============================================================================
// Entity State
// =============================================================================

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttributeValue {
    /// Numeric view of the attribute. Text is parsed leniently (`"21.5"`).
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n as f32),
            Self::Text(s) => parse_number(s),
            Self::Bool(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self { Self::Number(n) }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self { Self::Bool(b) }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

/// Snapshot of one entity: a primary value string plus typed attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub state: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl EntityState {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_unit(
        self,
        unit: &str,
    ) -> Self {
        self.with_attribute(UNIT_OF_MEASUREMENT, unit)
    }

    pub fn with_name(
        self,
        name: &str,
    ) -> Self {
        self.with_attribute(FRIENDLY_NAME, name)
    }

    /// Numeric reading, from `attribute` when given, else from the primary value.
    ///
    /// `None` for missing attributes and values that do not parse as a number
    /// (`"unavailable"`, `"unknown"`, ...).
    pub fn numeric(
        &self,
        attribute: Option<&str>,
    ) -> Option<f32> {
        match attribute {
            Some(key) => self.attributes.get(key).and_then(AttributeValue::as_f32),
            None => parse_number(&self.state),
        }
    }

    pub fn unit(&self) -> Option<&str> { self.attributes.get(UNIT_OF_MEASUREMENT).and_then(AttributeValue::as_str) }

    pub fn friendly_name(&self) -> Option<&str> { self.attributes.get(FRIENDLY_NAME).and_then(AttributeValue::as_str) }

    /// Whether the primary value reads as "on" (see [`ON_STATES`]).
    pub fn is_on(&self) -> bool {
        let state = self.state.trim();
        ON_STATES.iter().any(|on| state.eq_ignore_ascii_case(on))
    }
}

/// Finite number parsed from free-form state text.
fn parse_number(text: &str) -> Option<f32> { text.trim().parse::<f32>().ok().filter(|v| v.is_finite()) }

// =============================================================================
// State Provider
// =============================================================================

/// Read-only lookup of entity state by identifier.
pub trait StateProvider {
    fn get(
        &self,
        entity_id: &str,
    ) -> Option<&EntityState>;
}

/// In-memory [`StateProvider`], also the JSON format of the simulator's state file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    entities: HashMap<String, EntityState>,
}

impl StateSnapshot {
    pub fn new() -> Self { Self::default() }

    pub fn insert(
        &mut self,
        entity_id: impl Into<String>,
        state: EntityState,
    ) -> &mut Self {
        self.entities.insert(entity_id.into(), state);
        self
    }

    pub fn len(&self) -> usize { self.entities.len() }

    pub fn is_empty(&self) -> bool { self.entities.is_empty() }
}

impl StateProvider for StateSnapshot {
    fn get(
        &self,
        entity_id: &str,
    ) -> Option<&EntityState> {
        self.entities.get(entity_id)
    }
}

impl<P: StateProvider + ?Sized> StateProvider for &P {
    fn get(
        &self,
        entity_id: &str,
    ) -> Option<&EntityState> {
        (**self).get(entity_id)
    }
}

// =============================================================================
// History Buffer
// =============================================================================

/// Chronological samples (oldest first) for chart widgets.
///
/// Rebuilt by the caller every render cycle. When a capacity is set, pushing
/// past it drops the oldest samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryBuffer {
    samples: Vec<f32>,
    #[serde(skip)]
    capacity: Option<usize>,
}

impl HistoryBuffer {
    pub fn new() -> Self { Self::default() }

    /// Buffer that keeps at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn from_samples(samples: Vec<f32>) -> Self { Self { samples, capacity: None } }

    pub fn push(
        &mut self,
        value: f32,
    ) {
        self.samples.push(value);
        let Some(cap) = self.capacity else { return };
        if self.samples.len() > cap {
            let excess = self.samples.len() - cap;
            self.samples.drain(..excess);
        }
    }

    pub fn samples(&self) -> &[f32] { &self.samples }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Most recent sample.
    pub fn latest(&self) -> Option<f32> { self.samples.last().copied() }

    /// Smallest and largest finite sample.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Non-empty and every sample is exactly `0.0` or `1.0`.
    pub fn is_binary(&self) -> bool { !self.samples.is_empty() && self.samples.iter().all(|&v| v == 0.0 || v == 1.0) }
}

impl From<Vec<f32>> for HistoryBuffer {
    fn from(samples: Vec<f32>) -> Self { Self::from_samples(samples) }
}

impl FromIterator<f32> for HistoryBuffer {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self { Self::from_samples(iter.into_iter().collect()) }
}
