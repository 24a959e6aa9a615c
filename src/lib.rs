//! Adaptive widget layout and drawing engine for small smart-display dashboards.
//!
//! A dashboard is a slot layout (grid, hero, split, three-column) whose slots
//! hold widgets. Each render cycle a widget reads one entity from a
//! [`StateProvider`], describes itself as a [`Component`] tree, and the
//! compositor lays that tree out and draws it into the slot of any
//! `embedded-graphics` `DrawTarget<Color = Rgb888>`.
//!
//! - [`colors`]: palette constants, luminance, dimming and blending
//! - [`theme`]: color bundles shared by a render pass
//! - [`styles`]: font size tags, the font ladder and text fitting
//! - [`geometry`]: percent/sweep math and [`LayoutBox`]
//! - [`thresholds`]: value-to-color ladders
//! - [`state`]: entity state, state providers and chart history
//! - [`config`]: typed widget, layout and dashboard configuration
//! - [`layout`]: flex solver for bar gauges and the row/column/grid stack solver
//! - [`component`]: the declarative component tree
//! - [`compositor`]: draws component trees with primitives and icons
//! - [`widgets`]: gauge, chart, text, entity, status and progress builders
//! - [`slots`]: slot layouts and the [`Dashboard`]
//! - [`render`]: in-memory [`Canvas`], per-widget [`RenderContext`], [`Renderer`]
//!
//! # Example
//!
//! ```
//! use dashboard_widgets::config::{GaugeOptions, GaugeStyle, WidgetConfig};
//! use dashboard_widgets::slots::Grid;
//! use dashboard_widgets::state::{EntityState, StateSnapshot};
//! use dashboard_widgets::{Dashboard, Renderer, Theme};
//!
//! let mut dashboard = Dashboard::new(Box::new(Grid::grid_2x2()), Theme::classic());
//! let cpu = WidgetConfig::new(0, GaugeOptions::styled(GaugeStyle::Ring)).entity("sensor.cpu");
//! dashboard.set_widget(0, cpu).unwrap();
//!
//! let mut states = StateSnapshot::new();
//! states.insert("sensor.cpu", EntityState::new("42").with_unit("%"));
//!
//! let mut renderer = Renderer::default();
//! let canvas = renderer.render(&dashboard, &states);
//! assert_eq!(canvas.pixels().len(), 240 * 240);
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)] // f32 -> u32/i32 pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32 -> f32 in layout calculations
#![allow(clippy::cast_possible_wrap)] // u32 -> i32 for canvas-sized values
#![allow(clippy::cast_sign_loss)] // clamped non-negative f32 -> u32

pub mod colors;
pub mod component;
pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod slots;
pub mod state;
pub mod styles;
pub mod theme;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use component::Component;
pub use config::{DashboardConfig, WidgetConfig};
pub use error::{ConfigError, LayoutError};
pub use geometry::LayoutBox;
pub use render::{Canvas, RenderContext, Renderer};
pub use slots::{Dashboard, SlotLayout};
pub use state::{EntityState, HistoryBuffer, StateProvider, StateSnapshot};
pub use theme::Theme;
pub use widgets::Widget;
