//! Layout solvers.
//!
//! - [`flex`]: horizontal vs vertical arrangement of bar gauges
//! - [`stack`]: row, column and grid partitioning for component containers

pub mod flex;
pub mod stack;

pub use flex::{BarGaugeRequest, FlexLayout, FlexMode, Region, layout_bar_gauge};
pub use stack::{Align, Axis, Justify, StackItem, StackSpec, layout_grid, layout_stack, uniform_span};
