//! Dashboard: a slot layout, a theme and the widgets assigned to its slots.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use log::{debug, trace};

use super::SlotLayout;
use crate::compositor;
use crate::config::DashboardConfig;
use crate::error::{ConfigError, LayoutError};
use crate::render::RenderContext;
use crate::state::StateProvider;
use crate::theme::Theme;
use crate::widgets::Widget;

/// One screen: widgets placed into the slots of a layout.
#[derive(Debug)]
pub struct Dashboard {
    layout: Box<dyn SlotLayout>,
    theme: Theme,
    widgets: Vec<Option<Widget>>,
}

impl Dashboard {
    pub fn new(
        layout: Box<dyn SlotLayout>,
        theme: Theme,
    ) -> Self {
        let widgets = vec![None; layout.slot_count()];
        Self { layout, theme, widgets }
    }

    /// Build a dashboard from configuration, rejecting duplicate or
    /// out-of-range slots.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut dashboard = Self::new(config.layout.build()?, config.theme.resolve()?);
        for widget in &config.widgets {
            dashboard.set_widget(widget.slot, Widget::new(widget.clone()))?;
        }
        debug!(
            "dashboard: {} layout, {} of {} slots assigned, theme {}",
            dashboard.layout.name(),
            config.widgets.len(),
            dashboard.slot_count(),
            dashboard.theme.name
        );
        Ok(dashboard)
    }

    /// Assign `widget` to `slot`, replacing any previous widget there.
    ///
    /// `slot` must be in range and match the widget's configured slot.
    pub fn set_widget(
        &mut self,
        slot: usize,
        widget: impl Into<Widget>,
    ) -> Result<(), LayoutError> {
        let widget = widget.into();
        let slots = self.widgets.len();
        let entry = self.widgets.get_mut(slot).ok_or(LayoutError::SlotOutOfRange { slot, slots })?;
        if widget.slot() != slot {
            return Err(LayoutError::SlotMismatch {
                slot,
                configured: widget.slot(),
            });
        }
        *entry = Some(widget);
        Ok(())
    }

    pub fn widget(
        &self,
        slot: usize,
    ) -> Option<&Widget> {
        self.widgets.get(slot).and_then(Option::as_ref)
    }

    /// Mutable access, e.g. to refresh a chart's history before a render.
    pub fn widget_mut(
        &mut self,
        slot: usize,
    ) -> Option<&mut Widget> {
        self.widgets.get_mut(slot).and_then(Option::as_mut)
    }

    pub fn layout(&self) -> &dyn SlotLayout { self.layout.as_ref() }

    pub fn theme(&self) -> &Theme { &self.theme }

    pub fn slot_count(&self) -> usize { self.widgets.len() }

    /// Render every assigned widget into its slot of `target`.
    ///
    /// Slots are drawn in index order, each through a sub-target that is
    /// translated to the slot origin and clipped to the slot, so a widget
    /// cannot draw outside its rectangle. Unassigned slots are left untouched.
    pub fn render<D, P>(
        &self,
        target: &mut D,
        states: &P,
    ) where
        D: DrawTarget<Color = Rgb888>,
        P: StateProvider,
    {
        let canvas = target.bounding_box().size;
        for (slot, widget) in self.widgets.iter().enumerate() {
            let Some(widget) = widget else {
                trace!("slot {slot}: unassigned");
                continue;
            };
            let Some(rect) = self.layout.slot_rect(canvas, slot) else {
                continue;
            };
            debug!("slot {slot}: {} at {rect:?}", widget.kind());

            let ctx = RenderContext::for_box(rect);
            let tree = widget.build(&ctx, &self.theme, states);
            compositor::compose_in(target, &tree, rect, &ctx);
        }
    }
}
