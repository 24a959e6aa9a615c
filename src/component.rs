//! Declarative component tree.
//!
//! Widgets describe what to draw as a [`Component`] tree; the compositor
//! decides where and draws it. Nodes are plain data. Containers partition
//! their box among children with the stack solver, using each child's
//! intrinsic [`Measure`]: a `None` extent means the child is flexible on that
//! axis and takes a share of the free space.

use embedded_graphics::pixelcolor::Rgb888;

use crate::layout::{Align, Axis, Justify};
use crate::render::RenderContext;
use crate::styles::{FontSize, TextAlign};

// =============================================================================
// Nodes
// =============================================================================

/// One node of a widget's drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Single line of text, fitted to its box.
    Text(Text),
    /// Named glyph drawn with primitives.
    Icon {
        name: String,
        size: u32,
        color: Rgb888,
    },
    /// Linear track with a proportional fill.
    Bar {
        percent: f32,
        color: Rgb888,
        track: Rgb888,
        /// Fixed thickness; `None` fills the box height.
        height: Option<u32>,
    },
    /// Full circle gauge starting at 12 o'clock.
    RingGauge(Gauge),
    /// 270 degree gauge open at the bottom.
    ArcGauge(Gauge),
    /// Icon, label, value and bar arranged by the flex solver.
    BarGauge(BarGauge),
    /// Line chart of samples, oldest first.
    Sparkline {
        samples: Vec<f32>,
        color: Rgb888,
        fill: bool,
        gradient: bool,
    },
    /// One on/off segment per sample.
    Timeline {
        samples: Vec<f32>,
        on_color: Rgb888,
        off_color: Rgb888,
    },
    /// Rounded background behind a child.
    Panel {
        color: Rgb888,
        radius: u32,
        padding: u32,
        child: Box<Component>,
    },
    /// Empty space; `None` is flexible.
    Spacer(Option<u32>),
    /// Makes its child flexible along the parent's main axis. The child's
    /// own measure still drives cross-axis alignment.
    Expand {
        weight: u32,
        child: Box<Component>,
    },
    Row(Container),
    Column(Container),
    Grid {
        cols: u32,
        gap: u32,
        padding: u32,
        children: Vec<Component>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub size: FontSize,
    pub color: Rgb888,
    pub align: TextAlign,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub percent: f32,
    pub value: String,
    pub label: Option<String>,
    pub color: Rgb888,
    pub track: Rgb888,
    pub value_color: Rgb888,
    pub label_color: Rgb888,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGauge {
    pub percent: f32,
    pub icon: Option<String>,
    pub label: Option<String>,
    pub value: String,
    pub color: Rgb888,
    pub track: Rgb888,
    pub value_color: Rgb888,
    pub label_color: Rgb888,
}

/// Row or column container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub children: Vec<Component>,
    pub gap: u32,
    pub padding: u32,
    pub align: Align,
    pub justify: Justify,
}

// =============================================================================
// Builders
// =============================================================================

impl Component {
    pub fn text(
        content: impl Into<String>,
        size: FontSize,
        color: Rgb888,
    ) -> Self {
        Self::Text(Text {
            content: content.into(),
            size,
            color,
            align: TextAlign::Center,
        })
    }

    pub fn icon(
        name: &str,
        size: u32,
        color: Rgb888,
    ) -> Self {
        Self::Icon {
            name: name.to_owned(),
            size,
            color,
        }
    }

    pub fn row(children: Vec<Component>) -> Self {
        Self::Row(Container {
            children,
            ..Container::default()
        })
    }

    pub fn column(children: Vec<Component>) -> Self {
        Self::Column(Container {
            children,
            ..Container::default()
        })
    }

    pub fn expand(self) -> Self {
        Self::Expand {
            weight: 1,
            child: Box::new(self),
        }
    }

    pub fn in_panel(
        self,
        color: Rgb888,
        radius: u32,
        padding: u32,
    ) -> Self {
        Self::Panel {
            color,
            radius,
            padding,
            child: Box::new(self),
        }
    }

    /// Text alignment; no effect on other nodes.
    pub fn aligned(
        mut self,
        align: TextAlign,
    ) -> Self {
        if let Self::Text(text) = &mut self {
            text.align = align;
        }
        self
    }

    /// Container gap; no effect on leaves.
    pub fn gap(
        mut self,
        gap: u32,
    ) -> Self {
        match &mut self {
            Self::Row(c) | Self::Column(c) => c.gap = gap,
            Self::Grid { gap: g, .. } => *g = gap,
            _ => {}
        }
        self
    }

    /// Container padding; no effect on leaves.
    pub fn padding(
        mut self,
        padding: u32,
    ) -> Self {
        match &mut self {
            Self::Row(c) | Self::Column(c) => c.padding = padding,
            Self::Grid { padding: p, .. } => *p = padding,
            Self::Panel { padding: p, .. } => *p = padding,
            _ => {}
        }
        self
    }

    /// Cross-axis alignment of a row or column.
    pub fn align(
        mut self,
        align: Align,
    ) -> Self {
        if let Self::Row(c) | Self::Column(c) = &mut self {
            c.align = align;
        }
        self
    }

    /// Main-axis distribution of a row or column.
    pub fn justify(
        mut self,
        justify: Justify,
    ) -> Self {
        if let Self::Row(c) | Self::Column(c) = &mut self {
            c.justify = justify;
        }
        self
    }

    /// Node name for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Icon { .. } => "icon",
            Self::Bar { .. } => "bar",
            Self::RingGauge(_) => "ring_gauge",
            Self::ArcGauge(_) => "arc_gauge",
            Self::BarGauge(_) => "bar_gauge",
            Self::Sparkline { .. } => "sparkline",
            Self::Timeline { .. } => "timeline",
            Self::Panel { .. } => "panel",
            Self::Spacer(_) => "spacer",
            Self::Expand { .. } => "expand",
            Self::Row(_) => "row",
            Self::Column(_) => "column",
            Self::Grid { .. } => "grid",
        }
    }
}

// =============================================================================
// Measurement
// =============================================================================

/// Intrinsic size of a node. `None` on an axis means flexible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measure {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Share of free space when flexible on the parent's main axis.
    pub weight: u32,
}

impl Measure {
    pub const FLEXIBLE: Self = Self {
        width: None,
        height: None,
        weight: 1,
    };

    pub const fn fixed(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            weight: 0,
        }
    }

    /// Extent along `axis` and across it.
    pub const fn along(
        &self,
        axis: Axis,
    ) -> (Option<u32>, Option<u32>) {
        match axis {
            Axis::Horizontal => (self.width, self.height),
            Axis::Vertical => (self.height, self.width),
        }
    }
}

impl Component {
    /// Intrinsic size at `ctx`'s font scale.
    pub fn measure(
        &self,
        ctx: &RenderContext,
    ) -> Measure {
        match self {
            Self::Text(text) => {
                let size = ctx.text_size(&text.content, text.size);
                Measure::fixed(size.width, size.height)
            }
            Self::Icon { size, .. } => Measure::fixed(*size, *size),
            Self::Bar { height, .. } => Measure {
                width: None,
                height: *height,
                weight: 1,
            },
            Self::Spacer(Some(size)) => Measure::fixed(*size, *size),
            Self::Spacer(None)
            | Self::RingGauge(_)
            | Self::ArcGauge(_)
            | Self::BarGauge(_)
            | Self::Sparkline { .. }
            | Self::Timeline { .. }
            | Self::Panel { .. }
            | Self::Grid { .. } => Measure::FLEXIBLE,
            Self::Expand { weight, .. } => Measure {
                weight: (*weight).max(1),
                ..Measure::FLEXIBLE
            },
            Self::Row(c) => c.measure(Axis::Horizontal, ctx),
            Self::Column(c) => c.measure(Axis::Vertical, ctx),
        }
    }
}

impl Container {
    /// Sum along the main axis, max across it; any flexible child makes the
    /// container flexible on that axis.
    fn measure(
        &self,
        axis: Axis,
        ctx: &RenderContext,
    ) -> Measure {
        let measures: Vec<Measure> = self.children.iter().map(|c| c.measure(ctx)).collect();
        let pad = self.padding * 2;
        let gaps = self.gap * (measures.len() as u32).saturating_sub(1);

        let main: Option<u32> = measures
            .iter()
            .map(|m| m.along(axis).0)
            .sum::<Option<u32>>()
            .map(|sum| sum + gaps + pad);
        let cross: Option<u32> = measures
            .iter()
            .map(|m| m.along(axis).1)
            .try_fold(0u32, |acc, c| c.map(|c| acc.max(c)))
            .map(|max| max + pad);

        let (width, height) = match axis {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        };
        Measure {
            width,
            height,
            weight: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    fn ctx() -> RenderContext { RenderContext::new(120, 120) }

    #[test]
    fn test_text_measures_its_font() {
        let ctx = ctx();
        let m = Component::text("42%", FontSize::Regular, colors::WHITE).measure(&ctx);
        let font = ctx.font(FontSize::Regular);
        assert_eq!(m.height, Some(font.character_size.height));
        assert_eq!(m.width, Some(3 * font.character_size.width + 2 * font.character_spacing));
    }

    #[test]
    fn test_row_of_fixed_children_sums() {
        let row = Component::row(vec![
            Component::icon("fire", 12, colors::ORANGE),
            Component::icon("fire", 20, colors::ORANGE),
        ])
        .gap(4)
        .padding(2);
        let m = row.measure(&ctx());
        assert_eq!(m.width, Some(12 + 4 + 20 + 4));
        assert_eq!(m.height, Some(20 + 4));
    }

    #[test]
    fn test_flexible_child_makes_container_flexible() {
        let column = Component::column(vec![
            Component::text("CPU", FontSize::Small, colors::GRAY),
            Component::Bar {
                percent: 50.0,
                color: colors::CYAN,
                track: colors::DARK_GRAY,
                height: Some(6),
            },
        ]);
        let m = column.measure(&ctx());
        assert_eq!(m.height.map(|h| h > 6), Some(true), "bar height is fixed, column height too");
        assert_eq!(m.width, None, "bar width is flexible");
    }

    #[test]
    fn test_expand_is_flexible() {
        let m = Component::text("HI", FontSize::Small, colors::WHITE).expand().measure(&ctx());
        assert_eq!(m, Measure::FLEXIBLE);
    }

    #[test]
    fn test_builders_ignore_mismatched_nodes() {
        let icon = Component::icon("lock", 10, colors::RED);
        assert_eq!(icon.clone().gap(9).aligned(TextAlign::Left), icon);
        assert_eq!(icon.kind(), "icon");
    }
}
