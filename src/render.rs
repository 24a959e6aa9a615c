//! Raster surface and per-widget render context.
//!
//! [`Canvas`] is an in-memory `Rgb888` framebuffer implementing
//! `DrawTarget`, so everything the compositor draws lands in a plain pixel
//! vector that can be inspected in tests or exported by the simulator.
//!
//! [`RenderContext`] is the widget's view of its slot: local size plus font
//! scaling. It never outlives one render call.

use core::convert::Infallible;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_SCALE, MIN_SCALE, SCALE_REFERENCE};
use crate::geometry::LayoutBox;
use crate::slots::Dashboard;
use crate::state::StateProvider;
use crate::styles::{self, FontSize};

// =============================================================================
// Canvas
// =============================================================================

/// Heap-backed framebuffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    /// Canvas filled with `background`.
    pub fn new(
        width: u32,
        height: u32,
        background: Rgb888,
    ) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![background; width as usize * height as usize],
        }
    }

    /// Fill every pixel with `color`.
    pub fn clear_buffer(
        &mut self,
        color: Rgb888,
    ) {
        self.pixels.fill(color);
    }

    /// Color at `point`, `None` outside the canvas.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb888> {
        self.index(point).map(|idx| self.pixels[idx])
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Rgb888] { &self.pixels }

    /// Pixels of `color` inside `area`.
    pub fn count_in(
        &self,
        area: LayoutBox,
        color: Rgb888,
    ) -> usize {
        area.to_rectangle().points().filter(|p| self.pixel(*p) == Some(color)).count()
    }

    #[inline]
    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        if point.x >= 0 && point.x < w && point.y >= 0 && point.y < h {
            Some(point.y as usize * w as usize + point.x as usize)
        } else {
            None
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index(point) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors follow the full area row by row, clipped points still consume one.
        for (point, color) in area.points().zip(colors) {
            if let Some(idx) = self.index(point) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }
        let width = self.size.width as usize;
        let x_start = drawable_area.top_left.x as usize;
        let x_end = x_start + drawable_area.size.width as usize;
        for y in drawable_area.rows() {
            let row = y as usize * width;
            self.pixels[row + x_start..row + x_end].fill(color);
        }
        Ok(())
    }
}

// =============================================================================
// Render Context
// =============================================================================

/// Local coordinate space and font scaling of one widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    width: u32,
    height: u32,
    scale: f32,
}

impl RenderContext {
    /// Context for a `width x height` region; the font scale follows the shorter side.
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        let scale = (width.min(height) as f32 / SCALE_REFERENCE).clamp(MIN_SCALE, MAX_SCALE);
        Self { width, height, scale }
    }

    pub fn for_box(area: LayoutBox) -> Self { Self::new(area.width, area.height) }

    pub const fn width(&self) -> u32 { self.width }

    pub const fn height(&self) -> u32 { self.height }

    pub const fn scale(&self) -> f32 { self.scale }

    /// Local bounds, origin at (0, 0).
    pub const fn bounds(&self) -> LayoutBox { LayoutBox::new(0, 0, self.width, self.height) }

    /// Font for a size tag at this context's scale.
    pub fn font(
        &self,
        size: FontSize,
    ) -> &'static MonoFont<'static> {
        styles::font_for_height(size.scaled_height(self.scale))
    }

    /// Rendered size of `text` at `size`.
    pub fn text_size(
        &self,
        text: &str,
        size: FontSize,
    ) -> Size {
        styles::text_size(text, self.font(size))
    }

    /// Percentage of the height, rounded.
    pub fn pct_height(
        &self,
        fraction: f32,
    ) -> u32 {
        (self.height as f32 * fraction).round() as u32
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Owns the output canvas and drives a dashboard render.
#[derive(Debug, Clone)]
pub struct Renderer {
    canvas: Canvas,
}

impl Renderer {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            canvas: Canvas::new(width, height, Rgb888::BLACK),
        }
    }

    /// Clear to the dashboard's theme background, then render every slot.
    pub fn render<P: StateProvider>(
        &mut self,
        dashboard: &Dashboard,
        states: &P,
    ) -> &Canvas {
        self.canvas.clear_buffer(dashboard.theme().background);
        dashboard.render(&mut self.canvas, states);
        &self.canvas
    }

    pub fn canvas(&self) -> &Canvas { &self.canvas }

    pub fn into_canvas(self) -> Canvas { self.canvas }
}

impl Default for Renderer {
    fn default() -> Self { Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT) }
}
