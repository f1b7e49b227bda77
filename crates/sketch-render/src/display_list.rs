//! Headless surface that records every call as a [`DrawOp`].
//!
//! Used wherever rendering must be inspected without a browser: tests,
//! and diffing frames while debugging the render loop.

use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Scale(f64, f64),
    LineWidth(f64),
    StrokeColor(String),
    FillColor(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64, f64, f64),
    Stroke,
    Font(String),
    FillText(String, f64, f64),
}

#[derive(Debug, Clone)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    /// Fixed advance per `char`, standing in for real font metrics.
    char_width: f64,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self::with_char_width(16.0)
    }

    pub fn with_char_width(char_width: f64) -> Self {
        Self {
            ops: Vec::new(),
            char_width,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Ops recorded after the most recent `Clear`, i.e. the last frame.
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(..)))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// Visible straight segments (`LineTo` calls) in the last frame.
    pub fn path_segments(&self) -> usize {
        self.last_frame()
            .iter()
            .filter(|op| matches!(op, DrawOp::LineTo(..)))
            .count()
    }

    /// Glyphs drawn in the last frame, in paint order.
    pub fn glyphs(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of full arcs stroked in the last frame (marker previews).
    pub fn arcs(&self) -> usize {
        self.last_frame()
            .iter()
            .filter(|op| matches!(op, DrawOp::Arc(..)))
            .count()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear(width, height));
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(DrawOp::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(DrawOp::Rotate(radians));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(DrawOp::Scale(sx, sy));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_stroke_color(&mut self, css: &str) {
        self.ops.push(DrawOp::StrokeColor(css.to_string()));
    }

    fn set_fill_color(&mut self, css: &str) {
        self.ops.push(DrawOp::FillColor(css.to_string()));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(DrawOp::Arc(x, y, radius, start, end));
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText(text.to_string(), x, y));
    }
}
