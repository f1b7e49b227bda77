//! The 2D raster surface drawables paint into.
//!
//! Mirrors the subset of the Canvas2D API the sketchpad needs, so the same
//! painters drive the on-screen canvas, the offscreen export canvas, and the
//! headless [`DisplayList`](crate::DisplayList).

pub trait Surface {
    /// Erase `width × height` starting at the origin of the current transform.
    fn clear(&mut self, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, css: &str);
    fn set_fill_color(&mut self, css: &str);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    /// Advance width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
