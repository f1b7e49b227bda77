//! Committable drawables and the transient tool preview.
//!
//! A `Drawable` is either a freehand `Stroke` or a placed `Sticker`. Both are
//! mutable only while a gesture owns them; once moved into `History` they are
//! reachable through shared references alone.

use crate::model::{Color, Point};

// ─── Stroke ──────────────────────────────────────────────────────────────

/// A freehand poly-line with a thickness and color fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    thickness: f32,
    color: Color,
}

impl Stroke {
    /// Start a stroke at `start`. Non-positive thickness is clamped to a hairline.
    pub fn begin(start: Point, thickness: f32, color: Color) -> Self {
        let thickness = if thickness.is_finite() && thickness > 0.0 {
            thickness
        } else {
            1.0
        };
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    /// Append a point while the stroke is in progress. Non-finite points are dropped.
    pub fn extend(&mut self, point: Point) {
        if point.is_finite() {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

// ─── Sticker ─────────────────────────────────────────────────────────────

/// A glyph stamped at a position with a rotation fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    glyph: String,
    /// Degrees, clockwise in canvas space.
    rotation: f32,
    font_size: f32,
    position: Option<Point>,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, rotation: f32, font_size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            rotation: if rotation.is_finite() { rotation } else { 0.0 },
            font_size,
            position: None,
        }
    }

    /// Move the sticker under the pointer. Only gestures call this before commit.
    pub fn place_at(&mut self, point: Point) {
        if point.is_finite() {
            self.position = Some(point);
        }
    }

    /// Builder form of [`Sticker::place_at`].
    pub fn placed_at(mut self, point: Point) -> Self {
        self.place_at(point);
        self
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotation_radians(&self) -> f64 {
        (self.rotation as f64).to_radians()
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

// ─── Drawable ────────────────────────────────────────────────────────────

/// Anything that can be committed to history and rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            Drawable::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            Drawable::Stroke(_) => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Drawable::Sticker(sticker)
    }
}

// ─── Tool preview ────────────────────────────────────────────────────────

/// Non-committing hint drawn at the pointer while no gesture is active.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Outline showing the marker's footprint.
    Circle {
        center: Point,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    /// The sticker that a press would stamp here.
    Glyph(Sticker),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tap_stroke_has_no_segments() {
        let stroke = Stroke::begin(Point::new(3.0, 4.0), 2.0, Color::BLACK);
        assert_eq!(stroke.points(), &[Point::new(3.0, 4.0)]);
    }

    #[test]
    fn stroke_drops_non_finite_points() {
        let mut stroke = Stroke::begin(Point::new(0.0, 0.0), 2.0, Color::BLACK);
        stroke.extend(Point::new(f32::NAN, 1.0));
        stroke.extend(Point::new(1.0, 1.0));
        assert_eq!(stroke.points(), &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn stroke_thickness_is_always_positive() {
        let stroke = Stroke::begin(Point::new(0.0, 0.0), -4.0, Color::BLACK);
        assert!(stroke.thickness() > 0.0);
    }

    #[test]
    fn sticker_starts_unplaced() {
        let mut sticker = Sticker::new("⭐", 30.0, 32.0);
        assert!(!sticker.is_placed());
        sticker.place_at(Point::new(10.0, 20.0));
        assert_eq!(sticker.position(), Some(Point::new(10.0, 20.0)));
        assert_eq!(sticker.rotation(), 30.0);
    }

    #[test]
    fn drawable_accessors_match_variant() {
        let drawable = Drawable::from(Sticker::new("🐱", 0.0, 32.0));
        assert_eq!(drawable.kind_name(), "sticker");
        assert!(drawable.as_stroke().is_none());
        assert_eq!(drawable.as_sticker().map(Sticker::glyph), Some("🐱"));
    }
}
