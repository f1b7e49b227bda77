//! Drawables → surface calls.
//!
//! Dispatch is an exhaustive `match` over [`Drawable`]; each painter is
//! idempotent and touches nothing but the surface.

use crate::surface::Surface;
use sketch_core::{Drawable, Sticker, Stroke, ToolPreview};
use std::f64::consts::TAU;

/// Paint one committed or in-progress drawable.
pub fn paint_drawable(surface: &mut dyn Surface, drawable: &Drawable) {
    match drawable {
        Drawable::Stroke(stroke) => paint_stroke(surface, stroke),
        Drawable::Sticker(sticker) => paint_sticker(surface, sticker),
    }
}

/// A single connected poly-line. Fewer than two points paints nothing.
pub fn paint_stroke(surface: &mut dyn Surface, stroke: &Stroke) {
    let [first, rest @ ..] = stroke.points() else {
        return;
    };
    if rest.is_empty() {
        return;
    }
    log::trace!(
        "PAINT stroke {} pts w={} {}",
        stroke.points().len(),
        stroke.thickness(),
        stroke.color()
    );

    surface.set_line_width(stroke.thickness() as f64);
    surface.set_stroke_color(&stroke.color().to_css());
    surface.begin_path();
    surface.move_to(first.x as f64, first.y as f64);
    for point in rest {
        surface.line_to(point.x as f64, point.y as f64);
    }
    surface.stroke();
}

/// The glyph centered on its position, rotated about that position.
/// An unplaced sticker paints nothing.
pub fn paint_sticker(surface: &mut dyn Surface, sticker: &Sticker) {
    let Some(position) = sticker.position() else {
        return;
    };
    log::trace!(
        "PAINT sticker {:?} at ({}, {}) rot={}",
        sticker.glyph(),
        position.x,
        position.y,
        sticker.rotation()
    );

    let font_size = sticker.font_size() as f64;
    surface.save();
    surface.set_font(&format!("{font_size}px sans-serif"));
    surface.set_fill_color("#000000");
    surface.translate(position.x as f64, position.y as f64);
    surface.rotate(sticker.rotation_radians());
    let half_width = surface.measure_text(sticker.glyph()) / 2.0;
    let half_height = font_size / 2.0;
    surface.fill_text(sticker.glyph(), -half_width, half_height);
    surface.restore();
}

/// The tool hint: a marker footprint outline or a ghost sticker.
pub fn paint_preview(surface: &mut dyn Surface, preview: &ToolPreview) {
    match preview {
        ToolPreview::Circle {
            center,
            radius,
            color,
            line_width,
        } => {
            surface.set_line_width(*line_width as f64);
            surface.set_stroke_color(&color.to_css());
            surface.begin_path();
            surface.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
            surface.stroke();
        }
        ToolPreview::Glyph(sticker) => paint_sticker(surface, sticker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::{DisplayList, DrawOp};
    use pretty_assertions::assert_eq;
    use sketch_core::{Color, Point};

    #[test]
    fn single_point_stroke_paints_nothing() {
        let mut list = DisplayList::new();
        let stroke = Stroke::begin(Point::new(5.0, 5.0), 3.0, Color::BLACK);
        paint_stroke(&mut list, &stroke);
        assert!(list.ops().is_empty());
    }

    #[test]
    fn stroke_is_one_connected_path() {
        let mut list = DisplayList::new();
        let mut stroke = Stroke::begin(Point::new(0.0, 0.0), 3.0, Color::rgb(255, 0, 0));
        stroke.extend(Point::new(10.0, 0.0));
        stroke.extend(Point::new(10.0, 10.0));
        paint_stroke(&mut list, &stroke);

        assert_eq!(
            list.ops(),
            &[
                DrawOp::LineWidth(3.0),
                DrawOp::StrokeColor("#FF0000".into()),
                DrawOp::BeginPath,
                DrawOp::MoveTo(0.0, 0.0),
                DrawOp::LineTo(10.0, 0.0),
                DrawOp::LineTo(10.0, 10.0),
                DrawOp::Stroke,
            ]
        );
    }

    #[test]
    fn unplaced_sticker_paints_nothing() {
        let mut list = DisplayList::new();
        paint_sticker(&mut list, &Sticker::new("⭐", 45.0, 32.0));
        assert!(list.ops().is_empty());
    }

    #[test]
    fn sticker_is_centered_and_rotated_about_anchor() {
        let mut list = DisplayList::with_char_width(20.0);
        let sticker = Sticker::new("⭐", 90.0, 32.0).placed_at(Point::new(50.0, 60.0));
        paint_sticker(&mut list, &sticker);

        let ops = list.ops();
        assert_eq!(ops.first(), Some(&DrawOp::Save));
        assert_eq!(ops.last(), Some(&DrawOp::Restore));
        assert!(ops.contains(&DrawOp::Translate(50.0, 60.0)));
        let rotation = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Rotate(r) => Some(*r),
                _ => None,
            })
            .expect("sticker should rotate");
        assert!((rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert!(ops.contains(&DrawOp::FillText("⭐".into(), -10.0, 16.0)));
    }

    #[test]
    fn circle_preview_strokes_full_arc() {
        let mut list = DisplayList::new();
        let preview = ToolPreview::Circle {
            center: Point::new(8.0, 9.0),
            radius: 3.0,
            color: Color::BLACK,
            line_width: 1.0,
        };
        paint_preview(&mut list, &preview);
        assert!(list.ops().contains(&DrawOp::Arc(8.0, 9.0, 3.0, 0.0, TAU)));
        assert_eq!(list.ops().last(), Some(&DrawOp::Stroke));
    }
}
