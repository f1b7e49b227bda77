//! Integration tests: history → export surface.

use pretty_assertions::assert_eq;
use sketch_core::{Color, History, Point, Sticker, Stroke};
use sketch_render::{DisplayList, DrawOp, ExportSpec, render_export};

fn sample_history() -> History {
    let mut history = History::new();
    let mut stroke = Stroke::begin(Point::new(0.0, 0.0), 2.0, Color::BLACK);
    stroke.extend(Point::new(10.0, 10.0));
    history.commit(stroke);
    history.commit(Sticker::new("🐱", 0.0, 32.0).placed_at(Point::new(128.0, 128.0)));
    history
}

#[test]
fn export_clears_output_size_then_scales() {
    let mut list = DisplayList::new();
    let spec = ExportSpec::new(256, 256, 4);
    render_export(&mut list, &sample_history(), &spec);

    let ops = list.ops();
    assert_eq!(&ops[..3], &[DrawOp::Clear(1024.0, 1024.0), DrawOp::Save, DrawOp::Scale(4.0, 4.0)]);
    assert_eq!(ops.last(), Some(&DrawOp::Restore));
}

#[test]
fn export_paints_history_in_commit_order() {
    let mut list = DisplayList::new();
    render_export(&mut list, &sample_history(), &ExportSpec::new(256, 256, 4));

    let line_at = list
        .ops()
        .iter()
        .position(|op| matches!(op, DrawOp::LineTo(..)))
        .expect("stroke painted");
    let glyph_at = list
        .ops()
        .iter()
        .position(|op| matches!(op, DrawOp::FillText(..)))
        .expect("sticker painted");
    assert!(line_at < glyph_at, "later entries paint on top");
    assert_eq!(list.path_segments(), 1);
    assert_eq!(list.glyphs(), vec!["🐱"]);
}

#[test]
fn empty_history_exports_blank_surface() {
    let mut list = DisplayList::new();
    render_export(&mut list, &History::new(), &ExportSpec::new(100, 50, 4));
    assert_eq!(
        list.ops(),
        &[
            DrawOp::Clear(400.0, 200.0),
            DrawOp::Save,
            DrawOp::Scale(4.0, 4.0),
            DrawOp::Restore,
        ]
    );
}
