//! Integration tests: history stack discipline (sketch-core).
//!
//! Exercises commit/undo/redo/clear across mixed stroke and sticker
//! drawables, checking both stack lengths and LIFO restore order.

use pretty_assertions::assert_eq;
use sketch_core::{Color, Drawable, History, Point, Sticker, Stroke};

fn line(from: (f32, f32), to: (f32, f32)) -> Drawable {
    let mut stroke = Stroke::begin(Point::new(from.0, from.1), 2.0, Color::BLACK);
    stroke.extend(Point::new(to.0, to.1));
    stroke.into()
}

fn sticker(glyph: &str, at: (f32, f32)) -> Drawable {
    Sticker::new(glyph, 15.0, 32.0).placed_at(Point::new(at.0, at.1)).into()
}

// ─── Lengths ─────────────────────────────────────────────────────────────

#[test]
fn n_commits_m_undos_split_between_stacks() {
    for n in 0..6 {
        for m in 0..=n {
            let mut history = History::new();
            for i in 0..n {
                history.commit(line((i as f32, 0.0), (i as f32, 10.0)));
            }
            for _ in 0..m {
                assert!(history.undo());
            }
            assert_eq!(history.len(), n - m, "n={n} m={m}");
            assert_eq!(history.redo_len(), m, "n={n} m={m}");
        }
    }
}

#[test]
fn each_redo_restores_latest_undone() {
    let mut history = History::new();
    let drawables: Vec<Drawable> = (0..4)
        .map(|i| line((i as f32, 0.0), (0.0, i as f32)))
        .collect();
    for d in &drawables {
        history.commit(d.clone());
    }
    for _ in 0..4 {
        history.undo();
    }
    for d in &drawables {
        assert!(history.redo());
        assert_eq!(history.entries().last(), Some(d));
    }
    assert!(!history.redo());
}

// ─── Branching ───────────────────────────────────────────────────────────

#[test]
fn undo_then_commit_discards_redo_branch() {
    let a = line((0.0, 0.0), (10.0, 10.0));
    let b = line((5.0, 5.0), (15.0, 5.0));
    let c = sticker("⭐", (40.0, 40.0));

    let mut history = History::new();
    history.commit(a.clone());
    history.commit(b.clone());

    history.undo();
    assert_eq!(history.entries(), &[a.clone()]);
    assert_eq!(history.redo_entries(), &[b.clone()]);

    history.undo();
    assert!(history.entries().is_empty());
    assert_eq!(history.redo_entries(), &[b.clone(), a.clone()]);

    history.redo();
    assert_eq!(history.entries(), &[a.clone()]);
    assert_eq!(history.redo_entries(), &[b.clone()]);

    history.commit(c.clone());
    assert_eq!(history.entries(), &[a, c]);
    assert!(history.redo_entries().is_empty());
    assert!(!history.redo(), "B must be permanently lost");
}

// ─── Clear ───────────────────────────────────────────────────────────────

#[test]
fn clear_empties_both_stacks() {
    let mut history = History::new();
    history.commit(line((0.0, 0.0), (1.0, 1.0)));
    history.commit(sticker("🐱", (2.0, 2.0)));
    history.undo();

    history.clear();
    assert!(history.entries().is_empty());
    assert!(history.redo_entries().is_empty());

    history.clear();
    assert!(history.entries().is_empty());
    assert!(history.redo_entries().is_empty());
}

#[test]
fn committed_sticker_keeps_position_and_rotation() {
    let mut history = History::new();
    history.commit(sticker("🌮", (12.0, 34.0)));
    let placed = history.entries()[0].as_sticker().expect("sticker");
    assert_eq!(placed.position(), Some(Point::new(12.0, 34.0)));
    assert_eq!(placed.rotation(), 15.0);
}
