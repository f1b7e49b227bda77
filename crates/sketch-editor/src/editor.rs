//! The sketchpad editor: tool state machine and render loop.
//!
//! All drawing state lives in one owned [`Editor`]. Every handler runs to
//! completion and returns a "changed" flag; the caller redraws exactly when
//! it is `true`. There is no event bus and no shared global state.
//!
//! ## Gesture states
//!
//! | State | Pointer down | Pointer move | Pointer up / leave |
//! |-------|--------------|--------------|--------------------|
//! | **Idle** | start stroke or sticker | update preview | no-op |
//! | **Drawing** | commit, start new stroke | append point | commit stroke |
//! | **PlacingSticker** | commit, start new sticker | move sticker | commit if placed |
//!
//! Switching tools, undo, redo and clear end an active gesture the same way
//! pointer-up does before they take effect.

use crate::config::SketchConfig;
use crate::input::InputEvent;
use crate::tools::{MarkerSize, StickerPalette, Tool};
use serde::Serialize;
use sketch_core::{Color, History, Point, Sticker, Stroke, ToolPreview};
use sketch_render::{
    ExportSpec, Surface, paint_drawable, paint_preview, paint_sticker, paint_stroke,
    render_export,
};

/// What the current pointer gesture is building. The in-progress drawable is
/// owned here until it is moved into history.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing(Stroke),
    PlacingSticker(Sticker),
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::Drawing(_) => "drawing",
            Gesture::PlacingSticker(_) => "placingSticker",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }
}

pub struct Editor {
    config: SketchConfig,
    history: History,
    tool: Tool,
    /// Size restored when a color pick switches back from a sticker.
    marker_size: MarkerSize,
    marker_color: Color,
    gesture: Gesture,
    preview: Option<ToolPreview>,
    palette: StickerPalette,
    last_pointer: Option<Point>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Editor {
    pub fn new(config: SketchConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => History::with_max_depth(limit),
            None => History::new(),
        };
        Self {
            history,
            tool: Tool::default(),
            marker_size: MarkerSize::Thin,
            marker_color: config.marker_color,
            gesture: Gesture::Idle,
            preview: None,
            palette: StickerPalette::new(&config.stickers),
            last_pointer: None,
            config,
        }
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Route a normalized input event. Returns `true` if a redraw is needed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            InputEvent::PointerUp { x, y } => self.pointer_up(Point::new(x, y)),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            return false;
        }
        self.last_pointer = Some(point);
        self.preview = None;

        self.end_gesture();
        match self.tool.clone() {
            Tool::Sticker { glyph, rotation } => {
                let sticker =
                    Sticker::new(glyph, rotation, self.config.sticker_font_size).placed_at(point);
                log::debug!("gesture: placing sticker {:?}", sticker.glyph());
                self.gesture = Gesture::PlacingSticker(sticker);
            }
            Tool::Marker(size) => {
                let stroke = Stroke::begin(point, self.marker_width(size), self.marker_color);
                log::debug!("gesture: drawing {} stroke", self.tool.name());
                self.gesture = Gesture::Drawing(stroke);
            }
        }
        true
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            return false;
        }
        self.last_pointer = Some(point);

        match &mut self.gesture {
            Gesture::Drawing(stroke) => stroke.extend(point),
            Gesture::PlacingSticker(sticker) => sticker.place_at(point),
            Gesture::Idle => {}
        }
        if !self.gesture.is_active() {
            self.preview = Some(self.build_preview(point));
        }
        true
    }

    pub fn pointer_up(&mut self, point: Point) -> bool {
        if !self.gesture.is_active() {
            return false;
        }
        if point.is_finite() {
            self.last_pointer = Some(point);
        }
        self.end_gesture();
        self.refresh_preview();
        true
    }

    /// The pointer left the surface: the active gesture is committed as-is
    /// and the preview disappears.
    pub fn pointer_leave(&mut self) -> bool {
        let committed = self.end_gesture();
        let had_preview = self.preview.take().is_some();
        self.last_pointer = None;
        committed || had_preview
    }

    // ─── Tools ───────────────────────────────────────────────────────────

    pub fn select_marker(&mut self, size: MarkerSize) -> bool {
        self.end_gesture();
        self.marker_size = size;
        self.tool = Tool::Marker(size);
        log::debug!("tool: {} marker", self.tool.name());
        self.refresh_preview();
        true
    }

    /// Activate a sticker stamp. Every stamp made with it uses `rotation`
    /// (degrees). The glyph joins the palette if it is new.
    pub fn select_sticker(&mut self, glyph: &str, rotation: f32) -> bool {
        let Some(index) = self.palette.add(glyph) else {
            return false;
        };
        self.end_gesture();
        let glyph = self.palette.glyphs()[index].clone();
        log::debug!("tool: sticker {glyph:?} rot={rotation}");
        self.tool = Tool::Sticker { glyph, rotation };
        self.refresh_preview();
        true
    }

    pub fn select_sticker_index(&mut self, index: usize, rotation: f32) -> bool {
        match self.palette.get(index).map(str::to_owned) {
            Some(glyph) => self.select_sticker(&glyph, rotation),
            None => false,
        }
    }

    /// Add a user-supplied glyph to the palette. Blank text is ignored.
    pub fn add_custom_sticker(&mut self, text: &str) -> Option<usize> {
        let index = self.palette.add(text)?;
        log::debug!("palette: custom sticker at {index}");
        Some(index)
    }

    /// Color for subsequent strokes. Picking a color re-activates the marker.
    pub fn set_marker_color(&mut self, color: Color) -> bool {
        self.end_gesture();
        self.marker_color = color;
        self.tool = Tool::Marker(self.marker_size);
        self.refresh_preview();
        true
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        let ended = self.end_gesture();
        self.history.undo() || ended
    }

    pub fn redo(&mut self) -> bool {
        let ended = self.end_gesture();
        self.history.redo() || ended
    }

    pub fn clear(&mut self) -> bool {
        self.end_gesture();
        self.history.clear();
        true
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Redraw the whole frame: committed history, then exactly one of the
    /// in-progress stroke, the pending sticker, or the idle tool preview.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.config.width as f64, self.config.height as f64);
        for drawable in self.history.entries() {
            paint_drawable(surface, drawable);
        }
        match &self.gesture {
            Gesture::Drawing(stroke) => paint_stroke(surface, stroke),
            Gesture::PlacingSticker(sticker) => paint_sticker(surface, sticker),
            Gesture::Idle => {
                if let Some(preview) = &self.preview {
                    paint_preview(surface, preview);
                }
            }
        }
    }

    /// Render committed history at export resolution.
    pub fn render_export(&self, surface: &mut dyn Surface) -> ExportSpec {
        let spec = self.config.export_spec();
        render_export(surface, &self.history, &spec);
        spec
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn marker_color(&self) -> Color {
        self.marker_color
    }

    pub fn marker_width(&self, size: MarkerSize) -> f32 {
        match size {
            MarkerSize::Thin => self.config.thin_marker_width,
            MarkerSize::Thick => self.config.thick_marker_width,
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            tool: self.tool.name(),
            gesture: self.gesture.name(),
            history: self.history.len(),
            redo: self.history.redo_len(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            marker_color: self.marker_color,
            stickers: self.palette.glyphs().to_vec(),
        }
    }

    // ─── Private helpers ─────────────────────────────────────────────────

    /// Commit whatever the active gesture holds and return to idle.
    /// Returns `true` if a drawable was committed.
    fn end_gesture(&mut self) -> bool {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => false,
            Gesture::Drawing(stroke) => {
                self.history.commit(stroke);
                true
            }
            Gesture::PlacingSticker(sticker) => {
                if sticker.is_placed() {
                    self.history.commit(sticker);
                    true
                } else {
                    log::debug!("gesture: discarded unplaced sticker {:?}", sticker.glyph());
                    false
                }
            }
        }
    }

    fn refresh_preview(&mut self) {
        self.preview = self.last_pointer.map(|point| self.build_preview(point));
    }

    fn build_preview(&self, point: Point) -> ToolPreview {
        match &self.tool {
            Tool::Marker(size) => ToolPreview::Circle {
                center: point,
                radius: self.marker_width(*size) / 2.0,
                color: self.marker_color,
                line_width: self.config.preview_line_width,
            },
            Tool::Sticker { glyph, rotation } => ToolPreview::Glyph(
                Sticker::new(glyph.clone(), *rotation, self.config.sticker_font_size)
                    .placed_at(point),
            ),
        }
    }
}

/// Summary the page uses to enable buttons and highlight the active tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub tool: &'static str,
    pub gesture: &'static str,
    pub history: usize,
    pub redo: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub marker_color: Color,
    pub stickers: Vec<String>,
}

impl EditorSnapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_render::DisplayList;

    #[test]
    fn tap_commits_invisible_stroke() {
        let mut editor = Editor::default();
        editor.pointer_down(Point::new(5.0, 5.0));
        assert!(editor.pointer_up(Point::new(5.0, 5.0)));
        assert_eq!(editor.history().len(), 1);

        let mut list = DisplayList::new();
        editor.render(&mut list);
        assert_eq!(list.path_segments(), 0);
    }

    #[test]
    fn pointer_up_while_idle_is_noop() {
        let mut editor = Editor::default();
        assert!(!editor.pointer_up(Point::new(1.0, 1.0)));
        assert!(editor.history().is_empty());
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        let mut editor = Editor::default();
        assert!(!editor.pointer_down(Point::new(f32::NAN, 0.0)));
        assert_eq!(editor.gesture(), &Gesture::Idle);
    }

    #[test]
    fn stroke_uses_current_marker_settings() {
        let mut editor = Editor::default();
        editor.select_marker(MarkerSize::Thick);
        editor.pointer_down(Point::new(0.0, 0.0));
        match editor.gesture() {
            Gesture::Drawing(stroke) => {
                assert_eq!(stroke.thickness(), 6.0);
                assert_eq!(stroke.color(), Color::BLACK);
            }
            other => panic!("expected drawing, got {other:?}"),
        }
    }

    #[test]
    fn color_pick_returns_to_last_marker_size() {
        let mut editor = Editor::default();
        editor.select_marker(MarkerSize::Thick);
        editor.select_sticker("⭐", 0.0);
        editor.set_marker_color(Color::rgb(0, 0, 255));
        assert_eq!(editor.tool(), &Tool::Marker(MarkerSize::Thick));
        assert_eq!(editor.marker_color(), Color::rgb(0, 0, 255));
    }

    #[test]
    fn blank_sticker_selection_is_rejected() {
        let mut editor = Editor::default();
        assert!(!editor.select_sticker("  ", 0.0));
        assert_eq!(editor.tool(), &Tool::default());
        assert!(!editor.select_sticker_index(99, 0.0));
    }

    #[test]
    fn snapshot_json_uses_camel_case() {
        let editor = Editor::default();
        let json = editor.snapshot().to_json();
        assert!(json.contains(r#""tool":"thin""#));
        assert!(json.contains(r#""canUndo":false"#));
        assert!(json.contains(r##""markerColor":"#000000""##));
    }
}
