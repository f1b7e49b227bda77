//! WASM bridge for the sticker sketchpad: exposes the editor to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards pointer,
//! button and key events; every handler redraws the canvas itself when the
//! editor reports a change and returns that flag to the caller.

mod export;
mod render2d;

use export::export_png;
use render2d::{CanvasSurface, context_2d};
use sketch_core::Color;
use sketch_editor::{Editor, InputEvent, MarkerSize, ShortcutAction, ShortcutMap, SketchConfig};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The main WASM-facing canvas controller.
///
/// Owns the editor state and the visible canvas context. All interaction from
/// the page goes through this struct.
#[wasm_bindgen]
pub struct SketchCanvas {
    editor: Editor,
    /// `None` if the browser gave no 2D context; rendering is then a no-op.
    ctx: Option<CanvasRenderingContext2d>,
}

#[wasm_bindgen]
impl SketchCanvas {
    /// Attach to a `<canvas>` with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        Self::build(canvas, SketchConfig::default())
    }

    /// Attach with a JSON configuration. Unknown keys are ignored and a
    /// malformed document falls back to the defaults.
    pub fn with_config(canvas: &HtmlCanvasElement, json: &str) -> SketchCanvas {
        let config = SketchConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("invalid sketch config, using defaults: {err}");
            web_sys::console::warn_1(&format!("sketch config ignored: {err}").into());
            SketchConfig::default()
        });
        Self::build(canvas, config)
    }

    /// Redraw the visible canvas from the current editor state.
    pub fn render(&self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        self.editor.render(&mut CanvasSurface::new(ctx));
    }

    // ─── Pointer API ─────────────────────────────────────────────────────

    /// Pointer pressed at surface-local `(x, y)`. Returns true if redrawn.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.apply(InputEvent::from_pointer_down(x, y))
    }

    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.apply(InputEvent::from_pointer_move(x, y))
    }

    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.apply(InputEvent::from_pointer_up(x, y))
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.apply(InputEvent::PointerLeave)
    }

    // ─── Tool API ────────────────────────────────────────────────────────

    pub fn select_thin(&mut self) -> bool {
        let changed = self.editor.select_marker(MarkerSize::Thin);
        self.redraw_if(changed)
    }

    pub fn select_thick(&mut self) -> bool {
        let changed = self.editor.select_marker(MarkerSize::Thick);
        self.redraw_if(changed)
    }

    /// Activate the palette sticker at `index` with a fresh random rotation.
    pub fn select_sticker(&mut self, index: usize) -> bool {
        let changed = self.editor.select_sticker_index(index, random_rotation());
        self.redraw_if(changed)
    }

    /// Set the marker color from a `#RGB`/`#RRGGBB`/`#RRGGBBAA` string.
    /// Unparseable input leaves the color unchanged and returns false.
    pub fn set_marker_color(&mut self, hex: &str) -> bool {
        let Some(color) = Color::from_hex(hex) else {
            log::warn!("ignored marker color {hex:?}");
            return false;
        };
        let changed = self.editor.set_marker_color(color);
        self.redraw_if(changed)
    }

    /// Add `text` as a sticker and activate it. Blank text is a no-op.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let Some(index) = self.editor.add_custom_sticker(text) else {
            return false;
        };
        self.select_sticker(index)
    }

    /// Ask the user for a custom sticker with `window.prompt`. A cancelled
    /// or empty prompt is a no-op.
    pub fn prompt_custom_sticker(&mut self) -> bool {
        let answer = web_sys::window()
            .and_then(|window| window.prompt_with_message("Sticker text or emoji").ok())
            .flatten();
        match answer {
            Some(text) => self.add_custom_sticker(&text),
            None => false,
        }
    }

    /// Palette glyphs as a JSON array of strings.
    pub fn sticker_glyphs_json(&self) -> String {
        serde_json::to_string(self.editor.palette().glyphs()).unwrap_or_else(|_| "[]".to_string())
    }

    // ─── History API ─────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        let changed = self.editor.undo();
        self.redraw_if(changed)
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.editor.redo();
        self.redraw_if(changed)
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.editor.clear();
        self.redraw_if(changed)
    }

    /// Download committed history as `sketch.png` at export resolution.
    /// Returns false if the export could not be started.
    pub fn export_png(&self) -> bool {
        match export_png(&self.editor) {
            Ok(()) => true,
            Err(err) => {
                export::report(&err);
                false
            }
        }
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>", "tool":"<tool_name>"}`
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, alt, meta) else {
            return key_response(false, None, self.editor.tool().name());
        };
        let changed = self.dispatch_action(action);
        key_response(changed, Some(action), self.editor.tool().name())
    }

    /// Editor state for the page's button states, as JSON.
    pub fn state_json(&self) -> String {
        self.editor.snapshot().to_json()
    }

    pub fn width(&self) -> u32 {
        self.editor.config().width
    }

    pub fn height(&self) -> u32 {
        self.editor.config().height
    }
}

impl SketchCanvas {
    fn build(canvas: &HtmlCanvasElement, config: SketchConfig) -> Self {
        console_error_panic_hook_setup();

        canvas.set_width(config.width);
        canvas.set_height(config.height);
        let ctx = context_2d(canvas);
        if ctx.is_none() {
            log::warn!("canvas has no 2d context; rendering disabled");
        }

        let sketch = Self {
            editor: Editor::new(config),
            ctx,
        };
        sketch.render();
        sketch
    }

    fn apply(&mut self, event: InputEvent) -> bool {
        let changed = self.editor.handle(&event);
        self.redraw_if(changed)
    }

    fn redraw_if(&self, changed: bool) -> bool {
        if changed {
            self.render();
        }
        changed
    }

    /// Dispatch a shortcut action. Returns whether the drawing changed.
    fn dispatch_action(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::ThinMarker => self.select_thin(),
            ShortcutAction::ThickMarker => self.select_thick(),
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::Clear => self.clear(),
            ShortcutAction::Export => {
                self.export_png();
                false
            }
        }
    }
}

fn key_response(changed: bool, action: Option<ShortcutAction>, tool: &str) -> String {
    serde_json::json!({
        "changed": changed,
        "action": action.map_or("none", ShortcutAction::name),
        "tool": tool,
    })
    .to_string()
}

/// Sticker rotation in degrees, uniform over `[0, 360)`.
fn random_rotation() -> f32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 360.0) as f32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("sketch WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
