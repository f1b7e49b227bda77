pub mod config;
pub mod editor;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use config::SketchConfig;
pub use editor::{Editor, EditorSnapshot, Gesture};
pub use input::InputEvent;
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::{MarkerSize, StickerPalette, Tool};
