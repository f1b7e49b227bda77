//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The map lives in
//! Rust so the page only forwards `KeyboardEvent` fields.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tools ──
    ThinMarker,
    ThickMarker,

    // ── Edit ──
    Undo,
    Redo,
    Clear,

    // ── File ──
    Export,
}

impl ShortcutAction {
    /// Stable name handed back to the page.
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::ThinMarker => "thin",
            ShortcutAction::ThickMarker => "thick",
            ShortcutAction::Undo => "undo",
            ShortcutAction::Redo => "redo",
            ShortcutAction::Clear => "clear",
            ShortcutAction::Export => "export",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// On macOS `meta` is ⌘; elsewhere `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        if alt {
            return None;
        }
        let cmd = ctrl || meta;

        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                "Delete" | "Backspace" => Some(ShortcutAction::Clear),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "s" | "S" => Some(ShortcutAction::Export),
                _ => None,
            };
        }

        if shift {
            return None;
        }

        match key {
            "1" => Some(ShortcutAction::ThinMarker),
            "2" => Some(ShortcutAction::ThickMarker),
            _ => None,
        }
    }
}
