//! Linear undo/redo history of committed drawables.
//!
//! `entries` is both the z-order and the creation order: later entries paint
//! on top. Undo moves the newest entry onto the redo buffer; redo moves it
//! back. Any new commit discards the redo buffer, so history never branches.

use crate::drawable::Drawable;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Drawable>,
    redo: Vec<Drawable>,
    /// Maximum committed entries kept. `None` keeps everything.
    max_depth: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history that forgets its oldest entries beyond `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            redo: Vec::new(),
            max_depth: Some(max_depth.max(1)),
        }
    }

    /// Append a drawable and invalidate the redo buffer.
    pub fn commit(&mut self, drawable: impl Into<Drawable>) {
        let drawable = drawable.into();
        log::debug!(
            "commit {} (history {} → {})",
            drawable.kind_name(),
            self.entries.len(),
            self.entries.len() + 1
        );
        self.entries.push(drawable);
        if let Some(max) = self.max_depth
            && self.entries.len() > max
        {
            self.entries.remove(0);
        }
        self.redo.clear();
    }

    /// Move the newest entry to the redo buffer. Returns `false` when empty.
    pub fn undo(&mut self) -> bool {
        let Some(drawable) = self.entries.pop() else {
            return false;
        };
        log::debug!("undo {}", drawable.kind_name());
        self.redo.push(drawable);
        true
    }

    /// Restore the most recently undone entry. Returns `false` when empty.
    pub fn redo(&mut self) -> bool {
        let Some(drawable) = self.redo.pop() else {
            return false;
        };
        log::debug!("redo {}", drawable.kind_name());
        self.entries.push(drawable);
        true
    }

    /// Drop both the committed entries and the redo buffer.
    pub fn clear(&mut self) {
        log::debug!(
            "clear ({} committed, {} redoable)",
            self.entries.len(),
            self.redo.len()
        );
        self.entries.clear();
        self.redo.clear();
    }

    /// Committed drawables, oldest first.
    pub fn entries(&self) -> &[Drawable] {
        &self.entries
    }

    /// Undone drawables; the last element is the next one `redo` restores.
    pub fn redo_entries(&self) -> &[Drawable] {
        &self.redo
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
