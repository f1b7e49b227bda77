//! Tool selection and the sticker palette.
//!
//! Exactly one tool is active: a marker of some size, or a sticker stamp
//! carrying its glyph and the rotation every stamp of it will use.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSize {
    Thin,
    Thick,
}

/// The active tool.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker(MarkerSize),
    Sticker { glyph: String, rotation: f32 },
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Marker(MarkerSize::Thin)
    }
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Marker(MarkerSize::Thin) => "thin",
            Tool::Marker(MarkerSize::Thick) => "thick",
            Tool::Sticker { .. } => "sticker",
        }
    }

    pub fn is_sticker(&self) -> bool {
        matches!(self, Tool::Sticker { .. })
    }
}

// ─── Sticker palette ─────────────────────────────────────────────────────

/// Ordered, duplicate-free list of sticker glyphs offered to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    pub fn new<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Self::default();
        for glyph in glyphs {
            palette.add(glyph.as_ref());
        }
        palette
    }

    /// Add a glyph and return its index. Blank input is ignored; a glyph
    /// already present returns the existing index.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let glyph = text.trim();
        if glyph.is_empty() {
            return None;
        }
        if let Some(index) = self.glyphs.iter().position(|g| g == glyph) {
            return Some(index);
        }
        self.glyphs.push(glyph.to_string());
        Some(self.glyphs.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.glyphs.get(index).map(String::as_str)
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
