//! High-resolution re-render of committed history for image export.
//!
//! The export surface is `scale ×` the logical canvas in both axes, and the
//! painters run under a uniform `scale` transform so committed drawables land
//! exactly where they appear on screen. In-progress gestures and previews are
//! never part of an export: only `History` is rendered.

use crate::paint::paint_drawable;
use crate::surface::Surface;
use sketch_core::History;

/// Logical and output dimensions of one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSpec {
    pub logical_width: u32,
    pub logical_height: u32,
    pub output_width: u32,
    pub output_height: u32,
}

impl ExportSpec {
    /// `scale` is an integer so output dimensions stay exact. A scale whose
    /// output would not fit in `u32` falls back to 1.
    pub fn new(logical_width: u32, logical_height: u32, scale: u32) -> Self {
        let logical_width = logical_width.max(1);
        let logical_height = logical_height.max(1);
        let scale = scale.max(1);
        match (
            logical_width.checked_mul(scale),
            logical_height.checked_mul(scale),
        ) {
            (Some(output_width), Some(output_height)) => Self {
                logical_width,
                logical_height,
                output_width,
                output_height,
            },
            _ => {
                log::warn!("export scale {scale} overflows {logical_width}×{logical_height}; using 1");
                Self {
                    logical_width,
                    logical_height,
                    output_width: logical_width,
                    output_height: logical_height,
                }
            }
        }
    }

    /// Whether `logical × scale` fits in `u32` on both axes.
    pub fn fits(logical_width: u32, logical_height: u32, scale: u32) -> bool {
        let scale = scale.max(1);
        logical_width.max(1).checked_mul(scale).is_some()
            && logical_height.max(1).checked_mul(scale).is_some()
    }

    /// Horizontal transform factor: output size / logical size.
    pub fn scale_x(&self) -> f64 {
        self.output_width as f64 / self.logical_width as f64
    }

    /// Vertical transform factor: output size / logical size.
    pub fn scale_y(&self) -> f64 {
        self.output_height as f64 / self.logical_height as f64
    }
}

/// Render every committed drawable into an export-sized surface.
pub fn render_export(surface: &mut dyn Surface, history: &History, spec: &ExportSpec) {
    log::debug!(
        "export {}×{} → {}×{} ({} drawables)",
        spec.logical_width,
        spec.logical_height,
        spec.output_width,
        spec.output_height,
        history.len()
    );
    surface.clear(spec.output_width as f64, spec.output_height as f64);
    surface.save();
    surface.scale(spec.scale_x(), spec.scale_y());
    for drawable in history.entries() {
        paint_drawable(surface, drawable);
    }
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sketch_exports_at_four_times() {
        let spec = ExportSpec::new(256, 256, 4);
        assert_eq!((spec.output_width, spec.output_height), (1024, 1024));
        assert_eq!(spec.scale_x(), 4.0);
        assert_eq!(spec.scale_y(), 4.0);
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let spec = ExportSpec::new(0, 10, 0);
        assert_eq!(spec.logical_width, 1);
        assert_eq!(spec.output_height, 10);
    }

    #[test]
    fn overflowing_scale_falls_back_to_one() {
        let spec = ExportSpec::new(70_000, 70_000, 70_000);
        assert_eq!((spec.output_width, spec.output_height), (70_000, 70_000));
        assert_eq!(spec.scale_x(), 1.0);
        assert!(!ExportSpec::fits(70_000, 70_000, 70_000));
        assert!(ExportSpec::fits(256, 256, 4));
    }
}
