//! Sketchpad configuration.
//!
//! Every field has a default, so a partial JSON object from the page only
//! overrides what it names.

use serde::{Deserialize, Serialize};
use sketch_core::Color;
use sketch_render::ExportSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SketchConfig {
    /// Logical canvas size in CSS pixels.
    pub width: u32,
    pub height: u32,
    /// Export is `scale ×` the logical canvas in both axes.
    pub export_scale: u32,
    pub export_filename: String,
    pub thin_marker_width: f32,
    pub thick_marker_width: f32,
    pub marker_color: Color,
    pub sticker_font_size: f32,
    pub preview_line_width: f32,
    /// Oldest history entries are forgotten past this depth.
    pub history_limit: Option<usize>,
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            export_scale: 4,
            export_filename: "sketch.png".to_string(),
            thin_marker_width: 2.0,
            thick_marker_width: 6.0,
            marker_color: Color::BLACK,
            sticker_font_size: 32.0,
            preview_line_width: 1.0,
            history_limit: None,
            stickers: vec!["🐱".to_string(), "🌮".to_string(), "⭐".to_string()],
        }
    }
}

impl SketchConfig {
    /// Parse a (possibly partial) JSON config. Sizes whose export would
    /// overflow are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        if !ExportSpec::fits(config.width, config.height, config.export_scale) {
            return Err(serde::de::Error::custom(format!(
                "export of {}×{} at scale {} overflows",
                config.width, config.height, config.export_scale
            )));
        }
        Ok(config)
    }

    pub fn export_spec(&self) -> ExportSpec {
        ExportSpec::new(self.width, self.height, self.export_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SketchConfig::from_json(r##"{"width": 512, "markerColor": "#ff0000"}"##).unwrap();
        assert_eq!(config.width, 512);
        assert_eq!(config.height, 256);
        assert_eq!(config.marker_color, Color::rgb(255, 0, 0));
        assert_eq!(config.export_filename, "sketch.png");
    }

    #[test]
    fn invalid_color_is_rejected() {
        assert!(SketchConfig::from_json(r#"{"markerColor": "blue"}"#).is_err());
    }

    #[test]
    fn overflowing_export_size_is_rejected() {
        let json = r#"{"width": 70000, "height": 70000, "exportScale": 70000}"#;
        assert!(SketchConfig::from_json(json).is_err());
    }

    #[test]
    fn overflowing_struct_config_still_exports() {
        let config = SketchConfig {
            width: 70_000,
            height: 70_000,
            export_scale: 70_000,
            ..SketchConfig::default()
        };
        let spec = config.export_spec();
        assert_eq!((spec.output_width, spec.output_height), (70_000, 70_000));
    }

    #[test]
    fn export_spec_follows_canvas_size() {
        let spec = SketchConfig::default().export_spec();
        assert_eq!((spec.output_width, spec.output_height), (1024, 1024));
    }
}
