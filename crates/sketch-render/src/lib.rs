pub mod display_list;
pub mod export;
pub mod paint;
pub mod surface;

pub use display_list::{DisplayList, DrawOp};
pub use export::{ExportSpec, render_export};
pub use paint::{paint_drawable, paint_preview, paint_sticker, paint_stroke};
pub use surface::Surface;
