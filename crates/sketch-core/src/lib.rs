pub mod drawable;
pub mod history;
pub mod model;

pub use drawable::{Drawable, Sticker, Stroke, ToolPreview};
pub use history::History;
pub use model::{Color, Point};
