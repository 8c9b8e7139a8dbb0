//! Zeichnen der Render-Szene mit dem egui-Painter.

mod painter;

pub use crate::shared::RenderScene;
pub use painter::{canvas_to_screen, paint_scene, pen_head_triangle, to_color32};
