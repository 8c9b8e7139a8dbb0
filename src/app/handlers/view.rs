//! Handler für Canvas-Größe.

use crate::app::AppState;

/// Aktualisiert die Canvas-Größe im State (für Export und Zufallsbereich).
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    state.view.canvas_size = [size[0].max(1.0), size[1].max(1.0)];
}
