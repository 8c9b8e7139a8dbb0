//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `export` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::SpiroOptions;
pub use render_scene::{PenHead, RenderScene, ScenePolyline};
