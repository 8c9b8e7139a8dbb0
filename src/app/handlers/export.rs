//! Handler für den Bild-Export.

use anyhow::Context;

use crate::app::use_cases;
use crate::app::AppState;

/// Exportiert die Zeichnung unter `basename`.
pub fn save_drawing(state: &mut AppState, basename: &str, with_png: bool) -> anyhow::Result<()> {
    use_cases::export::save_drawing(state, basename, with_png)
        .with_context(|| format!("Export von '{basename}' fehlgeschlagen"))?;
    Ok(())
}
