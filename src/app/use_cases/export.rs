//! Use-Case: Zeichnung exportieren.

use std::path::PathBuf;

use crate::app::AppState;
use crate::export::{self, ExportError};
use crate::shared::RenderScene;

/// Exportiert die aktuelle Zeichnung ins Export-Verzeichnis.
///
/// Das Ergebnis landet in der Statuszeile; ein Fehler wird zusätzlich
/// zurückgegeben. Die Zeichnung selbst bleibt unverändert.
pub fn save_drawing(
    state: &mut AppState,
    basename: &str,
    with_png: bool,
) -> Result<Vec<PathBuf>, ExportError> {
    let scene = RenderScene::build(&state.canvas, state.view.canvas_size, &state.options);
    log::info!(
        "Speichere Zeichnung nach {}.eps{}",
        basename,
        if with_png { "/png" } else { "" }
    );

    match export::export_drawing(&scene, &state.ui.export_directory, basename, with_png) {
        Ok(paths) => {
            let names = paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            log::info!("Export geschrieben: {}", names);
            state.ui.status_message = Some(format!("Gespeichert: {names}"));
            Ok(paths)
        }
        Err(e) => {
            state.ui.status_message = Some(format!("Export fehlgeschlagen: {e}"));
            Err(e)
        }
    }
}
