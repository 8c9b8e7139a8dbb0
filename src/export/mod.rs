//! Export der Zeichnung als Datei (Taste `s`).
//!
//! Schreibt immer eine EPS-Datei (Vektor-PostScript) und optional ein PNG.
//! Stiftköpfe werden nicht exportiert.

mod eps;
mod png;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::RenderScene;

pub use eps::{render_eps, write_eps};
pub use png::{render_svg, rasterize};

/// Fehler beim Export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Datei konnte nicht geschrieben werden
    #[error("Datei {path} konnte nicht geschrieben werden: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Interne SVG-Beschreibung ungültig
    #[error("SVG-Aufbereitung fehlgeschlagen: {0}")]
    Svg(#[from] resvg::usvg::Error),
    /// Canvas-Größe für Rasterung ungültig
    #[error("Ungültige Bildgröße {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    /// PNG konnte nicht kodiert/geschrieben werden
    #[error("PNG-Export fehlgeschlagen: {0}")]
    Image(#[from] image::ImageError),
}

/// Exportiert die Szene als `<basename>.eps` (und optional `<basename>.png`).
///
/// Gibt die geschriebenen Pfade zurück.
pub fn export_drawing(
    scene: &RenderScene,
    directory: &Path,
    basename: &str,
    with_png: bool,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();

    let eps_path = directory.join(format!("{basename}.eps"));
    std::fs::write(&eps_path, render_eps(scene)).map_err(|source| ExportError::Io {
        path: eps_path.clone(),
        source,
    })?;
    written.push(eps_path);

    if with_png {
        let png_path = directory.join(format!("{basename}.png"));
        let image = rasterize(scene)?;
        image.save(&png_path)?;
        written.push(png_path);
    }

    Ok(written)
}
