use crate::core::SpiroParams;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Canvas-Größe übernehmen
    SetCanvasSize { size: [f32; 2] },
    /// Einzelne Kurve vollständig zeichnen
    DrawStatic { params: SpiroParams },
    /// Animation mit Zufallskurven starten
    StartAnimation { count: usize, seed: Option<u64> },
    /// Alle Kurven einen Schritt weiterzeichnen
    AdvanceAnimation,
    /// Alle Kurven mit neuen Zufallsparametern neu starten
    RestartAnimation,
    /// Sichtbarkeit aller Stiftköpfe umschalten
    TogglePenVisibility,
    /// Zeichnung als EPS (und optional PNG) exportieren
    ExportDrawing { basename: String, with_png: bool },
}
